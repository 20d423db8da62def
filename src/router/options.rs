use crate::pattern::{CompileOptions, DEFAULT_MAX_PARAMS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Matching engine backing a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Segment tree with structural precedence.
    #[default]
    Radix,
    /// One anchored expression per route, first registered wins.
    Regex,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Re-registering the same method and pattern replaces the handler chain.
    pub overwrite_method: bool,
    /// Lets the same middleware reference appear more than once in one chain.
    pub allow_duplicate_mw: bool,
    /// Lets routes sharing a parameter slot name it differently.
    pub allow_param_alias: bool,
    pub max_params: usize,
    /// Parameter names must be identifiers and literals may not contain `:`.
    pub strict_param_names: bool,
    pub engine: EngineKind,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            overwrite_method: true,
            allow_duplicate_mw: false,
            allow_param_alias: false,
            max_params: DEFAULT_MAX_PARAMS,
            strict_param_names: false,
            engine: EngineKind::default(),
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_params == 0 {
            return Err(RouterOptionsError::MaxParamsInvalid { provided: 0 });
        }
        Ok(())
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            max_params: self.max_params,
            strict_param_names: self.strict_param_names,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn overwrite_method(mut self, value: bool) -> Self {
        self.options.overwrite_method = value;
        self
    }

    pub fn allow_duplicate_mw(mut self, value: bool) -> Self {
        self.options.allow_duplicate_mw = value;
        self
    }

    pub fn allow_param_alias(mut self, value: bool) -> Self {
        self.options.allow_param_alias = value;
        self
    }

    pub fn max_params(mut self, value: usize) -> Self {
        self.options.max_params = value;
        self
    }

    pub fn strict_param_names(mut self, value: bool) -> Self {
        self.options.strict_param_names = value;
        self
    }

    pub fn engine(mut self, value: EngineKind) -> Self {
        self.options.engine = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_params must be at least 1 (got {provided})")]
    MaxParamsInvalid { provided: usize },
}
