use super::RouteRegistry;
use crate::radix::RadixRegistry;
use crate::regex_engine::RegexRegistry;
use crate::router::{EngineKind, RouterOptions};

/// Creates an empty registry for the engine selected in `options`.
pub fn build_registry<H>(options: RouterOptions) -> Box<dyn RouteRegistry<H>>
where
    H: ?Sized + Send + Sync + 'static,
{
    tracing::event!(tracing::Level::DEBUG, engine = ?options.engine, "building route registry");
    match options.engine {
        EngineKind::Radix => Box::new(RadixRegistry::new(options)),
        EngineKind::Regex => Box::new(RegexRegistry::new(options)),
    }
}
