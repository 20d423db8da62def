mod table;
mod translate;

pub use table::RegexRegistry;
pub use translate::{DEFAULT_PARAM_PATTERN, to_regex};
