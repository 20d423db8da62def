mod analysis;
mod error;
mod parser;
mod segment;

pub use analysis::{SlotConflict, first_slot_conflict};
pub use error::{PatternError, PatternResult};
pub use parser::{CompileOptions, DEFAULT_MAX_PARAMS, compile, compile_with, compile_with_limit};
pub use segment::{Pattern, Segment, SegmentKind, WILDCARD_KEY};
