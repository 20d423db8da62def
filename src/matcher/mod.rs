mod params;
mod result;

pub(crate) use params::captures_to_map;
pub use params::{Capture, CaptureList, CaptureValue};
pub use result::MatchResult;
