//! ANSI escape sequences: constants for probing and a matcher for layout.

pub mod matcher;
pub mod sequences;

pub use matcher::{SequenceMatcher, SequenceSpan, VtMatcher};
pub use sequences::*;
