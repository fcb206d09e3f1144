//! `termlayout` - terminal text layout and cursor tracking
//!
//! Measures how many terminal cells text occupies, wraps it to a width without
//! breaking embedded escape sequences, predicts where the cursor lands after
//! printing it, and asks the terminal directly when the operating system
//! cannot report its size or cursor position.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow WidthPolicy in unicode::policy etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod error;
pub mod terminal;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};

// Re-export ANSI types
pub use ansi::{SequenceMatcher, SequenceSpan, VtMatcher};

// Re-export commonly used types
pub use terminal::{
    CursorProbe, FallbackChain, FallbackStrategy, ProbeState, query_cursor_fallback,
    query_dimensions, query_dimensions_fallback,
};
pub use text::{
    CursorPoint, LayoutConfig, TextLayout, WrapMode, char_wrap, count_full_width,
    count_zero_width, measure, measure_char_at, predict_position, truncate, word_wrap,
};
pub use unicode::{CharWidth, WidthCategory, WidthPolicy, classify_width, set_width_policy};
