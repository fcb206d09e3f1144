//! Unicode cell-width classification.
//!
//! Widths come from a range table for the special classes (controls,
//! surrogates, private use, unassigned) and from `unicode-width` for the
//! rest. Policy-dependent classes resolve through [`WidthPolicy`].

mod policy;
mod table;
mod width;

pub use policy::{
    WidthPolicy, ambiguous_wide, private_use_wide, set_ambiguous_wide, set_private_use_wide,
    set_unassigned_wide, set_width_policy, unassigned_wide, width_policy,
};
pub use table::{NominalWidth, WidthCategory, WidthRange, WidthTable};
pub use width::{
    CharWidth, MAX_CODEPOINT, WidthCache, WidthClassifier, classify_char, classify_width,
};
