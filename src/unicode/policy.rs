//! Width disambiguation policy.
//!
//! Three classes of codepoints have no standard terminal width: unassigned
//! codepoints, East Asian "ambiguous" characters, and private-use characters.
//! Each class resolves to 1 cell unless its policy flag asks for 2.

use bitflags::bitflags;
use std::sync::atomic::{AtomicU8, Ordering};

bitflags! {
    /// Which policy-dependent width classes resolve to two cells.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WidthPolicy: u8 {
        /// Unassigned codepoints are wide.
        const UNASSIGNED_WIDE = 0b001;
        /// Ambiguous-width characters are wide (CJK terminal convention).
        const AMBIGUOUS_WIDE = 0b010;
        /// Private-use characters are wide (e.g., some icon fonts).
        const PRIVATE_USE_WIDE = 0b100;
    }
}

impl WidthPolicy {
    /// Builder-style toggle for a single flag.
    #[must_use]
    pub fn with(mut self, flag: WidthPolicy, enabled: bool) -> Self {
        self.set(flag, enabled);
        self
    }
}

static WIDTH_POLICY: AtomicU8 = AtomicU8::new(0);

/// Set the process-wide width policy.
pub fn set_width_policy(policy: WidthPolicy) {
    WIDTH_POLICY.store(policy.bits(), Ordering::Relaxed);
}

/// Get the process-wide width policy.
#[must_use]
pub fn width_policy() -> WidthPolicy {
    WidthPolicy::from_bits_truncate(WIDTH_POLICY.load(Ordering::Relaxed))
}

fn set_flag(flag: WidthPolicy, enabled: bool) {
    if enabled {
        WIDTH_POLICY.fetch_or(flag.bits(), Ordering::Relaxed);
    } else {
        WIDTH_POLICY.fetch_and(!flag.bits(), Ordering::Relaxed);
    }
}

/// Resolve unassigned codepoints as wide (process-wide).
pub fn set_unassigned_wide(enabled: bool) {
    set_flag(WidthPolicy::UNASSIGNED_WIDE, enabled);
}

/// Whether unassigned codepoints currently resolve as wide.
#[must_use]
pub fn unassigned_wide() -> bool {
    width_policy().contains(WidthPolicy::UNASSIGNED_WIDE)
}

/// Resolve ambiguous-width characters as wide (process-wide).
pub fn set_ambiguous_wide(enabled: bool) {
    set_flag(WidthPolicy::AMBIGUOUS_WIDE, enabled);
}

/// Whether ambiguous-width characters currently resolve as wide.
#[must_use]
pub fn ambiguous_wide() -> bool {
    width_policy().contains(WidthPolicy::AMBIGUOUS_WIDE)
}

/// Resolve private-use characters as wide (process-wide).
pub fn set_private_use_wide(enabled: bool) {
    set_flag(WidthPolicy::PRIVATE_USE_WIDE, enabled);
}

/// Whether private-use characters currently resolve as wide.
#[must_use]
pub fn private_use_wide() -> bool {
    width_policy().contains(WidthPolicy::PRIVATE_USE_WIDE)
}
