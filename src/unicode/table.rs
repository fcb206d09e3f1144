//! Codepoint width range table.
//!
//! The table holds the ranges whose width cannot be taken straight from the
//! Unicode East Asian Width data: control characters, surrogates, private-use
//! areas and the large unassigned blocks. Everything else is looked up in
//! the Unicode data: a codepoint with General Category `Cn` is unassigned,
//! and the rest falls through to `unicode-width`, where a character whose
//! narrow and CJK widths disagree is classified as ambiguous.

use std::borrow::Cow;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use unicode_width::UnicodeWidthChar;

/// Width category of a codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidthCategory {
    /// Ordinary single-cell character.
    Narrow,
    /// Double-cell character (CJK, most emoji).
    Wide,
    /// Combining marks, joiners, variation selectors.
    ZeroWidth,
    /// C0/C1 control characters and DEL.
    Control,
    /// East Asian ambiguous width.
    Ambiguous,
    /// Private-use areas.
    PrivateUse,
    /// Unassigned codepoints and noncharacters.
    Unassigned,
    /// Lone surrogate code units.
    Surrogate,
}

/// Width recorded in the table before policy resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NominalWidth {
    /// Fixed number of cells.
    Cells(u8),
    /// Resolved through [`WidthPolicy::UNASSIGNED_WIDE`](super::WidthPolicy::UNASSIGNED_WIDE).
    Unassigned,
    /// Resolved through [`WidthPolicy::AMBIGUOUS_WIDE`](super::WidthPolicy::AMBIGUOUS_WIDE).
    Ambiguous,
    /// Resolved through [`WidthPolicy::PRIVATE_USE_WIDE`](super::WidthPolicy::PRIVATE_USE_WIDE).
    PrivateUse,
}

impl NominalWidth {
    /// Whether the resolved width depends on the policy.
    #[must_use]
    pub fn is_policy_dependent(self) -> bool {
        !matches!(self, Self::Cells(_))
    }
}

/// Inclusive codepoint range with its nominal width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidthRange {
    pub first: u32,
    pub last: u32,
    pub width: NominalWidth,
    pub category: WidthCategory,
}

impl WidthRange {
    #[must_use]
    pub const fn new(first: u32, last: u32, width: NominalWidth, category: WidthCategory) -> Self {
        Self {
            first,
            last,
            width,
            category,
        }
    }

    /// Check if the range contains a codepoint.
    #[must_use]
    pub fn contains(&self, cp: u32) -> bool {
        (self.first..=self.last).contains(&cp)
    }
}

use NominalWidth as N;
use WidthCategory as C;

const STANDARD_RANGES: &[WidthRange] = &[
    WidthRange::new(0x0000, 0x001F, N::Cells(0), C::Control),
    WidthRange::new(0x007F, 0x009F, N::Cells(0), C::Control),
    WidthRange::new(0xD800, 0xDFFF, N::Cells(1), C::Surrogate),
    WidthRange::new(0xE000, 0xF8FF, N::PrivateUse, C::PrivateUse),
    WidthRange::new(0xFDD0, 0xFDEF, N::Unassigned, C::Unassigned),
    WidthRange::new(0xFFFE, 0xFFFF, N::Unassigned, C::Unassigned),
    WidthRange::new(0x1_FFFE, 0x1_FFFF, N::Unassigned, C::Unassigned),
    WidthRange::new(0x2_FFFE, 0x2_FFFF, N::Unassigned, C::Unassigned),
    WidthRange::new(0x3_FFFE, 0x3_FFFF, N::Unassigned, C::Unassigned),
    WidthRange::new(0x4_0000, 0xD_FFFF, N::Unassigned, C::Unassigned),
    WidthRange::new(0xE_0080, 0xE_00FF, N::Unassigned, C::Unassigned),
    WidthRange::new(0xE_01F0, 0xE_FFFF, N::Unassigned, C::Unassigned),
    WidthRange::new(0xF_0000, 0xF_FFFD, N::PrivateUse, C::PrivateUse),
    WidthRange::new(0xF_FFFE, 0xF_FFFF, N::Unassigned, C::Unassigned),
    WidthRange::new(0x10_0000, 0x10_FFFD, N::PrivateUse, C::PrivateUse),
    WidthRange::new(0x10_FFFE, 0x10_FFFF, N::Unassigned, C::Unassigned),
];

/// Ordered list of disjoint width ranges.
#[derive(Clone, Debug)]
pub struct WidthTable {
    ranges: Cow<'static, [WidthRange]>,
}

impl WidthTable {
    /// The built-in table.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            ranges: Cow::Borrowed(STANDARD_RANGES),
        }
    }

    /// Build a table from custom ranges. Ranges must not overlap.
    #[must_use]
    pub fn new(mut ranges: Vec<WidthRange>) -> Self {
        ranges.sort_by_key(|r| r.first);
        Self {
            ranges: Cow::Owned(ranges),
        }
    }

    /// Find the range containing `cp`.
    #[must_use]
    pub fn lookup(&self, cp: u32) -> Option<&WidthRange> {
        let idx = self.ranges.partition_point(|r| r.last < cp);
        self.ranges.get(idx).filter(|r| r.contains(cp))
    }

    /// Nominal width and category of `cp`.
    ///
    /// Codepoints outside the table are classified from Unicode data. A
    /// codepoint that is not a valid scalar value and not in the table is
    /// narrow.
    #[must_use]
    pub fn nominal(&self, cp: u32) -> (NominalWidth, WidthCategory) {
        if let Some(range) = self.lookup(cp) {
            return (range.width, range.category);
        }
        let Some(c) = char::from_u32(cp) else {
            return (N::Cells(1), C::Narrow);
        };
        if c.general_category() == GeneralCategory::Unassigned {
            return (N::Unassigned, C::Unassigned);
        }
        match (c.width(), c.width_cjk()) {
            (Some(narrow), Some(cjk)) if narrow != cjk => (N::Ambiguous, C::Ambiguous),
            (Some(0), _) => (N::Cells(0), C::ZeroWidth),
            (Some(2), _) => (N::Cells(2), C::Wide),
            (Some(_), _) => (N::Cells(1), C::Narrow),
            (None, _) => (N::Cells(0), C::Control),
        }
    }

    /// Number of ranges in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the table has no ranges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for WidthTable {
    fn default() -> Self {
        Self::standard()
    }
}
