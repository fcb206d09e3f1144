//! Codepoint cell-width classification.
//!
//! Resolved widths are cached per codepoint for the process lifetime. Only
//! policy-independent results are cached: an ambiguous, private-use or
//! unassigned codepoint is resolved again on every call, so a policy change
//! takes effect immediately without invalidating anything.

use super::policy::WidthPolicy;
use super::table::{NominalWidth, WidthCategory, WidthTable};
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Highest valid Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// Resolved width of a codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharWidth {
    /// Number of cells: 0, 1 or 2.
    pub width: usize,
    /// Category the width was derived from.
    pub category: WidthCategory,
}

impl CharWidth {
    const NARROW: Self = Self {
        width: 1,
        category: WidthCategory::Narrow,
    };

    /// Check if the codepoint occupies no cells.
    #[must_use]
    pub fn is_zero_width(&self) -> bool {
        self.width == 0
    }

    /// Check if the codepoint occupies two cells.
    #[must_use]
    pub fn is_wide(&self) -> bool {
        self.width == 2
    }
}

/// Cache of policy-independent widths.
#[derive(Debug, Default)]
pub struct WidthCache {
    entries: RwLock<FxHashMap<u32, CharWidth>>,
}

impl WidthCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached width.
    #[must_use]
    pub fn get(&self, cp: u32) -> Option<CharWidth> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&cp)
            .copied()
    }

    /// Insert a width unless one is already present; returns the stored value.
    fn get_or_insert(&self, cp: u32, width: CharWidth) -> CharWidth {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        *entries.entry(cp).or_insert(width)
    }

    /// Number of cached codepoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Width classifier: a range table plus its cache.
#[derive(Debug, Default)]
pub struct WidthClassifier {
    table: WidthTable,
    cache: WidthCache,
}

impl WidthClassifier {
    /// Create a classifier over a custom table, with a private cache.
    #[must_use]
    pub fn new(table: WidthTable) -> Self {
        Self {
            table,
            cache: WidthCache::new(),
        }
    }

    /// The process-wide classifier over the standard table.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<WidthClassifier> = OnceLock::new();
        STANDARD.get_or_init(|| Self::new(WidthTable::standard()))
    }

    /// Classify a codepoint.
    ///
    /// Fails with [`Error::CodepointOutOfRange`] above `0x10FFFF`.
    pub fn classify(&self, cp: u32, policy: WidthPolicy) -> Result<CharWidth> {
        if cp > MAX_CODEPOINT {
            return Err(Error::CodepointOutOfRange(cp));
        }
        Ok(self.classify_valid(cp, policy))
    }

    /// Classify a character. Never fails.
    #[inline]
    #[must_use]
    pub fn classify_char(&self, c: char, policy: WidthPolicy) -> CharWidth {
        // Fast path: ASCII printable characters are always width 1
        if (' '..='~').contains(&c) {
            return CharWidth::NARROW;
        }
        self.classify_valid(c as u32, policy)
    }

    fn classify_valid(&self, cp: u32, policy: WidthPolicy) -> CharWidth {
        if let Some(hit) = self.cache.get(cp) {
            return hit;
        }
        let (nominal, category) = self.table.nominal(cp);
        let flag = match nominal {
            NominalWidth::Cells(cells) => {
                let resolved = CharWidth {
                    width: usize::from(cells),
                    category,
                };
                return self.cache.get_or_insert(cp, resolved);
            }
            NominalWidth::Unassigned => WidthPolicy::UNASSIGNED_WIDE,
            NominalWidth::Ambiguous => WidthPolicy::AMBIGUOUS_WIDE,
            NominalWidth::PrivateUse => WidthPolicy::PRIVATE_USE_WIDE,
        };
        CharWidth {
            width: if policy.contains(flag) { 2 } else { 1 },
            category,
        }
    }

    /// The cache backing this classifier.
    #[must_use]
    pub fn cache(&self) -> &WidthCache {
        &self.cache
    }

    /// The range table backing this classifier.
    #[must_use]
    pub fn table(&self) -> &WidthTable {
        &self.table
    }
}

/// Classify a codepoint with the standard classifier.
pub fn classify_width(cp: u32, policy: WidthPolicy) -> Result<CharWidth> {
    WidthClassifier::standard().classify(cp, policy)
}

/// Classify a character with the standard classifier.
#[inline]
#[must_use]
pub fn classify_char(c: char, policy: WidthPolicy) -> CharWidth {
    WidthClassifier::standard().classify_char(c, policy)
}
