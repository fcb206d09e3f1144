//! Cell-aware text layout.
//!
//! Everything here is a pure function of its input, a [`LayoutConfig`] and a
//! [`SequenceMatcher`]. [`TextLayout`] bundles the two; the free functions use
//! [`TextLayout::current`], which snapshots the process-wide width policy.
//!
//! # Examples
//!
//! ```
//! use termlayout::text::{TextLayout, WrapMode};
//!
//! let layout: TextLayout = TextLayout::default();
//! assert_eq!(layout.measure("你好"), 4);
//! assert_eq!(layout.char_wrap("Hello World", 5, 0), ["Hello", " Worl", "d"]);
//! assert_eq!(layout.wrap("Hello World", WrapMode::Word, 5, 0), ["Hello", "World"]);
//! ```

mod measure;
mod position;
mod truncate;
mod units;
mod wrap;

pub use position::CursorPoint;
pub use units::{LayoutUnit, UnitKind, Units};
pub use wrap::WrapState;

use crate::ansi::{SequenceMatcher, VtMatcher};
use crate::error::Result;
use crate::unicode::{WidthPolicy, width_policy};

/// Layout configuration passed to every measurement and wrap call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Resolution of ambiguous, private-use and unassigned widths.
    pub policy: WidthPolicy,
    /// Number of spaces a tab expands to.
    pub tab_width: usize,
}

impl LayoutConfig {
    pub const DEFAULT_TAB_WIDTH: usize = 4;

    /// Snapshot of the process-wide width policy with default settings.
    #[must_use]
    pub fn current() -> Self {
        Self::default().with_policy(width_policy())
    }

    #[must_use]
    pub fn with_policy(mut self, policy: WidthPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn ambiguous_wide(mut self, enabled: bool) -> Self {
        self.policy.set(WidthPolicy::AMBIGUOUS_WIDE, enabled);
        self
    }

    #[must_use]
    pub fn unassigned_wide(mut self, enabled: bool) -> Self {
        self.policy.set(WidthPolicy::UNASSIGNED_WIDE, enabled);
        self
    }

    #[must_use]
    pub fn private_use_wide(mut self, enabled: bool) -> Self {
        self.policy.set(WidthPolicy::PRIVATE_USE_WIDE, enabled);
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            policy: WidthPolicy::empty(),
            tab_width: Self::DEFAULT_TAB_WIDTH,
        }
    }
}

/// Text wrapping mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Break at any cell boundary.
    #[default]
    Char,
    /// Break between words, falling back to character breaks for words
    /// that cannot fit on a line of their own.
    Word,
}

/// Layout context: a configuration and the matcher used to find escape
/// sequences.
#[derive(Clone, Copy, Debug)]
pub struct TextLayout<M = VtMatcher> {
    config: LayoutConfig,
    matcher: M,
}

impl TextLayout<VtMatcher> {
    /// Create a layout with the default matcher.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            matcher: VtMatcher,
        }
    }

    /// Layout using the process-wide width policy.
    #[must_use]
    pub fn current() -> Self {
        Self::new(LayoutConfig::current())
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<M: SequenceMatcher> TextLayout<M> {
    /// Create a layout with a custom sequence matcher.
    #[must_use]
    pub fn with_matcher(config: LayoutConfig, matcher: M) -> Self {
        Self { config, matcher }
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Wrap with the given mode.
    #[must_use]
    pub fn wrap(&self, text: &str, mode: WrapMode, max_cells: usize, indent: usize) -> Vec<String> {
        match mode {
            WrapMode::Char => self.char_wrap(text, max_cells, indent),
            WrapMode::Word => self.word_wrap(text, max_cells, indent),
        }
    }
}

/// Cell width of `text`, escape sequences excluded.
#[must_use]
pub fn measure(text: &str) -> usize {
    TextLayout::current().measure(text)
}

/// Cell width of the character at `index` (in chars, clamped).
#[must_use]
pub fn measure_char_at(text: &str, index: usize) -> Option<usize> {
    TextLayout::current().measure_char_at(text, index)
}

/// Number of zero-width characters in `text`.
#[must_use]
pub fn count_zero_width(text: &str) -> usize {
    TextLayout::current().count_zero_width(text)
}

/// Number of double-width characters in `text`.
#[must_use]
pub fn count_full_width(text: &str) -> usize {
    TextLayout::current().count_full_width(text)
}

/// Cell width of UTF-16 text; unpaired surrogates count as one cell.
#[must_use]
pub fn measure_utf16(units: &[u16]) -> usize {
    TextLayout::current().measure_utf16(units)
}

/// Hard-wrap `text` into lines of at most `max_cells` cells.
#[must_use]
pub fn char_wrap(text: &str, max_cells: usize, indent: usize) -> Vec<String> {
    TextLayout::current().char_wrap(text, max_cells, indent)
}

/// Word-wrap `text` into lines of at most `max_cells` cells.
#[must_use]
pub fn word_wrap(text: &str, max_cells: usize, indent: usize) -> Vec<String> {
    TextLayout::current().word_wrap(text, max_cells, indent)
}

/// Wrap `text` with the given mode.
#[must_use]
pub fn wrap(text: &str, mode: WrapMode, max_cells: usize, indent: usize) -> Vec<String> {
    TextLayout::current().wrap(text, mode, max_cells, indent)
}

/// Cut `text` to `max_cells` cells, ending with `...` when cut.
#[must_use]
pub fn truncate(text: &str, max_cells: usize) -> String {
    TextLayout::current().truncate(text, max_cells)
}

/// Predict where the cursor ends up after printing `text`.
#[must_use]
pub fn predict_position(
    text: &str,
    trailing_newline: bool,
    start: CursorPoint,
    width: usize,
    height: usize,
) -> CursorPoint {
    TextLayout::current().predict_position(text, trailing_newline, start, width, height)
}

/// Like [`predict_position`], rejecting a zero-sized window.
pub fn try_predict_position(
    text: &str,
    trailing_newline: bool,
    start: CursorPoint,
    width: usize,
    height: usize,
) -> Result<CursorPoint> {
    TextLayout::current().try_predict_position(text, trailing_newline, start, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert!(config.policy.is_empty());
        assert_eq!(config.tab_width, 4);
    }

    #[test]
    fn test_config_builders() {
        let config = LayoutConfig::default()
            .ambiguous_wide(true)
            .private_use_wide(true)
            .unassigned_wide(false)
            .with_tab_width(8);
        assert_eq!(
            config.policy,
            WidthPolicy::AMBIGUOUS_WIDE | WidthPolicy::PRIVATE_USE_WIDE
        );
        assert_eq!(config.tab_width, 8);
    }

    #[test]
    fn test_wrap_dispatch() {
        let layout: TextLayout = TextLayout::default();
        assert_eq!(
            layout.wrap("Hello World", WrapMode::Char, 5, 0),
            vec!["Hello", " Worl", "d"]
        );
        assert_eq!(
            layout.wrap("Hello World", WrapMode::Word, 5, 0),
            vec!["Hello", "World"]
        );
    }

    #[test]
    fn test_custom_matcher() {
        use crate::ansi::SequenceSpan;

        // Treats every `#` as an invisible sequence.
        struct HashMatcher;
        impl SequenceMatcher for HashMatcher {
            fn match_sequences<'a>(&self, text: &'a str) -> Vec<SequenceSpan<'a>> {
                text.match_indices('#')
                    .map(|(start, text)| SequenceSpan { start, text })
                    .collect()
            }
            fn looks_like_sequence(&self, text: &str) -> bool {
                text.contains('#')
            }
        }

        let layout = TextLayout::with_matcher(LayoutConfig::default(), HashMatcher);
        assert_eq!(layout.measure("a#b#"), 2);
        assert_eq!(layout.char_wrap("ab##cd", 2, 0), vec!["ab", "##cd"]);
        assert_eq!(layout.char_wrap("a#b", 2, 0), vec!["a#b"]);
    }
}
