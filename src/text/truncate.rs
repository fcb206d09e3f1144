//! Cell-aware truncation.

use super::TextLayout;
use super::units::UnitKind;
use crate::ansi::SequenceMatcher;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

impl<M: SequenceMatcher> TextLayout<M> {
    /// Cut `text` so it occupies at most `max_cells` cells.
    ///
    /// Text that already fits is returned unchanged. Otherwise the visible
    /// text is cut and `...` marks the cut; escape sequences after the cut
    /// are kept so styles are still reset.
    #[must_use]
    pub fn truncate(&self, text: &str, max_cells: usize) -> String {
        if self.measure(text) <= max_cells {
            return text.to_owned();
        }
        if max_cells <= ELLIPSIS.len() {
            return ELLIPSIS[..max_cells].to_owned();
        }
        let budget = max_cells - ELLIPSIS.len();
        let mut out = String::with_capacity(text.len());
        let mut used = 0;
        let mut cut = false;
        for unit in self.units(text) {
            if unit.kind == UnitKind::Sequence {
                out.push_str(unit.text);
            } else if !cut {
                if used + unit.cells() > budget {
                    out.push_str(ELLIPSIS);
                    cut = true;
                } else {
                    out.push_str(unit.text);
                    used += unit.cells();
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truncate(text: &str, max: usize) -> String {
        let layout: TextLayout = TextLayout::default();
        layout.truncate(text, max)
    }

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_cut_with_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("abcdef", 4), "a...");
    }

    #[test]
    fn test_tiny_budget() {
        assert_eq!(truncate("abcdef", 3), "...");
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn test_wide_char_not_split() {
        // Two cells are left before the ellipsis; 你 does not fit after "ab".
        assert_eq!(truncate("ab你好", 5), "ab...");
        assert_eq!(truncate("ab你好", 6), "ab你好");
    }

    #[test]
    fn test_sequences_preserved() {
        assert_eq!(
            truncate("\x1b[1mhello world\x1b[0m", 8),
            "\x1b[1mhello...\x1b[0m"
        );
    }
}
