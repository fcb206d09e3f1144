//! Cell measurement.

use super::TextLayout;
use crate::ansi::SequenceMatcher;
use crate::unicode::{classify_char, classify_width};

impl<M: SequenceMatcher> TextLayout<M> {
    /// Cell width of one character under this layout's policy.
    #[inline]
    #[must_use]
    pub fn char_width(&self, c: char) -> usize {
        classify_char(c, self.config().policy).width
    }

    /// Cell width of `text`, escape sequences excluded.
    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        let visible = self.matcher().filter_sequences(text);
        if visible.is_ascii() {
            return visible.bytes().filter(|b| (0x20..0x7f).contains(b)).count();
        }
        visible.chars().map(|c| self.char_width(c)).sum()
    }

    /// Cell width of the character at `index`, counted in chars.
    ///
    /// An out-of-range index is clamped to the last character. Returns `None`
    /// for empty text.
    #[must_use]
    pub fn measure_char_at(&self, text: &str, index: usize) -> Option<usize> {
        let count = text.chars().count();
        let c = text.chars().nth(index.min(count.checked_sub(1)?))?;
        Some(self.char_width(c))
    }

    /// Number of zero-width characters, escape sequences excluded.
    #[must_use]
    pub fn count_zero_width(&self, text: &str) -> usize {
        self.count_width(text, 0)
    }

    /// Number of double-width characters, escape sequences excluded.
    #[must_use]
    pub fn count_full_width(&self, text: &str) -> usize {
        self.count_width(text, 2)
    }

    fn count_width(&self, text: &str, cells: usize) -> usize {
        self.matcher()
            .filter_sequences(text)
            .chars()
            .filter(|&c| self.char_width(c) == cells)
            .count()
    }

    /// Cell width of UTF-16 text.
    ///
    /// Surrogate pairs are joined into one character; an unpaired surrogate
    /// is measured on its own.
    #[must_use]
    pub fn measure_utf16(&self, units: &[u16]) -> usize {
        let mut text = String::with_capacity(units.len());
        let mut unpaired = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(c) => text.push(c),
                Err(err) => {
                    let cp = u32::from(err.unpaired_surrogate());
                    unpaired += classify_width(cp, self.config().policy).map_or(1, |w| w.width);
                }
            }
        }
        self.measure(&text) + unpaired
    }
}

#[cfg(test)]
mod tests {
    use super::super::LayoutConfig;
    use super::*;

    fn layout() -> TextLayout {
        TextLayout::default()
    }

    #[test]
    fn test_measure_ascii() {
        assert_eq!(layout().measure("A"), 1);
        assert_eq!(layout().measure("Hello"), 5);
        assert_eq!(layout().measure(""), 0);
    }

    #[test]
    fn test_measure_cjk() {
        assert_eq!(layout().measure("你"), 2);
        assert_eq!(layout().measure("日本語"), 6);
        assert_eq!(layout().measure("a中b"), 4);
    }

    #[test]
    fn test_measure_skips_sequences() {
        assert_eq!(layout().measure("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(layout().measure("\x1b]8;;https://example.com\x07link\x1b]8;;\x07"), 4);
    }

    #[test]
    fn test_measure_ascii_controls_are_zero_width() {
        assert_eq!(layout().measure("a\x07b"), 2);
        assert_eq!(layout().measure("\x1b"), 0);
    }

    #[test]
    fn test_measure_combining() {
        assert_eq!(layout().measure("e\u{0301}"), 1);
    }

    #[test]
    fn test_measure_ambiguous_follows_policy() {
        let narrow = layout();
        let wide = TextLayout::new(LayoutConfig::default().ambiguous_wide(true));
        assert_eq!(narrow.measure("①②"), 2);
        assert_eq!(wide.measure("①②"), 4);
        assert_eq!(wide.measure("abc"), 3);
    }

    #[test]
    fn test_measure_char_at() {
        let l = layout();
        assert_eq!(l.measure_char_at("a中", 0), Some(1));
        assert_eq!(l.measure_char_at("a中", 1), Some(2));
        // Clamped to the last character
        assert_eq!(l.measure_char_at("a中", 99), Some(2));
        assert_eq!(l.measure_char_at("", 0), None);
        assert_eq!(l.measure_char_at("😀", 0), Some(2));
    }

    #[test]
    fn test_counts() {
        let l = layout();
        assert_eq!(l.count_full_width("a中b文"), 2);
        assert_eq!(l.count_zero_width("e\u{0301}\u{200B}x"), 2);
        // Sequence bytes are not counted as zero-width controls
        assert_eq!(l.count_zero_width("\x1b[1mx\x1b[0m"), 0);
        assert_eq!(l.count_full_width(""), 0);
    }

    #[test]
    fn test_measure_utf16() {
        let l = layout();
        let pair: Vec<u16> = "😀a".encode_utf16().collect();
        assert_eq!(l.measure_utf16(&pair), 3);
        assert_eq!(l.measure_utf16(&[0xD83D, u16::from(b'a')]), 2);
        assert_eq!(l.measure_utf16(&[0xDC00]), 1);
        assert_eq!(l.measure_utf16(&[]), 0);
    }
}
