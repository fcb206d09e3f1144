//! Property-based tests for measurement and wrapping.
//!
//! Every test uses an explicit [`LayoutConfig`] so the process-wide policy
//! never leaks between cases.

use proptest::prelude::*;
use termlayout::text::{LayoutConfig, TextLayout};
use termlayout::unicode::{WidthClassifier, WidthPolicy, WidthTable};

fn layout() -> TextLayout {
    TextLayout::new(LayoutConfig::default())
}

// ============================================================================
// Strategies
// ============================================================================

/// Mixed text: ASCII, CJK, combining marks, ambiguous symbols, escape
/// sequences, newlines, tabs and carriage returns.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "b", "z", " ", "  ", "中", "文", "😀", "e\u{0301}", "①", "é", "\n", "\t", "\r",
            "\x1b[31m", "\x1b[0m", "\x1b]8;;x\x07", "\u{200B}",
        ]),
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

/// Words of lowercase letters separated by single spaces.
fn sentence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}", 1..15)
}

/// Text containing ambiguous-width symbols mixed with ASCII.
fn ambiguous_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', ' ', '①', '②', '±', '×', '→', 'x', '中']),
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn normalized(text: &str) -> String {
    text.replace('\r', "").replace('\t', "    ")
}

// ============================================================================
// Character wrap
// ============================================================================

proptest! {
    /// Joining the wrapped lines reproduces the normalized input.
    #[test]
    fn char_wrap_round_trip(text in mixed_text(), width in 1usize..20) {
        let lines = layout().char_wrap(&text, width, 0);
        let expected = normalized(&text).replace('\n', "");
        prop_assert_eq!(lines.concat(), expected);
    }

    /// Explicit newlines are never lost: output has at least as many lines
    /// as the input has physical lines.
    #[test]
    fn char_wrap_keeps_physical_lines(text in mixed_text(), width in 1usize..20) {
        let lines = layout().char_wrap(&text, width, 0);
        prop_assert!(lines.len() >= text.matches('\n').count() + 1);
    }

    /// No line exceeds the budget once the budget fits the widest glyph.
    #[test]
    fn char_wrap_budget(text in mixed_text(), width in 2usize..20) {
        let l = layout();
        for line in l.char_wrap(&text, width, 0) {
            prop_assert!(l.measure(&line) <= width, "{:?} wider than {}", line, width);
        }
    }

    /// The first line honors the indent; later lines get the full width.
    #[test]
    fn char_wrap_indent_budget(text in mixed_text(), width in 4usize..20, indent in 0usize..3) {
        let l = layout();
        let lines = l.char_wrap(&text, width, indent);
        prop_assert!(l.measure(&lines[0]) <= width - indent);
    }

    /// Escape sequences survive wrapping intact.
    #[test]
    fn char_wrap_keeps_sequences(text in mixed_text(), width in 1usize..10) {
        let lines = layout().char_wrap(&text, width, 0);
        let input_count = text.matches("\x1b[31m").count();
        let output_count: usize = lines.iter().map(|l| l.matches("\x1b[31m").count()).sum();
        prop_assert_eq!(input_count, output_count);
    }
}

// ============================================================================
// Word wrap
// ============================================================================

proptest! {
    /// Words narrower than the budget appear intact on exactly one line.
    #[test]
    fn word_wrap_keeps_short_words(words in sentence(), width in 2usize..20) {
        let text = words.join(" ");
        let lines = layout().word_wrap(&text, width, 0);
        let split: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        for word in words.iter().filter(|w| w.len() < width) {
            prop_assert!(split.contains(&word.as_str()), "{:?} was split in {:?}", word, lines);
        }
    }

    /// Word wrap respects the budget.
    #[test]
    fn word_wrap_budget(text in mixed_text(), width in 2usize..20) {
        let l = layout();
        for line in l.word_wrap(&text, width, 0) {
            prop_assert!(l.measure(&line) <= width, "{:?} wider than {}", line, width);
        }
    }

    /// Word wrap only drops spaces at line breaks.
    #[test]
    fn word_wrap_loses_only_spaces(words in sentence(), width in 1usize..20) {
        let text = words.join(" ");
        let lines = layout().word_wrap(&text, width, 0);
        prop_assert_eq!(lines.concat().replace(' ', ""), text.replace(' ', ""));
    }
}

// ============================================================================
// Policy and cache
// ============================================================================

proptest! {
    /// Enabling wide ambiguous never shrinks a measurement, and changes
    /// nothing for text without ambiguous characters.
    #[test]
    fn ambiguous_policy_is_monotonic(text in ambiguous_text()) {
        let narrow = layout();
        let wide = TextLayout::new(LayoutConfig::default().ambiguous_wide(true));
        let (n, w) = (narrow.measure(&text), wide.measure(&text));
        prop_assert!(w >= n);
        if !text.contains(['①', '②', '±', '×', '→']) {
            prop_assert_eq!(w, n);
        }
    }

    /// Classification is stable regardless of call order.
    #[test]
    fn classification_is_stable(cps in prop::collection::vec(0u32..0x3_0000, 1..50)) {
        let shared = WidthClassifier::standard();
        let fresh = WidthClassifier::new(WidthTable::standard());
        for &cp in cps.iter().rev() {
            let _ = fresh.classify(cp, WidthPolicy::all());
        }
        for &cp in &cps {
            let a = shared.classify(cp, WidthPolicy::empty()).unwrap();
            let b = fresh.classify(cp, WidthPolicy::empty()).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
