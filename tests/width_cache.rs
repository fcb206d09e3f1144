//! Concurrent use of a shared width classifier.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use termlayout::unicode::{NominalWidth, WidthClassifier, WidthPolicy, WidthTable};

const SAMPLE: &str = "abc中文字😀🎉e\u{0301}\u{200D}①②±×→\u{E000}\u{E001}ＡＢ한글ñ";

#[test]
fn threads_agree_on_every_width() {
    let classifier = Arc::new(WidthClassifier::new(WidthTable::standard()));
    let reference: Vec<usize> = SAMPLE
        .chars()
        .map(|c| {
            WidthClassifier::new(WidthTable::standard())
                .classify_char(c, WidthPolicy::empty())
                .width
        })
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let classifier = Arc::clone(&classifier);
            thread::spawn(move || {
                let mut out = Vec::new();
                for _ in 0..200 {
                    // Alternate direction so threads race on different entries.
                    let widths: Vec<usize> = if i % 2 == 0 {
                        SAMPLE
                            .chars()
                            .map(|c| classifier.classify_char(c, WidthPolicy::empty()).width)
                            .collect()
                    } else {
                        let mut rev: Vec<usize> = SAMPLE
                            .chars()
                            .rev()
                            .map(|c| classifier.classify_char(c, WidthPolicy::empty()).width)
                            .collect();
                        rev.reverse();
                        rev
                    };
                    out = widths;
                }
                out
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), reference);
    }
}

#[test]
fn cache_holds_only_policy_independent_entries() {
    let classifier = WidthClassifier::new(WidthTable::standard());
    thread::scope(|s| {
        for policy in [WidthPolicy::empty(), WidthPolicy::all()] {
            let classifier = &classifier;
            s.spawn(move || {
                for c in SAMPLE.chars() {
                    classifier.classify_char(c, policy);
                }
            });
        }
    });

    let expected: HashSet<u32> = SAMPLE
        .chars()
        .filter(|c| !c.is_ascii_graphic() && *c != ' ')
        .map(|c| c as u32)
        .filter(|&cp| !classifier.table().nominal(cp).0.is_policy_dependent())
        .collect();
    assert_eq!(classifier.cache().len(), expected.len());
    for cp in expected {
        assert!(classifier.cache().get(cp).is_some(), "{cp:#x} not cached");
    }
}

#[test]
fn policy_dependent_widths_follow_each_call() {
    let classifier = Arc::new(WidthClassifier::new(WidthTable::standard()));
    let wide = {
        let classifier = Arc::clone(&classifier);
        thread::spawn(move || classifier.classify_char('①', WidthPolicy::AMBIGUOUS_WIDE).width)
    };
    let narrow = classifier.classify_char('①', WidthPolicy::empty()).width;
    assert_eq!(wide.join().unwrap(), 2);
    assert_eq!(narrow, 1);
    assert!(matches!(
        classifier.table().nominal('①' as u32).0,
        NominalWidth::Ambiguous
    ));
}
