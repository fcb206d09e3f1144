//! Escape-sequence matching.
//!
//! Layout code never interprets control sequences; it only needs to know
//! where they are so it can pass them through untouched and exclude them from
//! cell counts. [`SequenceMatcher`] is that narrow interface, and
//! [`VtMatcher`] is the default implementation covering the VT/ECMA-48
//! families a terminal writer emits:
//!
//! - CSI (`ESC [` or C1 `0x9B`) with parameter, intermediate and final bytes
//! - OSC (`ESC ]`) terminated by BEL, `ESC \` or C1 ST
//! - DCS, SOS, PM and APC strings (`ESC P`, `ESC X`, `ESC ^`, `ESC _`)
//! - two-byte and nF escapes (`ESC 7`, `ESC ( B`, ...)
//!
//! Incomplete sequences are not matched; their bytes are left as ordinary
//! text.

use std::borrow::Cow;

/// One escape sequence found inside a source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceSpan<'a> {
    /// Byte offset of the sequence in the source string.
    pub start: usize,
    /// The literal sequence text.
    pub text: &'a str,
}

impl SequenceSpan<'_> {
    /// Byte offset just past the sequence.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Length of the sequence in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Locates escape sequences inside text.
pub trait SequenceMatcher {
    /// Return every sequence in `text`, ordered by start offset, non-overlapping.
    fn match_sequences<'a>(&self, text: &'a str) -> Vec<SequenceSpan<'a>>;

    /// Cheap pre-check: can `text` contain a sequence at all?
    ///
    /// May return false positives, never false negatives.
    fn looks_like_sequence(&self, text: &str) -> bool {
        text.bytes().any(|b| b == 0x1b || b == 0xc2)
    }

    /// Remove every sequence from `text`.
    fn filter_sequences<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.looks_like_sequence(text) {
            return Cow::Borrowed(text);
        }
        let spans = self.match_sequences(text);
        if spans.is_empty() {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for span in spans {
            out.push_str(&text[cursor..span.start]);
            cursor = span.end();
        }
        out.push_str(&text[cursor..]);
        Cow::Owned(out)
    }
}

/// Default VT/ECMA-48 sequence matcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VtMatcher;

impl SequenceMatcher for VtMatcher {
    fn match_sequences<'a>(&self, text: &'a str) -> Vec<SequenceSpan<'a>> {
        let bytes = text.as_bytes();
        let mut spans = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            if let Some(len) = sequence_len(bytes, i) {
                spans.push(SequenceSpan {
                    start: i,
                    text: &text[i..i + len],
                });
                i += len;
            } else {
                i += 1;
            }
        }
        spans
    }
}

/// Length in bytes of the sequence starting at `start`, if one does.
fn sequence_len(bytes: &[u8], start: usize) -> Option<usize> {
    match bytes[start] {
        0x1b => {
            let next = *bytes.get(start + 1)?;
            let body = start + 2;
            let end = match next {
                b'[' => csi_end(bytes, body)?,
                b']' => string_end(bytes, body, true)?,
                b'P' | b'X' | b'^' | b'_' => string_end(bytes, body, false)?,
                0x20..=0x2f => {
                    let mut j = body;
                    while matches!(bytes.get(j), Some(0x20..=0x2f)) {
                        j += 1;
                    }
                    match bytes.get(j)? {
                        0x30..=0x7e => j + 1,
                        _ => return None,
                    }
                }
                0x30..=0x7e => body,
                _ => return None,
            };
            Some(end - start)
        }
        // C1 CSI encoded as UTF-8 (U+009B).
        0xc2 if bytes.get(start + 1) == Some(&0x9b) => {
            csi_end(bytes, start + 2).map(|end| end - start)
        }
        _ => None,
    }
}

/// End offset (exclusive) of a CSI body starting at `from`.
fn csi_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while matches!(bytes.get(j), Some(0x30..=0x3f)) {
        j += 1;
    }
    while matches!(bytes.get(j), Some(0x20..=0x2f)) {
        j += 1;
    }
    match bytes.get(j)? {
        0x40..=0x7e => Some(j + 1),
        _ => None,
    }
}

/// End offset (exclusive) of a control string body starting at `from`.
fn string_end(bytes: &[u8], from: usize, bel_terminates: bool) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        match bytes[j] {
            0x07 if bel_terminates => return Some(j + 1),
            0x1b if bytes.get(j + 1) == Some(&b'\\') => return Some(j + 2),
            0xc2 if bytes.get(j + 1) == Some(&0x9c) => return Some(j + 2),
            _ => j += 1,
        }
    }
    None
}
