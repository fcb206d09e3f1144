//! Layout units: the atoms the wrappers fold over.
//!
//! A physical line is a sequence of units. Each unit is either one `char` or
//! one whole escape sequence; a sequence is never split.

use super::TextLayout;
use crate::ansi::{SequenceMatcher, SequenceSpan};
use crate::unicode::{WidthPolicy, classify_char};
use std::iter::Peekable;
use std::vec::IntoIter;

/// Kind of layout unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// One-cell character.
    Narrow,
    /// Two-cell character.
    Wide,
    /// Character that occupies no cells.
    ZeroWidth,
    /// Escape sequence, passed through verbatim.
    Sequence,
}

/// One unit of a physical line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutUnit<'a> {
    /// Byte offset in the source line.
    pub offset: usize,
    /// Literal text of the unit.
    pub text: &'a str,
    pub kind: UnitKind,
}

impl LayoutUnit<'_> {
    /// Cells this unit occupies.
    #[must_use]
    pub fn cells(&self) -> usize {
        match self.kind {
            UnitKind::Narrow => 1,
            UnitKind::Wide => 2,
            UnitKind::ZeroWidth | UnitKind::Sequence => 0,
        }
    }

    /// Length in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        match self.kind {
            UnitKind::Sequence => self.text.chars().count(),
            _ => 1,
        }
    }

    /// Check if this unit is a plain space.
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.kind == UnitKind::Narrow && self.text == " "
    }
}

/// Iterator over the units of a line.
#[derive(Debug)]
pub struct Units<'a> {
    text: &'a str,
    pos: usize,
    spans: Peekable<IntoIter<SequenceSpan<'a>>>,
    policy: WidthPolicy,
}

impl<'a> Iterator for Units<'a> {
    type Item = LayoutUnit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }
        let offset = self.pos;
        if let Some(span) = self.spans.next_if(|s| s.start == offset) {
            self.pos = span.end();
            return Some(LayoutUnit {
                offset,
                text: span.text,
                kind: UnitKind::Sequence,
            });
        }
        let c = self.text[offset..].chars().next()?;
        self.pos += c.len_utf8();
        let kind = match classify_char(c, self.policy).width {
            0 => UnitKind::ZeroWidth,
            2 => UnitKind::Wide,
            _ => UnitKind::Narrow,
        };
        Some(LayoutUnit {
            offset,
            text: &self.text[offset..self.pos],
            kind,
        })
    }
}

impl<M: SequenceMatcher> TextLayout<M> {
    /// Split `line` into layout units.
    #[must_use]
    pub fn units<'a>(&self, line: &'a str) -> Units<'a> {
        let spans = if self.matcher().looks_like_sequence(line) {
            self.matcher().match_sequences(line)
        } else {
            Vec::new()
        };
        Units {
            text: line,
            pos: 0,
            spans: spans.into_iter().peekable(),
            policy: self.config().policy,
        }
    }

    /// Split `line` on spaces that are not part of an escape sequence.
    #[must_use]
    pub fn words<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut words = Vec::new();
        let mut start = 0;
        for unit in self.units(line).filter(LayoutUnit::is_space) {
            words.push(&line[start..unit.offset]);
            start = unit.offset + 1;
        }
        words.push(&line[start..]);
        words
    }
}
