//! Character and word wrapping.
//!
//! Both wrappers are folds of [`WrapState`] over the layout units of each
//! physical line. The input is normalized first: `\r` is dropped, tabs expand
//! to `tab_width` spaces, and the text is split on `\n`. Every physical line
//! yields at least one output line, so empty input yields `[""]` and a
//! trailing newline yields a trailing empty line.
//!
//! Escape sequences and zero-width characters are appended to the current
//! line without being charged against the budget. A line is broken as soon
//! as its budget is exactly used up, so anything that follows, sequences
//! included, starts the next line.

use super::TextLayout;
use super::units::{LayoutUnit, UnitKind};
use crate::ansi::SequenceMatcher;
use std::borrow::Cow;

/// Accumulator threaded through the wrap fold.
///
/// `units` counts chars appended since the last break; `compensate` counts
/// the ones that take no cells (zero-width characters and escape sequence
/// chars); `take` counts double-width characters, each of which occupies one
/// cell more than its char count. The visible width of the pending line is
/// `units - compensate + take`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrapState {
    lines: Vec<String>,
    buffer: String,
    units: usize,
    compensate: usize,
    take: usize,
    indent_remaining: usize,
    max_cells: usize,
}

impl WrapState {
    /// Start a wrap with `max_cells` per line; the first line has `indent`
    /// cells already occupied. A zero budget is treated as one cell.
    #[must_use]
    pub fn new(max_cells: usize, indent: usize) -> Self {
        Self {
            max_cells: max_cells.max(1),
            indent_remaining: indent,
            ..Self::default()
        }
    }

    /// Visible cells on the pending line.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.units - self.compensate + self.take
    }

    /// Cell budget of the pending line.
    #[must_use]
    pub fn budget(&self) -> usize {
        self.max_cells.saturating_sub(self.indent_remaining)
    }

    /// Text of the pending line.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Lines emitted so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append a unit to the pending line without any break check.
    pub fn push(&mut self, unit: &LayoutUnit<'_>) {
        self.buffer.push_str(unit.text);
        let len = unit.char_len();
        self.units += len;
        match unit.kind {
            UnitKind::Narrow => {}
            UnitKind::Wide => self.take += 1,
            UnitKind::ZeroWidth | UnitKind::Sequence => self.compensate += len,
        }
    }

    /// Emit the pending line and start a new one at full width.
    pub fn flush(&mut self) {
        self.lines.push(std::mem::take(&mut self.buffer));
        self.units = 0;
        self.compensate = 0;
        self.take = 0;
        self.indent_remaining = 0;
    }

    /// Fold step of the character wrapper.
    ///
    /// Breaks before a visible unit that would overflow the pending line and
    /// right after one that uses up the budget. A unit too wide for any line
    /// is placed on a fresh line of its own.
    #[must_use]
    pub fn char_step(mut self, unit: LayoutUnit<'_>) -> Self {
        let cells = unit.cells();
        let used = self.cells();
        if cells > 0 && used + cells > self.budget() && (used > 0 || self.indent_remaining > 0) {
            self.flush();
        }
        self.push(&unit);
        if cells > 0 && self.cells() >= self.budget() {
            self.flush();
        }
        self
    }

    /// Close a physical line that started when `started_at` lines had been
    /// emitted.
    ///
    /// Pending text is flushed. A physical line that produced no output at
    /// all still yields one empty line.
    pub fn end_line(&mut self, started_at: usize) {
        if !self.buffer.is_empty() || self.lines.len() == started_at {
            self.flush();
        }
    }

    /// Check if the line was broken inside the physical line that started at
    /// `started_at` and nothing has been appended since.
    #[must_use]
    pub fn at_break(&self, started_at: usize) -> bool {
        self.buffer.is_empty() && self.lines.len() > started_at
    }

    /// Finish the wrap and return the emitted lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Drop `\r` and expand tabs.
fn normalize(text: &str, tab_width: usize) -> Cow<'_, str> {
    if !text.contains(['\r', '\t']) {
        return Cow::Borrowed(text);
    }
    let tab = " ".repeat(tab_width);
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\r' => {}
            '\t' => out.push_str(&tab),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

impl<M: SequenceMatcher> TextLayout<M> {
    /// Hard-wrap `text` into lines of at most `max_cells` visible cells.
    ///
    /// Concatenating the result reproduces the normalized input without its
    /// newlines. A character wider than `max_cells` (a CJK glyph at width 1)
    /// gets a line of its own and is not preceded by an empty line, so
    /// `char_wrap("你好", 1, 0)` is `["你", "好"]`.
    #[must_use]
    pub fn char_wrap(&self, text: &str, max_cells: usize, indent: usize) -> Vec<String> {
        let text = normalize(text, self.config().tab_width);
        let mut state = WrapState::new(max_cells, indent);
        for line in text.split('\n') {
            let started_at = state.lines().len();
            state = self.units(line).fold(state, WrapState::char_step);
            state.end_line(started_at);
        }
        state.into_lines()
    }

    /// Word-wrap `text` into lines of at most `max_cells` visible cells.
    ///
    /// Lines break at single spaces, and the space at a break is dropped. A
    /// word too long for a line of its own is character-wrapped, and its last
    /// fragment starts the next line.
    #[must_use]
    pub fn word_wrap(&self, text: &str, max_cells: usize, indent: usize) -> Vec<String> {
        let text = normalize(text, self.config().tab_width);
        let space = LayoutUnit {
            offset: 0,
            text: " ",
            kind: UnitKind::Narrow,
        };
        let mut state = WrapState::new(max_cells, indent);
        for line in text.split('\n') {
            let started_at = state.lines().len();
            let words = self.words(line);
            let mut widths = words.iter().map(|w| self.measure(w)).skip(1);
            for word in &words {
                // A word that fits only breaks inside `char_step` when it ends
                // the line exactly; an overlong word is split.
                state = self.units(word).fold(state, WrapState::char_step);
                let Some(next) = widths.next() else { continue };
                if state.at_break(started_at) {
                    // The break absorbs the space.
                } else if state.cells() + 1 + next <= state.budget() {
                    state.push(&space);
                } else {
                    state.flush();
                }
            }
            state.end_line(started_at);
        }
        state.into_lines()
    }
}
