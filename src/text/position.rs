//! Cursor position prediction.
//!
//! Replays the character wrapper against a virtual cursor. A line that fills
//! the window exactly leaves the cursor at column 0 of the next row, and the
//! following line break (wrapped or explicit) does not move it again. Once the
//! cursor would leave the bottom row the terminal has scrolled: the row stays
//! on the last row and the column is taken from the last wrapped line.

use super::TextLayout;
use crate::ansi::SequenceMatcher;
use crate::error::{Error, Result};

/// Cursor position relative to the visible window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CursorPoint {
    /// Column, 0-based.
    pub column: usize,
    /// Row, 0-based.
    pub row: usize,
}

impl CursorPoint {
    pub const ORIGIN: Self = Self { column: 0, row: 0 };

    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl From<(usize, usize)> for CursorPoint {
    fn from((column, row): (usize, usize)) -> Self {
        Self { column, row }
    }
}

impl<M: SequenceMatcher> TextLayout<M> {
    /// Predict where the cursor lands after printing `text` from `start` in a
    /// `width` x `height` window.
    ///
    /// With `trailing_newline`, one more line break is applied after the text.
    /// Zero dimensions are treated as 1 and `start` is clamped into the
    /// window; the result always lies inside it.
    #[must_use]
    pub fn predict_position(
        &self,
        text: &str,
        trailing_newline: bool,
        start: CursorPoint,
        width: usize,
        height: usize,
    ) -> CursorPoint {
        let width = width.max(1);
        let last_row = height.max(1) - 1;
        let mut column = start.column.min(width - 1);
        let mut row = start.row.min(last_row);
        // Set while an exact fill has already moved the cursor to a new row.
        let mut wrapped = false;

        let visible: String = self
            .matcher()
            .filter_sequences(text)
            .chars()
            .filter(|c| !matches!(c, '\r' | '\0'))
            .collect();

        if !visible.is_empty() {
            let lines = self.char_wrap(&visible, width, column);
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    if !std::mem::take(&mut wrapped) {
                        row += 1;
                    }
                    column = 0;
                }
                if row <= last_row {
                    column += self.measure(line);
                    if column >= width {
                        column = 0;
                        row += 1;
                        wrapped = true;
                    }
                }
                if row > last_row {
                    let tail = lines.last().map_or(0, |l| self.measure(l));
                    row = last_row;
                    column = tail.min(width - 1);
                    wrapped = false;
                    break;
                }
            }
        }

        if trailing_newline && !wrapped {
            row = (row + 1).min(last_row);
            column = 0;
        }
        CursorPoint { column, row }
    }

    /// Like [`predict_position`](Self::predict_position), but a zero-sized
    /// window is an error.
    pub fn try_predict_position(
        &self,
        text: &str,
        trailing_newline: bool,
        start: CursorPoint,
        width: usize,
        height: usize,
    ) -> Result<CursorPoint> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(self.predict_position(text, trailing_newline, start, width, height))
    }
}
