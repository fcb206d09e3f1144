//! Cursor position report parsing.
//!
//! A terminal answers a device status request with `ESC [ row ; col R`,
//! both 1-based. The parser is fed one byte at a time because the reply is
//! read from a raw terminal without any framing.

use crate::ansi::CURSOR_REPORT_FINAL;
use crate::text::CursorPoint;

/// Progress of a [`DsrParser`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DsrStatus {
    /// More bytes are needed.
    Pending,
    /// The report is complete.
    Complete(CursorPoint),
    /// The terminator arrived before both coordinates were seen.
    Malformed,
}

/// Incremental parser for cursor position reports.
///
/// Digits accumulate into the row until `;`, then into the column until `R`.
/// Any other byte is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DsrParser {
    row: Option<u32>,
    col: Option<u32>,
    in_col: bool,
}

impl DsrParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte.
    pub fn feed(&mut self, byte: u8) -> DsrStatus {
        match byte {
            b'0'..=b'9' => {
                let slot = if self.in_col {
                    &mut self.col
                } else {
                    &mut self.row
                };
                let digit = u32::from(byte - b'0');
                *slot = Some(slot.unwrap_or(0).saturating_mul(10).saturating_add(digit));
                DsrStatus::Pending
            }
            b';' => {
                self.in_col = true;
                DsrStatus::Pending
            }
            CURSOR_REPORT_FINAL => {
                let status = match (self.row, self.col) {
                    (Some(row), Some(col)) => {
                        DsrStatus::Complete(CursorPoint::new(zero_based(col), zero_based(row)))
                    }
                    _ => DsrStatus::Malformed,
                };
                *self = Self::default();
                status
            }
            _ => DsrStatus::Pending,
        }
    }
}

fn zero_based(value: u32) -> usize {
    usize::try_from(value.saturating_sub(1)).unwrap_or(usize::MAX)
}

/// Parse a complete cursor position report.
///
/// Returns `None` if the input holds no complete, well-formed report.
#[must_use]
pub fn parse_cursor_report(input: &[u8]) -> Option<CursorPoint> {
    let mut parser = DsrParser::new();
    input.iter().find_map(|&b| match parser.feed(b) {
        DsrStatus::Complete(point) => Some(Some(point)),
        DsrStatus::Malformed => Some(None),
        DsrStatus::Pending => None,
    })?
}
