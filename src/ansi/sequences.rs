//! Constant ANSI escape sequences used by layout and probing.

/// Escape character.
pub const ESC: char = '\x1b';

/// Single-byte C1 Control Sequence Introducer.
pub const CSI_C1: char = '\u{9b}';

/// Bell, one of the OSC terminators.
pub const BEL: char = '\x07';

/// Single-byte C1 String Terminator.
pub const ST_C1: char = '\u{9c}';

/// Save cursor position (DEC).
pub const CURSOR_SAVE: &str = "\x1b7";

/// Restore cursor position (DEC).
pub const CURSOR_RESTORE: &str = "\x1b8";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Device status report: request the cursor position.
///
/// The terminal answers with `ESC [ row ; col R` (1-based).
pub const DEVICE_STATUS_REPORT: &str = "\x1b[6n";

/// Final byte of a cursor position report.
pub const CURSOR_REPORT_FINAL: u8 = b'R';

/// Out-of-range cursor target. Terminals clamp it to the bottom-right cell.
pub const CURSOR_FAR_CORNER: &str = "\x1b[9999;9999H";

/// Generate a cursor position (CUP) sequence.
///
/// `row` and `col` are 0-based; the emitted sequence is 1-based.
#[must_use]
pub fn cursor_position(row: u16, col: u16) -> String {
    format!(
        "\x1b[{};{}H",
        u32::from(row) + 1,
        u32::from(col) + 1
    )
}
