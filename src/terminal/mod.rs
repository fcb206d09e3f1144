//! Terminal queries: mode switching, cursor reports and the fallback chain.
//!
//! Everything here performs blocking I/O on the real terminal and is meant
//! for the case where the operating system cannot answer a size or cursor
//! query itself. Probes change process-wide terminal state; callers must not
//! run two at once.

mod dsr;
mod fallback;
mod probe;
#[cfg(unix)]
mod raw;
mod shell;

pub use dsr::{DsrParser, DsrStatus, parse_cursor_report};
#[cfg(unix)]
pub use fallback::TtyProbe;
pub use fallback::{
    DumbTerminal, FallbackChain, FallbackStrategy, query_cursor_fallback, query_dimensions,
    query_dimensions_fallback,
};
pub use probe::{CursorProbe, ProbeState};
#[cfg(unix)]
pub use raw::{RawModeGuard, is_tty, terminal_size};
pub use shell::ShellProbe;
