//! Fallback chain for dimension and cursor queries.
//!
//! Used when the operating system cannot report the terminal size or cursor
//! position directly. Strategies are tried in order and the first answer
//! wins; failures are logged at `debug` and the chain moves on.

use crate::error::{Error, Result};
use crate::terminal::shell::ShellProbe;
use crate::text::CursorPoint;
use std::env;

/// One way of answering a terminal query.
pub trait FallbackStrategy {
    /// Name used in log events.
    fn name(&self) -> &'static str;

    /// Current cursor position.
    fn try_cursor(&self) -> Result<CursorPoint>;

    /// Window size as `(columns, rows)`.
    fn try_dimensions(&self) -> Result<(u16, u16)>;
}

/// Answers for a `TERM=dumb` terminal without touching it.
///
/// A dumb terminal has no addressable cursor and no fixed width: the cursor
/// is always at the origin and the window is unbounded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DumbTerminal {
    term: Option<String>,
}

impl DumbTerminal {
    /// Dimensions reported for a dumb terminal.
    pub const UNBOUNDED: (u16, u16) = (u16::MAX, u16::MAX);

    /// Read `TERM` from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var("TERM").ok())
    }

    #[must_use]
    pub fn new(term: Option<String>) -> Self {
        Self { term }
    }

    /// Check if the terminal is dumb.
    #[must_use]
    pub fn is_dumb(&self) -> bool {
        self.term.as_deref() == Some("dumb")
    }

    fn require_dumb(&self) -> Result<()> {
        if self.is_dumb() {
            Ok(())
        } else {
            Err(Error::ProbeFailed("terminal is not dumb".to_string()))
        }
    }
}

impl FallbackStrategy for DumbTerminal {
    fn name(&self) -> &'static str {
        "dumb"
    }

    fn try_cursor(&self) -> Result<CursorPoint> {
        self.require_dumb().map(|()| CursorPoint::ORIGIN)
    }

    fn try_dimensions(&self) -> Result<(u16, u16)> {
        self.require_dumb().map(|()| Self::UNBOUNDED)
    }
}

/// Device status round trip on the controlling terminal (`/dev/tty`).
#[cfg(unix)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TtyProbe;

#[cfg(unix)]
impl TtyProbe {
    fn open() -> Result<std::fs::File> {
        Ok(std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")?)
    }
}

#[cfg(unix)]
impl FallbackStrategy for TtyProbe {
    fn name(&self) -> &'static str {
        "tty"
    }

    fn try_cursor(&self) -> Result<CursorPoint> {
        use crate::terminal::{CursorProbe, RawModeGuard};

        let tty = Self::open()?;
        CursorProbe::new(&tty, &tty).query_cursor(|| RawModeGuard::new(&tty))
    }

    fn try_dimensions(&self) -> Result<(u16, u16)> {
        use crate::terminal::{CursorProbe, RawModeGuard};

        let tty = Self::open()?;
        CursorProbe::new(&tty, &tty).query_dimensions(|| RawModeGuard::new(&tty))
    }
}

impl FallbackStrategy for ShellProbe {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn try_cursor(&self) -> Result<CursorPoint> {
        self.query_cursor()
    }

    fn try_dimensions(&self) -> Result<(u16, u16)> {
        self.query_dimensions()
    }
}

/// Ordered list of strategies.
#[derive(Default)]
pub struct FallbackChain {
    strategies: Vec<Box<dyn FallbackStrategy + Send + Sync>>,
}

impl FallbackChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain for the current platform: the dumb-terminal check, then a
    /// `/dev/tty` probe on Unix or a shell probe elsewhere.
    #[must_use]
    pub fn platform() -> Self {
        let chain = Self::new().with(DumbTerminal::from_env());
        #[cfg(unix)]
        let chain = chain.with(TtyProbe);
        #[cfg(not(unix))]
        let chain = chain.with(ShellProbe::default());
        chain
    }

    /// Append a strategy.
    #[must_use]
    pub fn with(mut self, strategy: impl FallbackStrategy + Send + Sync + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Names of the strategies, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Query the cursor position.
    pub fn query_cursor(&self) -> Result<CursorPoint> {
        self.first_success("cursor", |s| s.try_cursor())
    }

    /// Query the window size as `(columns, rows)`.
    pub fn query_dimensions(&self) -> Result<(u16, u16)> {
        self.first_success("dimensions", |s| s.try_dimensions())
    }

    fn first_success<T>(
        &self,
        query: &str,
        attempt: impl Fn(&dyn FallbackStrategy) -> Result<T>,
    ) -> Result<T> {
        for strategy in &self.strategies {
            match attempt(strategy.as_ref()) {
                Ok(answer) => return Ok(answer),
                Err(err) => {
                    tracing::debug!(strategy = strategy.name(), query, error = %err, "fallback failed");
                }
            }
        }
        Err(Error::FallbackExhausted)
    }
}

impl std::fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackChain")
            .field("strategies", &self.names())
            .finish()
    }
}

/// Query the cursor position through the platform chain.
pub fn query_cursor_fallback() -> Result<CursorPoint> {
    FallbackChain::platform().query_cursor()
}

/// Query the window size through the platform chain.
pub fn query_dimensions_fallback() -> Result<(u16, u16)> {
    FallbackChain::platform().query_dimensions()
}

/// Query the window size as `(columns, rows)`.
///
/// Asks the operating system first and falls back to the platform chain when
/// that fails with an I/O error.
#[cfg(unix)]
pub fn query_dimensions() -> Result<(u16, u16)> {
    match crate::terminal::terminal_size() {
        Ok(size) => Ok(size),
        Err(err) => {
            tracing::debug!(error = %err, "terminal size unavailable, probing");
            query_dimensions_fallback()
        }
    }
}

/// Query the window size as `(columns, rows)` through the platform chain.
#[cfg(not(unix))]
pub fn query_dimensions() -> Result<(u16, u16)> {
    query_dimensions_fallback()
}
