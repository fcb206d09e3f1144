//! Device status report round trip.
//!
//! The probe switches the terminal mode, writes the request, parses the reply
//! and restores the mode:
//!
//! ```text
//! Idle -> ModeSwitched -> Requested -> Parsing -> Restored
//! ```
//!
//! Mode switching is supplied by the caller as a function returning a guard;
//! the guard is dropped before the probe returns, on every path. Reads block
//! until the reply terminator arrives. There is no timeout, so a terminal that
//! never answers blocks the calling thread.

use crate::ansi::{CURSOR_FAR_CORNER, DEVICE_STATUS_REPORT, cursor_position};
use crate::error::{Error, Result};
use crate::terminal::dsr::{DsrParser, DsrStatus};
use crate::text::CursorPoint;
use std::io::{self, Read, Write};

/// Probe lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProbeState {
    #[default]
    Idle,
    ModeSwitched,
    Requested,
    Parsing,
    Restored,
}

/// Cursor position probe over a terminal's input and output streams.
#[derive(Debug)]
pub struct CursorProbe<R, W> {
    reader: R,
    writer: W,
    state: ProbeState,
}

impl<R: Read, W: Write> CursorProbe<R, W> {
    /// Create a probe that writes requests to `writer` and reads replies from
    /// `reader`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            state: ProbeState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ProbeState {
        self.state
    }

    /// Consume the probe and return its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn transition(&mut self, next: ProbeState) {
        tracing::trace!(from = ?self.state, to = ?next, "cursor probe");
        self.state = next;
    }

    /// Ask the terminal where the cursor is.
    ///
    /// Fails only if the mode switch or the request write fails. A reply
    /// that cannot be read or parsed is logged and reported as the origin.
    pub fn query_cursor<G>(
        &mut self,
        enter_mode: impl FnOnce() -> io::Result<G>,
    ) -> Result<CursorPoint> {
        self.with_mode(enter_mode, |probe| {
            probe.request()?;
            match probe.read_report() {
                Ok(point) => Ok(point),
                Err(err) => {
                    tracing::warn!(error = %err, "unreadable cursor report, assuming origin");
                    Ok(CursorPoint::ORIGIN)
                }
            }
        })
    }

    /// Ask the terminal for its size as `(columns, rows)`.
    ///
    /// The cursor is sent to the far corner, where the terminal clamps it to
    /// the last cell, and is then moved back to where it was.
    pub fn query_dimensions<G>(
        &mut self,
        enter_mode: impl FnOnce() -> io::Result<G>,
    ) -> Result<(u16, u16)> {
        self.with_mode(enter_mode, |probe| {
            probe.request()?;
            let origin = probe.read_report()?;
            probe.writer.write_all(CURSOR_FAR_CORNER.as_bytes())?;
            probe.request()?;
            let corner = probe.read_report();
            let back = cursor_position(saturate(origin.row), saturate(origin.column));
            probe.writer.write_all(back.as_bytes())?;
            probe.writer.flush()?;
            let corner = corner?;
            Ok((
                saturate(corner.column).saturating_add(1),
                saturate(corner.row).saturating_add(1),
            ))
        })
    }

    fn with_mode<G, T>(
        &mut self,
        enter_mode: impl FnOnce() -> io::Result<G>,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.state = ProbeState::Idle;
        let guard = enter_mode()?;
        self.transition(ProbeState::ModeSwitched);
        let result = body(self);
        drop(guard);
        self.transition(ProbeState::Restored);
        result
    }

    fn request(&mut self) -> Result<()> {
        self.writer.write_all(DEVICE_STATUS_REPORT.as_bytes())?;
        self.writer.flush()?;
        self.transition(ProbeState::Requested);
        Ok(())
    }

    fn read_report(&mut self) -> Result<CursorPoint> {
        self.transition(ProbeState::Parsing);
        let mut parser = DsrParser::new();
        let mut byte = [0u8; 1];
        loop {
            self.reader.read_exact(&mut byte)?;
            match parser.feed(byte[0]) {
                DsrStatus::Pending => {}
                DsrStatus::Complete(point) => return Ok(point),
                DsrStatus::Malformed => {
                    return Err(Error::ProbeFailed("malformed cursor report".to_string()));
                }
            }
        }
    }
}

fn saturate(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
