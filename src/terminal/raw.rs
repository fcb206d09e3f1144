//! Terminal mode switching for probes.
//!
//! A cursor report can only be read byte by byte if the line discipline
//! neither buffers nor echoes it. [`RawModeGuard`] clears canonical mode and
//! echo on a terminal and restores the saved settings when dropped.
//!
//! # Safety
//! This module uses unsafe code for FFI calls to libc termios functions.
//! These are necessary for low-level terminal control and cannot be avoided.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Saved terminal state for restoration.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
}

impl RawModeGuard {
    /// Disable canonical mode and echo on the given file descriptor.
    ///
    /// Returns a guard that will restore the terminal state when dropped.
    pub fn new<F: AsRawFd>(fd: &F) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd)?;

        let mut probe = original;
        probe.c_lflag &= !(libc::ICANON | libc::ECHO);
        // Block until at least one byte is available
        probe.c_cc[libc::VMIN] = 1;
        probe.c_cc[libc::VTIME] = 0;

        set_termios(fd, &probe)?;
        tracing::trace!(fd, "terminal mode switched");

        Ok(Self { fd, original })
    }

    /// The guarded file descriptor.
    #[must_use]
    pub fn fd(&self) -> RawFd {
        self.fd
    }

    /// Restore the original terminal state.
    fn restore(&self) -> io::Result<()> {
        set_termios(self.fd, &self.original)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(fd = self.fd, error = %err, "failed to restore terminal mode");
        }
    }
}

/// Check if the given file descriptor is a TTY.
#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty is safe to call with any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Get the terminal size as `(columns, rows)`.
///
/// Returns an error if the size cannot be determined or either dimension is
/// zero.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

/// Get termios attributes.
fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(termios)
    }
}

/// Set termios attributes, effective immediately.
fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}
