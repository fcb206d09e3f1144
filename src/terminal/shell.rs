//! Device status round trip through a shell subprocess.
//!
//! Some terminals (MinTTY under MSYS, for instance) give the process no
//! console handle to query. A POSIX shell attached to the same terminal can
//! still run the round trip on `/dev/tty` and print the reply on stdout.

use crate::ansi::{CURSOR_FAR_CORNER, CURSOR_RESTORE, CURSOR_SAVE, DEVICE_STATUS_REPORT};
use crate::error::{Error, Result};
use crate::terminal::dsr::parse_cursor_report;
use crate::text::CursorPoint;
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Writes `$1`, reads the reply up to `R`, writes `$2`, then prints the reply.
const ROUND_TRIP_SCRIPT: &str = r#"saved=$(stty -g </dev/tty) || exit 1
stty -icanon -echo min 1 time 0 </dev/tty || exit 1
printf '%s' "$1" >/dev/tty
IFS= read -r -d R reply </dev/tty
status=$?
printf '%s' "$2" >/dev/tty
stty "$saved" </dev/tty
[ "$status" -eq 0 ] || exit 1
printf '%sR' "$reply""#;

/// Shell-based cursor probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellProbe {
    shell: OsString,
}

impl ShellProbe {
    /// Probe through the given shell, which must understand `read -d`.
    #[must_use]
    pub fn new(shell: impl Into<OsString>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Ask the terminal where the cursor is.
    pub fn query_cursor(&self) -> Result<CursorPoint> {
        self.round_trip(DEVICE_STATUS_REPORT, "")
    }

    /// Ask the terminal for its size as `(columns, rows)`.
    pub fn query_dimensions(&self) -> Result<(u16, u16)> {
        let request = format!("{CURSOR_SAVE}{CURSOR_FAR_CORNER}{DEVICE_STATUS_REPORT}");
        let corner = self.round_trip(&request, CURSOR_RESTORE)?;
        let columns = u16::try_from(corner.column + 1).unwrap_or(u16::MAX);
        let rows = u16::try_from(corner.row + 1).unwrap_or(u16::MAX);
        Ok((columns, rows))
    }

    fn round_trip(&self, before: &str, after: &str) -> Result<CursorPoint> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(ROUND_TRIP_SCRIPT)
            .arg("termlayout-probe")
            .arg(before)
            .arg(after)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        interpret(output.status.success(), output.status.code(), &output.stdout)
    }
}

impl Default for ShellProbe {
    fn default() -> Self {
        Self::new("bash")
    }
}

fn interpret(success: bool, code: Option<i32>, stdout: &[u8]) -> Result<CursorPoint> {
    if !success {
        let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
        return Err(Error::ProbeFailed(format!("shell probe exited with {code}")));
    }
    parse_cursor_report(stdout).ok_or_else(|| {
        Error::ProbeFailed(format!(
            "unparsable shell probe output: {:?}",
            String::from_utf8_lossy(stdout)
        ))
    })
}
