//! Timed execution of external commands with start/finish log lines.

use std::ffi::OsStr;
use std::io;
use std::process::Command;
use std::time::Instant;

use crate::level::Level;
use crate::logger::Logger;

/// Exit code reported when the program cannot be found.
const NOT_FOUND_CODE: i32 = 127;
/// Exit code reported when the program exists but cannot be launched.
const NOT_LAUNCHABLE_CODE: i32 = 126;

/// Run `program` with `args`, logging the start and outcome, and return the
/// child's exit code unchanged.
///
/// Emits `start: <description>` at `level` before launching, then either
/// `done in <N>s: <description>` at `level` on exit code zero or
/// `FAILED in <N>s (rc=<code>): <description>` at [`Level::Error`]
/// otherwise. Failures are always at least ERROR-visible, whatever `level`
/// the caller chose.
///
/// The child inherits this process's standard streams; only the wrapper's
/// own lines go to the logger's sink. A command that cannot be launched at
/// all is reported through the same FAILED path with the conventional shell
/// code: 127 when the program is not found, 126 otherwise. On Unix, a child
/// terminated by signal N reports 128 + N.
///
/// # Errors
///
/// Only sink write failures; a failing child is reported in the returned
/// exit code, never as an error of this function.
pub fn time_command<S: AsRef<OsStr>>(
    logger: &mut Logger,
    level: Level,
    label: &str,
    description: &str,
    program: impl AsRef<OsStr>,
    args: &[S],
) -> io::Result<i32> {
    let start = Instant::now();
    logger.log(level, label, &format!("start: {description}"))?;

    let status = Command::new(program).args(args).status();
    let elapsed = start.elapsed().as_secs();

    let code = match status {
        Ok(status) => exit_code(status),
        Err(error) if error.kind() == io::ErrorKind::NotFound => NOT_FOUND_CODE,
        Err(_) => NOT_LAUNCHABLE_CODE,
    };
    if code == 0 {
        logger.log(level, label, &format!("done in {elapsed}s: {description}"))?;
    } else {
        logger.log(
            Level::Error,
            label,
            &format!("FAILED in {elapsed}s (rc={code}): {description}"),
        )?;
    }
    Ok(code)
}

#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.code() {
        Some(code) => code,
        // No exit code means the child was terminated by a signal.
        None => 128 + status.signal().unwrap_or(0),
    }
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(NOT_LAUNCHABLE_CODE)
}
