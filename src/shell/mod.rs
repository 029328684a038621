//! Runs external programs and reports the result as an [`Outcome`].
//!
//! Requires the `std` feature (enabled by default).
//!
//! # Examples
//!
//! ```no_run
//! use rop::shell::shell;
//!
//! let listing = shell("/bin/ls", &["-1", "/tmp"])
//!     .map(|out| out.lines().count())
//!     .inspect(|n| println!("{n} entries"));
//!
//! if let Some(message) = listing.error_message() {
//!     eprintln!("ls failed: {message}");
//! }
//! ```
use std::ffi::OsStr;
use std::process::{Command, ExitStatus, Output};

use crate::types::Outcome;
use crate::{failure, failure_from, success};

mod process_error;

pub use process_error::ProcessError;

/// Launches `launch_path` with `arguments` and waits for it to finish.
///
/// The program is executed directly, without a shell in between. Both output
/// streams are captured in full.
///
/// - Exit code 0 gives `Success` with standard output.
/// - Any other termination gives `Failure` with a [`ProcessError`] holding the
///   code and standard error.
/// - If the program cannot be launched at all, the failure is a
///   [`PlainError`](crate::types::PlainError) describing the launch error.
///
/// Output that is not valid UTF-8 is reported as an empty string.
pub fn shell<P, S>(launch_path: P, arguments: &[S]) -> Outcome<String>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    let launch_path = launch_path.as_ref();
    tracing::debug!(
        target: "rop::shell",
        path = ?launch_path,
        args = arguments.len(),
        "launching process"
    );

    let output = match Command::new(launch_path).args(arguments).output() {
        Ok(output) => output,
        Err(error) => {
            tracing::debug!(target: "rop::shell", path = ?launch_path, %error, "launch failed");
            return failure(format!("ERROR: {error}."));
        }
    };

    let code = exit_code(output.status);
    tracing::debug!(target: "rop::shell", path = ?launch_path, code, "process exited");

    outcome_from_output(code, output)
}

/// Same as [`shell`] with no arguments.
#[inline]
pub fn shell_no_args<P>(launch_path: P) -> Outcome<String>
where
    P: AsRef<OsStr>,
{
    shell::<P, &str>(launch_path, &[])
}

fn outcome_from_output(code: i32, output: Output) -> Outcome<String> {
    if code == 0 {
        success(decode_utf8_or_empty(output.stdout))
    } else {
        failure_from(ProcessError::new(code, decode_utf8_or_empty(output.stderr)))
    }
}

fn decode_utf8_or_empty(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_default()
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status.code().or_else(|| status.signal()).unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
