//! Bounded-time execution of external probe helpers

use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::ProbeError;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run `program` in `dir` with all stdio discarded and wait at most `timeout`.
///
/// A child still running at the deadline is killed and reaped before
/// [`ProbeError::TimedOut`] is returned.
pub fn probe_command(
    program: &str,
    args: &[&str],
    dir: &Path,
    timeout: Duration,
) -> Result<ExitStatus, ProbeError> {
    let mut child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ProbeError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                tracing::debug!(
                    program,
                    ?status,
                    elapsed = ?started.elapsed(),
                    "Probe helper exited"
                );
                return Ok(status);
            }
            Ok(None) if started.elapsed() >= timeout => {
                stop(&mut child);
                return Err(ProbeError::TimedOut {
                    program: program.to_string(),
                    timeout,
                });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(source) => {
                stop(&mut child);
                return Err(ProbeError::Wait {
                    program: program.to_string(),
                    source,
                });
            }
        }
    }
}

/// Kill `child` and reap it so no zombie is left behind.
fn stop(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
