//! Child-process execution with a wall-clock bound.
//!
//! The child is spawned with `kill_on_drop(true)`. When the timeout elapses
//! the wait future is dropped, which drops the child and kills it; tokio
//! reaps it in the background. Nothing is retried.

use super::command::CommandLine;
use crate::error::{FailureCause, Pdf2TxtError};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, warn};

/// Raw result of a successful run.
#[derive(Debug)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub duration: Duration,
}

/// Run `cmd`, waiting at most `timeout` (unbounded when `None`).
///
/// # Errors
/// [`Pdf2TxtError::ExtractionFailed`] on spawn failure, non-zero exit, or
/// timeout.
pub async fn run(cmd: &CommandLine, timeout: Option<Duration>) -> Result<ProcessOutput, Pdf2TxtError> {
    let start = Instant::now();
    debug!("Running: {}", cmd);

    let child = Command::new(cmd.program())
        .args(cmd.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Pdf2TxtError::ExtractionFailed {
            command: cmd.to_string(),
            cause: FailureCause::Spawn {
                reason: e.to_string(),
            },
            stderr: String::new(),
        })?;

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(result) => result,
            Err(_) => {
                warn!("pdftotext exceeded {:?}; killed: {}", limit, cmd);
                return Err(Pdf2TxtError::ExtractionFailed {
                    command: cmd.to_string(),
                    cause: FailureCause::TimedOut { after: limit },
                    stderr: String::new(),
                });
            }
        },
        None => child.wait_with_output().await,
    }
    .map_err(|e| Pdf2TxtError::ExtractionFailed {
        command: cmd.to_string(),
        cause: FailureCause::Spawn {
            reason: format!("failed waiting for process: {e}"),
        },
        stderr: String::new(),
    })?;

    let duration = start.elapsed();

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(
            "pdftotext failed after {:?} with {}: {}",
            duration,
            output.status,
            stderr.trim()
        );
        return Err(Pdf2TxtError::ExtractionFailed {
            command: cmd.to_string(),
            cause: FailureCause::Exited {
                code: output.status.code(),
            },
            stderr,
        });
    }

    debug!("pdftotext wrote {} bytes in {:?}", output.stdout.len(), duration);

    Ok(ProcessOutput {
        stdout: output.stdout,
        duration,
    })
}
