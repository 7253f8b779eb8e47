//! Error types for the edgequake-pdf2txt library.
//!
//! Every failure is returned as a [`Pdf2TxtError`]; nothing is retried or
//! swallowed internally. The variants map onto four caller-facing kinds:
//!
//! * **Input not found**: the PDF path does not exist or cannot be read.
//!   No process is spawned.
//! * **Invalid configuration**: rejected before any process is spawned
//!   (negative timeout, malformed builder values).
//! * **Extraction failed**: `pdftotext` could not be spawned, exited with a
//!   non-zero status, or was killed after the timeout. Carries the command
//!   line and captured stderr for debugging.
//! * **Output not saved**: extraction succeeded but nothing was persisted.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// All errors returned by the edgequake-pdf2txt library.
#[derive(Debug, Error)]
pub enum Pdf2TxtError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path, or is not readable.
    #[error("could not find or read pdf '{path}'\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    /// The `pdftotext` executable could not be located on the host.
    #[error("pdftotext executable not found: {0}")]
    BinaryNotFound(String),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Configuration was rejected before anything ran.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Process errors ────────────────────────────────────────────────────
    /// The external tool did not produce a successful result.
    #[error("Text extraction failed: {cause}\nCommand: {command}{}", format_stderr(.stderr))]
    ExtractionFailed {
        /// The attempted command line, for diagnostics.
        command: String,
        cause: FailureCause,
        /// Captured standard error (may be empty).
        stderr: String,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// The write phase produced zero bytes or failed outright.
    #[error("The converted PDF could not be saved to {}: {reason}", display_sink(.path))]
    OutputNotSaved {
        /// Destination path, when the sink was given as a path.
        path: Option<PathBuf>,
        reason: String,
    },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error (task join failure, runtime creation, …).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why an [`Pdf2TxtError::ExtractionFailed`] happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// The process ran and exited unsuccessfully.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("{}", describe_exit(.code))]
    Exited { code: Option<i32> },

    /// The process could not be started (missing binary, permissions, …).
    #[error("could not start process: {reason}")]
    Spawn { reason: String },

    /// The process exceeded the configured timeout and was killed.
    #[error("process exceeded the timeout of {}s and was killed", .after.as_secs_f64())]
    TimedOut { after: Duration },
}

impl Pdf2TxtError {
    /// `true` when the extraction was killed by the timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Pdf2TxtError::ExtractionFailed {
                cause: FailureCause::TimedOut { .. },
                ..
            }
        )
    }

    /// Exit code of the external process, when it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Pdf2TxtError::ExtractionFailed {
                cause: FailureCause::Exited { code },
                ..
            } => *code,
            _ => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("process exited with status {c}"),
        None => "process was terminated by a signal".to_string(),
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\nError output:\n{trimmed}")
    }
}

fn display_sink(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("'{}'", p.display()),
        None => "the output handle".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_display() {
        let e = Pdf2TxtError::InputNotFound {
            path: PathBuf::from("/no/pdf/here/dummy.pdf"),
        };
        assert!(e.to_string().contains("/no/pdf/here/dummy.pdf"));
    }

    #[test]
    fn extraction_failed_display_with_stderr() {
        let e = Pdf2TxtError::ExtractionFailed {
            command: "pdftotext -foo dummy.pdf -".into(),
            cause: FailureCause::Exited { code: Some(99) },
            stderr: "Syntax Warning: bad option\n".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("status 99"), "got: {msg}");
        assert!(msg.contains("pdftotext -foo dummy.pdf -"), "got: {msg}");
        assert!(msg.contains("bad option"), "got: {msg}");
        assert_eq!(e.exit_code(), Some(99));
        assert!(!e.is_timeout());
    }

    #[test]
    fn extraction_failed_display_without_stderr() {
        let e = Pdf2TxtError::ExtractionFailed {
            command: "pdftotext a.pdf -".into(),
            cause: FailureCause::Exited { code: None },
            stderr: "  \n".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("signal"), "got: {msg}");
        assert!(!msg.contains("Error output"), "got: {msg}");
        assert_eq!(e.exit_code(), None);
    }

    #[test]
    fn timeout_is_an_extraction_failure() {
        let e = Pdf2TxtError::ExtractionFailed {
            command: "pdftotext big.pdf -".into(),
            cause: FailureCause::TimedOut {
                after: Duration::from_millis(1500),
            },
            stderr: String::new(),
        };
        assert!(e.is_timeout());
        assert!(e.to_string().contains("1.5s"), "got: {e}");
    }

    #[test]
    fn output_not_saved_display() {
        let to_path = Pdf2TxtError::OutputNotSaved {
            path: Some(PathBuf::from("/tmp/out.txt")),
            reason: "zero bytes written".into(),
        };
        assert!(to_path.to_string().contains("/tmp/out.txt"));

        let to_handle = Pdf2TxtError::OutputNotSaved {
            path: None,
            reason: "Bad file descriptor".into(),
        };
        assert!(to_handle.to_string().contains("output handle"));
    }
}
