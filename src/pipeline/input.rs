//! Input resolution: turn a caller-supplied PDF into a path `pdftotext` can open.
//!
//! `pdftotext` only reads from the file system, so open handles and in-memory
//! bytes are spooled into a [`NamedTempFile`]. The temp file lives inside
//! [`ResolvedInput`] and is removed when it is dropped, after the child
//! process has exited.

use crate::error::Pdf2TxtError;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// A PDF supplied by the caller.
#[derive(Debug)]
pub enum PdfInput {
    /// A path on the local file system.
    Path(PathBuf),
    /// An already-open, readable file handle. Read from the start.
    File(File),
    /// PDF bytes held in memory.
    Bytes(Vec<u8>),
}

impl From<&str> for PdfInput {
    fn from(p: &str) -> Self {
        PdfInput::Path(PathBuf::from(p))
    }
}

impl From<String> for PdfInput {
    fn from(p: String) -> Self {
        PdfInput::Path(PathBuf::from(p))
    }
}

impl From<&Path> for PdfInput {
    fn from(p: &Path) -> Self {
        PdfInput::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for PdfInput {
    fn from(p: PathBuf) -> Self {
        PdfInput::Path(p)
    }
}

impl From<&PathBuf> for PdfInput {
    fn from(p: &PathBuf) -> Self {
        PdfInput::Path(p.clone())
    }
}

impl From<File> for PdfInput {
    fn from(f: File) -> Self {
        PdfInput::File(f)
    }
}

impl From<Vec<u8>> for PdfInput {
    fn from(bytes: Vec<u8>) -> Self {
        PdfInput::Bytes(bytes)
    }
}

/// The resolved input: either the caller's path or a spooled temp file.
#[derive(Debug)]
pub enum ResolvedInput {
    /// Input was already a readable local file.
    Local(PathBuf),
    /// Input was a handle or bytes; the copy lives until this value is dropped.
    Spooled(NamedTempFile),
}

impl ResolvedInput {
    /// Path to hand to `pdftotext`.
    pub fn path(&self) -> &Path {
        match self {
            ResolvedInput::Local(p) => p,
            ResolvedInput::Spooled(tmp) => tmp.path(),
        }
    }
}

/// Resolve the input off the async executor.
pub async fn resolve_input(input: PdfInput) -> Result<ResolvedInput, Pdf2TxtError> {
    tokio::task::spawn_blocking(move || resolve_blocking(input))
        .await
        .map_err(|e| Pdf2TxtError::Internal(format!("Input task panicked: {e}")))?
}

/// Blocking implementation of [`resolve_input`].
pub fn resolve_blocking(input: PdfInput) -> Result<ResolvedInput, Pdf2TxtError> {
    match input {
        PdfInput::Path(path) => resolve_local(path),
        PdfInput::File(mut file) => {
            file.rewind()
                .map_err(|e| Pdf2TxtError::Internal(format!("Failed to rewind input handle: {e}")))?;
            let mut tmp = new_spool()?;
            std::io::copy(&mut file, tmp.as_file_mut())
                .map_err(|e| Pdf2TxtError::Internal(format!("Failed to spool input handle: {e}")))?;
            debug!("Spooled input handle to {}", tmp.path().display());
            Ok(ResolvedInput::Spooled(tmp))
        }
        PdfInput::Bytes(bytes) => {
            let mut tmp = new_spool()?;
            tmp.write_all(&bytes)
                .map_err(|e| Pdf2TxtError::Internal(format!("tempfile write: {e}")))?;
            debug!("Spooled {} bytes to {}", bytes.len(), tmp.path().display());
            Ok(ResolvedInput::Spooled(tmp))
        }
    }
}

/// A local path must exist and be openable for reading.
fn resolve_local(path: PathBuf) -> Result<ResolvedInput, Pdf2TxtError> {
    if !path.exists() {
        return Err(Pdf2TxtError::InputNotFound { path });
    }

    if File::open(&path).is_err() {
        return Err(Pdf2TxtError::InputNotFound { path });
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(ResolvedInput::Local(path))
}

fn new_spool() -> Result<NamedTempFile, Pdf2TxtError> {
    tempfile::Builder::new()
        .prefix("pdf2txt-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| Pdf2TxtError::Internal(format!("tempfile: {e}")))
}
