//! Output sinks for [`crate::PdfToText::save`].
//!
//! A sink is either a path (created or truncated) or an already-open file
//! handle. The handle is written at its current position and closed when the
//! write finishes or fails.

use crate::error::Pdf2TxtError;
use std::fs::File;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Where extracted text is written.
#[derive(Debug)]
pub enum OutputSink {
    /// Created if missing, truncated otherwise.
    Path(PathBuf),
    /// An already-open handle; must be writable.
    File(File),
}

impl From<&str> for OutputSink {
    fn from(p: &str) -> Self {
        OutputSink::Path(PathBuf::from(p))
    }
}

impl From<String> for OutputSink {
    fn from(p: String) -> Self {
        OutputSink::Path(PathBuf::from(p))
    }
}

impl From<&Path> for OutputSink {
    fn from(p: &Path) -> Self {
        OutputSink::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for OutputSink {
    fn from(p: PathBuf) -> Self {
        OutputSink::Path(p)
    }
}

impl From<&PathBuf> for OutputSink {
    fn from(p: &PathBuf) -> Self {
        OutputSink::Path(p.clone())
    }
}

impl From<File> for OutputSink {
    fn from(f: File) -> Self {
        OutputSink::File(f)
    }
}

impl OutputSink {
    fn path(&self) -> Option<PathBuf> {
        match self {
            OutputSink::Path(p) => Some(p.clone()),
            OutputSink::File(_) => None,
        }
    }
}

/// Write `text` to `sink` and return the number of bytes written.
///
/// # Errors
/// [`Pdf2TxtError::OutputNotSaved`] when the sink cannot be opened, the write
/// fails, or zero bytes were written. Empty text is therefore always an
/// error: an empty write cannot be told apart from a failed one.
pub async fn write_text(sink: OutputSink, text: &str) -> Result<usize, Pdf2TxtError> {
    let path = sink.path();
    let not_saved = |reason: String| Pdf2TxtError::OutputNotSaved {
        path: path.clone(),
        reason,
    };

    let mut file = match sink {
        OutputSink::Path(p) => tokio::fs::File::create(&p)
            .await
            .map_err(|e| not_saved(e.to_string()))?,
        OutputSink::File(f) => tokio::fs::File::from_std(f),
    };

    if text.is_empty() {
        return Err(not_saved("extracted text is empty, zero bytes written".into()));
    }

    file.write_all(text.as_bytes())
        .await
        .map_err(|e| not_saved(e.to_string()))?;
    file.flush().await.map_err(|e| not_saved(e.to_string()))?;

    let bytes = text.len();
    match &path {
        Some(p) => debug!("Wrote {} bytes to {}", bytes, p.display()),
        None => debug!("Wrote {} bytes to caller handle", bytes),
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_to_new_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("scoreboard.txt");
        let n = write_text(OutputSink::from(&out), "Charleroi 50").await.unwrap();
        assert_eq!(n, 12);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "Charleroi 50");
    }

    #[tokio::test]
    async fn truncates_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        std::fs::write(&out, "a much longer previous content").unwrap();
        write_text(OutputSink::from(&out), "short").await.unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "short");
    }

    #[tokio::test]
    async fn writes_to_open_handle() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("handle.txt");
        let handle = File::create(&out).unwrap();
        let n = write_text(OutputSink::from(handle), "héllo").await.unwrap();
        assert_eq!(n, "héllo".len());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "héllo");
    }

    #[tokio::test]
    async fn read_only_handle_is_not_saved() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let read_only = File::open(tmp.path()).unwrap();
        let err = write_text(OutputSink::from(read_only), "text").await.unwrap_err();
        assert!(matches!(err, Pdf2TxtError::OutputNotSaved { path: None, .. }));
    }

    #[tokio::test]
    async fn empty_text_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.txt");
        let err = write_text(OutputSink::from(&out), "").await.unwrap_err();
        assert!(matches!(err, Pdf2TxtError::OutputNotSaved { path: Some(_), .. }));
    }

    #[tokio::test]
    async fn unwritable_directory_is_not_saved() {
        let err = write_text(OutputSink::from("/no/such/dir/out.txt"), "text")
            .await
            .unwrap_err();
        assert!(matches!(err, Pdf2TxtError::OutputNotSaved { .. }));
    }
}
