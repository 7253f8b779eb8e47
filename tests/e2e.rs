//! End-to-end integration tests for edgequake-pdf2txt.
//!
//! These tests run the real `pdftotext` against PDF files in `./test_cases/`
//! (`dummy.pdf`, `dummy with spaces in its name.pdf`, `dummy's_file.pdf`,
//! `scoreboard.pdf`). They are gated behind the `E2E_ENABLED` environment
//! variable so they do not run in CI unless explicitly requested, and skip
//! when the fixture or the binary is missing.
//!
//! Run with:
//!   E2E_ENABLED=1 cargo test --test e2e -- --nocapture
//!
//! To use a specific pdftotext:
//!   PDFTOTEXT_PATH=/usr/local/bin/pdftotext E2E_ENABLED=1 cargo test --test e2e

use edgequake_pdf2txt::{Pdf2TxtError, PdfToText};
use std::path::PathBuf;

// ── Test helpers ─────────────────────────────────────────────────────────────

const DUMMY_TEXT: &str = "This is a dummy PDF";
const SCOREBOARD_ROW: &str = "Charleroi 50      28     13 11 4";

fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases")
}

fn output_dir() -> PathBuf {
    let d = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases/output");
    std::fs::create_dir_all(&d).ok();
    d
}

/// Skip this test unless E2E_ENABLED is set, the PDF at `path` exists and
/// pdftotext can be found. Evaluates to `(path, extractor)`.
macro_rules! e2e_skip_unless_ready {
    ($path:expr) => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP: set E2E_ENABLED=1 to run e2e tests");
            return;
        }
        let p: PathBuf = $path;
        if !p.exists() {
            println!("SKIP: test file not found: {}", p.display());
            return;
        }
        match PdfToText::discover() {
            Ok(x) => (p, x),
            Err(e) => {
                println!("SKIP: {e}");
                return;
            }
        }
    }};
}

// ── Plain extraction ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_extract_dummy() {
    let (path, x) = e2e_skip_unless_ready!(test_cases_dir().join("dummy.pdf"));
    let text = x.extract(&path).await.expect("extract() should succeed");
    assert_eq!(text, DUMMY_TEXT);
}

#[tokio::test]
async fn test_extract_filename_with_spaces() {
    let (path, x) =
        e2e_skip_unless_ready!(test_cases_dir().join("dummy with spaces in its name.pdf"));
    assert_eq!(x.extract(&path).await.unwrap(), DUMMY_TEXT);
}

#[tokio::test]
async fn test_extract_filename_with_single_quote() {
    let (path, x) = e2e_skip_unless_ready!(test_cases_dir().join("dummy's_file.pdf"));
    assert_eq!(x.extract(&path).await.unwrap(), DUMMY_TEXT);
}

#[tokio::test]
async fn test_extract_bytes_input() {
    let (path, x) = e2e_skip_unless_ready!(test_cases_dir().join("dummy.pdf"));
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(x.extract(bytes).await.unwrap(), DUMMY_TEXT);
}

// ── Layout option ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_scoreboard_default_option_without_hyphen() {
    let (path, mut x) = e2e_skip_unless_ready!(test_cases_dir().join("scoreboard.pdf"));
    x.set_default_options(["layout"]);
    let text = x.extract(&path).await.unwrap();
    assert!(text.contains(SCOREBOARD_ROW), "got:\n{text}");
}

#[tokio::test]
async fn test_scoreboard_call_option_from_file_handle() {
    let (path, x) = e2e_skip_unless_ready!(test_cases_dir().join("scoreboard.pdf"));
    let handle = std::fs::File::open(&path).unwrap();
    let text = x
        .extract_with_options(handle, ["-layout"])
        .await
        .unwrap();
    assert!(text.contains(SCOREBOARD_ROW), "got:\n{text}");
}

#[tokio::test]
async fn test_scoreboard_without_timeout() {
    let (path, mut x) = e2e_skip_unless_ready!(test_cases_dir().join("scoreboard.pdf"));
    x.set_default_options(["-layout"]);
    x.set_timeout(None).unwrap();
    let text = x.extract(std::fs::File::open(&path).unwrap()).await.unwrap();
    assert!(text.contains(SCOREBOARD_ROW));
}

#[tokio::test]
async fn test_scoreboard_saved_to_file() {
    let (path, mut x) = e2e_skip_unless_ready!(test_cases_dir().join("scoreboard.pdf"));
    x.set_default_options(["-layout"]);
    let out = output_dir().join("scoreboard.txt");

    let bytes = x
        .save_with_options(&path, &out, ["-layout"])
        .await
        .unwrap();
    let saved = std::fs::read_to_string(&out).unwrap();
    assert_eq!(bytes, saved.len());
    assert!(saved.contains(SCOREBOARD_ROW));

    std::fs::remove_file(&out).ok();
}

#[tokio::test]
async fn test_detailed_output_is_json_serialisable() {
    let (path, x) = e2e_skip_unless_ready!(test_cases_dir().join("dummy.pdf"));
    let out = x.extract_detailed(&path, ["enc UTF-8"]).await.unwrap();
    let json = serde_json::to_string(&out).unwrap();
    assert!(json.contains(DUMMY_TEXT));
    assert!(out.command.contains(&"-enc".to_string()));
}

// ── Failures ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_option_is_extraction_failure() {
    let (path, mut x) = e2e_skip_unless_ready!(test_cases_dir().join("dummy.pdf"));
    x.set_default_options(["-foo"]);
    let err = x.extract(&path).await.unwrap_err();
    assert!(
        matches!(err, Pdf2TxtError::ExtractionFailed { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_read_only_destination_is_not_saved() {
    let (path, mut x) = e2e_skip_unless_ready!(test_cases_dir().join("dummy.pdf"));
    x.set_default_options(["-layout"]);
    let read_only = std::fs::File::open(&path).unwrap();
    let err = x.save(&path, read_only).await.unwrap_err();
    assert!(
        matches!(err, Pdf2TxtError::OutputNotSaved { .. }),
        "got: {err:?}"
    );
}
