//! # pdftotext-auto
//!
//! Locate the `pdftotext` executable (poppler-utils / xpdf) on the host so
//! that callers of `edgequake-pdf2txt` do not have to hard-code its path.
//!
//! ## How it works
//!
//! On the first call to [`locate_pdftotext`]:
//!
//! 1. Checks `PDFTOTEXT_PATH`; if it names an existing file, that file wins.
//! 2. Walks every directory of `PATH` looking for the platform executable
//!    (`pdftotext` or `pdftotext.exe`).
//! 3. Falls back to well-known install prefixes (`/usr/local/bin`,
//!    `/usr/bin`, `/opt/homebrew/bin`, `/opt/local/bin`) and the user's
//!    executable directory (`~/.local/bin` on Linux).
//!
//! The result is cached for the lifetime of the process.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pdftotext_auto::locate_pdftotext;
//!
//! let bin = locate_pdftotext().expect("pdftotext is not installed");
//! println!("using {}", bin.display());
//! ```
//!
//! ## Environment variable overrides
//!
//! - `PDFTOTEXT_PATH`: path to a specific `pdftotext` executable.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;

// ── Public constants ─────────────────────────────────────────────────────────

/// Environment variable that pins the executable location.
pub const PDFTOTEXT_PATH_ENV: &str = "PDFTOTEXT_PATH";

/// Executable file name on the current platform.
#[cfg(windows)]
pub const PDFTOTEXT_EXE: &str = "pdftotext.exe";
/// Executable file name on the current platform.
#[cfg(not(windows))]
pub const PDFTOTEXT_EXE: &str = "pdftotext";

/// Install prefixes probed after `PATH`.
const WELL_KNOWN_DIRS: &[&str] = &[
    "/usr/local/bin",
    "/usr/bin",
    "/opt/homebrew/bin",
    "/opt/local/bin",
];

// ── Error type ───────────────────────────────────────────────────────────────

/// Errors returned by pdftotext-auto.
#[derive(Error, Debug)]
pub enum LocateError {
    /// No candidate location held a usable executable.
    #[error(
        "The pdftotext executable could not be auto-detected (searched {} locations).\n\
Install poppler-utils (apt install poppler-utils / brew install poppler) \
or set PDFTOTEXT_PATH=/path/to/pdftotext.",
        .searched.len()
    )]
    NotFound { searched: Vec<PathBuf> },
}

// ── Search inputs ────────────────────────────────────────────────────────────

/// Everything the search looks at, captured up front so the search itself
/// is a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    /// Value of `PDFTOTEXT_PATH`, if set.
    pub override_path: Option<PathBuf>,
    /// Raw value of `PATH`, if set.
    pub path_var: Option<OsString>,
    /// Extra directories probed last, in order.
    pub fallback_dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// Capture the search inputs from the process environment.
    pub fn from_env() -> Self {
        let mut fallback_dirs: Vec<PathBuf> = WELL_KNOWN_DIRS.iter().map(PathBuf::from).collect();
        if let Some(dir) = dirs::executable_dir() {
            fallback_dirs.push(dir);
        }

        Self {
            override_path: std::env::var_os(PDFTOTEXT_PATH_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            path_var: std::env::var_os("PATH"),
            fallback_dirs,
        }
    }

    /// Candidate executable paths in the order they are probed.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        if let Some(ref p) = self.override_path {
            out.push(p.clone());
        }
        if let Some(ref path_var) = self.path_var {
            out.extend(std::env::split_paths(path_var).map(|dir| dir.join(PDFTOTEXT_EXE)));
        }
        out.extend(self.fallback_dirs.iter().map(|dir| dir.join(PDFTOTEXT_EXE)));
        out
    }
}

// ── Thread-safe singleton path cache ─────────────────────────────────────────

static RESOLVED_PATH: OnceLock<PathBuf> = OnceLock::new();

// ── Public API ───────────────────────────────────────────────────────────────

/// Returns the path of the `pdftotext` executable.
///
/// The first successful lookup is cached; later calls skip the filesystem.
///
/// # Thread safety
///
/// Safe to call from multiple threads; concurrent first calls may both
/// search, and either result is kept.
pub fn locate_pdftotext() -> Result<PathBuf, LocateError> {
    if let Some(path) = RESOLVED_PATH.get() {
        return Ok(path.clone());
    }

    let path = locate_in(&SearchPaths::from_env())?;
    let _ = RESOLVED_PATH.set(path.clone());

    Ok(path)
}

/// Returns `true` when [`locate_pdftotext`] would succeed.
pub fn is_pdftotext_available() -> bool {
    locate_pdftotext().is_ok()
}

/// Searches the given locations without touching the process-wide cache.
pub fn locate_in(search: &SearchPaths) -> Result<PathBuf, LocateError> {
    // An override that points nowhere is reported but does not stop the search.
    if let Some(ref p) = search.override_path {
        if !p.is_file() {
            eprintln!(
                "pdftotext-auto: {PDFTOTEXT_PATH_ENV} '{}' not found; searching PATH …",
                p.display()
            );
        }
    }

    let candidates = search.candidates();
    if let Some(found) = candidates.iter().find(|c| is_executable(c)) {
        return Ok(found.clone());
    }

    Err(LocateError::NotFound {
        searched: candidates,
    })
}

// ── Internal helpers ─────────────────────────────────────────────────────────

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
