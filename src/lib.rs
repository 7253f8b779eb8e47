//! # edgequake-pdf2txt
//!
//! Extract plain text from PDF documents by running the `pdftotext` command
//! line tool (poppler or xpdf) and capturing its standard output.
//!
//! The crate does not parse PDFs itself. It owns the parts around the tool:
//! how per-call options combine with configured defaults, how the command is
//! built and bounded by a timeout, and how failures map onto
//! [`Pdf2TxtError`].
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF (path / handle / bytes)
//!  │
//!  ├─ 1. Input        check the path, or spool to a temp file
//!  ├─ 2. Command      merge options, build `<bin> <opts…> <input> -`
//!  ├─ 3. Process      spawn, wait under the timeout, kill on expiry
//!  ├─ 4. Postprocess  decode stdout, trim the edges
//!  └─ 5. Sink         write to a path or handle (save only)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_pdf2txt::PdfToText;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // PDFTOTEXT_PATH, then PATH, then the usual install directories
//!     let mut extractor = PdfToText::discover()?;
//!     extractor.set_default_options(["layout"]);
//!     extractor.set_timeout(Some(30.0))?;
//!
//!     let text = extractor.extract("scoreboard.pdf").await?;
//!     println!("{text}");
//!
//!     // Call options override defaults with the same name.
//!     let bytes = extractor
//!         .save_with_options("scoreboard.pdf", "page1.txt", ["f 1", "l 1"])
//!         .await?;
//!     eprintln!("wrote {bytes} bytes");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2txt` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! edgequake-pdf2txt = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extractor;
pub mod options;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractorConfig, ExtractorConfigBuilder, DEFAULT_TIMEOUT_SECS};
pub use error::{FailureCause, Pdf2TxtError};
pub use extractor::PdfToText;
pub use options::{CliOption, OptionSet};
pub use output::ExtractionOutput;
pub use pipeline::input::PdfInput;
pub use pipeline::sink::OutputSink;
