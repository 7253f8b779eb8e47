//! The extraction entry points.
//!
//! [`PdfToText`] owns the configuration (binary, default options, timeout)
//! and drives the [`crate::pipeline`] stages for each call. Configuration is
//! read once at the start of a call; setters take `&mut self`, so a call in
//! flight always sees one consistent snapshot. To share a mutable extractor
//! between tasks, wrap it in a lock.

use crate::config::{normalize_timeout, timeout_from_secs, ExtractorConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::Pdf2TxtError;
use crate::options::OptionSet;
use crate::output::ExtractionOutput;
use crate::pipeline::command::CommandLine;
use crate::pipeline::input::{resolve_input, PdfInput};
use crate::pipeline::sink::{write_text, OutputSink};
use crate::pipeline::{postprocess, process};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Converts PDF documents to text with an external `pdftotext` binary.
///
/// # Example
/// ```rust,no_run
/// use edgequake_pdf2txt::PdfToText;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut extractor = PdfToText::new("/usr/bin/pdftotext");
///     extractor.set_default_options(["layout"]);
///     let text = extractor.extract_with_options("scoreboard.pdf", ["f 1", "l 1"]).await?;
///     println!("{text}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PdfToText {
    binary_path: PathBuf,
    default_options: OptionSet,
    timeout: Option<Duration>,
}

impl PdfToText {
    /// An extractor for `binary_path` with no default options and a
    /// [`DEFAULT_TIMEOUT_SECS`] timeout.
    pub fn new(binary_path: impl Into<PathBuf>) -> Self {
        Self {
            binary_path: binary_path.into(),
            default_options: OptionSet::new(),
            timeout: Some(Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn from_config(config: ExtractorConfig) -> Self {
        Self {
            binary_path: config.binary_path,
            default_options: config.default_options,
            timeout: normalize_timeout(config.timeout),
        }
    }

    /// Locate `pdftotext` on this host and build an extractor for it.
    ///
    /// # Errors
    /// [`Pdf2TxtError::BinaryNotFound`] when no executable could be found.
    pub fn discover() -> Result<Self, Pdf2TxtError> {
        let path = pdftotext_auto::locate_pdftotext()
            .map_err(|e| Pdf2TxtError::BinaryNotFound(e.to_string()))?;
        debug!("Discovered pdftotext at {}", path.display());
        Ok(Self::new(path))
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn default_options(&self) -> &OptionSet {
        &self.default_options
    }

    /// `None` means extractions run unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ExtractorConfig {
        ExtractorConfig {
            binary_path: self.binary_path.clone(),
            default_options: self.default_options.clone(),
            timeout: self.timeout,
        }
    }

    // ── Setters ──────────────────────────────────────────────────────────

    /// Replace the default options. Entries are normalised on the way in.
    pub fn set_default_options<I, S>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.default_options = OptionSet::parse(options);
        self
    }

    /// Set the timeout in seconds. `None`, `0` and sub-nanosecond values
    /// disable it.
    ///
    /// # Errors
    /// [`Pdf2TxtError::InvalidConfig`] for a negative, non-finite, or
    /// out-of-range value; the previous timeout is kept.
    pub fn set_timeout(&mut self, secs: Option<f64>) -> Result<&mut Self, Pdf2TxtError> {
        self.timeout = timeout_from_secs(secs)?;
        Ok(self)
    }

    /// Set the timeout as a [`Duration`]. A zero duration disables it.
    pub fn set_timeout_duration(&mut self, timeout: Option<Duration>) -> &mut Self {
        self.timeout = normalize_timeout(timeout);
        self
    }

    // ── Extraction ───────────────────────────────────────────────────────

    /// Extract the text of `input` using only the default options.
    pub async fn extract(&self, input: impl Into<PdfInput>) -> Result<String, Pdf2TxtError> {
        Ok(self.run(input.into(), OptionSet::new()).await?.text)
    }

    /// Extract the text of `input`; `options` override defaults by name.
    ///
    /// # Errors
    /// * [`Pdf2TxtError::InputNotFound`] if a path input is missing or
    ///   unreadable. Nothing is spawned in that case.
    /// * [`Pdf2TxtError::ExtractionFailed`] if `pdftotext` cannot start,
    ///   exits non-zero, or runs past the timeout.
    pub async fn extract_with_options<I, S>(
        &self,
        input: impl Into<PdfInput>,
        options: I,
    ) -> Result<String, Pdf2TxtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.run(input.into(), OptionSet::parse(options)).await?.text)
    }

    /// Like [`extract_with_options`](Self::extract_with_options) but also
    /// reports the command line and the time spent in the tool.
    pub async fn extract_detailed<I, S>(
        &self,
        input: impl Into<PdfInput>,
        options: I,
    ) -> Result<ExtractionOutput, Pdf2TxtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(input.into(), OptionSet::parse(options)).await
    }

    /// Extract `input` and write the text to `sink`, returning the number of
    /// bytes written.
    pub async fn save(
        &self,
        input: impl Into<PdfInput>,
        sink: impl Into<OutputSink>,
    ) -> Result<usize, Pdf2TxtError> {
        self.save_with_options(input, sink, std::iter::empty::<&str>())
            .await
    }

    /// Extract `input` with call `options` and write the text to `sink`.
    ///
    /// The sink is only opened once extraction has succeeded, so a failed
    /// extraction never creates or truncates the output file.
    ///
    /// # Errors
    /// Everything [`extract_with_options`](Self::extract_with_options)
    /// returns, plus [`Pdf2TxtError::OutputNotSaved`] when the sink cannot be
    /// opened or written, or the text is empty.
    pub async fn save_with_options<I, S>(
        &self,
        input: impl Into<PdfInput>,
        sink: impl Into<OutputSink>,
        options: I,
    ) -> Result<usize, Pdf2TxtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let output = self.run(input.into(), OptionSet::parse(options)).await?;
        write_text(sink.into(), &output.text).await
    }

    /// Blocking form of [`extract_with_options`](Self::extract_with_options).
    ///
    /// Creates a private tokio runtime, so it must not be called from inside
    /// an async context.
    pub fn extract_sync<I, S>(&self, input: impl Into<PdfInput>, options: I) -> Result<String, Pdf2TxtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        runtime()?.block_on(self.extract_with_options(input, options))
    }

    /// Blocking form of [`save_with_options`](Self::save_with_options).
    pub fn save_sync<I, S>(
        &self,
        input: impl Into<PdfInput>,
        sink: impl Into<OutputSink>,
        options: I,
    ) -> Result<usize, Pdf2TxtError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        runtime()?.block_on(self.save_with_options(input, sink, options))
    }

    async fn run(&self, input: PdfInput, call: OptionSet) -> Result<ExtractionOutput, Pdf2TxtError> {
        // ── Step 1: Resolve input ────────────────────────────────────────
        let resolved = resolve_input(input).await?;

        // ── Step 2: Merge options, build argv ────────────────────────────
        let merged = self.default_options.merge(&call);
        let cmd = CommandLine::build(&self.binary_path, &merged.to_tokens(), resolved.path());

        // ── Step 3: Run pdftotext ────────────────────────────────────────
        let raw = process::run(&cmd, self.timeout).await?;

        // The spooled input (if any) may go once the child has exited.
        drop(resolved);

        // ── Step 4: Trim ─────────────────────────────────────────────────
        let text = postprocess::clean_output(&raw.stdout);
        let duration_ms = raw.duration.as_millis() as u64;
        info!("Extracted {} bytes of text in {}ms", text.len(), duration_ms);

        Ok(ExtractionOutput {
            text,
            command: cmd.to_strings(),
            duration_ms,
        })
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, Pdf2TxtError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Pdf2TxtError::Internal(format!("Failed to create tokio runtime: {e}")))
}
