//! Configuration for the `pdftotext` invoker.
//!
//! [`ExtractorConfig`] holds the three knobs an extractor reads on every
//! call: where the binary lives, which options apply by default, and how long
//! a single run may take. Build it with [`ExtractorConfig::builder()`] when
//! you need validation, or start from [`ExtractorConfig::new`].

use crate::error::Pdf2TxtError;
use crate::options::OptionSet;
use std::path::PathBuf;
use std::time::Duration;

/// Default wall-clock bound for one `pdftotext` run, in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 60.0;

/// Configuration for a [`crate::PdfToText`] extractor.
///
/// # Example
/// ```rust
/// use edgequake_pdf2txt::ExtractorConfig;
///
/// let config = ExtractorConfig::builder()
///     .binary_path("/usr/bin/pdftotext")
///     .default_options(["layout", "enc UTF-8"])
///     .timeout_secs(Some(30.0))
///     .build()
///     .unwrap();
/// assert_eq!(config.timeout.unwrap().as_secs(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Path to the `pdftotext` executable.
    pub binary_path: PathBuf,

    /// Options applied to every call unless overridden by name.
    pub default_options: OptionSet,

    /// Wall-clock bound for one run. `None` lets the process run unbounded.
    pub timeout: Option<Duration>,
}

impl ExtractorConfig {
    /// A config for `binary_path` with no default options and the
    /// [`DEFAULT_TIMEOUT_SECS`] timeout.
    pub fn new(binary_path: impl Into<PathBuf>) -> Self {
        Self {
            binary_path: binary_path.into(),
            default_options: OptionSet::new(),
            timeout: Some(Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Create a new builder, seeded with `pdftotext` as the binary name.
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder {
            config: Self::new("pdftotext"),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Builder for [`ExtractorConfig`].
#[derive(Debug)]
pub struct ExtractorConfigBuilder {
    config: ExtractorConfig,
    timeout_secs: Option<f64>,
}

impl ExtractorConfigBuilder {
    pub fn binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.binary_path = path.into();
        self
    }

    pub fn default_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.default_options = OptionSet::parse(options);
        self
    }

    /// Timeout in seconds; `None` or `0` disables it. Validated in [`build`](Self::build).
    pub fn timeout_secs(mut self, secs: Option<f64>) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout_secs = timeout.map(|d| d.as_secs_f64());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(mut self) -> Result<ExtractorConfig, Pdf2TxtError> {
        if self.config.binary_path.as_os_str().is_empty() {
            return Err(Pdf2TxtError::InvalidConfig(
                "binary path must not be empty".into(),
            ));
        }
        self.config.timeout = timeout_from_secs(self.timeout_secs)?;
        Ok(self.config)
    }
}

/// Convert a timeout in seconds into the stored representation.
///
/// `None`, `0` and values below one nanosecond all mean "no timeout".
/// Negative, non-finite, or values too large for a [`Duration`] are rejected.
pub fn timeout_from_secs(secs: Option<f64>) -> Result<Option<Duration>, Pdf2TxtError> {
    let invalid = |s: f64| {
        Pdf2TxtError::InvalidConfig(format!(
            "The timeout value must be a valid positive number of seconds, got {s}"
        ))
    };
    match secs {
        None => Ok(None),
        Some(s) if s == 0.0 => Ok(None),
        Some(s) if !s.is_finite() || s < 0.0 => Err(invalid(s)),
        Some(s) => Duration::try_from_secs_f64(s)
            .map(|d| normalize_timeout(Some(d)))
            .map_err(|_| invalid(s)),
    }
}

/// Drop a zero duration to "no timeout".
pub(crate) fn normalize_timeout(timeout: Option<Duration>) -> Option<Duration> {
    timeout.filter(|d| !d.is_zero())
}
