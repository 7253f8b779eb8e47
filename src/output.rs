//! Output types returned by the extractor.

use serde::{Deserialize, Serialize};

/// Detailed result of one extraction.
///
/// Returned by [`crate::PdfToText::extract_detailed`] and printed by
/// `pdf2txt --json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// Extracted text, trimmed at both ends.
    pub text: String,

    /// The argument vector that produced `text`, program first.
    pub command: Vec<String>,

    /// Wall-clock time spent in `pdftotext`.
    pub duration_ms: u64,
}

impl ExtractionOutput {
    /// Number of bytes a [`crate::PdfToText::save`] of this text would write.
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}
