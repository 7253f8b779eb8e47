//! Post-processing of `pdftotext` standard output.
//!
//! Only the outer edges are touched: interior whitespace carries the layout
//! (`-layout` output relies on runs of spaces), so it is left alone.

/// Characters stripped from both ends of the extracted text.
pub const TRIM_SET: &[char] = &[' ', '\t', '\n', '\r', '\0', '\u{0B}', '\u{0C}'];

/// Decode raw stdout and strip [`TRIM_SET`] from both ends.
///
/// Invalid UTF-8 (e.g. `-enc Latin1` output) is replaced rather than rejected.
pub fn clean_output(stdout: &[u8]) -> String {
    trim_output(&String::from_utf8_lossy(stdout)).to_string()
}

/// Strip [`TRIM_SET`] from both ends of `text`.
pub fn trim_output(text: &str) -> &str {
    text.trim_matches(TRIM_SET)
}
