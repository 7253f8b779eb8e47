//! Option normalisation and merging for `pdftotext` flags.
//!
//! Callers write options loosely: `"layout"`, `"-layout"`, `" -f 3 "`,
//! `"enc UTF-8"`. Each raw entry becomes one [`CliOption`]: a name that always
//! starts with `-` plus an optional value (everything after the first space).
//! Flattening an option yields the argv tokens `name` and, if present, `value`.
//!
//! ## Merge rule
//!
//! Call-time options override default options **by exact name**. Every
//! default whose name also appears among the call options is dropped, value
//! included, even when the override carries no value. The survivors keep
//! their order and are followed by all call options in their order.
//!
//! ```rust
//! use edgequake_pdf2txt::options::merge;
//!
//! let merged = merge(&["layout", "enc UTF-8"], &["-enc Latin1", "raw"]);
//! assert_eq!(merged, vec!["-layout", "-enc", "Latin1", "-raw"]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single canonical command-line option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CliOption {
    name: String,
    value: Option<String>,
}

impl CliOption {
    /// Parse one raw option entry.
    ///
    /// Surrounding whitespace is trimmed, a missing leading `-` is added, and
    /// the entry is split once on the first space.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let canonical = if trimmed.starts_with('-') {
            trimmed.to_string()
        } else {
            format!("-{trimmed}")
        };

        let name = option_name(&canonical);
        let value = canonical[name.len()..].strip_prefix(' ').map(str::to_string);
        Self {
            name: name.to_string(),
            value,
        }
    }

    /// The flag name, leading hyphen included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value following the flag, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Append this option's argv tokens to `out`.
    fn push_tokens(&self, out: &mut Vec<String>) {
        out.push(self.name.clone());
        if let Some(ref v) = self.value {
            out.push(v.clone());
        }
    }
}

impl fmt::Display for CliOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(ref v) => write!(f, "{} {}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

/// An ordered list of options.
///
/// Order is significant (it is the final argument order) and duplicate names
/// are kept; only [`OptionSet::merge`] resolves names against each other.
///
/// Serialises as a list of `"name value"` strings so a stored set reads back
/// to the same options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct OptionSet(Vec<CliOption>);

impl OptionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every raw entry, preserving order.
    pub fn parse<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(raw.into_iter().map(|s| CliOption::parse(s.as_ref())).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CliOption> {
        self.0.iter()
    }

    /// Flatten to argv tokens.
    pub fn to_tokens(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.0.len() * 2);
        for opt in &self.0 {
            opt.push_tokens(&mut out);
        }
        out
    }

    /// Combine `self` (the defaults) with `call` options.
    ///
    /// See the [module documentation](self) for the override rule.
    pub fn merge(&self, call: &OptionSet) -> OptionSet {
        if call.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return call.clone();
        }

        let mut merged: Vec<CliOption> = self
            .0
            .iter()
            .filter(|d| !call.0.iter().any(|c| c.name == d.name))
            .cloned()
            .collect();
        merged.extend(call.0.iter().cloned());

        OptionSet(merged)
    }
}

impl<S: AsRef<str>> FromIterator<S> for OptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::parse(iter)
    }
}

impl From<Vec<String>> for OptionSet {
    fn from(raw: Vec<String>) -> Self {
        Self::parse(raw)
    }
}

impl From<OptionSet> for Vec<String> {
    fn from(set: OptionSet) -> Self {
        set.0.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a CliOption;
    type IntoIter = std::slice::Iter<'a, CliOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Free functions ───────────────────────────────────────────────────────────

/// Normalise raw option entries into a flat list of argv tokens.
///
/// ```rust
/// use edgequake_pdf2txt::options::normalize;
///
/// assert_eq!(normalize(&[" layout", "f 3"]), vec!["-layout", "-f", "3"]);
/// ```
pub fn normalize<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    OptionSet::parse(raw).to_tokens()
}

/// Merge raw default options with raw call options into argv tokens.
pub fn merge<D, C>(defaults: &[D], call: &[C]) -> Vec<String>
where
    D: AsRef<str>,
    C: AsRef<str>,
{
    OptionSet::parse(defaults)
        .merge(&OptionSet::parse(call))
        .to_tokens()
}

/// Name part of an option token: everything up to the first space.
pub fn option_name(token: &str) -> &str {
    token.split_once(' ').map_or(token, |(name, _)| name)
}
