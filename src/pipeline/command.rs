//! Argument vector construction.
//!
//! The invocation is always
//! `<binary> <merged option tokens…> <input path> -`; the trailing `-` tells
//! `pdftotext` to write the text to standard output instead of a file.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// Output target argument that selects standard output.
pub const STDOUT_TARGET: &str = "-";

/// The full command line of one `pdftotext` run, program first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    argv: Vec<OsString>,
}

impl CommandLine {
    /// `[binary] + options + [input, "-"]`.
    pub fn build(binary: &Path, options: &[String], input: &Path) -> Self {
        let mut argv = Vec::with_capacity(options.len() + 3);
        argv.push(binary.as_os_str().to_owned());
        argv.extend(options.iter().map(OsString::from));
        argv.push(input.as_os_str().to_owned());
        argv.push(OsString::from(STDOUT_TARGET));
        Self { argv }
    }

    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    /// Everything after the program.
    pub fn args(&self) -> &[OsString] {
        &self.argv[1..]
    }

    /// Lossy string form of every argument, program included.
    pub fn to_strings(&self) -> Vec<String> {
        self.argv
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for CommandLine {
    /// Space-separated, with arguments containing whitespace or quotes shown
    /// single-quoted. For diagnostics only; never fed to a shell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.argv.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let s = arg.to_string_lossy();
            if s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
                write!(f, "'{}'", s.replace('\'', r"'\''"))?;
            } else {
                f.write_str(&s)?;
            }
        }
        Ok(())
    }
}
