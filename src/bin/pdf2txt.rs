//! CLI binary for edgequake-pdf2txt.
//!
//! A thin shim over the library crate that maps CLI flags to a
//! [`PdfToText`] extractor and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_pdf2txt::{PdfInput, PdfToText};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Extract to stdout
  pdf2txt document.pdf

  # Keep the physical layout, save to a file
  pdf2txt --defaults layout scoreboard.pdf -o scoreboard.txt

  # First page only (call options override defaults with the same name)
  pdf2txt --defaults "f 1,l 3" -O "l 1" report.pdf

  # Read the PDF from stdin
  curl -s https://example.org/doc.pdf | pdf2txt -

  # JSON output with the command line and timing
  pdf2txt --json document.pdf > output.json

OPTIONS SYNTAX:
  Options are pdftotext flags. The leading '-' is optional and a value
  follows the first space: "layout", "-layout", "enc UTF-8", "f 3".

ENVIRONMENT VARIABLES:
  PDFTOTEXT_PATH            Path to the pdftotext executable
  PDF2TXT_DEFAULT_OPTIONS   Comma-separated default options
  PDF2TXT_TIMEOUT           Timeout in seconds (0 disables it)
  PDF2TXT_OUTPUT            Write text to this file
  RUST_LOG                  Override the log filter (e.g. debug)

SETUP:
  pdftotext ships with poppler:
    Debian/Ubuntu:  apt install poppler-utils
    macOS:          brew install poppler
"#;

/// Extract plain text from PDF files with pdftotext.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2txt",
    version,
    about = "Extract plain text from PDF files with pdftotext",
    long_about = "Extract plain text from PDF documents by running the pdftotext command line \
tool (poppler or xpdf). Default options can be overridden per call by option name, and every \
run is bounded by a timeout.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF file path, or '-' to read the PDF from stdin.
    input: String,

    /// Write text to this file instead of stdout.
    #[arg(short, long, env = "PDF2TXT_OUTPUT")]
    output: Option<PathBuf>,

    /// Path to the pdftotext executable (searched for when unset).
    #[arg(long = "bin", env = "PDFTOTEXT_PATH")]
    binary: Option<PathBuf>,

    /// Default options, comma-separated (e.g. "layout,enc UTF-8").
    #[arg(long, env = "PDF2TXT_DEFAULT_OPTIONS", value_delimiter = ',')]
    defaults: Vec<String>,

    /// Call option; repeat for several. Overrides a default of the same name.
    #[arg(short = 'O', long = "opt", allow_hyphen_values = true)]
    opts: Vec<String>,

    /// Timeout in seconds; 0 disables it.
    #[arg(long, env = "PDF2TXT_TIMEOUT", default_value_t = 60.0)]
    timeout: f64,

    /// Output structured JSON (text, command, duration) instead of text.
    #[arg(long, env = "PDF2TXT_JSON", conflicts_with = "output")]
    json: bool,

    /// Disable the progress spinner.
    #[arg(long, env = "PDF2TXT_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2TXT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2TXT_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build extractor ──────────────────────────────────────────────────
    let mut extractor = match cli.binary {
        Some(ref path) => PdfToText::new(path.clone()),
        None => PdfToText::discover().context("Could not find pdftotext")?,
    };
    extractor.set_default_options(cli.defaults.iter().filter(|o| !o.trim().is_empty()));
    extractor
        .set_timeout(Some(cli.timeout))
        .context("Invalid --timeout")?;

    let input = read_input(&cli.input).await?;

    // ── Run extraction ───────────────────────────────────────────────────
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let spinner = show_progress.then(|| new_spinner(&cli.input));

    if let Some(ref output_path) = cli.output {
        let result = extractor
            .save_with_options(input, output_path, &cli.opts)
            .await;
        if let Some(ref bar) = spinner {
            bar.finish_and_clear();
        }
        let bytes = result.context("Extraction failed")?;

        if !cli.quiet {
            eprintln!(
                "{}  {} bytes  →  {}",
                green("✔"),
                bytes,
                bold(&output_path.display().to_string()),
            );
        }
    } else {
        let result = extractor.extract_detailed(input, &cli.opts).await;
        if let Some(ref bar) = spinner {
            bar.finish_and_clear();
        }
        let output = result.context("Extraction failed")?;

        if cli.json {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            println!("{json}");
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(output.text.as_bytes())
                .context("Failed to write to stdout")?;
            if !output.text.is_empty() {
                handle.write_all(b"\n").ok();
            }
        }

        if !cli.quiet && !cli.json {
            eprintln!(
                "{}",
                dim(&format!(
                    "{} bytes in {}ms",
                    output.byte_len(),
                    output.duration_ms
                ))
            );
        }
    }

    Ok(())
}

/// `-` reads the whole PDF from stdin; anything else is a path.
async fn read_input(arg: &str) -> Result<PdfInput> {
    if arg != "-" {
        return Ok(PdfInput::from(arg));
    }
    let bytes = tokio::task::spawn_blocking(|| {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map(|_| buf)
    })
    .await
    .context("stdin reader panicked")?
    .context("Failed to read PDF from stdin")?;
    Ok(PdfInput::Bytes(bytes))
}

fn new_spinner(input: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
    );
    bar.set_prefix("Extracting");
    bar.set_message(input.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_split_on_commas_and_opts_repeat() {
        let cli = Cli::try_parse_from([
            "pdf2txt",
            "--defaults",
            "layout,enc UTF-8",
            "-O",
            "-f 1",
            "--opt",
            "l 1",
            "--timeout",
            "0",
            "doc.pdf",
        ])
        .unwrap();
        assert_eq!(cli.defaults, vec!["layout", "enc UTF-8"]);
        assert_eq!(cli.opts, vec!["-f 1", "l 1"]);
        assert_eq!(cli.timeout, 0.0);
        assert_eq!(cli.input, "doc.pdf");
    }

    #[test]
    fn json_conflicts_with_output() {
        let err = Cli::try_parse_from(["pdf2txt", "--json", "-o", "out.txt", "doc.pdf"]);
        assert!(err.is_err());
    }
}
