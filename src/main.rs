use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use pyhl::batch::{HighlightedFile, highlight_files};
use pyhl::discovery::discover_python_files;
use pyhl::location::LineIndex;
use pyhl::render::{html_label, render_ansi, render_document, render_html};
use serde_json::json;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pyhl",
    about = "Fast, injection-safe Python syntax highlighter",
    version,
    long_about = "pyhl renders Python source as syntax-highlighted HTML: strings, comments, \
                  decorators, numbers, keywords, builtins and `self` are wrapped in \
                  <span class=\"…\"> tags and everything else is HTML-escaped.\n\n\
                  Reads standard input when no paths are given (or for the path `-`)."
)]
struct Cli {
    /// Files or directories to highlight.  Directories are searched for `.py`
    /// files; hidden, virtualenv and cache directories are skipped.
    #[arg()]
    paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Skip files whose path below a directory argument contains any of the
    /// given comma-separated names (e.g. --exclude tests,migrations).
    #[arg(long, value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// When to colour terminal output (`--format ansi` and error messages).
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Title of the page produced by `--format document`.
    #[arg(long, default_value = "pyhl")]
    title: String,

    /// Log discovery and scanning details to stderr (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment, ready to insert into a page.
    Html,
    /// Standalone HTML page with an embedded stylesheet.
    Document,
    /// ANSI-coloured text for a terminal.
    Ansi,
    /// JSON dump of every span with its kind and position.
    Spans,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    if let Err(e) = run(&cli) {
        eprintln!("{}: {e:#}", "error".red().bold());
        process::exit(2);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let inputs = collect_inputs(cli)?;
    debug!(inputs = inputs.len(), "highlighting");

    match cli.format {
        Format::Html => print_html(&inputs),
        Format::Document => {
            let fragments: Vec<String> = inputs
                .iter()
                .map(|f| render_html(&f.source, &f.spans))
                .collect();
            print!("{}", render_document(&cli.title, &fragments));
        }
        Format::Ansi => print_ansi(&inputs),
        Format::Spans => print_spans(&inputs),
    }
    Ok(())
}

// ── input collection ──────────────────────────────────────────────────────────

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_stdin() -> Result<HighlightedFile> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("failed to read standard input")?;
    Ok(HighlightedFile::from_source("<stdin>", source))
}

/// Standard input first (when requested), then every file in argument order
/// with directories expanded in place.
fn collect_inputs(cli: &Cli) -> Result<Vec<HighlightedFile>> {
    let exclude = cli.exclude.clone().unwrap_or_default();

    let mut inputs = Vec::new();
    if cli.paths.is_empty() || cli.paths.iter().any(|p| is_stdin(p)) {
        inputs.push(read_stdin()?);
    }

    let mut files = Vec::new();
    for path in cli.paths.iter().filter(|p| !is_stdin(p)) {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(discover_python_files(path, &exclude)?);
        } else {
            bail!("{}: no such file or directory", path.display());
        }
    }

    inputs.extend(highlight_files(&files)?);
    Ok(inputs)
}

// ── output ────────────────────────────────────────────────────────────────────

/// A single input is printed byte-for-byte as its fragment; several inputs
/// are each introduced by an HTML comment naming the file.
fn print_html(inputs: &[HighlightedFile]) {
    if let [only] = inputs {
        print!("{}", render_html(&only.source, &only.spans));
        return;
    }
    for file in inputs {
        println!("{}", html_label(&file.path));
        let fragment = render_html(&file.source, &file.spans);
        print!("{fragment}");
        if !fragment.ends_with('\n') {
            println!();
        }
    }
}

fn print_ansi(inputs: &[HighlightedFile]) {
    let several = inputs.len() > 1;
    for file in inputs {
        if several {
            println!("{}", format!("==> {} <==", file.path).bold());
        }
        let text = render_ansi(&file.source, &file.spans);
        print!("{text}");
        if several && !text.ends_with('\n') {
            println!();
        }
    }
}

/// Emit every span as JSON, with 1-indexed line/col of its start.
fn print_spans(inputs: &[HighlightedFile]) {
    let files: Vec<serde_json::Value> = inputs
        .iter()
        .map(|f| {
            let index = LineIndex::new(&f.source);
            let spans: Vec<serde_json::Value> = f
                .spans
                .iter()
                .map(|s| {
                    let (line, col) = index.line_col(s.start);
                    json!({
                        "kind":  s.kind,
                        "start": s.start,
                        "end":   s.end,
                        "line":  line,
                        "col":   col,
                        "text":  s.text(&f.source),
                    })
                })
                .collect();
            json!({
                "file":  f.path,
                "lines": index.line_count(),
                "spans": spans,
            })
        })
        .collect();

    let output = json!({
        "files": files,
        "count": inputs.len(),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&output).expect("serde_json::Value is always serialisable")
    );
}
