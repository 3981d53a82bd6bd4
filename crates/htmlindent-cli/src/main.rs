use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use htmlindent::{IndentOptions, ParserConfig, WhitespacePolicy};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "htmlindent",
    version,
    about = "Re-indent HTML with two spaces per nesting level"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Only trim the input, do not re-indent
    #[arg(long)]
    no_indent: bool,
    /// Keep whitespace already between elements
    #[arg(long, conflicts_with = "trim_whitespace")]
    preserve_whitespace: bool,
    /// Also strip trailing whitespace from text before tags
    #[arg(long)]
    trim_whitespace: bool,
    /// Nest elements at most N deep, flattening anything deeper (0 means the built-in ceiling)
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
    /// Refuse input larger than N bytes
    #[arg(long, value_name = "N")]
    max_size: Option<usize>,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> IndentOptions {
        let mut parser = ParserConfig::default();
        if let Some(max_depth) = self.max_depth {
            parser.max_depth = max_depth;
        }
        if let Some(max_size) = self.max_size {
            parser.max_size = max_size;
        }
        let whitespace = if self.preserve_whitespace {
            WhitespacePolicy::Preserve
        } else if self.trim_whitespace {
            WhitespacePolicy::Trim
        } else {
            WhitespacePolicy::Normalize
        };
        IndentOptions::default()
            .with_enabled(!self.no_indent)
            .with_whitespace(whitespace)
            .with_parser(parser)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let input_data = read_input(&args.input)?;
    let options = args.options();
    debug!(?options, "formatting");

    let mut output = htmlindent::format(&input_data, &options).context("failed to format input")?;
    output.push('\n');

    write_output(&args.output, output.as_bytes())?;
    info!(bytes = output.len(), "done");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
