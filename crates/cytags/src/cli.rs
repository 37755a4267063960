//! Command dispatch for the `cytags` driver.
//!
//! The driver moves JSON-encoded syntax trees across the transform: a tree
//! comes in from a file or stdin, the filter configuration is resolved from
//! flags or the environment, and the transformed tree goes out to a file or
//! stdout. When `--source` names a file that is not a recognized script
//! kind the input passes through byte-for-byte untouched.

use std::fs;
use std::io::{self, Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use cypress_tags::{FilterConfig, SuiteFilter, SyntaxNode, parse_tag_list};
use eyre::{Context, Result};

const SCRIPT_EXTENSIONS: [&str; 6] = ["js", "jsx", "ts", "tsx", "cjs", "mjs"];

/// Filter a JSON-encoded Cypress suite tree by include/exclude tag sets.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// JSON-encoded syntax tree; stdin when omitted.
    input: Option<Utf8PathBuf>,
    /// Write the transformed tree here instead of stdout.
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,
    /// Comma-delimited tags to include; overrides CYPRESS_INCLUDE_TAGS.
    #[arg(long, value_name = "TAGS")]
    include: Option<String>,
    /// Comma-delimited tags to exclude; overrides CYPRESS_EXCLUDE_TAGS.
    #[arg(long, value_name = "TAGS")]
    exclude: Option<String>,
    /// Path of the original test source; non-script kinds pass through.
    #[arg(long, value_name = "PATH")]
    source: Option<Utf8PathBuf>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let raw = read_input(cli.input.as_deref())?;

    if !cli.source.as_deref().is_none_or(is_script_source) {
        return write_output(cli.output.as_deref(), &raw);
    }

    let tree = SyntaxNode::from_json(&raw).wrap_err("input is not a syntax tree")?;
    let transformed = SuiteFilter::new(resolve_config(&cli)).apply(tree);
    let mut rendered = transformed
        .to_json()
        .wrap_err("failed to encode the transformed tree")?;
    rendered.push('\n');
    write_output(cli.output.as_deref(), &rendered)
}

/// The filter configuration for this run: the environment, with either
/// flag taking precedence over its variable when present.
fn resolve_config(cli: &Cli) -> FilterConfig {
    let mut config = FilterConfig::from_env();
    if let Some(raw) = cli.include.as_deref() {
        config.include_tags = parse_tag_list(raw);
    }
    if let Some(raw) = cli.exclude.as_deref() {
        config.exclude_tags = parse_tag_list(raw);
    }
    config
}

/// Whether the path names a source kind the transform applies to.
fn is_script_source(path: &Utf8Path) -> bool {
    path.extension().is_some_and(|extension| {
        SCRIPT_EXTENSIONS
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(extension))
    })
}

fn read_input(path: Option<&Utf8Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).wrap_err_with(|| format!("failed to read {path}"))
        }
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .wrap_err("failed to read stdin")?;
            Ok(raw)
        }
    }
}

fn write_output(path: Option<&Utf8Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).wrap_err_with(|| format!("failed to write {path}"))
        }
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(content.as_bytes())
                .wrap_err("failed to write to stdout")?;
            stdout.flush().wrap_err("failed to flush stdout")
        }
    }
}
