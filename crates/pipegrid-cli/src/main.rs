//! Pipegrid CLI - renders a pipe-delimited sheet as an aligned grid

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use pipegrid::prelude::*;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pipegrid")]
#[command(author, version, about = "Render a pipe-delimited sheet as an aligned grid")]
struct Cli {
    /// The file to process
    input: Option<PathBuf>,

    /// Field delimiter (default: pipe)
    #[arg(short, long, default_value = "|")]
    delimiter: char,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // No input file is not an error: show usage and leave quietly.
    let Some(input) = cli.input else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if !cli.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }

    let options = ParseOptions {
        delimiter: cli.delimiter as u8,
        ..ParseOptions::default()
    };

    let (source, sheet) = pipegrid::load_path(&input, &options)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out, &source, &sheet).context("Failed to write to stdout")?;
    out.flush().context("Failed to write to stdout")?;

    Ok(())
}
