//! Takeoff CLI
//!
//! Command-line front end for the description parsing engine:
//! - `takeoff parse`: one description (argument, file, or stdin) → a
//!   colored summary or JSON record
//! - `takeoff batch`: one description per line → JSON Lines
//!
//! The CLI is deliberately thin: it stands in for the estimate form that
//! feeds text to the engine and ships the record to the cost service. It
//! writes stdout/files only.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use takeoff_parse::ProjectParser;

mod summary;

#[derive(Parser)]
#[command(name = "takeoff")]
#[command(author, version, about = "Takeoff: free-text project descriptions → structured records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single project description.
    Parse {
        /// The description text; omit to read from --file or stdin.
        description: Option<String>,
        /// Read the description from a file.
        #[arg(long, conflicts_with = "description")]
        file: Option<PathBuf>,
        /// Emit the full record as JSON instead of the summary.
        #[arg(long)]
        json: bool,
        /// Also write the JSON record to a file.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Parse one description per input line into JSON Lines.
    Batch {
        /// Input file, one description per line.
        input: PathBuf,
        /// Output JSON Lines file.
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let parser = ProjectParser::builtin();

    match cli.command {
        Commands::Parse {
            description,
            file,
            json,
            out,
        } => {
            let text = read_description(description, file)?;
            let record = parser.parse(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                summary::print_summary(&record);
            }
            if let Some(path) = out {
                fs::write(&path, serde_json::to_string_pretty(&record)?)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }

        Commands::Batch { input, out } => {
            let content = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;

            let mut lines = Vec::new();
            for line in content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                lines.push(serde_json::to_string(&parser.parse(line))?);
            }
            let count = lines.len();
            fs::write(&out, lines.join("\n") + "\n")
                .with_context(|| format!("writing {}", out.display()))?;
            eprintln!("parsed {count} descriptions → {}", out.display());
        }
    }

    Ok(())
}

fn read_description(description: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = description {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()));
    }
    // Fall back to stdin so the command composes in pipelines.
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading description from stdin")?;
    if buf.trim().is_empty() {
        bail!("no description given (argument, --file, or stdin)");
    }
    Ok(buf)
}
