//! merkle-root CLI - compute the Merkle root of a list of leaf hashes
//!
//! Reads one hex-encoded 32-byte hash per line and prints the root.

use anyhow::Context;
use clap::Parser;
use merkle_root::logging::{self, LogLevel};
use merkle_root::{reduce, LeafSource, Reduction, DEFAULT_INPUT};
use tracing::info;

#[derive(Parser)]
#[command(name = "merkle-root")]
#[command(about = "Compute the SHA-256 Merkle root of a list of hex-encoded hashes")]
#[command(version)]
struct Cli {
    /// File with one hex hash per line, or `-` for stdin
    #[arg(default_value = DEFAULT_INPUT)]
    input: String,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::try_init(LogLevel::from_flags(cli.quiet, cli.verbose))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let source = LeafSource::from_arg(&cli.input);
    let leaves = source
        .read()
        .with_context(|| format!("Failed to load leaf hashes from {}", source))?;

    let reduction = reduce(&leaves);
    info!(
        leaves = reduction.leaf_count,
        passes = reduction.passes,
        root = %reduction.root.short(),
        "computed merkle root"
    );

    output(cli.format, &reduction)
}

fn output(format: OutputFormat, reduction: &Reduction) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "root": reduction.root,
                "leaves": reduction.leaf_count,
                "height": reduction.passes,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
        OutputFormat::Text => {
            println!("Merkle tree root: {}", reduction.root);
        }
    }
    Ok(())
}
