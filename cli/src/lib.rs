use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use color_palette::{ChatClient, PaletteConfig, PaletteMetadata, PaletteRequester, DEFAULT_COUNT};
use tracing::info;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "color-palette",
    author,
    version,
    about = "Generate a hex color palette from a text description",
    long_about = None
)]
pub struct Cli {
    /// Description of the mood, place or thing the palette should evoke
    #[arg(value_name = "DESCRIPTION", required = true, num_args = 1..)]
    pub description: Vec<String>,

    /// Number of colors to request (clamped to 5..=8)
    #[arg(short, long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
    pub count: i64,

    /// Model identifier to use instead of the configured default
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Print the palette with its description, count and timestamp as JSON
    #[arg(long)]
    pub metadata: bool,

    /// Write the palette metadata as JSON to this file instead of stdout
    #[arg(long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn description(&self) -> String {
        self.description.join(" ")
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let mut config = PaletteConfig::from_env().context("failed to load API configuration")?;
    if let Some(model) = &cli.model {
        config = config.with_model(model);
    }

    let requester = PaletteRequester::new(config).context("failed to create palette client")?;
    let stdout = std::io::stdout();
    run_with(&requester, &cli, &mut stdout.lock())
}

/// Generates the palette with `requester` and renders it to `out` or to the
/// requested output file.
pub fn run_with<C: ChatClient, W: Write>(
    requester: &PaletteRequester<C>,
    cli: &Cli,
    out: &mut W,
) -> Result<()> {
    let description = cli.description();
    let metadata = requester
        .generate_with_metadata(&description, cli.count)
        .with_context(|| format!("failed to generate a palette for '{description}'"))?;

    if let Some(path) = &cli.output {
        write_metadata(path, &metadata)?;
        info!(
            target: "color_palette::cli",
            output = %path.display(),
            colors = metadata.count,
            "palette written"
        );
        return Ok(());
    }

    if cli.metadata {
        let json = serde_json::to_string_pretty(&metadata)?;
        writeln!(out, "{json}")?;
    } else {
        for color in &metadata.colors {
            writeln!(out, "{color}")?;
        }
    }

    Ok(())
}

fn write_metadata(path: &Path, metadata: &PaletteMetadata) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "failed to create output parent directory '{}'",
                    parent.display()
                )
            })?;
        }
    }

    let json = serde_json::to_vec_pretty(metadata)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write palette to '{}'", path.display()))
}
