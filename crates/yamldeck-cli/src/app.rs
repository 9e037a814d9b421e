//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use yamldeck_pptx::{DeckConfig, PptxWriter};

/// Deck description read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./test.yaml";

/// Presentation written when `--output` is not given
pub const DEFAULT_OUTPUT_PATH: &str = "./output/todo-makethisavariable.pptx";

#[derive(Parser, Debug)]
#[command(name = "yamldeck")]
#[command(author, version, about = "Build PPTX slide decks from YAML", long_about = None)]
pub struct Cli {
    /// YAML deck description
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output PPTX file (its directory must exist)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Log every slide and image written
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI application
///
/// Parses arguments, sets up logging and generates the presentation.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    generate_command(&cli.config, &cli.output)
}

/// Load `config` and write the presentation to `output`
pub fn generate_command(config: &Path, output: &Path) -> Result<()> {
    let deck = DeckConfig::from_file(config)
        .with_context(|| format!("Failed to load deck: {}", config.display()))?;

    info!(
        config = %config.display(),
        slides = deck.len(),
        "Deck loaded"
    );

    let mut writer = PptxWriter::new();
    if let Some(stem) = config.file_stem() {
        writer = writer.with_title(stem.to_string_lossy());
    }

    writer
        .generate_to_file(&deck, output)
        .with_context(|| format!("Failed to write presentation: {}", output.display()))?;

    println!(
        "Wrote {} slide(s) to {}",
        deck.len(),
        output.display()
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` directives when set and valid, otherwise INFO (DEBUG with `--verbose`)
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}
