use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crossword_extractor_lib::application::IngestionService;
use crossword_extractor_lib::infrastructure::{AppConfig, init_logging_with_config};

#[derive(Debug, Parser)]
#[command(name = "crossword-extractor", version, about = "Extract crossword grids and clues from HTML or spreadsheet files")]
struct Cli {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a file and print the puzzle as JSON
    Parse {
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the score breakdown of every table of an HTML file
    Inspect { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging_with_config(config.logging.clone())?;
    debug!("Configuration: {:?}", config);

    let service = IngestionService::new(&config.parsing);

    match cli.command {
        Command::Parse { file, pretty } => {
            let puzzle = service.ingest_path(&file).await?;
            let json = if pretty {
                serde_json::to_string_pretty(&puzzle)?
            } else {
                serde_json::to_string(&puzzle)?
            };
            println!("{json}");
        }
        Command::Inspect { file } => {
            let scores = service.inspect_path(&file).await?;
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
    }

    Ok(())
}
