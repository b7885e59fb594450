use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use usekit::config::Config;
use usekit::logging::init_tracing;
use usekit::simulate::{run_scenario, Scenario};

/// Replay call timelines against a latest-wins promise guard.
#[derive(Parser, Debug)]
#[command(name = "usekit", version, about = "Replay call timelines against a latest-wins promise guard")]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario file and print what every step observed.
    Simulate {
        /// Path to the scenario TOML file.
        scenario: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the default config file location.
    ConfigPath,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    match cli.command {
        Command::ConfigPath => {
            println!("{}", Config::config_path().display());
        }
        Command::Simulate { scenario, format } => {
            let loaded = Scenario::load_from(&scenario)?;
            tracing::info!(path = %scenario.display(), steps = loaded.steps.len(), "Loaded scenario");

            let report = run_scenario(&loaded, &config.simulation).await?;
            match format {
                Format::Text => println!("{}", report),
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("Failed to encode report")?
                ),
            }
        }
    }

    Ok(())
}
