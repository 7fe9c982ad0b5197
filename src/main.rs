mod commands;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use geopin::{CollectionStore, Config, Database, Error, NoImagery, Session, YandexGeocoder};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;
use crate::output::{print_json, ErrorResponse};

/// geopin - Capture map points as addresses and keep a saved collection
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "geopin=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<ExitCode, Error> {
    if matches!(cli.command, Commands::Version) {
        return commands::handle_version(cli.json);
    }

    let config = Config::load()?;
    config.ensure_directories()?;
    debug!(database = %config.database_path.display(), slot = %config.slot_name, "configuration loaded");

    let db = Database::open(&config.database_path)?;
    let store = CollectionStore::open(Box::new(db), &config.slot_name)?;
    let session = Session::new(
        store,
        Arc::new(YandexGeocoder::new(&config)?),
        Arc::new(NoImagery),
    );

    commands::execute(&cli.command, &session, cli.json).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            if cli.json {
                print_json(&ErrorResponse {
                    error: e.to_string(),
                });
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
