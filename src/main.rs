use anyhow::Result;
use clap::Parser;
use log::info;

use payment_picker::cli::commands::{list_command, pick_command};
use payment_picker::cli::{Cli, Commands};
use payment_picker::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::load()?,
    };

    // Log to a file (truncated on each run) so the picker UI stays clean
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(config.log_file())?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting payment-picker");

    match cli.command {
        Commands::List(args) => list_command(args, &config).await,
        Commands::Pick(args) => pick_command(args, &config).await,
    }
}
