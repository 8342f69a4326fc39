mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use dbstore_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (stderr, stdout carries file content)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let storage = commands::connect(&config).await?;

    match cli.command {
        cli::Commands::Init => commands::init::handle(&storage).await,
        cli::Commands::Put { name, file } => commands::file::put(&storage, name, file).await,
        cli::Commands::Get { name, output } => commands::file::get(&storage, name, output).await,
        cli::Commands::Exists { name } => commands::file::exists(&storage, name).await,
        cli::Commands::Rm { name } => commands::file::remove(&storage, name).await,
        cli::Commands::Size { name } => commands::file::size(&storage, name).await,
        cli::Commands::Url { name } => commands::file::url(&storage, name),
        cli::Commands::Ls { long } => commands::file::list(&storage, long).await,
    }
}
