use anyhow::Result;
use clap::Parser;
use tracing::debug;

use localconf::cli::commands::{entry, read, sweep, write};
use localconf::cli::{Args, Commands};
use localconf::config::StorageConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = StorageConfig::from_env(args.config_dir);
    debug!("Resolved storage config: {:?}", config);

    match args.command {
        Commands::Write { path, content } => write::execute(path, content).await,
        Commands::Read { path } => read::execute(path).await,
        Commands::Get { entry: kind } => entry::execute_get(config, kind.into()).await,
        Commands::Put {
            entry: kind,
            json_file,
        } => entry::execute_put(config, kind.into(), json_file).await,
        Commands::Sweep { dir, min_age_secs } => sweep::execute(config, dir, min_age_secs).await,
    }
}
