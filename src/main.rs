use clap::Parser;

use beacon_rs::cli::{Cli, execute_command};
use beacon_rs::config::ConfigLoader;
use beacon_rs::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => ConfigLoader::with_file(path).load()?,
        None => ConfigLoader::new().load()?,
    };

    // --verbose/--quiet win over the configured level
    if let Some(level) = cli.log_level_override() {
        settings.logger.level = level.to_string();
    }
    init_logger(&settings.logger)?;

    execute_command(&cli, settings).await?;

    Ok(())
}
