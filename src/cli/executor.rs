//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading. It is the composition root:
//! providers and the placeholder replacer are constructed here and wired
//! together explicitly.

use std::path::Path;

use super::handlers::ProvisionCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::placeholder::Replacer;
use crate::config::{ConfigError, NotifierSettings, Settings, parse_block};
use crate::notifier::ProvisionResult;

/// Execute a CLI command with the given settings
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Settings loaded from TOML file and environment
///
/// # Returns
/// Ok(()) on success, the first provisioning or configuration error
/// otherwise
pub async fn execute_command(cli: &Cli, settings: Settings) -> ProvisionResult<()> {
    validate_command_args(cli)?;

    let replacer = Replacer::from_env();

    match &cli.command {
        Some(Commands::Provision { block, dry_run }) => {
            let notifier = match block {
                Some(path) => load_block_settings(path)?,
                None => settings.notifier,
            };
            ProvisionCommandHandler::new(notifier)
                .execute(*dry_run, &replacer)
                .await
        }
        // no subcommand behaves like bare `provision`
        None => {
            ProvisionCommandHandler::new(settings.notifier)
                .execute(false, &replacer)
                .await
        }
    }
}

/// Validate argument combinations before execution
fn validate_command_args(cli: &Cli) -> Result<(), ConfigError> {
    cli.validate().map_err(ConfigError::mutual_exclusivity)
}

/// Read and parse a directive block file
fn load_block_settings(path: &Path) -> Result<NotifierSettings, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::file_not_found(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::parse(format!(
            "failed to read block file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_block(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_execute_provision_dry_run() {
        let cli = Cli::try_parse_from(["beacon-rs", "provision", "--dry-run"]).unwrap();
        let mut settings = Settings::default();
        settings.notifier.url = "https://hooks.example.com".to_string();

        execute_command(&cli, settings).await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_block_dry_run() {
        let mut block = NamedTempFile::new().unwrap();
        write!(
            block,
            "notifier {{\n url https://hooks.example.com\n username u\n password p\n}}"
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "beacon-rs",
            "provision",
            "--block",
            block.path().to_str().unwrap(),
            "--dry-run",
        ])
        .unwrap();

        execute_command(&cli, Settings::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_block_with_parse_error() {
        let mut block = NamedTempFile::new().unwrap();
        write!(block, "notifier {{\n secret foo\n}}").unwrap();

        let cli = Cli::try_parse_from([
            "beacon-rs",
            "provision",
            "--block",
            block.path().to_str().unwrap(),
            "--dry-run",
        ])
        .unwrap();

        let err = execute_command(&cli, Settings::default()).await.unwrap_err();
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn test_load_block_settings_missing_file() {
        let err = load_block_settings(Path::new("/nonexistent/notifier.conf")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
