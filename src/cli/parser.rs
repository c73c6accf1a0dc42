//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// A provisioning notifier for external endpoints
#[derive(Parser, Debug)]
#[command(name = "beacon-rs")]
#[command(about = "Announce a provisioned configuration to an external endpoint")]
#[command(long_about = "
Beacon-rs loads a three-field notifier configuration (url, username,
password), resolves {placeholder} tokens against the process environment,
and announces itself to the configured endpoint with a single JSON POST.

EXAMPLES:
    # Provision from a TOML settings file
    beacon-rs --config beacon.toml provision

    # Provision from a directive block file
    beacon-rs provision --block notifier.conf

    # Settings from environment variables only
    BEACON_NOTIFIER__URL=https://hooks.example.com beacon-rs provision

    # Validate and resolve configuration without sending anything
    beacon-rs --config beacon.toml provision --dry-run

The request is attempted exactly once; any non-200 response or transport
failure exits non-zero.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Settings file path
    ///
    /// TOML file with [notifier] and [logger] tables. Environment
    /// variables with the BEACON_ prefix override file values
    /// (BEACON_NOTIFIER__URL -> notifier.url). The file must exist and be
    /// readable. Mutually exclusive with 'provision --block'.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Raises log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with
    /// --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve configuration and send the provisioning request (default)
    ///
    /// Loads the notifier settings, resolves placeholders against the
    /// process environment, and POSTs the provisioning payload. Exits 0
    /// only when the endpoint answers 200.
    Provision {
        /// Directive block file
        ///
        /// Loads the notifier settings from a directive text block instead
        /// of TOML settings:
        ///
        ///   notifier {
        ///       url https://hooks.example.com/provision
        ///       username deploy-bot
        ///       password "{env.BEACON_PASSWORD}"
        ///   }
        #[arg(long, value_name = "FILE", value_parser = super::validation::validate_file_path)]
        block: Option<PathBuf>,

        /// Validate and resolve configuration without sending the request
        ///
        /// Prints the resolved target and exits. Returns exit code 0 if
        /// the configuration loads, non-zero otherwise.
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        if let Some(Commands::Provision { block: Some(_), .. }) = &self.command
            && self.config.is_some()
        {
            return Err(
                "--config and --block cannot both be set. Use --config for TOML settings \
                 or --block for a directive block file."
                    .to_string(),
            );
        }

        Ok(())
    }

    /// Log level implied by --verbose/--quiet, if either was given
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}
