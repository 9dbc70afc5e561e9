//! Config command - inspect and initialize scanner configuration.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use billfold_core::ScanConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Destination path (default: user config dir)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

/// Default config file location.
pub(crate) fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("billfold")
        .join("config.json")
}

/// Load the scan config from an explicit path or the default location.
pub(crate) fn load(config_path: Option<&str>) -> anyhow::Result<ScanConfig> {
    match config_path {
        Some(path) => Ok(ScanConfig::from_file(Path::new(path))?),
        None => {
            let path = default_path();
            if path.exists() {
                Ok(ScanConfig::from_file(&path)?)
            } else {
                Ok(ScanConfig::default())
            }
        }
    }
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = load(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { path } => {
            let path = path.unwrap_or_else(default_path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            ScanConfig::default().save(&path)?;
            println!(
                "{} Default configuration written to {}",
                style("✓").green(),
                path.display()
            );
        }
    }

    Ok(())
}
