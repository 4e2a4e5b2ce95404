//! CLI command implementations.

pub(crate) mod audit;
pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod outline;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use vd_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use audit::AuditArgs;
pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use outline::OutlineArgs;
pub(crate) use sidebar::SidebarArgs;

/// Configuration arguments shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover vd.toml).
    #[arg(short, long, env = "VD_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base URL (overrides config).
    #[arg(long)]
    base: Option<String>,
}

impl ConfigArgs {
    /// Load the configuration with command-line overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            base: self.base.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
