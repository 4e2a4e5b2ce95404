//! `vd export` command implementation.

use clap::{Args, ValueEnum};
use vd_config::SiteConfig;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Output representation of the site configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// camelCase JSON, as consumed by the site generator.
    #[default]
    Json,
    /// TOML, in the layout of `vd.toml`.
    Toml,
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: ExportFormat,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ExportArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load()?;
        Output::new().print(&render(&config.site, self.format)?);
        Ok(())
    }
}

fn render(site: &SiteConfig, format: ExportFormat) -> Result<String, CliError> {
    let rendered = match format {
        ExportFormat::Json => site.to_json()?,
        ExportFormat::Toml => site.to_toml()?,
    };
    Ok(rendered)
}
