//! `vd check` command implementation.

use clap::Args;
use vd_site::Site;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a nav or sidebar
    /// link does not resolve to a page.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Source directory: {}",
            config.docs_resolved.source_dir.display()
        ));

        let site = Site::load(config.site, &config.docs_resolved.source_dir)?;
        let theme = &site.config().theme_config;
        tracing::info!(
            pages = site.pages().len(),
            nav_items = theme.nav.len(),
            "Configuration check passed"
        );

        output.success(&format!(
            "{}: {} pages, {} nav items, {} sidebar sections",
            site.config().title,
            site.pages().len(),
            theme.nav.len(),
            theme.sidebar.len()
        ));
        Ok(())
    }
}
