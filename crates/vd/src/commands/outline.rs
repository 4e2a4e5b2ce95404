//! `vd outline` command implementation.

use std::path::PathBuf;

use clap::Args;
use vd_site::{Heading, LabelKey, PageIndex, Site};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the outline command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    /// Markdown file to outline.
    file: PathBuf,

    /// Print headings as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl OutlineArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let markdown = std::fs::read_to_string(&self.file).map_err(|source| CliError::Read {
            path: self.file.clone(),
            source,
        })?;

        let site = Site::new(config.site, PageIndex::default());
        let headings = site.outline(&markdown);

        if self.json {
            output.print(&serde_json::to_string_pretty(&headings)?);
            return Ok(());
        }

        output.highlight(site.localize(LabelKey::Outline).unwrap_or("On this page"));
        let min = site.config().theme_config.outline.level.min;
        for line in indent(&headings, min) {
            output.print(&line);
        }
        Ok(())
    }
}

/// Headings indented by depth below the outline's top level.
fn indent(headings: &[Heading], min: u8) -> Vec<String> {
    headings
        .iter()
        .map(|h| {
            let depth = usize::from(h.level.saturating_sub(min));
            format!("{}{} #{}", "  ".repeat(depth + 1), h.title, h.id)
        })
        .collect()
}
