//! Immutable site value handed to page renders.

use std::path::Path;

use serde::Serialize;
use vd_config::{NavItem, SidebarEntry, SiteConfig};

use crate::SiteError;
use crate::labels::{self, LabelKey, UiLabels};
use crate::outline::{self, Heading};
use crate::pages::{self, PageIndex};
use crate::sidebar::{self, FooterLinks};

/// Site configuration together with the pages it describes.
///
/// Built once before rendering and only read afterwards, so a single
/// instance can be shared across render threads.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    pages: PageIndex,
}

/// Everything the theme needs to lay out one page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext<'a> {
    /// Page path as requested.
    pub path: &'a str,
    /// Sidebar groups for the page's section.
    pub sidebar: &'a [SidebarEntry],
    /// Highlighted nav item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_nav: Option<&'a NavItem>,
    /// Previous/next pages.
    pub footer: FooterLinks<'a>,
    /// Configured UI labels.
    pub labels: UiLabels<'a>,
}

impl Site {
    /// Create a site from an already validated configuration and page index.
    pub fn new(config: SiteConfig, pages: PageIndex) -> Self {
        Self { config, pages }
    }

    /// Scan `source_dir` and check every configured link against it.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidLinks`] if any nav or sidebar link does not
    /// resolve to a page.
    pub fn load(config: SiteConfig, source_dir: &Path) -> Result<Self, SiteError> {
        let pages = PageIndex::scan(source_dir);
        pages::validate_links(&config, &pages)?;
        tracing::info!(
            pages = pages.len(),
            source_dir = %source_dir.display(),
            "Site loaded"
        );
        Ok(Self::new(config, pages))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn pages(&self) -> &PageIndex {
        &self.pages
    }

    /// Sidebar groups for `path` (empty when no section matches).
    pub fn sidebar(&self, path: &str) -> &[SidebarEntry] {
        sidebar::resolve_sidebar(&self.config.theme_config.sidebar, path)
    }

    /// Nav item highlighted for `path`.
    pub fn active_nav(&self, path: &str) -> Option<&NavItem> {
        let nav = &self.config.theme_config.nav;
        sidebar::active_nav(nav, path).map(|i| &nav[i])
    }

    /// Previous/next links for `path`.
    pub fn doc_footer(&self, path: &str) -> FooterLinks<'_> {
        sidebar::doc_footer(self.sidebar(path), path)
    }

    /// Outline headings of a Markdown document, filtered by the configured depth.
    pub fn outline(&self, markdown: &str) -> Vec<Heading> {
        let headings = outline::extract_headings(markdown);
        outline::resolve_outline(self.config.theme_config.outline.level, &headings)
    }

    /// Look up a configured UI label.
    pub fn localize(&self, key: LabelKey) -> Result<&str, SiteError> {
        labels::localize(&self.config.theme_config, key)
    }

    /// Resolve everything a render of `path` needs.
    ///
    /// Never fails: unmatched paths get an empty sidebar and no footer links.
    pub fn page_context<'a>(&'a self, path: &'a str) -> PageContext<'a> {
        PageContext {
            path,
            sidebar: self.sidebar(path),
            active_nav: self.active_nav(path),
            footer: self.doc_footer(path),
            labels: UiLabels::resolve(&self.config.theme_config),
        }
    }
}
