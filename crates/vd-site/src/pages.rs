//! Page routes discovered from the docs tree, and link validation.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use vd_config::{NavItem, SiteConfig};

use crate::route;
use crate::{InvalidLink, SiteError};

/// Set of page routes available in the docs tree.
///
/// Routes carry a leading slash: `guide/first-chat.md` is `/guide/first-chat`,
/// `guide/index.md` is `/guide/` and the root `index.md` is `/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageIndex {
    routes: BTreeSet<String>,
}

impl PageIndex {
    /// Walk `source_dir` and collect the route of every Markdown file.
    ///
    /// Hidden files and directories (such as `.vitepress`) are skipped.
    /// Returns an empty index if the directory doesn't exist.
    pub fn scan(source_dir: &Path) -> Self {
        let mut routes = BTreeSet::new();
        if source_dir.exists() {
            scan_directory(source_dir, "/", &mut routes);
        } else {
            tracing::warn!(path = %source_dir.display(), "Docs directory does not exist");
        }
        tracing::debug!(page_count = routes.len(), "Page scan completed");
        Self { routes }
    }

    /// Build an index from known routes.
    pub fn from_routes<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `link` names an existing page.
    ///
    /// `/guide` also matches a `/guide/` index page.
    pub fn resolves(&self, link: &str) -> bool {
        let Some(route) = route::normalize(link) else {
            return true;
        };
        self.routes.contains(&route)
            || (!route.ends_with('/') && self.routes.contains(&format!("{route}/")))
    }

    /// Routes in sorted order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn scan_directory(dir_path: &Path, url_prefix: &str, routes: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        tracing::warn!(path = %dir_path.display(), "Failed to read directory");
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&path, &format!("{url_prefix}{name}/"), routes);
        } else if let Some(stem) = name.strip_suffix(".md") {
            if stem == "index" {
                routes.insert(url_prefix.to_owned());
            } else {
                routes.insert(format!("{url_prefix}{stem}"));
            }
        }
    }
}

fn check_link(
    pages: &PageIndex,
    item: &NavItem,
    location: impl FnOnce() -> String,
    invalid: &mut Vec<InvalidLink>,
) {
    if !pages.resolves(&item.link) {
        invalid.push(InvalidLink {
            location: location(),
            text: item.text.clone(),
            link: item.link.clone(),
        });
    }
}

/// Check that every nav and sidebar link resolves to a page.
///
/// External links are not checked. All failures are reported together.
///
/// # Errors
///
/// Returns [`SiteError::InvalidLinks`] listing every unresolved link.
pub fn validate_links(config: &SiteConfig, pages: &PageIndex) -> Result<(), SiteError> {
    let theme = &config.theme_config;
    let mut invalid = Vec::new();

    for item in &theme.nav {
        check_link(pages, item, || "nav".to_owned(), &mut invalid);
    }
    for (prefix, entries) in &theme.sidebar {
        for entry in entries {
            for item in &entry.items {
                let location = || format!("sidebar \"{prefix}\" > {}", entry.text);
                check_link(pages, item, location, &mut invalid);
            }
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(SiteError::InvalidLinks(invalid))
    }
}
