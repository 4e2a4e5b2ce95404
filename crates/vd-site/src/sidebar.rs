//! Sidebar, nav highlighting and doc footer resolution.
//!
//! All functions here are pure over the configuration they are given.

use serde::Serialize;
use vd_config::{NavItem, SidebarEntry, SidebarMapping};

use crate::route;

/// Sidebar entries for the page at `current_path`.
///
/// Picks the longest key of `mapping` that is a prefix of the path. Returns an
/// empty slice when no key matches.
pub fn resolve_sidebar<'a>(mapping: &'a SidebarMapping, current_path: &str) -> &'a [SidebarEntry] {
    let path = route::with_leading_slash(current_path);
    mapping
        .iter()
        .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, entries)| entries.as_slice())
        .unwrap_or(&[])
}

/// Index of the nav item highlighted for `current_path`.
///
/// A nav link is active for every page in its directory (`/pomodoro/create-project`
/// covers `/pomodoro/*`). Links to top-level pages are only active on that
/// exact page. The most specific match wins; ties go to the first item.
pub fn active_nav(nav: &[NavItem], current_path: &str) -> Option<usize> {
    let path = route::normalize(current_path)?;
    let mut best: Option<(usize, usize)> = None;

    for (i, item) in nav.iter().enumerate() {
        let Some(link) = route::normalize(&item.link) else {
            continue;
        };
        let section = route::section(&link);
        let specificity = if section == "/" {
            if link != path {
                continue;
            }
            link.len()
        } else if path.starts_with(section) {
            section.len()
        } else {
            continue;
        };

        if best.is_none_or(|(_, len)| specificity > len) {
            best = Some((i, specificity));
        }
    }

    best.map(|(i, _)| i)
}

/// Previous and next pages for the doc footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FooterLinks<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'a NavItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a NavItem>,
}

/// Neighbours of `current_path` in the reading order of `entries`.
///
/// Groups are read top to bottom, so the last item of one group links to the
/// first item of the next. A page missing from the sidebar gets no links.
pub fn doc_footer<'a>(entries: &'a [SidebarEntry], current_path: &str) -> FooterLinks<'a> {
    let items: Vec<&NavItem> = entries.iter().flat_map(|entry| &entry.items).collect();

    let Some(pos) = items
        .iter()
        .position(|item| is_current_page(&item.link, current_path))
    else {
        return FooterLinks::default();
    };

    FooterLinks {
        prev: pos.checked_sub(1).map(|i| items[i]),
        next: items.get(pos + 1).copied(),
    }
}

/// Whether `link` names the page at `current_path`.
///
/// Both sides are compared as routes, so `/snake/faq.md`, `snake/faq` and
/// `/snake/faq#q1` all name `/snake/faq`. External links never match.
pub fn is_current_page(link: &str, current_path: &str) -> bool {
    match (route::normalize(link), route::normalize(current_path)) {
        (Some(link), Some(path)) => link == path,
        _ => false,
    }
}
