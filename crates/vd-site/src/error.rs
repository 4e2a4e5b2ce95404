//! Site resolution errors.

use std::fmt;

use crate::LabelKey;

/// A nav or sidebar link that does not resolve to a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidLink {
    /// Where the link is declared (e.g. `nav` or `sidebar "/guide/" > 环境准备`).
    pub location: String,
    /// Link label.
    pub text: String,
    /// Link target as configured.
    pub link: String,
}

impl fmt::Display for InvalidLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\" -> {}", self.location, self.text, self.link)
    }
}

/// Site error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A required UI label is not configured.
    #[error("Missing label: {0}")]
    MissingLabel(LabelKey),
    /// Links that point to no existing page.
    #[error("{}", format_invalid_links(.0))]
    InvalidLinks(Vec<InvalidLink>),
}

fn format_invalid_links(links: &[InvalidLink]) -> String {
    let mut msg = format!("{} link(s) do not match any page:", links.len());
    for link in links {
        msg.push_str("\n  ");
        msg.push_str(&link.to_string());
    }
    msg
}
