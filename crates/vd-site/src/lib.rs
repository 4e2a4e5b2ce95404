//! Navigation, sidebar and outline resolution for VD.
//!
//! This crate provides:
//! - [`Site`]: the immutable site value handed to page renders
//! - [`resolve_sidebar`], [`active_nav`], [`doc_footer`], [`is_current_page`]: per-page navigation
//! - [`extract_headings`], [`resolve_outline`]: in-page outline
//! - [`localize`]: UI label lookup
//! - [`PageIndex`], [`validate_links`]: build-time link checks
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use vd_config::SiteConfig;
//! use vd_site::Site;
//!
//! let config = SiteConfig::from_toml_str(&std::fs::read_to_string("vd.toml")?)?;
//! let site = Site::load(config, Path::new("docs"))?;
//!
//! let ctx = site.page_context("/pomodoro/countdown");
//! assert_eq!(ctx.sidebar[0].items.len(), 7);
//! # Ok(())
//! # }
//! ```

mod error;
mod labels;
mod outline;
mod pages;
mod route;
mod sidebar;
mod site;

pub use error::{InvalidLink, SiteError};
pub use labels::{LabelKey, UiLabels, localize};
pub use outline::{Heading, extract_headings, resolve_outline, slugify};
pub use pages::{PageIndex, validate_links};
pub use sidebar::{FooterLinks, active_nav, doc_footer, is_current_page, resolve_sidebar};
pub use site::{PageContext, Site};
