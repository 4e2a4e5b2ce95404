//! Audit findings.

use std::fmt;
use std::path::PathBuf;

/// Kind of problem found in a page.
///
/// Variant order is the order categories are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueCategory {
    /// Image exists but is a placeholder stub awaiting a real screenshot.
    PendingScreenshot,
    /// Referenced image file does not exist.
    MissingImage,
    /// Page lacks a section its kind requires.
    MissingSection,
    /// Internal link points to a missing file.
    BrokenLink,
    /// Image file name breaks the `section-description.ext` convention.
    ImageNaming,
    /// Page has almost no content.
    StubPage,
}

impl IssueCategory {
    pub const ALL: [Self; 6] = [
        Self::PendingScreenshot,
        Self::MissingImage,
        Self::MissingSection,
        Self::BrokenLink,
        Self::ImageNaming,
        Self::StubPage,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingScreenshot => "PENDING_SCREENSHOT",
            Self::MissingImage => "MISSING_IMAGE",
            Self::MissingSection => "MISSING_SECTION",
            Self::BrokenLink => "BROKEN_LINK",
            Self::ImageNaming => "IMAGE_NAMING",
            Self::StubPage => "STUB_PAGE",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub category: IssueCategory,
    /// Page path relative to the docs directory.
    pub file: PathBuf,
    pub detail: String,
}

/// All findings of an audit run, grouped by category and then by file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditReport {
    issues: Vec<Issue>,
    pages_scanned: usize,
}

impl AuditReport {
    pub(crate) fn new(mut issues: Vec<Issue>, pages_scanned: usize) -> Self {
        // Stable: keeps source order within one file
        issues.sort_by(|a, b| (a.category, &a.file).cmp(&(b.category, &b.file)));
        Self {
            issues,
            pages_scanned,
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn pages_scanned(&self) -> usize {
        self.pages_scanned
    }

    /// Findings of one category.
    pub fn by_category(&self, category: IssueCategory) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.category == category)
    }

    pub fn count(&self, category: IssueCategory) -> usize {
        self.by_category(category).count()
    }

    pub fn total(&self) -> usize {
        self.issues.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
