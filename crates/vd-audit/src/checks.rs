//! Per-page checks.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use vd_config::AuditConfig;

use crate::report::{Issue, IssueCategory};

/// Markdown image or link: `![alt](path)` / `[text](path)`.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([^\]]*)\]\(([^)]+)\)").expect("invalid markdown link regex")
});

static IMAGE_NAME_CONVENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9-]+-[a-z0-9-]+\.\w+$").expect("invalid image name regex")
});

/// Page kind, which decides the sections a page must contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Index,
    Faq,
    Plan,
    Concept,
    Tutorial,
}

impl PageKind {
    /// Classify a page by its file name and parent directory.
    pub fn classify(path: &Path) -> Self {
        let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        let parent = path
            .parent()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();

        if stem == "index" {
            Self::Index
        } else if stem == "faq" {
            Self::Faq
        } else if parent == "plans" {
            Self::Plan
        } else if stem.starts_with("intro-") || stem.starts_with("what-is-") {
            Self::Concept
        } else {
            Self::Tutorial
        }
    }

    /// Key used in `audit.required_sections`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Faq => "faq",
            Self::Plan => "plan",
            Self::Concept => "concept",
            Self::Tutorial => "tutorial",
        }
    }
}

/// Inputs shared by the checks of one page.
pub(crate) struct PageCheck<'a> {
    pub source_dir: &'a Path,
    /// Absolute path of the page.
    pub path: &'a Path,
    /// Path reported in issues.
    pub display: &'a Path,
    pub content: &'a str,
    pub config: &'a AuditConfig,
}

impl PageCheck<'_> {
    /// Run every check and return the findings in source order.
    pub(crate) fn run(&self) -> Vec<Issue> {
        let mut issues = Vec::new();
        self.check_references(&mut issues);
        self.check_sections(&mut issues);
        self.check_stub(&mut issues);
        issues
    }

    fn issue(&self, category: IssueCategory, detail: String) -> Issue {
        Issue {
            category,
            file: self.display.to_path_buf(),
            detail,
        }
    }

    fn page_dir(&self) -> &Path {
        self.path.parent().unwrap_or(self.source_dir)
    }

    fn check_references(&self, issues: &mut Vec<Issue>) {
        for caps in LINK_PATTERN.captures_iter(self.content) {
            let is_image = &caps[1] == "!";
            let text = &caps[2];
            // Drop an optional title: ![alt](path "title")
            let target = caps[3].split_whitespace().next().unwrap_or_default();

            if target.starts_with("http://") || target.starts_with("https://") {
                continue;
            }
            if is_image {
                self.check_image(text, target, issues);
            } else {
                self.check_link(text, target, issues);
            }
        }
    }

    fn check_image(&self, alt: &str, target: &str, issues: &mut Vec<Issue>) {
        // Absolute image paths are served from the public directory
        let file = match target.strip_prefix('/') {
            Some(rest) => self.source_dir.join("public").join(rest),
            None => self.page_dir().join(target),
        };

        match fs::metadata(&file) {
            Err(_) => issues.push(self.issue(
                IssueCategory::MissingImage,
                format!("Image not found: {target} (alt: {alt})"),
            )),
            Ok(meta) if meta.len() < self.config.placeholder_threshold => {
                issues.push(self.issue(
                    IssueCategory::PendingScreenshot,
                    format!("Save to: {target} | Capture: {alt}"),
                ));
            }
            Ok(_) => {}
        }

        let name = Path::new(target)
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if !IMAGE_NAME_CONVENTION.is_match(&name) {
            issues.push(self.issue(
                IssueCategory::ImageNaming,
                format!("Non-standard name: {name} (expected: section-description.ext)"),
            ));
        }
    }

    fn check_link(&self, text: &str, target: &str, issues: &mut Vec<Issue>) {
        if target.starts_with('#') || target.starts_with("mailto:") {
            return;
        }
        let path = target.split('#').next().unwrap_or_default();
        if path.is_empty() {
            return;
        }

        let resolved = match path.strip_prefix('/') {
            Some(rest) => self.source_dir.join(rest),
            None => self.page_dir().join(path),
        };

        if !link_target_exists(&resolved) {
            issues.push(self.issue(
                IssueCategory::BrokenLink,
                format!("Link target not found: {target} (text: {text})"),
            ));
        }
    }

    fn check_sections(&self, issues: &mut Vec<Issue>) {
        let kind = PageKind::classify(self.path);
        let Some(required) = self.config.required_sections.get(kind.as_str()) else {
            return;
        };
        for section in required {
            if !self.content.contains(section.as_str()) {
                issues.push(self.issue(
                    IssueCategory::MissingSection,
                    format!(
                        "Missing required section: '{section}' (page type: {})",
                        kind.as_str()
                    ),
                ));
            }
        }
    }

    fn check_stub(&self, issues: &mut Vec<Issue>) {
        let lines = self.content.lines().filter(|l| !l.trim().is_empty()).count();
        if lines < self.config.min_content_lines {
            issues.push(self.issue(
                IssueCategory::StubPage,
                format!("Only {lines} non-empty line(s) of content"),
            ));
        }
    }
}

/// Whether a link target exists, following the generator's clean URL rules.
///
/// `/guide/foo` resolves to `guide/foo.md`, `guide/foo/index.md` or the path
/// itself; `foo.html` resolves to `foo.md`.
fn link_target_exists(target: &Path) -> bool {
    match target.extension().and_then(|e| e.to_str()) {
        None => {
            target.with_extension("md").exists()
                || target.join("index.md").exists()
                || target.exists()
        }
        Some("html") => target.with_extension("md").exists() || target.exists(),
        Some(_) => target.exists(),
    }
}

/// Path of `path` relative to `base`, or `path` itself when outside it.
pub(crate) fn display_path(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}
