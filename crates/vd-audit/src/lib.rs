//! Content audit for VD documentation sources.
//!
//! Walks the Markdown pages of a docs directory and reports missing or
//! placeholder images, image naming violations, missing required sections,
//! broken internal links and stub pages. Pages are checked in parallel.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use vd_audit::Auditor;
//! use vd_config::AuditConfig;
//!
//! let report = Auditor::new(Path::new("docs"), AuditConfig::default()).run()?;
//! for issue in report.issues() {
//!     println!("[{}] {}: {}", issue.category, issue.file.display(), issue.detail);
//! }
//! # Ok(())
//! # }
//! ```

mod checks;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use vd_config::AuditConfig;

pub use checks::PageKind;
pub use report::{AuditReport, Issue, IssueCategory};

use checks::PageCheck;

/// Audit error.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// The docs path is missing or not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// A page could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runs the content audit over a docs directory.
pub struct Auditor {
    source_dir: PathBuf,
    config: AuditConfig,
}

impl Auditor {
    pub fn new(source_dir: &Path, config: AuditConfig) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            config,
        }
    }

    /// Audit every page and collect the findings.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::NotADirectory`] if the docs directory is missing
    /// and [`AuditError::Io`] if a page cannot be read as UTF-8 text.
    pub fn run(&self) -> Result<AuditReport, AuditError> {
        if !self.source_dir.is_dir() {
            return Err(AuditError::NotADirectory(self.source_dir.clone()));
        }

        let mut pages = Vec::new();
        self.collect_pages(&self.source_dir, &mut pages);
        pages.sort();
        tracing::debug!(page_count = pages.len(), "Collected pages for audit");

        let issues = pages
            .par_iter()
            .map(|path| self.audit_page(path))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect();

        let report = AuditReport::new(issues, pages.len());
        tracing::info!(
            pages = report.pages_scanned(),
            issues = report.total(),
            "Audit completed"
        );
        Ok(report)
    }

    fn audit_page(&self, path: &Path) -> Result<Vec<Issue>, AuditError> {
        let content = fs::read_to_string(path).map_err(|source| AuditError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let display = checks::display_path(path, &self.source_dir);

        Ok(PageCheck {
            source_dir: &self.source_dir,
            path,
            display: &display,
            content: &content,
            config: &self.config,
        }
        .run())
    }

    /// Recursively collect `.md` files, skipping hidden and excluded directories.
    fn collect_pages(&self, dir: &Path, pages: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            tracing::warn!(path = %dir.display(), "Failed to read directory");
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                if self.config.skip_dirs.contains(&name) {
                    tracing::debug!(path = %path.display(), "Skipping excluded directory");
                    continue;
                }
                self.collect_pages(&path, pages);
            } else if path.extension().is_some_and(|e| e == "md") {
                pages.push(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const GOOD_PAGE: &str = "# 标题\n\n## 本节目标\n\n内容。\n\n更多内容。\n\n## 下一步\n\n继续。\n";

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = Auditor::new(&dir.path().join("missing"), AuditConfig::default())
            .run()
            .unwrap_err();
        assert!(matches!(err, AuditError::NotADirectory(_)));
    }

    #[test]
    fn test_clean_tree() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "pomodoro/countdown.md", GOOD_PAGE);
        write(dir.path(), "pomodoro/controls.md", GOOD_PAGE);

        let report = Auditor::new(dir.path(), AuditConfig::default()).run().unwrap();

        assert!(report.is_clean());
        assert_eq!(report.pages_scanned(), 2);
    }

    #[test]
    fn test_skips_plans_and_hidden_dirs() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "guide/first-chat.md", GOOD_PAGE);
        write(dir.path(), "plans/roadmap.md", "stub");
        write(dir.path(), ".vitepress/notes.md", "stub");

        let report = Auditor::new(dir.path(), AuditConfig::default()).run().unwrap();

        assert_eq!(report.pages_scanned(), 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_report_across_pages() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "snake/basic-game.md", "# 基础游戏\n");
        write(
            dir.path(),
            "pomodoro/countdown.md",
            &format!("{GOOD_PAGE}\n[坏链](./missing)\n"),
        );

        let report = Auditor::new(dir.path(), AuditConfig::default()).run().unwrap();

        let found: Vec<(IssueCategory, String)> = report
            .issues()
            .iter()
            .map(|i| (i.category, i.file.display().to_string()))
            .collect();
        assert_eq!(
            found,
            vec![
                (IssueCategory::MissingSection, "snake/basic-game.md".to_owned()),
                (IssueCategory::MissingSection, "snake/basic-game.md".to_owned()),
                (IssueCategory::BrokenLink, "pomodoro/countdown.md".to_owned()),
                (IssueCategory::StubPage, "snake/basic-game.md".to_owned()),
            ]
        );
    }

    #[test]
    fn test_custom_required_sections() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "guide/setup.md", GOOD_PAGE);
        let mut config = AuditConfig::default();
        config
            .required_sections
            .insert("tutorial".to_owned(), vec!["Summary".to_owned()]);

        let report = Auditor::new(dir.path(), config).run().unwrap();

        assert_eq!(report.count(IssueCategory::MissingSection), 1);
        assert!(report.issues()[0].detail.contains("Summary"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.md"), [0xff, 0xfe, 0xfd]).unwrap();

        let err = Auditor::new(dir.path(), AuditConfig::default())
            .run()
            .unwrap_err();

        assert!(matches!(err, AuditError::Io { .. }));
        assert!(err.to_string().contains("bad.md"));
    }
}
