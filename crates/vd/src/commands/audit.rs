//! `vd audit` command implementation.

use clap::Args;
use vd_audit::{AuditReport, Auditor, IssueCategory};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the audit command.
#[derive(Args)]
pub(crate) struct AuditArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl AuditArgs {
    /// Execute the audit command.
    ///
    /// # Errors
    ///
    /// Returns an error if the docs directory cannot be audited or any issue
    /// is found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let source_dir = &config.docs_resolved.source_dir;

        output.info(&format!("Auditing {}", source_dir.display()));
        let report = Auditor::new(source_dir, config.audit).run()?;
        tracing::info!(
            pages = report.pages_scanned(),
            issues = report.total(),
            summary = %summary(&report),
            "Audit report ready"
        );

        if report.is_clean() {
            output.success(&format!(
                "No issues found in {} pages",
                report.pages_scanned()
            ));
            return Ok(());
        }

        for category in IssueCategory::ALL {
            let lines = category_lines(&report, category);
            if lines.is_empty() {
                continue;
            }
            output.highlight(&format!("{category} ({})", lines.len()));
            for line in &lines {
                output.print(line);
            }
        }
        output.separator();
        output.detail(&summary(&report));

        Err(CliError::Validation(format!(
            "{} issues found in {} pages",
            report.total(),
            report.pages_scanned()
        )))
    }
}

fn category_lines(report: &AuditReport, category: IssueCategory) -> Vec<String> {
    report
        .by_category(category)
        .map(|issue| format!("  {}: {}", issue.file.display(), issue.detail))
        .collect()
}

/// Per-category counts, e.g. `BROKEN_LINK: 2, STUB_PAGE: 1`.
fn summary(report: &AuditReport) -> String {
    IssueCategory::ALL
        .iter()
        .filter_map(|&category| match report.count(category) {
            0 => None,
            n => Some(format!("{category}: {n}")),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use vd_config::AuditConfig;

    use super::*;

    #[test]
    fn test_report_lines() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("snake")).unwrap();
        fs::write(dir.path().join("snake/faq.md"), "# 常见问题\n").unwrap();
        fs::write(dir.path().join("index.md"), "# Home\n\n[坏链](/missing)\n").unwrap();

        let report = Auditor::new(dir.path(), AuditConfig::default()).run().unwrap();

        assert_eq!(
            category_lines(&report, IssueCategory::BrokenLink),
            vec!["  index.md: Link target not found: /missing (text: 坏链)"]
        );
        assert_eq!(summary(&report), "BROKEN_LINK: 1, STUB_PAGE: 2");
    }
}
