//! `vd sidebar` command implementation.

use clap::Args;
use vd_site::{PageContext, PageIndex, Site};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path, e.g. `/pomodoro/countdown`.
    path: String,

    /// Print the page context as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl SidebarArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        // Navigation does not depend on the docs tree
        let site = Site::new(config.site, PageIndex::default());
        let ctx = site.page_context(&self.path);

        if self.json {
            output.print(&serde_json::to_string_pretty(&ctx)?);
            return Ok(());
        }

        output.highlight(&self.path);
        for line in describe(&ctx) {
            output.print(&line);
        }
        if ctx.sidebar.is_empty() {
            output.warning(&format!("No sidebar section matches {}", self.path));
        }
        Ok(())
    }
}

/// Plain-text rendering of a page's navigation.
fn describe(ctx: &PageContext<'_>) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(nav) = ctx.active_nav {
        lines.push(format!("Nav: {} ({})", nav.text, nav.link));
    }
    for group in ctx.sidebar {
        lines.push(format!("{}:", group.text));
        for item in &group.items {
            let marker = if vd_site::is_current_page(&item.link, ctx.path) {
                '>'
            } else {
                ' '
            };
            lines.push(format!("  {marker} {} ({})", item.text, item.link));
        }
    }
    if let Some(prev) = ctx.footer.prev {
        let label = ctx.labels.prev.unwrap_or("Previous");
        lines.push(format!("{label}: {} ({})", prev.text, prev.link));
    }
    if let Some(next) = ctx.footer.next {
        let label = ctx.labels.next.unwrap_or("Next");
        lines.push(format!("{label}: {} ({})", next.text, next.link));
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vd_config::SiteConfig;

    use super::*;

    const COURSE_TOML: &str = include_str!("../../../../vd.toml");

    #[test]
    fn test_describe_guide_page() {
        let config = SiteConfig::from_toml_str(COURSE_TOML).unwrap();
        let site = Site::new(config, PageIndex::default());
        let ctx = site.page_context("/guide/first-chat");

        let lines = describe(&ctx);

        assert_eq!(
            lines,
            vec![
                "Nav: 环境准备 (/guide/what-is-vibe-coding)",
                "环境准备:",
                "    什么是 Vibe Coding (/guide/what-is-vibe-coding)",
                "    安装 Cursor 编辑器 (/guide/install-cursor)",
                "  > 第一次和 AI 对话 (/guide/first-chat)",
                "上一节: 安装 Cursor 编辑器 (/guide/install-cursor)",
            ]
        );
    }

    #[test]
    fn test_describe_unmatched_page() {
        let config = SiteConfig::from_toml_str(COURSE_TOML).unwrap();
        let site = Site::new(config, PageIndex::default());
        let ctx = site.page_context("/about");

        assert!(describe(&ctx).is_empty());
    }

    #[test]
    fn test_describe_marks_page_given_as_file() {
        let config = SiteConfig::from_toml_str(COURSE_TOML).unwrap();
        let site = Site::new(config, PageIndex::default());
        let ctx = site.page_context("/snake/faq.md");

        let lines = describe(&ctx);

        assert!(lines.contains(&"  > 常见问题 (/snake/faq)".to_owned()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("上一节: 视觉打磨 (/snake/visual-polish)")
        );
    }

    #[test]
    fn test_describe_without_labels() {
        let mut config = SiteConfig::from_toml_str(COURSE_TOML).unwrap();
        config.theme_config.doc_footer = vd_config::DocFooter::default();
        let site = Site::new(config, PageIndex::default());
        let ctx = site.page_context("/pomodoro/countdown");

        let lines = describe(&ctx);

        assert_eq!(
            lines[lines.len() - 2..].to_vec(),
            vec![
                "Previous: 创建项目 (/pomodoro/create-project)",
                "Next: 控制按钮 (/pomodoro/controls)",
            ]
        );
    }
}
