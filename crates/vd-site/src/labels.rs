//! UI label lookup.

use std::fmt;

use serde::Serialize;
use vd_config::ThemeConfig;

use crate::SiteError;

/// Configurable UI label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKey {
    DocFooterPrev,
    DocFooterNext,
    SidebarMenu,
    ReturnToTop,
    DarkModeSwitch,
    Outline,
}

impl LabelKey {
    /// Every label a rendered page needs.
    pub const ALL: [Self; 6] = [
        Self::DocFooterPrev,
        Self::DocFooterNext,
        Self::SidebarMenu,
        Self::ReturnToTop,
        Self::DarkModeSwitch,
        Self::Outline,
    ];

    /// Field path of the label in the site configuration.
    #[must_use]
    pub fn config_key(self) -> &'static str {
        match self {
            Self::DocFooterPrev => "themeConfig.docFooter.prev",
            Self::DocFooterNext => "themeConfig.docFooter.next",
            Self::SidebarMenu => "themeConfig.sidebarMenuLabel",
            Self::ReturnToTop => "themeConfig.returnToTopLabel",
            Self::DarkModeSwitch => "themeConfig.darkModeSwitchLabel",
            Self::Outline => "themeConfig.outline.label",
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Look up a configured label.
///
/// # Errors
///
/// Returns [`SiteError::MissingLabel`] if the label is not configured.
pub fn localize(theme: &ThemeConfig, key: LabelKey) -> Result<&str, SiteError> {
    let value = match key {
        LabelKey::DocFooterPrev => theme.doc_footer.prev.as_deref(),
        LabelKey::DocFooterNext => theme.doc_footer.next.as_deref(),
        LabelKey::SidebarMenu => theme.sidebar_menu_label.as_deref(),
        LabelKey::ReturnToTop => theme.return_to_top_label.as_deref(),
        LabelKey::DarkModeSwitch => theme.dark_mode_switch_label.as_deref(),
        LabelKey::Outline => theme.outline.label.as_deref(),
    };
    value.ok_or(SiteError::MissingLabel(key))
}

/// UI labels of a page. Labels left out of the configuration are `None` and
/// fall back to the theme's defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiLabels<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_menu: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_top: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode_switch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<&'a str>,
}

impl<'a> UiLabels<'a> {
    /// Collect every configured label.
    pub fn resolve(theme: &'a ThemeConfig) -> Self {
        let label = move |key: LabelKey| localize(theme, key).ok();
        Self {
            prev: label(LabelKey::DocFooterPrev),
            next: label(LabelKey::DocFooterNext),
            sidebar_menu: label(LabelKey::SidebarMenu),
            return_to_top: label(LabelKey::ReturnToTop),
            dark_mode_switch: label(LabelKey::DarkModeSwitch),
            outline: label(LabelKey::Outline),
        }
    }
}

#[cfg(test)]
mod tests {
    use vd_config::SiteConfig;

    use super::*;

    const COURSE_TOML: &str = include_str!("../../../vd.toml");

    #[test]
    fn test_localize_course_labels() {
        let config = SiteConfig::from_toml_str(COURSE_TOML).unwrap();
        let theme = &config.theme_config;

        assert_eq!(localize(theme, LabelKey::DocFooterPrev).unwrap(), "上一节");
        assert_eq!(localize(theme, LabelKey::DocFooterNext).unwrap(), "下一节");
        assert_eq!(localize(theme, LabelKey::SidebarMenu).unwrap(), "菜单");
        assert_eq!(localize(theme, LabelKey::ReturnToTop).unwrap(), "回到顶部");
        assert_eq!(localize(theme, LabelKey::DarkModeSwitch).unwrap(), "主题");
        assert_eq!(localize(theme, LabelKey::Outline).unwrap(), "本页目录");
    }

    #[test]
    fn test_localize_all_course_labels_present() {
        let config = SiteConfig::from_toml_str(COURSE_TOML).unwrap();
        for key in LabelKey::ALL {
            assert!(localize(&config.theme_config, key).is_ok(), "{key} missing");
        }
    }

    #[test]
    fn test_localize_missing_label() {
        let theme = ThemeConfig::default();
        let err = localize(&theme, LabelKey::ReturnToTop).unwrap_err();
        assert!(matches!(err, SiteError::MissingLabel(LabelKey::ReturnToTop)));
        assert!(err.to_string().contains("themeConfig.returnToTopLabel"));
    }

    #[test]
    fn test_ui_labels_keep_configured_subset() {
        let mut theme = ThemeConfig::default();
        theme.doc_footer.prev = Some("Prev".to_owned());

        let labels = UiLabels::resolve(&theme);

        assert_eq!(
            labels,
            UiLabels {
                prev: Some("Prev"),
                ..UiLabels::default()
            }
        );
    }
}
