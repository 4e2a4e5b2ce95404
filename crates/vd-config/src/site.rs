//! Site configuration data model.
//!
//! Field names follow the camelCase shape a documentation generator consumes
//! (`themeConfig.docFooter.prev`, ...). The same types are used for the TOML
//! project file and for the JSON export, so both representations round-trip.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ConfigError;

/// Deepest heading level an outline may include.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Sidebar menus keyed by URL path prefix (e.g. `/guide/`).
pub type SidebarMapping = BTreeMap<String, Vec<SidebarEntry>>;

/// Root site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Locale code (e.g. `zh-CN`).
    pub lang: String,
    /// Base URL the site is served under.
    pub base: String,
    /// Theme configuration (navigation, sidebar, labels).
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en-US".to_owned(),
            base: "/".to_owned(),
            theme_config: ThemeConfig::default(),
        }
    }
}

/// Top-level navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Site-relative link target.
    pub link: String,
}

/// A titled group of links in a sidebar menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    /// Group title.
    pub text: String,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
    /// Whether the group renders collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

/// Theme configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top navigation bar.
    pub nav: Vec<NavItem>,
    /// Per-section sidebar menus.
    pub sidebar: SidebarMapping,
    /// Search backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
    /// In-page outline settings.
    pub outline: OutlineConfig,
    /// Previous/next link labels.
    pub doc_footer: DocFooter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode_switch_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_menu_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_top_label: Option<String>,
}

/// Search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

/// Search backend selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// In-browser index built at generation time.
    Local,
}

/// Labels for the previous/next links at the bottom of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocFooter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// In-page table of contents settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Heading depth range shown in the outline.
    pub level: OutlineLevel,
    /// Outline heading label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Inclusive heading depth range.
///
/// Serialized as `[min, max]`. On input a single depth `n` means `[n, n]` and
/// `"deep"` means `[2, 6]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutlineLevel {
    pub min: u8,
    pub max: u8,
}

impl OutlineLevel {
    /// Create a range without validating it.
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// The `"deep"` preset.
    #[must_use]
    pub const fn deep() -> Self {
        Self::new(2, MAX_HEADING_LEVEL)
    }

    /// Whether `depth` falls inside the range.
    #[must_use]
    pub fn contains(self, depth: u8) -> bool {
        (self.min..=self.max).contains(&depth)
    }

    /// Check `1 <= min <= max <= 6`.
    pub fn validate(self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max || self.max > MAX_HEADING_LEVEL {
            return Err(ConfigError::MalformedOutlineRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for OutlineLevel {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

impl Serialize for OutlineLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min, self.max].serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OutlineLevelRepr {
    Single(u8),
    Range(u8, u8),
    Named(String),
}

impl<'de> Deserialize<'de> for OutlineLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match OutlineLevelRepr::deserialize(deserializer)? {
            OutlineLevelRepr::Single(level) => Ok(Self::new(level, level)),
            OutlineLevelRepr::Range(min, max) => Ok(Self::new(min, max)),
            OutlineLevelRepr::Named(name) if name == "deep" => Ok(Self::deep()),
            OutlineLevelRepr::Named(name) => Err(serde::de::Error::custom(format!(
                "unknown outline level \"{name}\", expected a depth, [min, max] or \"deep\""
            ))),
        }
    }
}

impl SiteConfig {
    /// Parse a site configuration from TOML and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a site configuration from its JSON representation and validate it.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the schema invariants of the site configuration.
    ///
    /// Link targets are not checked here; they depend on the docs tree.
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::require_non_empty(&self.title, "title")?;
        crate::require_non_empty(&self.lang, "lang")?;
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            return Err(ConfigError::Validation(
                "base must start and end with '/'".to_owned(),
            ));
        }
        self.theme_config.validate()
    }
}

impl ThemeConfig {
    /// Validate navigation, sidebar and outline settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, item) in self.nav.iter().enumerate() {
            validate_link(item, &format!("themeConfig.nav[{i}]"))?;
        }
        validate_sidebar_prefixes(&self.sidebar)?;
        for (prefix, entries) in &self.sidebar {
            for entry in entries {
                for item in &entry.items {
                    validate_link(item, &format!("themeConfig.sidebar.\"{prefix}\""))?;
                }
            }
        }
        self.outline.level.validate()
    }
}

fn validate_link(item: &NavItem, field: &str) -> Result<(), ConfigError> {
    crate::require_non_empty(&item.text, &format!("{field}.text"))?;
    crate::require_non_empty(&item.link, &format!("{field}.link"))
}

/// Reject sidebar keys that cannot be told apart.
///
/// Keys must be absolute paths. A key such as `guide/` is rejected rather
/// than silently given a leading slash, so the key in `vd.toml` is the key
/// matched against page paths. Two keys that differ only by a trailing slash
/// (`/guide` and `/guide/`) would both claim the same pages.
fn validate_sidebar_prefixes(sidebar: &SidebarMapping) -> Result<(), ConfigError> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(sidebar.len());
    for key in sidebar.keys() {
        if !key.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "sidebar key \"{key}\" must start with '/'"
            )));
        }
        if let Some(first) = seen.insert(key.trim_end_matches('/'), key) {
            return Err(ConfigError::AmbiguousSidebarPrefix {
                first: first.to_owned(),
                second: key.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const COURSE_TOML: &str = include_str!("../../../vd.toml");

    fn course() -> SiteConfig {
        SiteConfig::from_toml_str(COURSE_TOML).unwrap()
    }

    fn nav(text: &str, link: &str) -> NavItem {
        NavItem {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }

    fn minimal() -> SiteConfig {
        SiteConfig {
            title: "Docs".to_owned(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_course_config_top_level() {
        let config = course();
        assert_eq!(config.title, "AI 开发 0 到 1");
        assert_eq!(config.lang, "zh-CN");
        assert_eq!(config.base, "/");
        assert_eq!(
            config.theme_config.search,
            Some(SearchConfig {
                provider: SearchProvider::Local
            })
        );
        assert_eq!(config.theme_config.outline.level, OutlineLevel::new(2, 3));
        assert_eq!(config.theme_config.outline.label.as_deref(), Some("本页目录"));
        assert_eq!(config.theme_config.doc_footer.prev.as_deref(), Some("上一节"));
        assert_eq!(config.theme_config.doc_footer.next.as_deref(), Some("下一节"));
        assert_eq!(
            config.theme_config.dark_mode_switch_label.as_deref(),
            Some("主题")
        );
        assert_eq!(config.theme_config.sidebar_menu_label.as_deref(), Some("菜单"));
        assert_eq!(
            config.theme_config.return_to_top_label.as_deref(),
            Some("回到顶部")
        );
    }

    #[test]
    fn test_course_config_nav_order() {
        let config = course();
        assert_eq!(
            config.theme_config.nav,
            vec![
                nav("首页", "/"),
                nav("环境准备", "/guide/what-is-vibe-coding"),
                nav("番茄时钟", "/pomodoro/create-project"),
                nav("贪吃蛇", "/snake/setup-environment"),
            ]
        );
    }

    #[test]
    fn test_course_config_sidebar_sections() {
        let config = course();
        let keys: Vec<&str> = config.theme_config.sidebar.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/guide/", "/pomodoro/", "/snake/"]);

        let pomodoro = &config.theme_config.sidebar["/pomodoro/"];
        assert_eq!(pomodoro.len(), 1);
        assert_eq!(pomodoro[0].text, "项目一：番茄时钟");
        assert_eq!(pomodoro[0].items.len(), 7);
        assert_eq!(pomodoro[0].items[0], nav("创建项目", "/pomodoro/create-project"));
        assert_eq!(pomodoro[0].items[6], nav("常见问题", "/pomodoro/faq"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = course();
        let json = config.to_json().unwrap();
        let parsed = SiteConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = course();
        let toml = config.to_toml().unwrap();
        let parsed = SiteConfig::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_uses_camel_case_shape() {
        let value: serde_json::Value = serde_json::from_str(&course().to_json().unwrap()).unwrap();
        assert_eq!(value["themeConfig"]["search"]["provider"], "local");
        assert_eq!(value["themeConfig"]["outline"]["level"], serde_json::json!([2, 3]));
        assert_eq!(value["themeConfig"]["docFooter"]["prev"], "上一节");
        assert_eq!(value["themeConfig"]["sidebarMenuLabel"], "菜单");
        assert!(value["themeConfig"]["sidebar"]["/guide/"][0].get("collapsed").is_none());
    }

    #[test]
    fn test_outline_level_single_depth() {
        let config: OutlineConfig = toml::from_str("level = 3").unwrap();
        assert_eq!(config.level, OutlineLevel::new(3, 3));
    }

    #[test]
    fn test_outline_level_deep() {
        let config: OutlineConfig = toml::from_str(r#"level = "deep""#).unwrap();
        assert_eq!(config.level, OutlineLevel::new(2, 6));
    }

    #[test]
    fn test_outline_level_unknown_name() {
        let result: Result<OutlineConfig, _> = toml::from_str(r#"level = "shallow""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_outline_level_defaults_to_h2() {
        let config: OutlineConfig = toml::from_str("").unwrap();
        assert_eq!(config.level, OutlineLevel::new(2, 2));
        assert!(config.label.is_none());
    }

    #[test]
    fn test_outline_level_contains() {
        let level = OutlineLevel::new(2, 3);
        assert!(!level.contains(1));
        assert!(level.contains(2));
        assert!(level.contains(3));
        assert!(!level.contains(4));
    }

    #[test]
    fn test_malformed_outline_range_min_greater_than_max() {
        let err = OutlineLevel::new(4, 2).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MalformedOutlineRange { min: 4, max: 2 }
        ));
    }

    #[test]
    fn test_malformed_outline_range_out_of_bounds() {
        assert!(OutlineLevel::new(0, 2).validate().is_err());
        assert!(OutlineLevel::new(2, 7).validate().is_err());
        assert!(OutlineLevel::new(1, 6).validate().is_ok());
    }

    #[test]
    fn test_ambiguous_sidebar_prefix() {
        let mut config = minimal();
        config.theme_config.sidebar.insert("/guide".to_owned(), Vec::new());
        config.theme_config.sidebar.insert("/guide/".to_owned(), Vec::new());

        let err = config.validate().unwrap_err();
        match err {
            ConfigError::AmbiguousSidebarPrefix { first, second } => {
                assert_eq!(first, "/guide");
                assert_eq!(second, "/guide/");
            }
            other => panic!("Expected AmbiguousSidebarPrefix, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_sidebar_prefixes_are_distinguishable() {
        let mut config = minimal();
        config.theme_config.sidebar.insert("/".to_owned(), Vec::new());
        config.theme_config.sidebar.insert("/guide/".to_owned(), Vec::new());
        config
            .theme_config
            .sidebar
            .insert("/guide/advanced/".to_owned(), Vec::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_relative_sidebar_key_rejected() {
        let mut config = minimal();
        config.theme_config.sidebar.insert("guide/".to_owned(), Vec::new());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("guide/"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = SiteConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_base_must_be_slash_delimited() {
        let config = SiteConfig {
            base: "/course".to_owned(),
            ..minimal()
        };
        assert!(config.validate().unwrap_err().to_string().contains("base"));
    }

    #[test]
    fn test_empty_nav_link_rejected() {
        let mut config = minimal();
        config.theme_config.nav.push(nav("Home", ""));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("themeConfig.nav[0].link"));
    }

    #[test]
    fn test_unknown_search_provider_rejected() {
        let toml = r#"
title = "Docs"

[themeConfig.search]
provider = "algolia"
"#;
        assert!(matches!(
            SiteConfig::from_toml_str(toml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_outline_in_file_rejected() {
        let toml = r#"
title = "Docs"

[themeConfig.outline]
level = [3, 2]
"#;
        assert!(matches!(
            SiteConfig::from_toml_str(toml),
            Err(ConfigError::MalformedOutlineRange { min: 3, max: 2 })
        ));
    }
}
