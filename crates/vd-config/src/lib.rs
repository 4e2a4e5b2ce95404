//! Configuration management for VD.
//!
//! Parses `vd.toml` project files with serde and provides auto-discovery of
//! the file in parent directories. A project file holds the [`SiteConfig`]
//! fields at the top level plus the `[docs]` and `[audit]` sections used by
//! the tooling.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `base` and `docs.source_dir` support `${VAR}` and `${VAR:-default}`.

mod expand;
mod site;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use site::{
    DocFooter, MAX_HEADING_LEVEL, NavItem, OutlineConfig, OutlineLevel, SearchConfig,
    SearchProvider, SidebarEntry, SidebarMapping, SiteConfig, ThemeConfig,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site base URL.
    pub base: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "vd.toml";

/// Project configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Site configuration consumed by the generator.
    #[serde(flatten)]
    pub site: SiteConfig,
    /// Documentation sources (paths are relative strings from TOML).
    #[serde(default)]
    docs: DocsConfigRaw,
    /// Content audit settings.
    #[serde(default)]
    pub audit: AuditConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Content audit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Section titles every page of a kind must contain, keyed by page kind
    /// (`tutorial`, `concept`, `faq`, `index`, `plan`).
    pub required_sections: BTreeMap<String, Vec<String>>,
    /// Images smaller than this many bytes are treated as placeholders.
    pub placeholder_threshold: u64,
    /// Pages with fewer non-empty lines are reported as stubs.
    pub min_content_lines: usize,
    /// Directory names excluded from the audit.
    pub skip_dirs: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        let steps = vec!["本节目标".to_owned(), "下一步".to_owned()];
        Self {
            required_sections: BTreeMap::from([
                ("tutorial".to_owned(), steps.clone()),
                ("concept".to_owned(), steps),
                ("faq".to_owned(), vec!["常见问题".to_owned()]),
            ]),
            placeholder_threshold: 1024,
            min_content_lines: 5,
            skip_dirs: vec!["plans".to_owned()],
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Two sidebar keys match the same pages.
    #[error("Ambiguous sidebar prefixes \"{first}\" and \"{second}\" match the same pages")]
    AmbiguousSidebarPrefix {
        /// Key seen first.
        first: String,
        /// Key that collides with it.
        second: String,
    },
    /// Outline depth range is empty or outside 1..=6.
    #[error("Malformed outline range [{min}, {max}]: expected 1 <= min <= max <= 6")]
    MalformedOutlineRange {
        /// Lower bound as configured.
        min: u8,
        /// Upper bound as configured.
        max: u8,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `vd.toml` in current directory and parents;
    /// finding none is an error.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated again after overrides.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            return Err(ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)));
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            audit: AuditConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::info!(
            path = %path.display(),
            nav_items = config.site.theme_config.nav.len(),
            sidebar_sections = config.site.theme_config.sidebar.len(),
            "Loaded site configuration"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns the first schema violation found in the site or audit settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate()?;
        self.validate_audit()
    }

    fn validate_audit(&self) -> Result<(), ConfigError> {
        if self.audit.min_content_lines == 0 {
            return Err(ConfigError::Validation(
                "audit.min_content_lines must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base = expand::expand_env(&self.site.base, "base")?;
        if let Some(ref dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(dir, "docs.source_dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };
    }
}
