//! CLI error types.

use std::path::PathBuf;

use vd_audit::AuditError;
use vd_config::ConfigError;
use vd_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Audit(#[from] AuditError),

    #[error("{0}")]
    Validation(String),
}
