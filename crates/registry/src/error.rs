// crates/registry/src/error.rs

use thiserror::Error;

/// Errors from resolving inputs or reading version listings.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("either a user name or an organisation name must be set")]
    MissingOwner,
    #[error("only one of user name ({user}) and organisation name ({org}) may be set")]
    AmbiguousOwner { user: String, org: String },
    #[error("no package name was set")]
    MissingPackageName,
    #[error("invalid version listing: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
