//! Error types for the catalog-relocator application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Catalog errors
    #[error("Catalog file not found: {}. Make sure the catalog JSON files are in the working directory.", .0.display())]
    MissingCatalog(PathBuf),

    #[error("Malformed catalog {}: {}", .path.display(), .source)]
    MalformedCatalog {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Asset tree errors
    #[error("Directory '{}' not found.", .0.display())]
    MissingAssetDir(PathBuf),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes reported by the binary.
///
/// Missing catalogs and a missing asset tree intentionally map to SUCCESS;
/// the reference tool reports them and exits zero.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const UNEXPECTED_ERROR: i32 = 3;
}
