//! Configuration structures and loading logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration structure.
///
/// Every field defaults to the classic zero-argument behavior: catalogs
/// `1.json` and `2.json`, asset tree `product`, destination `.`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub relocate: RelocateConfig,
}

/// Catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog documents, in precedence order. A product ID appearing
    /// in more than one document takes its name from the last.
    #[serde(default = "default_sources")]
    pub sources: Vec<PathBuf>,

    /// Whether to write the per-source plain-text name dumps.
    #[serde(default = "default_true")]
    pub write_name_dumps: bool,
}

/// Relocation options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocateConfig {
    /// Root of the asset tree; first-level subdirectories are product IDs.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    /// Flat directory receiving the renamed images.
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Whether to print each successful move.
    #[serde(default = "default_true")]
    pub show_moves: bool,

    /// Whether to print skipped files (otherwise debug-logged only).
    #[serde(default)]
    pub show_skipped: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            write_name_dumps: true,
        }
    }
}

impl Default for RelocateConfig {
    fn default() -> Self {
        Self {
            asset_dir: default_asset_dir(),
            destination: default_destination(),
            show_moves: true,
            show_skipped: false,
        }
    }
}

fn default_sources() -> Vec<PathBuf> {
    vec![PathBuf::from("1.json"), PathBuf::from("2.json")]
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("product")
}

fn default_destination() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_paths() {
        let config = Config::default();
        assert_eq!(
            config.catalog.sources,
            vec![PathBuf::from("1.json"), PathBuf::from("2.json")]
        );
        assert!(config.catalog.write_name_dumps);
        assert_eq!(config.relocate.asset_dir, PathBuf::from("product"));
        assert_eq!(config.relocate.destination, PathBuf::from("."));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [relocate]
            asset_dir = "assets/images"
            "#,
        )
        .unwrap();

        assert_eq!(config.relocate.asset_dir, PathBuf::from("assets/images"));
        assert_eq!(config.relocate.destination, PathBuf::from("."));
        assert_eq!(config.catalog.sources.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
