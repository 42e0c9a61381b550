//! Configuration validation logic.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sources(config)?;
    validate_asset_dir(config)?;
    Ok(())
}

/// At least one catalog document is required to build the product map.
fn validate_sources(config: &Config) -> Result<()> {
    if config.catalog.sources.is_empty() {
        return Err(Error::ConfigValidation {
            field: "catalog.sources".to_string(),
            message: "at least one catalog JSON document is required".to_string(),
        });
    }
    Ok(())
}

/// Product IDs are resolved relative to the asset root's own name, so the
/// configured path must end in a usable directory name.
fn validate_asset_dir(config: &Config) -> Result<()> {
    let asset_dir = &config.relocate.asset_dir;
    match asset_dir.file_name().and_then(|n| n.to_str()) {
        Some(_) => Ok(()),
        None => Err(Error::ConfigValidation {
            field: "relocate.asset_dir".to_string(),
            message: format!(
                "'{}' has no usable directory name; product IDs are resolved \
                 relative to that name",
                asset_dir.display()
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_sources_rejected() {
        let mut config = Config::default();
        config.catalog.sources.clear();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_nameless_asset_dir_rejected() {
        let mut config = Config::default();
        config.relocate.asset_dir = PathBuf::from("..");
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }
}
