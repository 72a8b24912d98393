//! Loading structure configs from disk

use std::path::Path;

use dirtree_fs::ConfigStore;
use serde_yaml::Value;

use crate::{Error, Result, StructureConfig};

/// Load and shape-check a structure config.
///
/// The format follows the file extension (`.yml`, `.yaml`, `.json`, `.toml`).
pub fn load_structure(path: &Path) -> Result<StructureConfig> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let document: Value = ConfigStore::new().load(path)?;
    let config = StructureConfig::from_value(&document)?;

    tracing::debug!(
        path = %path.display(),
        rules = config.rules.len(),
        directories = config.node_count(),
        "loaded structure config"
    );

    Ok(config)
}
