//! Raw chain descriptor schemas, their converters into
//! [`ChainConfig`](crate::chain::config::ChainConfig), and the store that owns
//! the normalized catalog.
use crate::error::ChainRegistryError;
use serde::de::DeserializeOwned;
use std::path::Path;

pub use self::{assets::*, directory::*, local::*, store::*};

pub mod assets;
pub mod directory;
pub mod local;
pub mod store;

/// Loads every descriptor in a local partition directory (`*.json` files).
/// Malformed descriptors are skipped with a warning rather than aborting the
/// batch. A missing partition directory yields an empty list.
pub fn load_local_configs(dir: &Path) -> Vec<LocalChainConfig> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!("no local chain configs at {}: {}", dir.display(), err);
            return Vec::new();
        }
    };

    let mut configs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match read_config::<LocalChainConfig>(&path) {
            Ok(config) => configs.push(config),
            Err(err) => {
                tracing::warn!("skipping chain config {}: {}", path.display(), err);
            }
        }
    }

    configs
}

fn read_config<T>(path: &Path) -> Result<T, ChainRegistryError>
where
    T: DeserializeOwned,
{
    let content =
        std::fs::read_to_string(path).map_err(|err| ChainRegistryError::FileIO(err.to_string()))?;

    serde_json::from_str(content.as_str()).map_err(|r| r.into())
}
