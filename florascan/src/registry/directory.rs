//! Schema of the remote chain-directory entries and their conversion into the
//! canonical config shape. This source is the dormant alternate to the local
//! descriptors; its endpoints arrive pre-normalized.
use crate::{
    chain::config::{ChainConfig, EndpointSet, Versions},
    error::ChainRegistryError,
    registry::assets::{self, Asset},
};
use serde::{Deserialize, Serialize};

/// Remote directory hosts the catalog can be loaded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    MainnetCosmosDirectory,
    TestnetCosmosDirectory,
}

impl ConfigSource {
    pub fn url(&self) -> &'static str {
        match self {
            ConfigSource::MainnetCosmosDirectory => "https://chains.cosmos.directory",
            ConfigSource::TestnetCosmosDirectory => "https://chains.testcosmos.directory",
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryResponse {
    pub chains: Vec<DirectoryChainConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryChainConfig {
    pub chain_name: String,
    pub chain_id: String,
    pub pretty_name: String,
    pub bech32_prefix: String,
    pub assets: Vec<Asset>,
    pub versions: DirectoryVersions,
    pub best_apis: EndpointSet,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryVersions {
    pub application_version: String,
    pub cosmos_sdk_version: String,
    pub tendermint_version: String,
}

impl DirectoryChainConfig {
    /// Pure transform into the canonical shape. Unlike the local converter,
    /// the consensus prefix is always derived (no override field exists in
    /// directory entries) and `best_apis` is taken as already normalized.
    pub fn to_chain_config(&self) -> ChainConfig {
        ChainConfig {
            chain_name: self.chain_name.clone(),
            pretty_name: self.pretty_name.clone(),
            chain_id: Some(self.chain_id.clone()),
            bech32_prefix: self.bech32_prefix.clone(),
            bech32_consensus_prefix: format!("{}valcons", self.bech32_prefix),
            versions: Versions {
                application: self.versions.application_version.clone(),
                cosmos_sdk: self.versions.cosmos_sdk_version.clone(),
                tendermint: self.versions.tendermint_version.clone(),
            },
            assets: self.assets.clone(),
            endpoints: self.best_apis.clone(),
            logo: assets::resolve_path(self.image.as_deref()),
            ..Default::default()
        }
    }
}

/// Retrieves and deserializes the full chain list from a directory host.
pub async fn fetch_directory(
    source: ConfigSource,
) -> Result<Vec<DirectoryChainConfig>, ChainRegistryError> {
    let response: DirectoryResponse = reqwest::get(source.url()).await?.json().await?;

    Ok(response.chains)
}
