//! The catalog store. Owns the normalized [`ChainConfig`] collection, loads it
//! from the bundled local partitions (or, dormant, the remote directory),
//! tracks the active chain and builds the price-lookup index.
use crate::{
    chain::config::ChainConfig,
    error::ChainRegistryError,
    registry::{
        self,
        directory::{self, ConfigSource},
        local::LocalChainConfig,
    },
};
use std::{collections::HashMap, path::PathBuf};

const DEFAULT_CHAINS_DIR: &str = "chains";
const FALLBACK_CHAIN_CONFIG: &str = include_str!("../../chains/testnet/flora-devnet.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingStatus {
    #[default]
    Empty,
    Loading,
    Loaded,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NetworkType {
    #[default]
    Mainnet,
    Testnet,
}

impl NetworkType {
    /// Single-network deployments are told apart by their hostname.
    pub fn from_hostname(hostname: &str) -> NetworkType {
        if hostname.contains("testnet") {
            NetworkType::Testnet
        } else {
            NetworkType::Mainnet
        }
    }

    pub fn partition(&self) -> &'static str {
        match self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
        }
    }
}

/// Loader configuration. The fallback descriptor is guaranteed to end up in
/// the catalog and is selected as the active chain, so a deployment always has
/// a working default even when every bundled descriptor fails to load.
#[derive(Clone, Debug)]
pub struct RegistrySettings {
    pub chains_dir: PathBuf,
    pub default_chain: String,
    pub fallback: LocalChainConfig,
}

impl RegistrySettings {
    /// Settings for the Flora devnet deployment, with the bundled descriptor
    /// as the guaranteed fallback.
    pub fn flora_devnet() -> RegistrySettings {
        let fallback: LocalChainConfig = serde_json::from_str(FALLBACK_CHAIN_CONFIG)
            .expect("bundled flora-devnet descriptor is invalid");

        RegistrySettings {
            chains_dir: PathBuf::from(DEFAULT_CHAINS_DIR),
            default_chain: fallback.chain_name.clone(),
            fallback,
        }
    }
}

/// Price-lookup index entry, keyed by denom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceIndexEntry {
    pub coin_id: String,
    pub exponent: u16,
    pub symbol: String,
}

pub struct ChainRegistry {
    settings: RegistrySettings,
    status: LoadingStatus,
    source: ConfigSource,
    network_type: NetworkType,
    chains: HashMap<String, ChainConfig>,
    current: Option<String>,
    favorites: HashMap<String, bool>,
    price_index: HashMap<String, PriceIndexEntry>,
}

impl ChainRegistry {
    pub fn new(settings: RegistrySettings) -> ChainRegistry {
        let favorites = HashMap::from([(settings.default_chain.clone(), true)]);

        ChainRegistry {
            settings,
            status: LoadingStatus::Empty,
            source: ConfigSource::MainnetCosmosDirectory,
            network_type: NetworkType::Mainnet,
            chains: HashMap::new(),
            current: None,
            favorites,
            price_index: HashMap::new(),
        }
    }

    pub fn status(&self) -> LoadingStatus {
        self.status
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn chains(&self) -> &HashMap<String, ChainConfig> {
        &self.chains
    }

    pub fn get(&self, name: &str) -> Option<&ChainConfig> {
        self.chains.get(name)
    }

    pub fn current(&self) -> Option<&ChainConfig> {
        self.current.as_deref().and_then(|name| self.chains.get(name))
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.get(name).copied().unwrap_or(false)
    }

    pub fn price_index(&self) -> &HashMap<String, PriceIndexEntry> {
        &self.price_index
    }

    /// Loads the catalog. Only the local source is consulted by default; the
    /// remote directory remains available through [`Self::load_from_directory`].
    pub async fn initial(&mut self, hostname: &str) {
        self.load_from_local(hostname);
    }

    /// Loads every bundled descriptor from the fixed partitions, keyed by
    /// chain name, then guarantees the fallback chain and selects the default.
    /// Individual malformed descriptors are skipped by the partition loader.
    pub fn load_from_local(&mut self, hostname: &str) {
        self.network_type = NetworkType::from_hostname(hostname);

        for network in [NetworkType::Mainnet, NetworkType::Testnet] {
            let dir = self.settings.chains_dir.join(network.partition());
            for local in registry::load_local_configs(&dir) {
                self.chains
                    .insert(local.chain_name.clone(), local.to_chain_config());
            }
        }

        if !self.chains.contains_key(&self.settings.default_chain) {
            let fallback = self.settings.fallback.to_chain_config();
            self.chains.insert(fallback.chain_name.clone(), fallback);
        }

        tracing::debug!("loaded {} chain configs", self.chains.len());

        self.setup_default();
        self.status = LoadingStatus::Loaded;
    }

    /// Dormant alternate load path: the remote chain directory. A no-op unless
    /// the store is still empty.
    pub async fn load_from_directory(&mut self) -> Result<(), ChainRegistryError> {
        if self.status != LoadingStatus::Empty {
            return Ok(());
        }

        self.status = LoadingStatus::Loading;
        let chains = directory::fetch_directory(self.source).await?;
        for chain in chains {
            self.chains
                .insert(chain.chain_name.clone(), chain.to_chain_config());
        }
        self.status = LoadingStatus::Loaded;

        Ok(())
    }

    /// Converts one local partition into a fresh map without touching store
    /// state.
    pub fn load_network(&self, network: NetworkType) -> HashMap<String, ChainConfig> {
        let dir = self.settings.chains_dir.join(network.partition());

        registry::load_local_configs(&dir)
            .iter()
            .map(|local| (local.chain_name.clone(), local.to_chain_config()))
            .collect()
    }

    /// Selects the configured default chain as current and rebuilds the
    /// price-lookup index.
    pub fn setup_default(&mut self) {
        if !self.is_empty() {
            self.current = Some(self.settings.default_chain.clone());
            self.rebuild_price_index();
        }
    }

    pub fn set_current(&mut self, name: &str) -> Result<(), ChainRegistryError> {
        if !self.chains.contains_key(name) {
            return Err(ChainRegistryError::UnknownChain(name.to_string()));
        }
        self.current = Some(name.to_string());

        Ok(())
    }

    /// Switches the directory source, resetting loaded state and repeating the
    /// load.
    pub async fn set_source(&mut self, source: ConfigSource, hostname: &str) {
        self.source = source;
        self.status = LoadingStatus::Empty;
        self.chains.clear();
        self.current = None;
        self.initial(hostname).await;
    }

    fn rebuild_price_index(&mut self) {
        for chain in self.chains.values() {
            for asset in &chain.assets {
                if asset.coingecko_id.is_empty() {
                    continue;
                }
                for unit in &asset.denom_units {
                    self.price_index.insert(
                        unit.denom.clone(),
                        PriceIndexEntry {
                            coin_id: asset.coingecko_id.clone(),
                            exponent: unit.exponent,
                            symbol: asset.symbol.clone(),
                        },
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;
    use std::fs;

    fn scratch_settings(name: &str) -> RegistrySettings {
        let dir = std::env::temp_dir().join(format!("florascan-store-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("mainnet")).unwrap();
        fs::create_dir_all(dir.join("testnet")).unwrap();

        RegistrySettings {
            chains_dir: dir,
            ..RegistrySettings::flora_devnet()
        }
    }

    #[test]
    fn bundled_fallback_descriptor_parses() {
        let settings = RegistrySettings::flora_devnet();

        assert_eq!(settings.default_chain, "flora-devnet");
        assert_eq!(settings.fallback.addr_prefix, "flora");
        assert_eq!(settings.fallback.assets[0].base, "uflora");
    }

    #[test]
    fn detects_network_type_from_hostname() {
        assert_eq!(
            NetworkType::from_hostname("testnet.explorer.flora.zone"),
            NetworkType::Testnet
        );
        assert_eq!(
            NetworkType::from_hostname("explorer.flora.zone"),
            NetworkType::Mainnet
        );
    }

    #[assay]
    async fn empty_partitions_still_yield_the_fallback_chain() {
        let mut registry = ChainRegistry::new(scratch_settings("fallback"));
        registry.initial("testnet.explorer.flora.zone").await;

        assert_eq!(registry.status(), LoadingStatus::Loaded);
        assert_eq!(registry.network_type(), NetworkType::Testnet);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.current().unwrap().chain_name, "flora-devnet");
        assert!(registry.is_favorite("flora-devnet"));
    }

    #[assay]
    async fn loads_descriptors_from_both_partitions() {
        let settings = scratch_settings("partitions");
        fs::write(
            settings.chains_dir.join("mainnet/other.json"),
            r#"{"chain_name": "other", "addr_prefix": "other", "assets": []}"#,
        )
        .unwrap();
        fs::write(
            settings.chains_dir.join("testnet/flora-devnet.json"),
            super::FALLBACK_CHAIN_CONFIG,
        )
        .unwrap();

        let mut registry = ChainRegistry::new(settings);
        registry.initial("explorer.flora.zone").await;

        assert_eq!(registry.len(), 2);
        assert!(registry.get("other").is_some());
        assert_eq!(registry.current().unwrap().chain_name, "flora-devnet");
    }

    #[assay]
    async fn price_index_covers_assets_with_coingecko_ids() {
        let settings = scratch_settings("prices");
        fs::write(
            settings.chains_dir.join("mainnet/priced.json"),
            r#"{
                "chain_name": "priced",
                "addr_prefix": "priced",
                "assets": [
                    {"base": "upriced", "symbol": "PRICED", "exponent": "6", "coingecko_id": "priced-coin"},
                    {"base": "ubare", "symbol": "BARE", "exponent": "6"}
                ]
            }"#,
        )
        .unwrap();

        let mut registry = ChainRegistry::new(settings);
        registry.initial("explorer.flora.zone").await;

        let entry = registry.price_index().get("priced").unwrap();
        assert_eq!(entry.coin_id, "priced-coin");
        assert_eq!(entry.exponent, 6);
        assert_eq!(entry.symbol, "PRICED");
        assert_eq!(registry.price_index().get("upriced").unwrap().exponent, 0);
        assert!(registry.price_index().get("ubare").is_none());
    }

    #[assay]
    async fn directory_load_is_a_noop_once_loaded() {
        let mut registry = ChainRegistry::new(scratch_settings("directory-noop"));
        registry.initial("explorer.flora.zone").await;

        assert_eq!(registry.status(), LoadingStatus::Loaded);
        // Returns without a request since the store is already populated.
        registry.load_from_directory().await.unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[assay]
    async fn set_source_resets_and_reloads() {
        let mut registry = ChainRegistry::new(scratch_settings("set-source"));
        registry.initial("explorer.flora.zone").await;
        registry
            .set_source(ConfigSource::TestnetCosmosDirectory, "explorer.flora.zone")
            .await;

        assert_eq!(registry.status(), LoadingStatus::Loaded);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.current().unwrap().chain_name, "flora-devnet");
    }

    #[test]
    fn set_current_rejects_unknown_chains() {
        let mut registry = ChainRegistry::new(scratch_settings("set-current"));
        registry.load_from_local("explorer.flora.zone");

        assert!(registry.set_current("flora-devnet").is_ok());
        assert!(registry.set_current("nonexistent").is_err());
    }

    #[test]
    fn load_network_does_not_touch_store_state() {
        let settings = scratch_settings("load-network");
        fs::write(
            settings.chains_dir.join("testnet/flora-devnet.json"),
            super::FALLBACK_CHAIN_CONFIG,
        )
        .unwrap();

        let registry = ChainRegistry::new(settings);
        let testnet = registry.load_network(NetworkType::Testnet);

        assert_eq!(testnet.len(), 1);
        assert!(registry.is_empty());
        assert_eq!(registry.status(), LoadingStatus::Empty);
    }
}
