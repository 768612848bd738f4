//! Schema of the locally authored chain descriptors bundled with the explorer
//! (`chains/mainnet/*.json` and `chains/testnet/*.json`), and their conversion
//! into the canonical config shape.
use crate::{
    chain::{
        config::{ChainConfig, EndpointSet, EvmConfig, ProviderChain, Versions},
        endpoint::{self, EndpointList},
    },
    registry::assets::{Asset, DenomUnit, LogoUris},
};
use serde::{Deserialize, Serialize};

const LOGO_BASE_URL: &str = "https://ping.pub";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalChainConfig {
    pub chain_name: String,
    pub chain_id: String,
    pub registry_name: Option<String>,
    pub addr_prefix: String,
    pub consensus_prefix: Option<String>,
    pub coin_type: String,
    pub sdk_version: String,
    pub min_tx_fee: String,
    pub alias: String,
    pub api: Option<EndpointList>,
    pub rpc: Option<EndpointList>,
    pub grpc: Option<EndpointList>,
    pub assets: Vec<LocalAsset>,
    pub provider_chain: Option<LocalProviderChain>,
    pub evm: Option<LocalEvmConfig>,
    pub features: Option<Vec<String>>,
    pub keplr_features: Option<Vec<String>>,
    pub keplr_price_step: Option<f64>,
    pub theme_color: Option<String>,
    pub faucet: Option<String>,
    pub logo: String,
}

/// An asset entry in a local descriptor. `base`, `symbol` and `exponent` are
/// required; a descriptor missing them fails deserialization and is skipped
/// by the batch loader.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LocalAsset {
    pub base: String,
    pub symbol: String,
    pub exponent: String,
    #[serde(default)]
    pub coingecko_id: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalProviderChain {
    pub chain_name: String,
    pub client_id: String,
    pub api: Option<EndpointList>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalEvmConfig {
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    pub rpc: Option<EndpointList>,
}

impl LocalChainConfig {
    /// Pure transform into the canonical shape. Optional fields fall back to
    /// defaults; this never fails.
    pub fn to_chain_config(&self) -> ChainConfig {
        let assets = self.assets.iter().map(LocalAsset::to_asset).collect();

        // Relative logo paths are served from the fixed external base.
        let logo = if self.logo.starts_with("http") {
            self.logo.clone()
        } else if !self.logo.is_empty() {
            format!("{}{}", LOGO_BASE_URL, self.logo)
        } else {
            String::default()
        };

        ChainConfig {
            chain_name: self.chain_name.clone(),
            pretty_name: self
                .registry_name
                .clone()
                .unwrap_or_else(|| self.chain_name.clone()),
            chain_id: None,
            bech32_prefix: self.addr_prefix.clone(),
            bech32_consensus_prefix: self
                .consensus_prefix
                .clone()
                .unwrap_or_else(|| format!("{}valcons", self.addr_prefix)),
            coin_type: self.coin_type.clone(),
            versions: Versions {
                cosmos_sdk: self.sdk_version.clone(),
                ..Default::default()
            },
            assets,
            endpoints: EndpointSet {
                rest: endpoint::normalize(self.api.as_ref()),
                rpc: endpoint::normalize(self.rpc.as_ref()),
                grpc: endpoint::normalize(self.grpc.as_ref()),
            },
            logo,
            provider_chain: self.provider_chain.as_ref().map(|pc| ProviderChain {
                api: endpoint::normalize(pc.api.as_ref()),
            }),
            evm: self.evm.as_ref().map(|evm| EvmConfig {
                chain_id: evm.chain_id,
                rpc: endpoint::normalize(evm.rpc.as_ref()),
            }),
            faucet: self.faucet.clone(),
            features: self.features.clone(),
            keplr_features: self.keplr_features.clone(),
            keplr_price_step: self.keplr_price_step,
            theme_color: self.theme_color.clone(),
        }
    }
}

impl LocalAsset {
    fn to_asset(&self) -> Asset {
        let exponent = self.exponent.parse::<u16>().unwrap_or_default();

        Asset {
            name: self.base.clone(),
            base: self.base.clone(),
            display: self.symbol.clone(),
            symbol: self.symbol.clone(),
            logo_uris: LogoUris {
                svg: self.logo.clone(),
                ..Default::default()
            },
            coingecko_id: self.coingecko_id.clone(),
            exponent,
            denom_units: vec![
                DenomUnit {
                    denom: self.base.clone(),
                    exponent: 0,
                },
                DenomUnit {
                    denom: self.symbol.to_lowercase(),
                    exponent,
                },
            ],
            type_asset: "sdk.coin".to_string(),
        }
    }
}
