//! The canonical internal chain representation. Every raw source schema
//! (local descriptor or directory entry) converts into [`ChainConfig`] at load
//! time; consumers never see the source shapes.
use crate::{
    chain::endpoint::Endpoint,
    error::RestError,
    registry::assets::Asset,
};
use rand::{prelude::SliceRandom, thread_rng};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    pub chain_name: String,
    pub pretty_name: String,
    pub chain_id: Option<String>,
    pub bech32_prefix: String,
    pub bech32_consensus_prefix: String,
    pub coin_type: String,
    pub versions: Versions,
    pub assets: Vec<Asset>,
    pub endpoints: EndpointSet,
    pub logo: String,
    pub provider_chain: Option<ProviderChain>,
    pub evm: Option<EvmConfig>,
    pub faucet: Option<String>,
    pub features: Option<Vec<String>>,
    pub keplr_features: Option<Vec<String>>,
    pub keplr_price_step: Option<f64>,
    pub theme_color: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Versions {
    pub application: String,
    pub cosmos_sdk: String,
    pub tendermint: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointSet {
    #[serde(skip_serializing_if = "Vec::is_empty", default = "Vec::new")]
    pub rest: Vec<Endpoint>,
    #[serde(skip_serializing_if = "Vec::is_empty", default = "Vec::new")]
    pub rpc: Vec<Endpoint>,
    pub grpc: Vec<Endpoint>,
}

/// Reference to the provider chain of a consumer chain.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderChain {
    pub api: Vec<Endpoint>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EvmConfig {
    pub chain_id: u64,
    pub rpc: Vec<Endpoint>,
}

impl ChainConfig {
    /// REST endpoint addresses usable by an HTTP client. Endpoints must parse
    /// as http or https URLs.
    pub fn rest_endpoints(&self) -> Vec<String> {
        self.endpoints
            .rest
            .iter()
            .filter_map(|rest| Url::parse(rest.address.as_str()).ok())
            .filter_map(|url| {
                if url.scheme().contains("http") {
                    Some(url.to_string())
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn random_rest_endpoint(&self) -> Result<String, RestError> {
        let endpoints = self.rest_endpoints();
        if let Some(endpoint) = endpoints.choose(&mut thread_rng()) {
            Ok(endpoint.to_string())
        } else {
            Err(RestError::MissingEndpoint(
                "no valid endpoint found. endpoints must use http or https.".to_string(),
            ))
        }
    }
}
