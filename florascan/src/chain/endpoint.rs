//! Normalization of the endpoint representations found in locally authored
//! chain descriptors, which mix bare address strings with structured records.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Endpoint {
    pub address: String,
    pub provider: String,
}

/// A single endpoint as authored in a descriptor: either a bare address or an
/// already-structured record.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EndpointSource {
    Address(String),
    Endpoint(Endpoint),
}

/// An endpoint field as authored in a descriptor: a single source or a list.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EndpointList {
    One(EndpointSource),
    Many(Vec<EndpointSource>),
}

impl From<EndpointSource> for Endpoint {
    fn from(source: EndpointSource) -> Endpoint {
        match source {
            EndpointSource::Address(address) => {
                let parts: Vec<&str> = address.split('.').collect();
                let provider = if parts.len() >= 2 {
                    parts[parts.len() - 2].to_string()
                } else {
                    address.clone()
                };

                Endpoint { address, provider }
            }
            EndpointSource::Endpoint(endpoint) => endpoint,
        }
    }
}

/// Converts an optional endpoint field into a uniform, order-preserving list
/// of [`Endpoint`]s. An absent field yields an empty list.
pub fn normalize(list: Option<&EndpointList>) -> Vec<Endpoint> {
    let sources = match list {
        None => return Vec::new(),
        Some(EndpointList::One(source)) => vec![source.clone()],
        Some(EndpointList::Many(sources)) => sources.clone(),
    };

    sources.into_iter().map(Endpoint::from).collect()
}
