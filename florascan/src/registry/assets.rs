//! Canonical asset models shared by both converters, and resolution of logo
//! paths to the registry mirror.
use serde::{Deserialize, Serialize};

const REGISTRY_RAW_HOST: &str = "https://raw.githubusercontent.com/cosmos/chain-registry/master";
const REGISTRY_MIRROR: &str = "https://registry.ping.pub";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Asset {
    pub name: String,
    pub base: String,
    pub display: String,
    pub symbol: String,
    #[serde(rename = "logo_URIs")]
    pub logo_uris: LogoUris,
    pub coingecko_id: String,
    pub exponent: u16,
    pub denom_units: Vec<DenomUnit>,
    pub type_asset: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u16,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LogoUris {
    pub svg: String,
    pub png: String,
    pub jpeg: String,
}

/// Rewrites chain-registry raw GitHub URLs to the stable mirror host, keeping
/// the path suffix. Any other URL is returned unchanged; absent input yields
/// an empty string.
pub fn resolve_path(path: Option<&str>) -> String {
    match path {
        Some(path) => path.replace(REGISTRY_RAW_HOST, REGISTRY_MIRROR),
        None => String::default(),
    }
}

/// Picks the first non-empty logo variant (svg, then png, then jpeg) and runs
/// it through [`resolve_path`]. Absent input yields `None`, unlike the
/// empty-string result of the plain path form.
pub fn resolve_logo(uris: Option<&LogoUris>) -> Option<String> {
    uris.map(|uris| {
        let variant = [&uris.svg, &uris.png, &uris.jpeg]
            .into_iter()
            .find(|v| !v.is_empty());

        resolve_path(variant.map(String::as_str))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_registry_host_to_mirror() {
        let path = "https://raw.githubusercontent.com/cosmos/chain-registry/master/_non-cosmos/ethereum/images/eth-white.png";

        assert_eq!(
            resolve_path(Some(path)),
            "https://registry.ping.pub/_non-cosmos/ethereum/images/eth-white.png"
        );
    }

    #[test]
    fn leaves_other_hosts_unchanged() {
        let path = "https://ping.pub/flora-logo.svg";

        assert_eq!(resolve_path(Some(path)), path);
    }

    #[test]
    fn absent_path_yields_empty_string() {
        assert_eq!(resolve_path(None), "");
    }

    #[test]
    fn logo_variants_resolve_in_priority_order() {
        let uris = LogoUris {
            svg: String::default(),
            png: "https://raw.githubusercontent.com/cosmos/chain-registry/master/flora/images/flora.png".to_string(),
            jpeg: "https://example.com/flora.jpeg".to_string(),
        };

        assert_eq!(
            resolve_logo(Some(&uris)),
            Some("https://registry.ping.pub/flora/images/flora.png".to_string())
        );
    }

    #[test]
    fn absent_logo_yields_none() {
        assert_eq!(resolve_logo(None), None);
    }
}
