use assay::assay;
use florascan::registry::{ChainRegistry, LoadingStatus, NetworkType, RegistrySettings};
use std::fs;

fn scratch_settings(name: &str) -> RegistrySettings {
    let dir = std::env::temp_dir().join(format!("florascan-it-{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("mainnet")).unwrap();
    fs::create_dir_all(dir.join("testnet")).unwrap();

    RegistrySettings {
        chains_dir: dir,
        ..RegistrySettings::flora_devnet()
    }
}

#[assay]
async fn local_load_end_to_end() {
    let settings = scratch_settings("end-to-end");
    fs::write(
        settings.chains_dir.join("testnet/flora-devnet.json"),
        r#"{
            "chain_name": "flora-devnet",
            "registry_name": "Flora Devnet",
            "api": ["http://52.9.17.25:1317", "http://50.18.34.12:1317"],
            "rpc": ["http://52.9.17.25:26657"],
            "grpc": [],
            "sdk_version": "0.50.13",
            "coin_type": "60",
            "addr_prefix": "flora",
            "logo": "/flora-logo.svg",
            "assets": [{
                "base": "uflora",
                "symbol": "FLORA",
                "exponent": "18",
                "coingecko_id": "",
                "logo": "/flora-logo.svg"
            }]
        }"#,
    )
    .unwrap();
    fs::write(settings.chains_dir.join("mainnet/broken.json"), "not json").unwrap();

    let mut registry = ChainRegistry::new(settings);
    registry.initial("testnet.explorer.flora.zone").await;

    assert_eq!(registry.status(), LoadingStatus::Loaded);
    assert_eq!(registry.network_type(), NetworkType::Testnet);
    assert_eq!(registry.len(), 1);

    let current = registry.current().unwrap();
    assert_eq!(current.pretty_name, "Flora Devnet");
    assert_eq!(current.bech32_prefix, "flora");
    assert_eq!(current.bech32_consensus_prefix, "floravalcons");
    assert_eq!(current.versions.cosmos_sdk, "0.50.13");
    assert_eq!(current.logo, "https://ping.pub/flora-logo.svg");
    assert_eq!(current.chain_id, None);

    let asset = &current.assets[0];
    assert_eq!(asset.base, "uflora");
    assert_eq!(asset.denom_units[0].denom, "uflora");
    assert_eq!(asset.denom_units[0].exponent, 0);
    assert_eq!(asset.denom_units[1].denom, "flora");
    assert_eq!(asset.denom_units[1].exponent, 18);

    assert_eq!(
        current.rest_endpoints(),
        vec![
            "http://52.9.17.25:1317/".to_string(),
            "http://50.18.34.12:1317/".to_string()
        ]
    );
}

#[assay]
async fn total_local_load_failure_still_selects_the_fallback_chain() {
    let settings = scratch_settings("total-failure");
    fs::write(settings.chains_dir.join("testnet/bad.json"), "{").unwrap();

    let mut registry = ChainRegistry::new(settings);
    registry.initial("explorer.flora.zone").await;

    assert_eq!(registry.len(), 1);
    let current = registry.current().unwrap();
    assert_eq!(current.chain_name, "flora-devnet");
    assert!(!current.endpoints.rest.is_empty());
    assert!(!current.assets.is_empty());
}
