//! Bank supply state for the active chain. Supply queries run through an
//! explicit ordered list of strategies so the endpoint fallback is visible in
//! one place, and IBC denom traces are memoized per process lifetime.
use crate::{
    chain::config::ChainConfig,
    error::RestError,
    rest::{Coin, DenomTrace, RestApi, RestClient},
};
use http::StatusCode;
use std::collections::HashMap;

/// Chains and bonded denoms that must skip the per-denom supply endpoint and
/// use only the aggregate endpoint. Flora nodes answer the per-denom path with
/// 501.
#[derive(Clone, Debug, Default)]
pub struct SupplyPolicy {
    aggregate_only_chains: Vec<String>,
    aggregate_only_denoms: Vec<String>,
}

impl SupplyPolicy {
    pub fn new(chains: Vec<String>, denoms: Vec<String>) -> SupplyPolicy {
        SupplyPolicy {
            aggregate_only_chains: chains,
            aggregate_only_denoms: denoms,
        }
    }

    pub fn flora() -> SupplyPolicy {
        SupplyPolicy::new(
            vec!["flora".to_string(), "flora-devnet".to_string()],
            vec!["uflora".to_string()],
        )
    }

    pub fn aggregate_only(&self, chain_name: &str, denom: &str) -> bool {
        self.aggregate_only_chains.iter().any(|c| c == chain_name)
            || self.aggregate_only_denoms.iter().any(|d| d == denom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SupplyStrategy {
    ByDenom,
    Aggregate,
}

pub struct BankStore<A> {
    api: A,
    policy: SupplyPolicy,
    supply: Coin,
    ibc_denoms: HashMap<String, DenomTrace>,
}

impl BankStore<RestClient> {
    /// Builds a store talking to one of the chain's usable REST endpoints.
    pub fn for_chain(
        chain: &ChainConfig,
        policy: SupplyPolicy,
    ) -> Result<BankStore<RestClient>, RestError> {
        let endpoint = chain.random_rest_endpoint()?;

        Ok(BankStore::new(RestClient::new(&endpoint), policy))
    }
}

impl<A: RestApi> BankStore<A> {
    pub fn new(api: A, policy: SupplyPolicy) -> BankStore<A> {
        BankStore {
            api,
            policy,
            supply: Coin::default(),
            ibc_denoms: HashMap::new(),
        }
    }

    pub fn supply(&self) -> &Coin {
        &self.supply
    }

    fn strategies(&self, chain_name: &str, denom: &str) -> &'static [SupplyStrategy] {
        if self.policy.aggregate_only(chain_name, denom) {
            &[SupplyStrategy::Aggregate]
        } else {
            &[SupplyStrategy::ByDenom, SupplyStrategy::Aggregate]
        }
    }

    /// Refreshes the supply of the chain's bonded denom, falling back to the
    /// base denom of the chain's first asset when no bonded denom is known. A
    /// per-denom failure of any kind falls through to the aggregate endpoint;
    /// an aggregate failure propagates. When no matching denom is found the
    /// previous supply value is kept.
    pub async fn initial(
        &mut self,
        chain: &ChainConfig,
        bond_denom: Option<&str>,
    ) -> Result<(), RestError> {
        let denom = match bond_denom {
            Some(denom) => denom.to_string(),
            None => match chain.assets.first() {
                Some(asset) => asset.base.clone(),
                None => return Ok(()),
            },
        };

        for strategy in self.strategies(&chain.chain_name, &denom) {
            match strategy {
                SupplyStrategy::ByDenom => match self.api.bank_supply_by_denom(&denom).await {
                    Ok(res) => {
                        self.supply = res.amount;
                        return Ok(());
                    }
                    Err(err) => {
                        tracing::debug!("per-denom supply query failed, falling back: {}", err);
                    }
                },
                SupplyStrategy::Aggregate => {
                    let res = self.api.bank_supply().await?;
                    if let Some(coin) = res.supply.into_iter().find(|s| s.denom == denom) {
                        self.supply = coin;
                    }
                    return Ok(());
                }
            }
        }

        Ok(())
    }

    /// Queries the supply of an arbitrary denom. Only a 501 from the
    /// per-denom endpoint triggers the aggregate fallback; any other failure,
    /// and a fallback with no matching coin, rethrows the original error.
    pub async fn fetch_supply(&self, denom: &str) -> Result<Coin, RestError> {
        match self.api.bank_supply_by_denom(denom).await {
            Ok(res) => Ok(res.amount),
            Err(err) if err.status() == Some(StatusCode::NOT_IMPLEMENTED) => {
                let res = self.api.bank_supply().await?;
                match res.supply.into_iter().find(|s| s.denom == denom) {
                    Some(coin) => Ok(coin),
                    None => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Resolves the trace of an `ibc/...` denom, memoizing by hash. At most
    /// one resolution per distinct hash is issued over the store's lifetime.
    pub async fn fetch_denom_trace(&mut self, denom: &str) -> Result<DenomTrace, RestError> {
        let hash = denom.strip_prefix("ibc/").unwrap_or(denom);
        if let Some(trace) = self.ibc_denoms.get(hash) {
            return Ok(trace.clone());
        }

        let trace = self.api.ibc_transfer_denom_trace(hash).await?.denom_trace;
        self.ibc_denoms.insert(hash.to_string(), trace.clone());

        Ok(trace)
    }
}
