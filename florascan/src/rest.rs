//! REST seam to a chain's LCD endpoint. The bank store talks to the
//! [`RestApi`] trait so queries can be exercised without a live chain;
//! [`RestClient`] is the reqwest implementation over the standard paths.
use crate::error::RestError;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Origin metadata of a token transferred over IBC, keyed by the hash suffix
/// of its `ibc/...` denom.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DenomTrace {
    pub path: String,
    pub base_denom: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TotalSupplyResponse {
    pub supply: Vec<Coin>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SupplyOfResponse {
    pub amount: Coin,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DenomTraceResponse {
    pub denom_trace: DenomTrace,
}

#[async_trait]
pub trait RestApi {
    async fn bank_supply(&self) -> Result<TotalSupplyResponse, RestError>;
    async fn bank_supply_by_denom(&self, denom: &str) -> Result<SupplyOfResponse, RestError>;
    async fn ibc_transfer_denom_trace(&self, hash: &str) -> Result<DenomTraceResponse, RestError>;
}

#[derive(Clone, Debug)]
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestClient {
    pub fn new(base_url: &str) -> RestClient {
        RestClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T>(&self, request: reqwest::RequestBuilder) -> Result<T, RestError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(RestError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl RestApi for RestClient {
    async fn bank_supply(&self) -> Result<TotalSupplyResponse, RestError> {
        self.send(self.client.get(self.url("/cosmos/bank/v1beta1/supply")))
            .await
    }

    async fn bank_supply_by_denom(&self, denom: &str) -> Result<SupplyOfResponse, RestError> {
        self.send(
            self.client
                .get(self.url("/cosmos/bank/v1beta1/supply/by_denom"))
                .query(&[("denom", denom)]),
        )
        .await
    }

    async fn ibc_transfer_denom_trace(&self, hash: &str) -> Result<DenomTraceResponse, RestError> {
        self.send(
            self.client
                .get(self.url(&format!("/ibc/apps/transfer/v1/denom_traces/{}", hash))),
        )
        .await
    }
}
