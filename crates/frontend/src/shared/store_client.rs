//! Client for the hosted table store
//!
//! Wraps the PostgREST endpoint configured at startup. Every call is a plain
//! GET returning JSON rows; transport, status and decoding failures come back
//! as `FetchError` so pages can tell an outage from an empty result.

use contracts::domain::common::AggregateRoot;
use contracts::shared::config::StoreConfig;
use contracts::shared::errors::FetchError;
use contracts::shared::store_query::TableQuery;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Read-only handle to the table store, provided through context.
#[derive(Clone, Debug)]
pub struct StoreClient {
    config: StoreConfig,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Fetch every row matching `query`, in the order the store returns them.
    pub async fn select<T>(&self, query: &TableQuery) -> Result<Vec<T>, FetchError>
    where
        T: AggregateRoot + DeserializeOwned,
    {
        let url = query.url(&self.config);
        log::debug!("{}: loading {} from {}", T::aggregate_index(), T::list_name(), url);

        let response = Request::get(&url)
            .header("apikey", self.config.anon_key())
            .header("Authorization", &format!("Bearer {}", self.config.anon_key()))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let response = ensure_success(response).await?;

        let rows = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        log::debug!("store {} -> {} row(s)", query.table(), rows.len());
        Ok(rows)
    }

    /// Fetch at most one row. No match is `Ok(None)`, not an error.
    pub async fn select_one<T>(&self, query: &TableQuery) -> Result<Option<T>, FetchError>
    where
        T: AggregateRoot + DeserializeOwned,
    {
        let query = match query.row_limit() {
            Some(1) => query.clone(),
            _ => query.clone().limit(1),
        };
        let row = self.select::<T>(&query).await?.into_iter().next();
        if row.is_none() {
            log::debug!("{}: no {} matches", T::aggregate_index(), T::element_name());
        }
        Ok(row)
    }
}

async fn ensure_success(response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::error!("store responded with HTTP {}: {}", status, body);
    Err(FetchError::Status { status, body })
}
