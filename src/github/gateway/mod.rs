//! GraphQL transport used by the review operations.
//!
//! The operations only ever see the [`GraphQlClient`] trait, so tests can swap
//! in a mock while [`OctocrabGraphQlClient`] performs real HTTP requests.

mod error_mapping;
mod graphql;

pub use graphql::OctocrabGraphQlClient;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::github::error::ReviewError;

/// Capability to execute a GraphQL operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphQlClient: Send + Sync {
    /// Sends `query` with `variables` and returns the response `data` value.
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, ReviewError>;
}

/// Executes `query` and deserialises the response `data` into `T`.
///
/// # Errors
///
/// Returns whatever error the client produced, unchanged. A response that
/// does not match `T` yields [`ReviewError::Decode`].
pub async fn execute_as<T, C>(client: &C, query: &str, variables: Value) -> Result<T, ReviewError>
where
    T: DeserializeOwned,
    C: GraphQlClient + ?Sized,
{
    let data = client.execute(query, variables).await?;
    serde_json::from_value(data).map_err(|error| ReviewError::Decode {
        message: error.to_string(),
    })
}
