//! Octocrab implementation of the GraphQL client.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::github::error::ReviewError;
use crate::github::locator::PersonalAccessToken;

use super::GraphQlClient;
use super::error_mapping::{GraphQlErrorEntry, map_graphql_errors, map_octocrab_error};

const OPERATION: &str = "graphql request";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    data: Option<Value>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

impl GraphQlEnvelope {
    /// Any reported error wins over partial data.
    fn into_data(self) -> Result<Value, ReviewError> {
        match (self.errors, self.data) {
            (Some(errors), _) if !errors.is_empty() => Err(map_graphql_errors(&errors)),
            (_, Some(data)) => Ok(data),
            (_, None) => Err(ReviewError::MissingData {
                operation: OPERATION.to_owned(),
            }),
        }
    }
}

/// GraphQL client that posts to `<api_base>/graphql` through Octocrab.
pub struct OctocrabGraphQlClient {
    client: Octocrab,
}

impl OctocrabGraphQlClient {
    /// Wraps an existing Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated client for the given GraphQL API base.
    ///
    /// Use `https://api.github.com` for github.com and `https://<host>/api`
    /// for GitHub Enterprise; [`PullRequestLocator::api_base`] derives the
    /// right one.
    ///
    /// [`PullRequestLocator::api_base`]: crate::github::locator::PullRequestLocator::api_base
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::InvalidUrl` when the base URI cannot be parsed or
    /// `ReviewError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, ReviewError> {
        let base_uri = api_base
            .as_str()
            .parse::<http::Uri>()
            .map_err(|error| ReviewError::InvalidUrl(error.to_string()))?;

        let client = Octocrab::builder()
            .personal_token(token.value())
            .base_uri(base_uri)
            .map_err(|error| ReviewError::Api {
                message: format!("build client failed: {error}"),
            })?
            .build()
            .map_err(|error| map_octocrab_error("build client", &error))?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl GraphQlClient for OctocrabGraphQlClient {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, ReviewError> {
        let request = GraphQlRequest {
            query,
            variables: &variables,
        };

        let envelope: GraphQlEnvelope = self
            .client
            .graphql(&request)
            .await
            .map_err(|error| map_octocrab_error(OPERATION, &error))?;

        envelope.into_data()
    }
}
