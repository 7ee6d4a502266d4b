//! Fetching review threads and minimizing reviews.
//!
//! Both operations send exactly one GraphQL request through the injected
//! [`GraphQlClient`] and hand any client failure back unchanged: there is no
//! retry, fallback or local validation here.

use serde_json::json;

use super::error::ReviewError;
use super::gateway::{GraphQlClient, execute_as};
use super::locator::PullRequestLocator;
use super::models::{ApiPullRequestDataResponse, PullRequestData};
use super::queries::{MINIMIZE_MUTATION, PULL_REQUEST_DATA_QUERY};

/// Fetches up to 100 review threads and 100 reviews for a pull request in a
/// single query.
///
/// Threads and reviews come back in API order, exactly as GitHub sent them.
///
/// # Errors
///
/// Propagates any failure from `client` unchanged. Returns
/// [`ReviewError::Decode`] when the response does not have the
/// `repository.pullRequest` shape.
pub async fn fetch_pull_request_data<C>(
    client: &C,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<PullRequestData, ReviewError>
where
    C: GraphQlClient + ?Sized,
{
    let variables = json!({ "owner": owner, "repo": repo, "number": number });

    tracing::debug!(owner, repo, number, "fetching review threads and reviews");
    let response: ApiPullRequestDataResponse =
        execute_as(client, PULL_REQUEST_DATA_QUERY, variables).await?;
    let data = PullRequestData::from(response);
    tracing::debug!(
        threads = data.threads.len(),
        reviews = data.reviews.len(),
        "fetched pull request review data"
    );

    Ok(data)
}

/// Minimizes a review or comment by node ID with the `RESOLVED` classifier.
///
/// The server's `isMinimized` confirmation is requested but not inspected.
///
/// # Errors
///
/// Propagates any failure from `client` unchanged.
pub async fn minimize_review<C>(client: &C, subject_id: &str) -> Result<(), ReviewError>
where
    C: GraphQlClient + ?Sized,
{
    let variables = json!({ "subjectId": subject_id });

    tracing::debug!(subject_id, "minimizing review");
    client.execute(MINIMIZE_MUTATION, variables).await?;
    tracing::debug!(subject_id, "minimized review");
    Ok(())
}

/// Review operations bound to one client.
pub struct PullRequestReviews<'client, Client>
where
    Client: GraphQlClient + ?Sized,
{
    client: &'client Client,
}

impl<'client, Client> PullRequestReviews<'client, Client>
where
    Client: GraphQlClient + ?Sized,
{
    /// Create a new facade using the provided client.
    #[must_use]
    pub const fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Load review threads and reviews for the located pull request.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_pull_request_data`].
    pub async fn load(&self, locator: &PullRequestLocator) -> Result<PullRequestData, ReviewError> {
        fetch_pull_request_data(
            self.client,
            locator.owner(),
            locator.repository(),
            locator.number(),
        )
        .await
    }

    /// Minimize a review or comment.
    ///
    /// # Errors
    ///
    /// Same as [`minimize_review`].
    pub async fn minimize(&self, subject_id: &str) -> Result<(), ReviewError> {
        minimize_review(self.client, subject_id).await
    }
}
