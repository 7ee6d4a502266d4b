//! Data models for pull request review threads and reviews.
//!
//! These types mirror the GraphQL selection sets in
//! [`queries`](crate::github::queries) field for field. They are deserialised
//! straight from the response and handed to the caller untouched, and they
//! serialise back to the same camelCase field names.

use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// A GraphQL connection reduced to its `nodes` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// Nodes in the order the API returned them.
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// Actor reference carrying only the login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// GitHub login of the actor.
    pub login: String,
}

/// Review that a thread comment belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadReviewRef {
    /// Review node ID.
    pub id: String,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: String,
    /// Whether the review has been minimized.
    pub is_minimized: bool,
}

/// A comment inside a review thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadComment {
    /// Comment author; `None` for deleted accounts.
    pub author: Option<Author>,
    /// Review the comment was submitted with, when present.
    #[serde(default)]
    pub pull_request_review: Option<ThreadReviewRef>,
}

impl ThreadComment {
    /// Login of the comment author, if known.
    #[must_use]
    pub fn author_login(&self) -> Option<&str> {
        self.author.as_ref().map(|author| author.login.as_str())
    }
}

/// A review conversation on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewThread {
    /// Thread node ID.
    pub id: String,
    /// Whether the thread has been resolved.
    pub is_resolved: bool,
    /// Comments in the thread; only the first one is requested.
    pub comments: Connection<ThreadComment>,
}

impl ReviewThread {
    /// The opening comment of the thread, if GitHub returned one.
    #[must_use]
    pub fn first_comment(&self) -> Option<&ThreadComment> {
        self.comments.nodes.first()
    }
}

/// A submitted pull request review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestReviewNode {
    /// Review node ID.
    pub id: String,
    /// Review author; `None` for deleted accounts.
    pub author: Option<Author>,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: String,
    /// Whether the review has been minimized.
    pub is_minimized: bool,
}

impl PullRequestReviewNode {
    /// Login of the review author, if known.
    #[must_use]
    pub fn author_login(&self) -> Option<&str> {
        self.author.as_ref().map(|author| author.login.as_str())
    }
}

/// Review threads and reviews fetched in a single round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestData {
    /// Up to the first 100 review threads.
    pub threads: Vec<ReviewThread>,
    /// Up to the first 100 reviews.
    pub reviews: Vec<PullRequestReviewNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPullRequestDataResponse {
    pub(crate) repository: ApiRepository,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiRepository {
    pub(crate) pull_request: ApiPullRequest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPullRequest {
    pub(crate) review_threads: Connection<ReviewThread>,
    pub(crate) reviews: Connection<PullRequestReviewNode>,
}

impl From<ApiPullRequestDataResponse> for PullRequestData {
    fn from(value: ApiPullRequestDataResponse) -> Self {
        let pull_request = value.repository.pull_request;
        Self {
            threads: pull_request.review_threads.nodes,
            reviews: pull_request.reviews.nodes,
        }
    }
}
