//! Error types exposed by the GitHub review layer.

use thiserror::Error;

/// Errors surfaced while parsing input or communicating with GitHub.
///
/// The review operations never inspect these variants; whatever the
/// [`GraphQlClient`](super::gateway::GraphQlClient) returns is handed back to
/// the caller as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The CLI did not include a pull request URL.
    #[error("pull request URL is required")]
    MissingPullRequestUrl,

    /// The provided URL could not be parsed.
    #[error("pull request URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request path is incomplete.
    #[error("pull request URL must match /owner/repo/pull/<number>")]
    MissingPathSegments,

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub refused the request because a rate limit was exhausted.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// GitHub returned a non-authentication HTTP error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The GraphQL endpoint answered with an `errors` array.
    #[error("GraphQL error: {message}")]
    GraphQl {
        /// Messages reported by the server, joined with `; `.
        message: String,
    },

    /// The GraphQL endpoint answered with neither `data` nor `errors`.
    #[error("{operation} returned no data")]
    MissingData {
        /// Operation that produced the empty response.
        operation: String,
    },

    /// The response `data` did not match the expected shape.
    #[error("unexpected GraphQL response shape: {message}")]
    Decode {
        /// Deserialisation failure detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
