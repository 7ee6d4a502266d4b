//! Error mapping helpers for the Octocrab GraphQL transport.

use http::StatusCode;

use crate::github::error::ReviewError;

/// GraphQL error `type` GitHub reports when the point budget is spent.
const RATE_LIMITED_TYPE: &str = "RATE_LIMITED";

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, serde::Deserialize)]
pub(super) struct GraphQlErrorEntry {
    pub(super) message: String,
    #[serde(rename = "type", default)]
    pub(super) kind: Option<String>,
}

const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ReviewError {
    if let octocrab::Error::GitHub { source, .. } = error {
        let status = source.status_code;
        let message = &source.message;
        if is_rate_limit_error(source) {
            return ReviewError::RateLimitExceeded {
                message: format!("{operation} failed: {message}"),
            };
        }
        return if is_auth_failure(status) {
            ReviewError::Authentication {
                message: format!("{operation} failed: GitHub returned {status} {message}"),
            }
        } else {
            ReviewError::Api {
                message: format!("{operation} failed with status {status}: {message}"),
            }
        };
    }

    if is_network_error(error) {
        return ReviewError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ReviewError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

/// Folds a non-empty GraphQL `errors` array into a single error.
pub(super) fn map_graphql_errors(errors: &[GraphQlErrorEntry]) -> ReviewError {
    let message = errors
        .iter()
        .map(|entry| entry.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    let rate_limited = errors
        .iter()
        .any(|entry| entry.kind.as_deref() == Some(RATE_LIMITED_TYPE));

    if rate_limited {
        ReviewError::RateLimitExceeded { message }
    } else {
        ReviewError::GraphQl { message }
    }
}
