//! GitHub pull request review threads and review minimization.
//!
//! This module sends two fixed GraphQL operations through an injected
//! [`GraphQlClient`]: one query that loads a pull request's review threads and
//! reviews together, and one mutation that minimizes a review or comment.
//! [`OctocrabGraphQlClient`] is the production client; tests substitute a
//! mock.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod queries;
pub mod reviews;

pub use error::ReviewError;
pub use gateway::{GraphQlClient, OctocrabGraphQlClient, execute_as};
pub use locator::{PUBLIC_API_BASE, PersonalAccessToken, PullRequestLocator, public_api_base};
pub use models::{
    Author, Connection, PullRequestData, PullRequestReviewNode, ReviewThread, ThreadComment,
    ThreadReviewRef,
};
pub use reviews::{PullRequestReviews, fetch_pull_request_data, minimize_review};

#[cfg(test)]
mod tests;
