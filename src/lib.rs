//! Reviewfold library crate for tidying GitHub pull request reviews.
//!
//! The library loads a pull request's review threads and reviews in one
//! GraphQL round trip and minimizes individual reviews or comments. Requests
//! go through the [`GraphQlClient`] trait; [`OctocrabGraphQlClient`] talks to
//! GitHub. [`cli::Operation`] turns configuration into one of those calls.

pub mod cli;
pub mod config;
pub mod github;

pub use config::ReviewfoldConfig;
pub use github::{
    GraphQlClient, OctocrabGraphQlClient, PersonalAccessToken, PullRequestData,
    PullRequestLocator, PullRequestReviewNode, PullRequestReviews, ReviewError, ReviewThread,
    fetch_pull_request_data, minimize_review,
};
