//! Command-line operations built from [`ReviewfoldConfig`].
//!
//! The binary resolves an [`Operation`], builds a client for
//! [`Operation::api_base`] and runs it against stdout. Keeping the dispatch
//! here lets it run against any [`GraphQlClient`].

use std::io::Write;

use url::Url;

use crate::config::ReviewfoldConfig;
use crate::github::{
    GraphQlClient, PullRequestData, PullRequestLocator, PullRequestReviews, ReviewError,
    public_api_base,
};

/// What the CLI will do with the configured values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Print the threads and reviews of a pull request.
    List(PullRequestLocator),
    /// Minimize one review or comment node.
    Minimize {
        /// Node ID to minimize.
        subject_id: String,
        /// GraphQL base the mutation is sent to.
        api_base: Url,
    },
}

impl Operation {
    /// Resolves the operation from configuration.
    ///
    /// A configured node ID selects [`Operation::Minimize`]. The pull request
    /// URL is then optional and only chooses the host; without it the
    /// mutation goes to github.com. Otherwise the URL is required and selects
    /// [`Operation::List`].
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingPullRequestUrl`] when neither a node ID
    /// nor a URL is configured, and any locator error for a malformed URL.
    pub fn from_config(config: &ReviewfoldConfig) -> Result<Self, ReviewError> {
        if let Some(subject_id) = config.minimize.as_deref() {
            let api_base = match config.pr_url.as_deref() {
                Some(pr_url) => PullRequestLocator::parse(pr_url)?.api_base().clone(),
                None => public_api_base()?,
            };
            return Ok(Self::Minimize {
                subject_id: subject_id.to_owned(),
                api_base,
            });
        }

        PullRequestLocator::parse(config.require_pr_url()?).map(Self::List)
    }

    /// GraphQL base the client for this operation should target.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        match self {
            Self::List(locator) => locator.api_base(),
            Self::Minimize { api_base, .. } => api_base,
        }
    }

    /// Runs the operation through `client` and writes its report to `out`.
    ///
    /// Minimizing writes `Minimized <id>`; listing writes one line per thread
    /// and review followed by the totals.
    ///
    /// # Errors
    ///
    /// Propagates client failures unchanged and maps write failures to
    /// [`ReviewError::Io`].
    pub async fn run<C, W>(&self, client: &C, out: &mut W) -> Result<(), ReviewError>
    where
        C: GraphQlClient + ?Sized,
        W: Write + ?Sized,
    {
        let reviews = PullRequestReviews::new(client);
        let lines = match self {
            Self::Minimize { subject_id, .. } => {
                reviews.minimize(subject_id).await?;
                vec![format!("Minimized {subject_id}")]
            }
            Self::List(locator) => summary_lines(&reviews.load(locator).await?),
        };
        write_lines(out, &lines)
    }
}

/// Formats fetched data as report lines: threads, then reviews, then totals.
#[must_use]
pub fn summary_lines(data: &PullRequestData) -> Vec<String> {
    let threads = data.threads.iter().map(|thread| {
        let author = thread
            .first_comment()
            .and_then(|comment| comment.author_login())
            .unwrap_or("unknown");
        format!(
            "thread {} resolved={} author={author}",
            thread.id, thread.is_resolved
        )
    });

    let reviews = data.reviews.iter().map(|review| {
        format!(
            "review {} by {} at {} minimized={}",
            review.id,
            review.author_login().unwrap_or("unknown"),
            review.created_at,
            review.is_minimized
        )
    });

    threads
        .chain(reviews)
        .chain(std::iter::once(format!(
            "Threads: {}, Reviews: {}",
            data.threads.len(),
            data.reviews.len()
        )))
        .collect()
}

fn write_lines<W: Write + ?Sized>(out: &mut W, lines: &[String]) -> Result<(), ReviewError> {
    for line in lines {
        writeln!(out, "{line}").map_err(|error| ReviewError::Io {
            message: error.to_string(),
        })?;
    }
    Ok(())
}
