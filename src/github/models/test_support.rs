//! Test helpers for constructing review thread and review fixtures.
//!
//! # Examples
//!
//! ```
//! use reviewfold::github::models::test_support::{review, thread};
//!
//! let thread = thread("t1", true);
//! let review = review("r1", "alice", "2025-01-01T00:00:00Z", false);
//! assert!(thread.comments.nodes.is_empty());
//! assert_eq!(review.author_login(), Some("alice"));
//! ```

use super::{Author, Connection, PullRequestReviewNode, ReviewThread, ThreadComment};

/// Constructs a review thread without comments.
#[must_use]
pub fn thread(id: &str, is_resolved: bool) -> ReviewThread {
    ReviewThread {
        id: id.to_owned(),
        is_resolved,
        comments: Connection::default(),
    }
}

/// Constructs a review thread whose first comment was written by `author`.
///
/// The comment carries no review reference.
///
/// ```
/// use reviewfold::github::models::test_support::thread_by;
///
/// let thread = thread_by("t7", "bob");
/// assert_eq!(
///     thread.first_comment().and_then(|comment| comment.author_login()),
///     Some("bob")
/// );
/// ```
#[must_use]
pub fn thread_by(id: &str, author: &str) -> ReviewThread {
    ReviewThread {
        comments: Connection {
            nodes: vec![ThreadComment {
                author: Some(Author {
                    login: author.to_owned(),
                }),
                pull_request_review: None,
            }],
        },
        ..thread(id, false)
    }
}

/// Constructs a review node.
#[must_use]
pub fn review(
    id: &str,
    author: &str,
    created_at: &str,
    is_minimized: bool,
) -> PullRequestReviewNode {
    PullRequestReviewNode {
        id: id.to_owned(),
        author: Some(Author {
            login: author.to_owned(),
        }),
        created_at: created_at.to_owned(),
        is_minimized,
    }
}
