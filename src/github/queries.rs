//! GraphQL operation texts sent to GitHub.
//!
//! Both strings are sent verbatim; GitHub matches field names exactly, so
//! keep them in sync with the serde models.

/// Loads review threads and reviews for one pull request.
///
/// Variables: `$owner: String!`, `$repo: String!`, `$number: Int!`.
pub const PULL_REQUEST_DATA_QUERY: &str = r"
  query($owner: String!, $repo: String!, $number: Int!) {
    repository(owner: $owner, name: $repo) {
      pullRequest(number: $number) {
        reviewThreads(first: 100) {
          nodes {
            id
            isResolved
            comments(first: 1) {
              nodes {
                author {
                  login
                }
                pullRequestReview {
                  id
                  createdAt
                  isMinimized
                }
              }
            }
          }
        }
        reviews(first: 100) {
          nodes {
            id
            author {
              login
            }
            createdAt
            isMinimized
          }
        }
      }
    }
  }
";

/// Minimizes a review or comment with the `RESOLVED` classifier.
///
/// Variables: `$subjectId: ID!`.
pub const MINIMIZE_MUTATION: &str = r"
  mutation($subjectId: ID!) {
    minimizeComment(input: { subjectId: $subjectId, classifier: RESOLVED }) {
      minimizedComment {
        isMinimized
      }
    }
  }
";
