//! Unit tests for pull request locators and tokens.

use rstest::rstest;

use super::{PersonalAccessToken, PullRequestLocator, ReviewError};

#[rstest]
fn parses_standard_github_url_segments() {
    let locator = PullRequestLocator::parse("https://github.com/octo/repo/pull/12/files")
        .expect("should parse standard GitHub URL");
    assert_eq!(locator.owner(), "octo", "owner mismatch");
    assert_eq!(locator.repository(), "repo", "repository mismatch");
    assert_eq!(locator.number(), 12_u64, "number mismatch");
}

#[rstest]
#[case::github_com("https://github.com/octo/repo/pull/12", "https://api.github.com/")]
#[case::github_com_any_case("https://GitHub.com/octo/repo/pull/12", "https://api.github.com/")]
#[case::enterprise("https://ghe.example.com/foo/bar/pull/7", "https://ghe.example.com/api")]
#[case::enterprise_with_port(
    "https://ghe.example.com:8443/foo/bar/pull/7",
    "https://ghe.example.com:8443/api"
)]
#[case::plain_http("http://127.0.0.1:9000/foo/bar/pull/7", "http://127.0.0.1:9000/api")]
#[case::drops_query_and_fragment(
    "https://ghe.example.com/foo/bar/pull/7?tab=files#top",
    "https://ghe.example.com/api"
)]
#[case::ipv6_host("http://[::1]:8080/foo/bar/pull/7", "http://[::1]:8080/api")]
fn derives_graphql_api_base(#[case] url: &str, #[case] expected: &str) {
    let locator = PullRequestLocator::parse(url).expect("should parse pull request URL");
    assert_eq!(locator.api_base().as_str(), expected, "api base mismatch");
}

#[rstest]
#[case::missing_number("https://github.com/octo/repo/pull/")]
#[case::issues_path("https://github.com/octo/repo/issues/4")]
#[case::pulls_collection("https://github.com/octo/repo/pulls/4")]
#[case::repository_only("https://github.com/octo/repo")]
#[case::empty_owner("https://github.com//repo/pull/4")]
#[case::empty_repository("https://github.com/octo//pull/4")]
fn rejects_incomplete_paths(#[case] url: &str) {
    let result = PullRequestLocator::parse(url);
    assert!(
        matches!(result, Err(ReviewError::MissingPathSegments)),
        "expected MissingPathSegments for {url}, got {result:?}"
    );
}

#[rstest]
#[case::non_numeric("https://github.com/octo/repo/pull/not-a-number")]
#[case::zero("https://github.com/octo/repo/pull/0")]
#[case::negative("https://github.com/octo/repo/pull/-3")]
fn rejects_invalid_numbers(#[case] url: &str) {
    let result = PullRequestLocator::parse(url);
    assert!(
        matches!(result, Err(ReviewError::InvalidPullRequestNumber)),
        "expected InvalidPullRequestNumber for {url}, got {result:?}"
    );
}

#[rstest]
fn rejects_invalid_url() {
    let result = PullRequestLocator::parse("octo/repo/pull/4");
    assert!(
        matches!(result, Err(ReviewError::InvalidUrl(_))),
        "expected InvalidUrl for malformed URL, got {result:?}"
    );
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   \t")]
fn rejects_blank_token(#[case] value: &str) {
    let result = PersonalAccessToken::new(value);
    assert_eq!(result, Err(ReviewError::MissingToken));
}

#[rstest]
fn trims_token_whitespace() {
    let token = PersonalAccessToken::new("  ghp_example \n").expect("token should be accepted");
    assert_eq!(token.value(), "ghp_example");
}
