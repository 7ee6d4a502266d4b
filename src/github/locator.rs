//! Pull request coordinates parsed from a browser URL.
//!
//! A URL such as `https://github.com/octo/repo/pull/7/files` yields the owner,
//! repository and number used as query variables, plus the host's GraphQL
//! base. Enterprise hosts serve GraphQL at `/api/graphql`, not under the REST
//! prefix `/api/v3`.

use url::Url;

use super::error::ReviewError;

/// GraphQL base for pull requests hosted on github.com.
pub const PUBLIC_API_BASE: &str = "https://api.github.com";

/// Returns [`PUBLIC_API_BASE`] as a parsed URL.
///
/// # Errors
///
/// Returns [`ReviewError::InvalidUrl`] if the constant fails to parse.
pub fn public_api_base() -> Result<Url, ReviewError> {
    Url::parse(PUBLIC_API_BASE).map_err(|error| ReviewError::InvalidUrl(error.to_string()))
}

/// A token with surrounding whitespace removed, guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Trims `token` and rejects it when nothing is left.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingToken`] for blank input.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ReviewError> {
        match token.as_ref().trim() {
            "" => Err(ReviewError::MissingToken),
            trimmed => Ok(Self(trimmed.to_owned())),
        }
    }

    /// The trimmed token.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

/// Owner, repository, number and GraphQL base of one pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: String,
    repository: String,
    number: u64,
}

impl PullRequestLocator {
    /// Parses `<scheme>://<host>/<owner>/<repo>/pull/<number>[/...]`.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::InvalidUrl`] when `input` is not an absolute URL with
    ///   a host.
    /// - [`ReviewError::MissingPathSegments`] when the path does not start
    ///   with `/<owner>/<repo>/pull/<number>` or a segment is empty.
    /// - [`ReviewError::InvalidPullRequestNumber`] when the number is not a
    ///   positive integer.
    ///
    /// # Example
    ///
    /// ```
    /// use reviewfold::PullRequestLocator;
    ///
    /// let locator = PullRequestLocator::parse("https://github.com/octo/repo/pull/7")
    ///     .expect("should parse pull request URL");
    /// assert_eq!(locator.owner(), "octo");
    /// assert_eq!(locator.number(), 7);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ReviewError> {
        let url = Url::parse(input).map_err(|error| ReviewError::InvalidUrl(error.to_string()))?;

        let segments: Vec<&str> = url
            .path_segments()
            .ok_or(ReviewError::MissingPathSegments)?
            .take(4)
            .collect();
        let [owner, repository, "pull", number] = segments.as_slice() else {
            return Err(ReviewError::MissingPathSegments);
        };
        if owner.is_empty() || repository.is_empty() || number.is_empty() {
            return Err(ReviewError::MissingPathSegments);
        }

        let number = number
            .parse::<u64>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or(ReviewError::InvalidPullRequestNumber)?;

        Ok(Self {
            api_base: graphql_base_for(&url)?,
            owner: (*owner).to_owned(),
            repository: (*repository).to_owned(),
            number,
        })
    }

    /// GraphQL base derived from the pull request host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner (user or organisation login).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }
}

/// `github.com` maps to [`PUBLIC_API_BASE`]; other hosts keep their scheme
/// and port and gain an `/api` path.
fn graphql_base_for(url: &Url) -> Result<Url, ReviewError> {
    let host = url
        .host_str()
        .ok_or_else(|| ReviewError::InvalidUrl("URL must include a host".to_owned()))?;
    if host.eq_ignore_ascii_case("github.com") {
        return public_api_base();
    }

    let mut base = url.clone();
    base.set_path("api");
    base.set_query(None);
    base.set_fragment(None);
    base.set_username("")
        .and_then(|()| base.set_password(None))
        .map_err(|()| ReviewError::InvalidUrl("URL cannot carry credentials".to_owned()))?;
    Ok(base)
}
