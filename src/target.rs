use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use url::form_urlencoded::byte_serialize;

pub const STATUS_ENDPOINT: &str = "/status";
/// Page shown when no target is given: the badge service's own site.
pub const DEFAULT_TARGET: &str = "https://www.visitorbadge.io";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("tracking target is empty")]
    Empty,
    #[error("both user and repository are required, got user '{user}' and repository '{repo}'")]
    IncompleteRepository { user: String, repo: String },
}

/// Subject of the visitor statistics: a tracked URL or a GitHub-style
/// user/repository pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackingTarget {
    Path(String),
    Repository { user: String, repo: String },
}

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    // User names never contain a dot, so `example.com/blog` stays a path.
    SLUG.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_-]+)/([A-Za-z0-9_.-]+)$").expect("valid slug regex")
    })
}

impl TrackingTarget {
    pub fn path(path: &str) -> Result<Self, TargetError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(TargetError::Empty);
        }
        Ok(TrackingTarget::Path(path.to_string()))
    }

    pub fn repository(user: &str, repo: &str) -> Result<Self, TargetError> {
        let (user, repo) = (user.trim(), repo.trim());
        if user.is_empty() || repo.is_empty() {
            return Err(TargetError::IncompleteRepository {
                user: user.to_string(),
                repo: repo.to_string(),
            });
        }
        Ok(TrackingTarget::Repository {
            user: user.to_string(),
            repo: repo.to_string(),
        })
    }

    /// `user/repo` becomes a repository target, anything else a path.
    pub fn from_slug(slug: &str) -> Result<Self, TargetError> {
        let slug = slug.trim();
        match slug_pattern().captures(slug) {
            Some(captures) => Self::repository(&captures[1], &captures[2]),
            None => Self::path(slug),
        }
    }

    pub fn display_path(&self) -> String {
        match self {
            TrackingTarget::Path(path) => path.clone(),
            TrackingTarget::Repository { user, repo } => format!("{user}/{repo}"),
        }
    }

    pub fn query(&self) -> String {
        match self {
            TrackingTarget::Path(path) => format!("?path={}", encode(path)),
            TrackingTarget::Repository { user, repo } => {
                format!("?user={}&repo={}", encode(user), encode(repo))
            }
        }
    }

    pub fn status_url(&self, api_base: &str) -> String {
        format!("{}{}{}", api_base.trim_end_matches('/'), STATUS_ENDPOINT, self.query())
    }
}

impl Default for TrackingTarget {
    fn default() -> Self {
        TrackingTarget::Path(DEFAULT_TARGET.to_string())
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

impl fmt::Display for TrackingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_with_one_separator_is_a_repository() {
        let target = TrackingTarget::from_slug("estruyf/github-visitors-badge").unwrap();
        assert_eq!(
            target,
            TrackingTarget::Repository {
                user: "estruyf".to_string(),
                repo: "github-visitors-badge".to_string()
            }
        );
        assert_eq!(target.display_path(), "estruyf/github-visitors-badge");
        assert_eq!(target.query(), "?user=estruyf&repo=github-visitors-badge");
    }

    #[test]
    fn urls_are_paths_and_get_encoded() {
        let target = TrackingTarget::from_slug("https://example.com/blog").unwrap();
        assert_eq!(target, TrackingTarget::Path("https://example.com/blog".to_string()));
        assert_eq!(target.query(), "?path=https%3A%2F%2Fexample.com%2Fblog");
    }

    #[test]
    fn scheme_less_hosts_are_paths() {
        let target = TrackingTarget::from_slug("example.com/blog").unwrap();
        assert_eq!(target, TrackingTarget::Path("example.com/blog".to_string()));
        assert_eq!(target.query(), "?path=example.com%2Fblog");

        let target = TrackingTarget::from_slug("estruyf/estruyf.github.io").unwrap();
        assert!(matches!(target, TrackingTarget::Repository { .. }));
    }

    #[test]
    fn defaults_to_the_service_site() {
        assert_eq!(TrackingTarget::default().display_path(), DEFAULT_TARGET);
    }

    #[test]
    fn builds_status_url() {
        let target = TrackingTarget::repository("user", "repo").unwrap();
        assert_eq!(
            target.status_url("https://api.example.com/api/"),
            "https://api.example.com/api/status?user=user&repo=repo"
        );
    }

    #[test]
    fn rejects_empty_targets() {
        assert_eq!(TrackingTarget::from_slug("  "), Err(TargetError::Empty));
        assert!(matches!(
            TrackingTarget::repository("user", ""),
            Err(TargetError::IncompleteRepository { .. })
        ));
    }
}
