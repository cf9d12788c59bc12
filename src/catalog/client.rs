//! TMDB client
//!
//! [`CatalogSource`] is the seam the app fetches through; [`TmdbClient`] is
//! the HTTP implementation. Tests substitute in-memory sources.

use std::time::Duration;

use tracing::{debug, warn};
use ureq::Agent;

use super::{MediaKind, ResultList, Section};
use crate::config::{API_KEY_ENV, ReelConfig};
use crate::http::{DEFAULT_TIMEOUT, HTTP_AGENT, build_agent};

/// Failures talking to the catalog API
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no TMDB API key configured (set {env} or run `reelview config set-key`)", env = API_KEY_ENV)]
    MissingApiKey,

    #[error("TMDB rejected the API key")]
    Unauthorized,

    #[error("TMDB returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: ureq::Error,
    },

    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Short text for a carousel's failed state
    pub fn summary(&self) -> String {
        match self {
            CatalogError::MissingApiKey => "no API key configured".to_string(),
            CatalogError::Unauthorized => "invalid API key".to_string(),
            CatalogError::Status { status, .. } => format!("HTTP {status}"),
            CatalogError::Transport { .. } => "network error".to_string(),
            CatalogError::Decode { .. } => "unexpected response".to_string(),
        }
    }
}

/// Anything that can produce catalog lists
pub trait CatalogSource: Send + Sync {
    /// Fetch the first page of a list section
    fn fetch_section(&self, section: Section) -> Result<ResultList, CatalogError>;

    /// Keyword search within one media kind
    fn search(&self, kind: MediaKind, keyword: &str) -> Result<ResultList, CatalogError>;
}

/// URL for a list endpoint
pub fn endpoint_url(base: &str, path: &str, api_key: &str) -> String {
    format!(
        "{}/{}?api_key={}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/'),
        urlencoding::encode(api_key)
    )
}

/// URL for a keyword search
pub fn search_url(
    base: &str,
    kind: MediaKind,
    api_key: &str,
    language: &str,
    keyword: &str,
) -> String {
    format!(
        "{}&language={}&query={}",
        endpoint_url(base, &format!("search/{}", kind.path()), api_key),
        urlencoding::encode(language),
        urlencoding::encode(keyword)
    )
}

/// HTTP client for the TMDB v3 API
#[derive(Clone)]
pub struct TmdbClient {
    agent: Agent,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let defaults = ReelConfig::default();
        Self {
            agent: HTTP_AGENT.clone(),
            base_url: defaults.api.base_url,
            api_key: api_key.into(),
            language: defaults.api.language,
        }
    }

    /// Build from config, failing when no key is available
    pub fn from_config(config: &ReelConfig) -> Result<Self, CatalogError> {
        let api_key = config.api_key().ok_or(CatalogError::MissingApiKey)?;
        let timeout = Duration::from_secs(config.api.timeout_secs.max(1));
        let agent = if timeout == DEFAULT_TIMEOUT {
            HTTP_AGENT.clone()
        } else {
            build_agent(timeout)
        };

        Ok(Self {
            agent,
            base_url: config.api.base_url.clone(),
            api_key: api_key.to_string(),
            language: config.api.language.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` is only used for logs and errors so the key never leaks
    fn get_list(&self, path: &str, url: &str) -> Result<ResultList, CatalogError> {
        debug!(path, "fetching catalog list");

        let mut response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => status_error(status, path),
            other => CatalogError::Transport {
                path: path.to_string(),
                source: other,
            },
        })?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|source| CatalogError::Transport {
                path: path.to_string(),
                source,
            })?;

        let list: ResultList =
            serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
                path: path.to_string(),
                source,
            })?;

        debug!(path, results = list.len(), "catalog list fetched");
        Ok(list)
    }
}

fn status_error(status: u16, path: &str) -> CatalogError {
    warn!(path, status, "catalog request rejected");
    if status == 401 {
        CatalogError::Unauthorized
    } else {
        CatalogError::Status {
            status,
            path: path.to_string(),
        }
    }
}

impl CatalogSource for TmdbClient {
    fn fetch_section(&self, section: Section) -> Result<ResultList, CatalogError> {
        let url = endpoint_url(&self.base_url, section.path(), &self.api_key);
        self.get_list(section.path(), &url)
    }

    fn search(&self, kind: MediaKind, keyword: &str) -> Result<ResultList, CatalogError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(ResultList::default());
        }
        let url = search_url(&self.base_url, kind, &self.api_key, &self.language, keyword);
        self.get_list(&format!("search/{}", kind.path()), &url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.themoviedb.org/3";

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url(BASE, Section::NowPlaying.path(), "k3y"),
            "https://api.themoviedb.org/3/movie/now_playing?api_key=k3y"
        );
        assert_eq!(
            endpoint_url("http://localhost:8080/3/", "/tv/on_the_air", "k"),
            "http://localhost:8080/3/tv/on_the_air?api_key=k"
        );
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        assert_eq!(
            search_url(BASE, MediaKind::Tv, "k", "en-US", "the office & co"),
            "https://api.themoviedb.org/3/search/tv?api_key=k&language=en-US&query=the%20office%20%26%20co"
        );
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = ReelConfig::default();
        assert!(matches!(
            TmdbClient::from_config(&config),
            Err(CatalogError::MissingApiKey)
        ));

        let mut config = ReelConfig::default();
        config.set_api_key("abc");
        config.api.base_url = "http://localhost:9/3".to_string();
        let client = TmdbClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9/3");
    }

    #[test]
    fn test_empty_search_skips_request() {
        // Unroutable base URL: any request would fail
        let mut client = TmdbClient::new("k");
        client.base_url = "http://127.0.0.1:1".to_string();
        let list = client.search(MediaKind::Movie, "   ").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(status_error(401, "movie/popular"), CatalogError::Unauthorized));
        let err = status_error(404, "tv/popular");
        assert_eq!(err.to_string(), "TMDB returned HTTP 404 for tv/popular");
        assert_eq!(err.summary(), "HTTP 404");
    }

    #[test]
    fn test_missing_key_message_names_env() {
        assert!(CatalogError::MissingApiKey.to_string().contains(API_KEY_ENV));
    }
}
