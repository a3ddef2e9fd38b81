//! Connection configuration for the Solr client.

use std::time::Duration;

use url::Url;

use crate::errors::SearchError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoint configuration for a single Solr core.
#[derive(Debug, Clone)]
pub struct SolrConfig {
    /// Base URL of the Solr web application, e.g. `http://localhost:8983/solr`.
    pub base_url: Url,
    /// Core (or collection) name.
    pub core: String,
    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
}

impl SolrConfig {
    /// Create a config, validating the URL and core name.
    pub fn new(base_url: &str, core: impl Into<String>) -> Result<Self, SearchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SearchError::config(format!("Invalid Solr URL '{}': {}", base_url, e)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SearchError::config(format!(
                "Unsupported URL scheme: {}",
                base_url.scheme()
            )));
        }

        let core = core.into();
        if core.trim().is_empty() {
            return Err(SearchError::config("Solr core name is required"));
        }

        Ok(Self {
            base_url,
            core,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn core_url(&self, handler: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.core,
            handler
        )
    }

    pub fn update_url(&self) -> String {
        self.core_url("update")
    }

    pub fn select_url(&self) -> String {
        self.core_url("select")
    }

    pub fn ping_url(&self) -> String {
        self.core_url("admin/ping")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_urls() {
        let config = SolrConfig::new("http://localhost:8983/solr/", "products").unwrap();

        assert_eq!(config.update_url(), "http://localhost:8983/solr/products/update");
        assert_eq!(config.select_url(), "http://localhost:8983/solr/products/select");
        assert_eq!(
            config.ping_url(),
            "http://localhost:8983/solr/products/admin/ping"
        );
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_invalid_url() {
        let result = SolrConfig::new("not a url", "products");
        assert!(matches!(result, Err(SearchError::ConfigError(_))));
    }

    #[test]
    fn test_unsupported_scheme() {
        let result = SolrConfig::new("ftp://localhost/solr", "products");
        assert!(matches!(result, Err(SearchError::ConfigError(_))));
    }

    #[test]
    fn test_empty_core() {
        let result = SolrConfig::new("http://localhost:8983/solr", "  ");
        assert!(matches!(result, Err(SearchError::ConfigError(_))));
    }
}
