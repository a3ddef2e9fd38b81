//! Configuration for the indexer.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file.

mod dependencies;

use std::env;
use std::time::Duration;

use crate::IndexingError;
use solr_indexer_pipeline::SessionConfig;
use solr_indexer_repository::SolrConfig;

pub use dependencies::Dependencies;

/// Default Solr base URL.
const DEFAULT_SOLR_URL: &str = "http://localhost:8983/solr";

/// Default Solr core.
const DEFAULT_SOLR_CORE: &str = "collection1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Validated indexer settings.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    /// Solr endpoint.
    pub solr: SolrConfig,
    /// Session settings.
    pub session: SessionConfig,
    /// Log output format.
    pub log_format: LogFormat,
}

impl IndexerConfig {
    /// Load settings from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `SOLR_URL`: Solr base URL (default: http://localhost:8983/solr)
    /// - `SOLR_CORE`: Core or collection name (default: collection1)
    /// - `SOLR_BATCH_SIZE`: Documents per flush, `0` for a single send (default: 0)
    /// - `SOLR_TIMEOUT_SECS`: HTTP request timeout (default: 30)
    /// - `LOG_FORMAT`: `json` or `pretty` (default: pretty)
    pub fn from_env() -> Result<Self, IndexingError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("SOLR_URL").unwrap_or_else(|| DEFAULT_SOLR_URL.to_string());
        let core = lookup("SOLR_CORE").unwrap_or_else(|| DEFAULT_SOLR_CORE.to_string());

        let batch_size = match lookup("SOLR_BATCH_SIZE") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                IndexingError::config(format!(
                    "SOLR_BATCH_SIZE must be a non-negative integer, got '{}'",
                    raw
                ))
            })?,
            None => 0,
        };

        let timeout_secs = match lookup("SOLR_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(IndexingError::config(format!(
                        "SOLR_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(IndexingError::config(format!(
                    "LOG_FORMAT must be 'json' or 'pretty', got '{}'",
                    other
                )))
            }
        };

        let solr = SolrConfig::new(&url, core)?.with_timeout(Duration::from_secs(timeout_secs));

        Ok(Self {
            solr,
            session: SessionConfig::with_batch_size(batch_size),
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<IndexerConfig, IndexingError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        IndexerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.solr.core, DEFAULT_SOLR_CORE);
        assert_eq!(
            config.solr.update_url(),
            "http://localhost:8983/solr/collection1/update"
        );
        assert_eq!(config.solr.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.session.batch_size, 0);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_explicit_values() {
        let config = load(&[
            ("SOLR_URL", "https://search.example.com/solr"),
            ("SOLR_CORE", "articles"),
            ("SOLR_BATCH_SIZE", "250"),
            ("SOLR_TIMEOUT_SECS", "5"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(
            config.solr.select_url(),
            "https://search.example.com/solr/articles/select"
        );
        assert_eq!(config.session.batch_size, 250);
        assert_eq!(config.solr.timeout, Duration::from_secs(5));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_malformed_batch_size() {
        for raw in ["-1", "ten", "1.5"] {
            let err = load(&[("SOLR_BATCH_SIZE", raw)]).unwrap_err();
            assert!(matches!(err, IndexingError::ConfigError(_)), "{raw}");
        }
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = load(&[("SOLR_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, IndexingError::ConfigError(_)));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = load(&[("SOLR_URL", "localhost:8983 solr")]).unwrap_err();
        assert!(matches!(err, IndexingError::SearchError(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = load(&[("LOG_FORMAT", "xml")]).unwrap_err();
        assert!(matches!(err, IndexingError::ConfigError(_)));
    }
}
