//! Configuration management for the conversationalist application.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Unset or unparseable values fall back to the default.

use crate::cities::MAX_SUGGESTIONS;
use conversationalist_runtime::StoreConfig;
use serde::{Deserialize, Serialize};
use std::env;

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "conversationalist=info";

/// Default limit on actions fed back by effects during one dispatch
pub const DEFAULT_FEEDBACK_LIMIT: usize = 32;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Maximum number of city suggestions returned by the map search,
    /// honored within `1..=10`
    pub city_suggestions: usize,
    /// Maximum number of feedback actions per dispatch
    pub feedback_limit: usize,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `CONVERSATIONALIST_LOG` | `conversationalist=info` |
    /// | `CONVERSATIONALIST_CITY_SUGGESTIONS` | `10` |
    /// | `CONVERSATIONALIST_FEEDBACK_LIMIT` | `32` |
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            log_filter: env::var("CONVERSATIONALIST_LOG")
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            city_suggestions: env::var("CONVERSATIONALIST_CITY_SUGGESTIONS")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .map_or(MAX_SUGGESTIONS, |n| n.clamp(1, MAX_SUGGESTIONS)),
            feedback_limit: env::var("CONVERSATIONALIST_FEEDBACK_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_FEEDBACK_LIMIT),
        }
    }

    /// City suggestion limit, clamped to `1..=MAX_SUGGESTIONS`
    #[must_use]
    pub fn suggestion_limit(&self) -> usize {
        self.city_suggestions.clamp(1, MAX_SUGGESTIONS)
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.feedback_limit)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            city_suggestions: MAX_SUGGESTIONS,
            feedback_limit: DEFAULT_FEEDBACK_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();

        assert_eq!(config.log_filter, "conversationalist=info");
        assert_eq!(config.city_suggestions, 10);
        assert_eq!(config.store_config().max_feedback_actions, 32);
    }

    #[test]
    fn suggestion_limit_is_clamped() {
        let mut config = Config::default();

        config.city_suggestions = 50;
        assert_eq!(config.suggestion_limit(), 10);

        config.city_suggestions = 0;
        assert_eq!(config.suggestion_limit(), 1);

        config.city_suggestions = 4;
        assert_eq!(config.suggestion_limit(), 4);
    }
}
