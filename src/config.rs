use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// default location of the precomputed initial outcome table
pub const DEFAULT_OUTCOME_TABLE: &str = "data/initial_outcomes";

/// environment variable overriding the worker count
pub const THREADS_ENV: &str = "PARROT_THREADS";
/// environment variable overriding the outcome table path
pub const OUTCOMES_ENV: &str = "PARROT_OUTCOMES";

/// Settings shared by the parallel enumerations and the outcome cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of worker threads, one static partition each
    pub n_threads: usize,
    /// Where the initial outcome table is read from and written to
    pub outcome_table_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            n_threads: num_cpus::get(),
            outcome_table_path: PathBuf::from(DEFAULT_OUTCOME_TABLE),
        }
    }
}

impl EngineConfig {
    /// Parses a config from json, missing fields take their default
    ///
    /// # Example
    ///
    /// ```
    /// use parrot_poker::config::EngineConfig;
    /// let config = EngineConfig::from_json(r#"{ "n_threads": 2 }"#).unwrap();
    /// assert_eq!(config.n_threads, 2);
    /// ```
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let config: EngineConfig = serde_json::from_str(text)?;
        Ok(config.clamped())
    }

    /// Default config with `PARROT_THREADS` and `PARROT_OUTCOMES` applied
    ///
    /// A thread count that doesn't parse is ignored.
    pub fn from_env() -> Self {
        let mut config = EngineConfig::default();
        if let Some(n) = env::var(THREADS_ENV).ok().and_then(|v| v.trim().parse().ok()) {
            config.n_threads = n;
        }
        if let Some(path) = env::var_os(OUTCOMES_ENV) {
            config.outcome_table_path = PathBuf::from(path);
        }
        config.clamped()
    }

    // a worker count of zero would never run anything
    fn clamped(mut self) -> Self {
        self.n_threads = std::cmp::max(self.n_threads, 1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = EngineConfig::default();
        assert!(config.n_threads >= 1);
        assert_eq!(config.outcome_table_path, PathBuf::from("data/initial_outcomes"));
    }

    #[test]
    fn test_from_json() {
        let config =
            EngineConfig::from_json(r#"{ "n_threads": 0, "outcome_table_path": "/tmp/x" }"#)
                .unwrap();
        assert_eq!(config.n_threads, 1);
        assert_eq!(config.outcome_table_path, PathBuf::from("/tmp/x"));
        assert!(EngineConfig::from_json("{ \"n_threads\": -1 }").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig {
            n_threads: 3,
            outcome_table_path: PathBuf::from("outcomes.txt"),
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&text).unwrap(), config);
    }
}
