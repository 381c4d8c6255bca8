//! Environment-driven configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::agent::DEFAULT_MAX_ITERATIONS;
use crate::harness::DEFAULT_QUERY_TIMEOUT;

/// Runtime configuration for the harness and the local agent
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one prompt file per category
    pub prompts_dir: PathBuf,
    /// Directory of fact documents for the retrieval store
    pub docs_dir: PathBuf,
    /// Directory the dataset snapshots are written to
    pub results_dir: PathBuf,
    /// Loop iteration budget for the local agent
    pub max_iterations: usize,
    /// Per-query timeout applied by the harness
    pub query_timeout: Duration,
}

impl Config {
    /// Read the configuration from the environment, with defaults
    pub fn from_env() -> Self {
        Self {
            prompts_dir: path_var("LEAKPROBE_PROMPTS_DIR", "data/prompts"),
            docs_dir: path_var("LEAKPROBE_DOCS_DIR", "data/example_docs"),
            results_dir: path_var("LEAKPROBE_RESULTS_DIR", "results/analysis"),
            max_iterations: parse_var("LEAKPROBE_MAX_ITERATIONS", DEFAULT_MAX_ITERATIONS),
            query_timeout: Duration::from_secs(parse_var(
                "LEAKPROBE_QUERY_TIMEOUT_SECS",
                DEFAULT_QUERY_TIMEOUT.as_secs(),
            )),
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}

fn parse_var<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring unparsable {}={:?}, using default", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_env();
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(config.prompts_dir.ends_with("prompts"));
    }
}
