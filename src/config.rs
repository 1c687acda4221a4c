//! Runtime configuration from environment variables.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::ClockTiming;
use crate::types::{FALL_INTERVAL_MS, HIGHLIGHT_MS};

pub const ENV_FALL_MS: &str = "FALLING_BLOCKS_FALL_MS";
pub const ENV_HIGHLIGHT_MS: &str = "FALLING_BLOCKS_HIGHLIGHT_MS";
pub const ENV_SEED: &str = "FALLING_BLOCKS_SEED";
pub const ENV_LOG_PATH: &str = "FALLING_BLOCKS_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub fall_interval_ms: u32,
    pub highlight_ms: u32,
    pub seed: u32,
    /// JSONL journal destination; `None` disables the journal.
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            highlight_ms: HIGHLIGHT_MS,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, keeping defaults for anything
    /// missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let positive_ms = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|&ms| ms > 0)
                .unwrap_or(default)
        };

        let fall_interval_ms = positive_ms(ENV_FALL_MS, FALL_INTERVAL_MS);
        let highlight_ms = positive_ms(ENV_HIGHLIGHT_MS, HIGHLIGHT_MS);

        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            fall_interval_ms,
            highlight_ms,
            seed,
            log_path,
        }
    }

    pub fn timing(&self) -> ClockTiming {
        ClockTiming {
            fall_interval_ms: self.fall_interval_ms,
            highlight_ms: self.highlight_ms,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[(ENV_SEED, "9")]));
        assert_eq!(config.fall_interval_ms, 200);
        assert_eq!(config.highlight_ms, 100);
        assert_eq!(config.seed, 9);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_FALL_MS, "350"),
            (ENV_HIGHLIGHT_MS, " 50 "),
            (ENV_SEED, "42"),
            (ENV_LOG_PATH, "/tmp/blocks.jsonl"),
        ]));
        assert_eq!(
            config.timing(),
            ClockTiming {
                fall_interval_ms: 350,
                highlight_ms: 50
            }
        );
        assert_eq!(config.seed, 42);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blocks.jsonl"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_FALL_MS, "0"),
            (ENV_HIGHLIGHT_MS, "fast"),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(config.fall_interval_ms, 200);
        assert_eq!(config.highlight_ms, 100);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
