//! Runtime settings, read from the environment (and an optional `.env` file).

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const LOAD_DELAY_VAR: &str = "DASHBOARD_LOAD_DELAY_MS";
pub const NOTIFICATION_TTL_VAR: &str = "DASHBOARD_NOTIFICATION_TTL_MS";
pub const CHANNEL_CAPACITY_VAR: &str = "DASHBOARD_CHANNEL_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}: invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long the sample source pretends to fetch.
    pub load_delay: Duration,
    /// How long a notification stays visible.
    pub notification_ttl: Duration,
    /// Request queue size of the user store actor.
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            load_delay: Duration::from_millis(800),
            notification_ttl: Duration::from_millis(3000),
            channel_capacity: 32,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            load_delay: read(&lookup, LOAD_DELAY_VAR)?
                .map(Duration::from_millis)
                .unwrap_or(defaults.load_delay),
            notification_ttl: read(&lookup, NOTIFICATION_TTL_VAR)?
                .map(Duration::from_millis)
                .unwrap_or(defaults.notification_ttl),
            channel_capacity: match read::<usize>(&lookup, CHANNEL_CAPACITY_VAR)? {
                Some(0) => {
                    return Err(ConfigError::Invalid {
                        key: CHANNEL_CAPACITY_VAR,
                        value: "0".into(),
                    })
                }
                Some(capacity) => capacity,
                None => defaults.channel_capacity,
            },
        })
    }
}

fn read<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
        let defaults = Config::default();
        assert_eq!(defaults.load_delay, Duration::from_millis(800));
        assert_eq!(defaults.notification_ttl, Duration::from_millis(3000));
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            (LOAD_DELAY_VAR, "0"),
            (NOTIFICATION_TTL_VAR, " 1500 "),
            (CHANNEL_CAPACITY_VAR, "8"),
        ]))
        .unwrap();
        assert_eq!(config.load_delay, Duration::ZERO);
        assert_eq!(config.notification_ttl, Duration::from_millis(1500));
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup(&[(LOAD_DELAY_VAR, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: LOAD_DELAY_VAR,
                value: "soon".into()
            }
        );
        assert!(Config::from_lookup(lookup(&[(CHANNEL_CAPACITY_VAR, "0")])).is_err());
    }
}
