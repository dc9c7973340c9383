//! Service configuration from environment variables.

use rps_core::Amount;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BLIND: Amount = 5;

/// Errors from reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Startup configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// `PORT`
    pub port: u16,
    /// `RPS_BLIND`, used for the startup game and blind-less create requests
    pub blind: Amount,
    /// `RPS_DEMO_FUNDS`, credited to the `alice` and `bob` demo accounts
    pub demo_funds: Option<Amount>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            blind: DEFAULT_BLIND,
            demo_funds: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            port: parse(&lookup, "PORT")?.unwrap_or(defaults.port),
            blind: parse(&lookup, "RPS_BLIND")?.unwrap_or(defaults.blind),
            demo_funds: parse(&lookup, "RPS_DEMO_FUNDS")?,
        })
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), ServiceConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config =
            config_from(&[("PORT", "8080"), ("RPS_BLIND", "25"), ("RPS_DEMO_FUNDS", "100")])
                .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.blind, 25);
        assert_eq!(config.demo_funds, Some(100));
    }

    #[test]
    fn test_rejects_bad_blind() {
        let err = config_from(&[("RPS_BLIND", "five")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "RPS_BLIND",
                ..
            }
        ));
    }
}
