use anyhow::{Context, Result};
use std::str::FromStr;

use savior_domain::entities::DEFAULT_MAX_DISPLAY;
use savior_domain::services::DEFAULT_AGE;

/// Runtime configuration read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port the server listens on
    pub port: u16,
    /// Deployment environment reported by the health endpoint
    pub environment: String,
    /// Upper bound on alerts returned by the alert board
    pub max_display_alerts: usize,
    /// Age used for heart-rate zones when a request omits it
    pub default_user_age: i32,
    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            environment: "development".to_string(),
            max_display_alerts: DEFAULT_MAX_DISPLAY,
            default_user_age: DEFAULT_AGE,
            cors_allow_any: true,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            port: parse_var(&lookup, "PORT", defaults.port)?,
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            max_display_alerts: parse_var(&lookup, "MAX_DISPLAY_ALERTS", defaults.max_display_alerts)?,
            default_user_age: parse_var(&lookup, "DEFAULT_USER_AGE", defaults.default_user_age)?,
            cors_allow_any: lookup("CORS_ALLOW_ANY")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.cors_allow_any),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} must be a number, got {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_display_alerts, 5);
        assert_eq!(config.default_user_age, 30);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("APP_ENV", "production"),
            ("MAX_DISPLAY_ALERTS", "3"),
            ("DEFAULT_USER_AGE", "45"),
            ("CORS_ALLOW_ANY", "false"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
        assert_eq!(config.max_display_alerts, 3);
        assert_eq!(config.default_user_age, 45);
        assert!(!config.cors_allow_any);
    }

    #[test]
    fn test_invalid_number_names_the_variable() {
        let err = ApiConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
