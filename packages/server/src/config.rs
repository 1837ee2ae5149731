use anyhow::{Context, Result};
use content_extractor::{FetchConfig, DEFAULT_USER_AGENT};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Where `generate-sounds` writes tracks and the server reads them from.
pub const DEFAULT_SOUNDS_DIR: &str = "public/sounds";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
    pub sounds_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            fetch_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            allowed_origins: Vec::new(),
            sounds_dir: PathBuf::from(DEFAULT_SOUNDS_DIR),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse().context("PORT must be a valid number")?,
            None => defaults.port,
        };

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => defaults.fetch_timeout,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            fetch_timeout,
            user_agent: lookup("FETCH_USER_AGENT")
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            allowed_origins,
            sounds_dir: lookup("SOUNDS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.sounds_dir),
        })
    }

    /// Address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Settings for the outbound page fetcher.
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::new()
            .with_timeout(self.fetch_timeout)
            .with_user_agent(self.user_agent.clone())
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
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.sounds_dir, PathBuf::from("public/sounds"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("FETCH_TIMEOUT_SECS", "5"),
            ("FETCH_USER_AGENT", "WellnessHub/1.0"),
            ("ALLOWED_ORIGINS", "http://localhost:3000, https://hub.example ,"),
            ("SOUNDS_DIR", "/srv/wellness/sounds"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "WellnessHub/1.0");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://hub.example"]
        );

        assert_eq!(config.sounds_dir, PathBuf::from("/srv/wellness/sounds"));

        let fetch = config.fetch_config();
        assert_eq!(fetch.timeout, Duration::from_secs(5));
        assert_eq!(fetch.user_agent, "WellnessHub/1.0");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid number"));
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[("FETCH_TIMEOUT_SECS", "-1")])).is_err());
    }
}
