use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub oidc_issuer_url: String,
    pub bind_addr: SocketAddr,
    /// Upsert the school reference lists at startup
    pub seed_schools: bool,
}

impl Config {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:3000";

    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let oidc_issuer_url = required("OIDC_ISSUER_URL")?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let seed_schools = match lookup("SEED_SCHOOLS").as_deref().map(str::trim) {
            None | Some("") => true,
            Some(value) => parse_bool(value).ok_or_else(|| ConfigError::Invalid {
                key: "SEED_SCHOOLS",
                value: value.to_string(),
            })?,
        };

        Ok(Self {
            database_url,
            oidc_issuer_url,
            bind_addr,
            seed_schools,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/planner"),
        ("OIDC_ISSUER_URL", "https://id.example.com"),
    ];

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/planner");
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert!(config.seed_schools);
    }

    #[test]
    fn missing_database_url() {
        let err = Config::from_lookup(lookup(&[("OIDC_ISSUER_URL", "https://id")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn blank_issuer_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/planner"),
            ("OIDC_ISSUER_URL", "  "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("OIDC_ISSUER_URL"));
    }

    #[test]
    fn overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("BIND_ADDR", "127.0.0.1:8080"));
        pairs.push(("SEED_SCHOOLS", "off"));

        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert!(!config.seed_schools);
    }

    #[test]
    fn invalid_values() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SEED_SCHOOLS", "sometimes"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid { key: "SEED_SCHOOLS", .. })
        ));

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("BIND_ADDR", "localhost"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid { key: "BIND_ADDR", .. })
        ));
    }
}
