//! Runtime configuration
//!
//! Each binary loads a [`ServiceConfig`] exactly once at startup (after
//! `.env` has been applied) and hands the pieces it needs to the router
//! state. Nothing else reads the environment.

use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Per-service defaults used when a variable is not set
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    pub port: u16,
    pub database_path: &'static str,
}

/// Shortener defaults
pub const SHORTURL_DEFAULTS: Defaults = Defaults {
    port: 8080,
    database_path: "data/shorturl.db",
};

/// To-do defaults
pub const TODO_DEFAULTS: Defaults = Defaults {
    port: 8081,
    database_path: "data/todo.db",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address to bind, `HOST`
    pub host: String,

    /// Port to bind, `PORT`
    pub port: u16,

    /// Database file, `DATABASE_URL`
    pub database_path: PathBuf,

    /// Public base used to build absolute short links, `URL`
    ///
    /// When unset the shortener hands out relative links (`/abc123`).
    pub public_url: Option<String>,
}

impl ServiceConfig {
    /// Reads the configuration from the process environment
    pub fn from_env(defaults: Defaults) -> Self {
        Self::from_lookup(defaults, |key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(defaults: Defaults, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, fallback = defaults.port, "invalid PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let database_path = lookup("DATABASE_URL")
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| defaults.database_path.to_string());

        let public_url = lookup("URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Self {
            host: lookup("HOST")
                .filter(|host| !host.is_empty())
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_path: PathBuf::from(database_path),
            public_url,
        }
    }

    /// `host:port` string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)], defaults: Defaults) -> ServiceConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(defaults, |key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_service_defaults() {
        let config = config_from(&[], TODO_DEFAULTS);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.database_path, PathBuf::from("data/todo.db"));
        assert_eq!(config.public_url, None);
        assert_eq!(config.bind_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(
            &[
                ("HOST", "127.0.0.1"),
                ("PORT", "9000"),
                ("DATABASE_URL", "/tmp/links.db"),
                ("URL", "https://sho.rt/"),
            ],
            SHORTURL_DEFAULTS,
        );
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.database_path, PathBuf::from("/tmp/links.db"));
        assert_eq!(config.public_url.as_deref(), Some("https://sho.rt"));
    }

    #[test]
    fn bad_port_falls_back() {
        let config = config_from(&[("PORT", "eighty")], SHORTURL_DEFAULTS);
        assert_eq!(config.port, 8080);
    }
}
