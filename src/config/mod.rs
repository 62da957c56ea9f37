// src/config/mod.rs
// Service configuration loaded from the environment (and .env when present)

use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    // ── Database Configuration
    pub database_url: String,
    pub max_connections: u32,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:sqlite.db".to_string(),
            max_connections: 5,
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

// A trailing comment needs whitespace before its `#`; a bare `#` is part of the value.
fn strip_comment(val: &str) -> &str {
    let end = val
        .char_indices()
        .find(|&(i, c)| c == '#' && i > 0 && val[..i].ends_with(char::is_whitespace))
        .map_or(val.len(), |(i, _)| i);
    val[..end].trim()
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = strip_comment(&val);
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl ServiceConfig {
    /// Load configuration, reading `.env` first if it exists.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_vars()
    }

    /// Load configuration from already-set process variables only.
    pub fn from_vars() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env_var_or("ITEMS_DATABASE_URL", defaults.database_url),
            max_connections: env_var_or("ITEMS_MAX_CONNECTIONS", defaults.max_connections),
            host: env_var_or("ITEMS_HOST", defaults.host),
            port: env_var_or("ITEMS_PORT", defaults.port),
            log_level: env_var_or("ITEMS_LOG_LEVEL", defaults.log_level),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Tracing level for the configured log level; unknown names mean `INFO`.
    pub fn tracing_level(&self) -> Level {
        Level::from_str(self.log_level.trim()).unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ServiceConfig::default();

        assert_eq!(config.database_url, "sqlite:sqlite.db");
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_tracing_level() {
        let mut config = ServiceConfig::default();
        assert_eq!(config.tracing_level(), Level::INFO);

        config.log_level = "DEBUG".to_string();
        assert_eq!(config.tracing_level(), Level::DEBUG);

        config.log_level = "chatty".to_string();
        assert_eq!(config.tracing_level(), Level::INFO);
    }

    #[test]
    fn test_env_var_or_strips_comments() {
        // SAFETY: the variable name is unique to this test.
        unsafe {
            std::env::set_var("ITEMS_TEST_PORT_WITH_COMMENT", "9090 # local");
            std::env::set_var("ITEMS_TEST_PORT_GARBAGE", "not-a-port");
        }

        assert_eq!(env_var_or("ITEMS_TEST_PORT_WITH_COMMENT", 1u16), 9090);
        assert_eq!(env_var_or("ITEMS_TEST_PORT_GARBAGE", 1u16), 1);
        assert_eq!(env_var_or("ITEMS_TEST_PORT_UNSET", 7u16), 7);
    }

    #[test]
    fn test_hash_inside_value_is_kept() {
        // SAFETY: the variable names are unique to this test.
        unsafe {
            std::env::set_var("ITEMS_TEST_URL_WITH_HASH", "sqlite:/tmp/data#1.db");
            std::env::set_var("ITEMS_TEST_URL_WITH_COMMENT", "sqlite:/tmp/data#1.db  # scratch");
        }

        let default = "sqlite:sqlite.db".to_string();
        assert_eq!(
            env_var_or("ITEMS_TEST_URL_WITH_HASH", default.clone()),
            "sqlite:/tmp/data#1.db"
        );
        assert_eq!(
            env_var_or("ITEMS_TEST_URL_WITH_COMMENT", default),
            "sqlite:/tmp/data#1.db"
        );
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("info"), "info");
        assert_eq!(strip_comment(" debug\t# verbose"), "debug");
        assert_eq!(strip_comment("a#b"), "a#b");
        assert_eq!(strip_comment("# only comment"), "# only comment");
    }
}
