use crate::errors::ConfigError;
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_WORKERS: usize = 8;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Seed file to load instead of the bundled one.
    pub seed_path: Option<PathBuf>,
    /// Auth state handed to every page; there is no login flow here.
    pub is_authorized: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let addr = match lookup("SIX_CITIES_ADDR") {
            Some(raw) => parse_addr(&raw, "SIX_CITIES_ADDR", "socket address")?,
            None => parse_addr(DEFAULT_ADDR, "SIX_CITIES_ADDR", "socket address")?,
        };

        let max_workers = match lookup("SIX_CITIES_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("SIX_CITIES_WORKERS", "positive integer", raw)),
            },
            None => DEFAULT_WORKERS,
        };

        let is_authorized = match lookup("SIX_CITIES_AUTHORIZED") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| invalid("SIX_CITIES_AUTHORIZED", "boolean", raw))?,
            None => false,
        };

        Ok(Self {
            addr,
            max_workers,
            seed_path: lookup("SIX_CITIES_SEED")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            is_authorized,
        })
    }
}

fn parse_addr(raw: &str, key: &'static str, expected: &'static str) -> Result<SocketAddr, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(key, expected, raw.to_string()))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid {
        key,
        expected,
        value,
    }
}
