use std::{env, num::NonZeroU32};

use anyhow::{Context, Result};

const DEFAULT_POOL_SIZE: u32 = 10;

/// Process configuration, read from the environment (and `.env`, which
/// `main` loads first).
#[derive(Debug, Clone)]
pub struct Config {
    pub address: String,

    /// `None` runs the service on the in-memory store.
    pub database_url: Option<String>,

    /// Never zero, bb8 refuses an empty pool.
    pub pool_size: u32
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let address = lookup("ADDRESS")
            .context("ADDRESS must be set! Check your .env file!")?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty());

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(size) => size
                .parse::<NonZeroU32>()
                .with_context(|| format!("DATABASE_POOL_SIZE must be a positive integer, got {:?}", size))?
                .get(),
            None => DEFAULT_POOL_SIZE
        };

        Ok(Config {
            address,
            database_url,
            pool_size
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_memory_store_and_default_pool_size() {
        let config = config_from(&[("ADDRESS", "127.0.0.1:8080"), ("DATABASE_URL", "")]).unwrap();

        assert_eq!(config.database_url, None);
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn requires_address() {
        assert!(config_from(&[]).is_err());
    }

    #[test]
    fn rejects_zero_and_garbage_pool_sizes() {
        let zero = config_from(&[("ADDRESS", "127.0.0.1:8080"), ("DATABASE_POOL_SIZE", "0")]);
        assert!(zero.is_err());

        let garbage = config_from(&[("ADDRESS", "127.0.0.1:8080"), ("DATABASE_POOL_SIZE", "ten")]);
        assert!(garbage.is_err());

        let five = config_from(&[("ADDRESS", "127.0.0.1:8080"), ("DATABASE_POOL_SIZE", "5")]).unwrap();
        assert_eq!(five.pool_size, 5);
    }
}
