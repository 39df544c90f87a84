use std::str::FromStr;

use crate::errors::ServerError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pool_size: u32,
    pub rate_limit_replenish_ms: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| {
                log::error!("env {key} is not set");
                ServerError::EnvironmentError
            })
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse("PORT", &required("PORT")?)?,
            database_url: required("DATABASE_URL")?,
            pool_size: parse_or("DATABASE_POOL_SIZE", lookup("DATABASE_POOL_SIZE"), 10)?,
            rate_limit_replenish_ms: parse_or(
                "RATE_LIMIT_REPLENISH_MS",
                lookup("RATE_LIMIT_REPLENISH_MS"),
                500,
            )?,
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", lookup("RATE_LIMIT_BURST"), 120)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ServerError> {
    value.trim().parse::<T>().map_err(|_| {
        log::error!("env {key} has an invalid value: {value:?}");
        ServerError::EnvironmentError
    })
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, ServerError> {
    match value {
        Some(value) => parse(key, &value),
        None => Ok(default),
    }
}
