use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BATCH_FETCH_SIZE: usize = 100;

pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    /// Upper bound of ids per `IN (...)` list when collections are batch fetched.
    pub batch_fetch_size: usize,
    /// Log every SQL statement SeaORM issues.
    pub sql_logging: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let batch_fetch_size = parse_value(
            "BATCH_FETCH_SIZE",
            std::env::var("BATCH_FETCH_SIZE").ok(),
            DEFAULT_BATCH_FETCH_SIZE,
        )?;
        if batch_fetch_size == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "BATCH_FETCH_SIZE".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            batch_fetch_size,
            sql_logging: parse_value("SQL_LOGGING", std::env::var("SQL_LOGGING").ok(), false)?,
        })
    }
}

/// Parses an optional raw value, falling back to `default` when it is absent.
fn parse_value<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_default() {
        let size: usize = parse_value("BATCH_FETCH_SIZE", None, 100).unwrap();
        assert_eq!(size, 100);
    }

    #[test]
    fn parses_present_value() {
        let logging: bool = parse_value("SQL_LOGGING", Some(" true ".to_string()), false).unwrap();
        assert!(logging);
    }

    #[test]
    fn rejects_unparseable_value() {
        let result: Result<usize, _> =
            parse_value("BATCH_FETCH_SIZE", Some("lots".to_string()), 100);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, ref value })
                if name == "BATCH_FETCH_SIZE" && value == "lots"
        ));
    }
}
