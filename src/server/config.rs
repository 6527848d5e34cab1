use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_HOST: &str = "localhost";
const DEFAULT_DATABASE_PORT: u16 = 5432;
const DEFAULT_DATABASE_USER: &str = "postgres";
const DEFAULT_DATABASE_PASSWORD: &str = "postgres";
const DEFAULT_DATABASE_NAME: &str = "erp_db";
const DEFAULT_API_PORT: u16 = 3000;
const DEFAULT_CONTENT_API_URL: &str = "http://localhost:8001/api/v1";

/// How long catalog, story and chapter responses are reused before refetching.
const CONTENT_REVALIDATE_SECONDS: u64 = 3600;

pub struct Config {
    pub database_host: String,
    pub database_port: u16,
    pub database_user: String,
    pub database_password: String,
    pub database_name: String,

    /// Port the REST API listens on, on all interfaces.
    pub api_port: u16,

    /// Base URL of the external content API, without a trailing slash.
    pub content_api_url: String,
    pub content_revalidate: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_host: env_or("DATABASE_HOST", DEFAULT_DATABASE_HOST),
            database_port: parse_env_or("DATABASE_PORT", DEFAULT_DATABASE_PORT)?,
            database_user: env_or("DATABASE_USER", DEFAULT_DATABASE_USER),
            database_password: env_or("DATABASE_PASSWORD", DEFAULT_DATABASE_PASSWORD),
            database_name: env_or("DATABASE_NAME", DEFAULT_DATABASE_NAME),
            api_port: parse_env_or("PORT", DEFAULT_API_PORT)?,
            content_api_url: env_or("CONTENT_API_URL", DEFAULT_CONTENT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            content_revalidate: Duration::from_secs(CONTENT_REVALIDATE_SECONDS),
        })
    }

    /// Postgres connection string assembled from the individual settings.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.database_user,
            self.database_password,
            self.database_host,
            self.database_port,
            self.database_name
        )
    }

    pub fn api_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.api_port))
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            database_host: "db".to_string(),
            database_port: 5433,
            database_user: "reader".to_string(),
            database_password: "secret".to_string(),
            database_name: "metruyen".to_string(),
            api_port: 8080,
            content_api_url: DEFAULT_CONTENT_API_URL.to_string(),
            content_revalidate: Duration::from_secs(CONTENT_REVALIDATE_SECONDS),
        }
    }

    #[test]
    fn builds_postgres_url_from_parts() {
        assert_eq!(
            config().database_url(),
            "postgres://reader:secret@db:5433/metruyen"
        );
    }

    #[test]
    fn binds_api_on_all_interfaces() {
        assert_eq!(config().api_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn rejects_unparsable_number() {
        std::env::set_var("METRUYEN_TEST_BAD_PORT", "not-a-port");

        let result = parse_env_or::<u16>("METRUYEN_TEST_BAD_PORT", 1);

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn falls_back_to_default_when_unset() {
        let result = parse_env_or::<u16>("METRUYEN_TEST_UNSET_PORT", 42);

        assert_eq!(result.unwrap(), 42);
    }
}
