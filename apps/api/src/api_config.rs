use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use memberpoint_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendConfig {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    Memory,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub api_host: String,
    pub api_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub storage_backend: StorageBackendConfig,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_source(migrate_only, |name| env::var(name).ok())
    }

    fn from_source(
        migrate_only: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);
        let cors_allowed_origin =
            lookup("CORS_ALLOWED_ORIGIN").filter(|value| !value.trim().is_empty());

        let storage_backend = match lookup("STORAGE_BACKEND")
            .unwrap_or_else(|| "postgres".to_owned())
            .as_str()
        {
            "postgres" => {
                let database_url = lookup("DATABASE_URL")
                    .filter(|value| !value.trim().is_empty())
                    .ok_or_else(|| AppError::Validation("DATABASE_URL is required".to_owned()))?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(value) => value.parse::<u32>().map_err(|error| {
                        AppError::Validation(format!("invalid DATABASE_MAX_CONNECTIONS: {error}"))
                    })?,
                    None => 10,
                };
                StorageBackendConfig::Postgres {
                    database_url,
                    max_connections,
                }
            }
            "memory" => StorageBackendConfig::Memory,
            other => {
                return Err(AppError::Validation(format!(
                    "STORAGE_BACKEND must be either 'postgres' or 'memory', got '{other}'"
                )));
            }
        };

        if migrate_only && storage_backend == StorageBackendConfig::Memory {
            return Err(AppError::Validation(
                "the migrate command requires STORAGE_BACKEND=postgres".to_owned(),
            ));
        }

        Ok(Self {
            migrate_only,
            api_host,
            api_port,
            cors_allowed_origin,
            storage_backend,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use memberpoint_core::AppError;

    use super::{ApiConfig, StorageBackendConfig};

    fn load(migrate_only: bool, pairs: &[(&str, &str)]) -> Result<ApiConfig, AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_source(migrate_only, |name| values.get(name).cloned())
    }

    #[test]
    fn postgres_backend_requires_database_url() {
        let result = load(false, &[]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn defaults_apply_for_postgres_backend() {
        let config = load(false, &[("DATABASE_URL", "postgres://localhost/memberpoint")])
            .unwrap_or_else(|_| unreachable!());

        assert_eq!(config.api_host, "127.0.0.1");
        assert_eq!(config.api_port, 3001);
        assert_eq!(config.cors_allowed_origin, None);
        assert_eq!(
            config.storage_backend,
            StorageBackendConfig::Postgres {
                database_url: "postgres://localhost/memberpoint".to_owned(),
                max_connections: 10,
            }
        );
        assert!(config.socket_address().is_ok());
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let config = load(
            false,
            &[
                ("STORAGE_BACKEND", "memory"),
                ("API_PORT", "8080"),
                ("CORS_ALLOWED_ORIGIN", "http://localhost:3000"),
            ],
        )
        .unwrap_or_else(|_| unreachable!());

        assert_eq!(config.storage_backend, StorageBackendConfig::Memory);
        assert_eq!(config.api_port, 8080);
        assert_eq!(
            config.cors_allowed_origin.as_deref(),
            Some("http://localhost:3000")
        );
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = load(false, &[("STORAGE_BACKEND", "sqlite")]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn migrate_command_requires_postgres() {
        let result = load(true, &[("STORAGE_BACKEND", "memory")]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn invalid_host_fails_socket_resolution() {
        let config = load(false, &[("STORAGE_BACKEND", "memory"), ("API_HOST", "not-an-ip")])
            .unwrap_or_else(|_| unreachable!());
        assert!(config.socket_address().is_err());
    }
}
