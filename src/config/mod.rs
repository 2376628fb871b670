use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Base connection URL; the path segment is replaced by `name`.
    pub url: Option<String>,
    pub name: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            Ok("test") => Environment::Test,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        Self::for_environment(environment).with_env_overrides(|key| env::var(key).ok())
    }

    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Test => Self::test(),
            Environment::Development => Self::development(),
        }
    }

    fn with_env_overrides<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(v) = var("HOST") {
            self.server.host = v;
        }
        if let Some(v) = var("BIZTIME_PORT").or_else(|| var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Some(v) = var("DATABASE_URL") {
            self.database.url = Some(v);
        }
        if let Some(v) = var("DATABASE_NAME") {
            self.database.name = v;
        }
        if let Some(v) = var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Some(v) = var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Some(v) = var("DATABASE_RUN_MIGRATIONS") {
            self.database.run_migrations = v.parse().unwrap_or(self.database.run_migrations);
        }

        // API overrides
        if let Some(v) = var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }

        // Security overrides
        if let Some(v) = var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Some(v) = var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: None,
                name: "biztime".to_string(),
                max_connections: 10,
                connection_timeout: 30,
                run_migrations: true,
            },
            api: ApiConfig {
                max_request_size_bytes: 1024 * 1024, // 1MB
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["*".to_string()],
            },
        }
    }

    fn test() -> Self {
        Self {
            environment: Environment::Test,
            database: DatabaseConfig {
                name: "biztime_test".to_string(),
                max_connections: 5,
                connection_timeout: 10,
                ..Self::development().database
            },
            ..Self::development()
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: None,
                name: "biztime".to_string(),
                max_connections: 20,
                connection_timeout: 10,
                run_migrations: true,
            },
            api: ApiConfig {
                max_request_size_bytes: 256 * 1024,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: None,
                name: "biztime".to_string(),
                max_connections: 50,
                connection_timeout: 5,
                run_migrations: false,
            },
            api: ApiConfig {
                max_request_size_bytes: 64 * 1024,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert!(config.database.run_migrations);
        assert_eq!(config.database.name, "biztime");
        assert_eq!(config.security.cors_origins, vec!["*"]);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(!config.database.run_migrations);
        assert_eq!(config.database.max_connections, 50);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_environment_uses_separate_database() {
        let config = AppConfig::for_environment(Environment::Test);
        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.database.name, "biztime_test");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn env_overrides_replace_defaults() {
        let config = AppConfig::development().with_env_overrides(overrides(&[
            ("PORT", "4100"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
            ("DATABASE_RUN_MIGRATIONS", "false"),
            ("SECURITY_CORS_ORIGINS", "http://a.test, http://b.test"),
        ]));
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.database.max_connections, 3);
        assert!(!config.database.run_migrations);
        assert_eq!(config.security.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn biztime_port_wins_over_port_and_bad_values_are_ignored() {
        let config = AppConfig::development().with_env_overrides(overrides(&[
            ("BIZTIME_PORT", "5000"),
            ("PORT", "6000"),
            ("DATABASE_CONNECTION_TIMEOUT", "soon"),
        ]));
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.connection_timeout, 30);
    }
}
