// src/config.rs
use sqlx::mysql::MySqlConnectOptions;
use std::{collections::HashMap, env};
use thiserror::Error;

use crate::infrastructure::identity::regional_endpoint;

/// Process-wide settings. Read once at start-up and never mutated.
#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    database: DatabaseConfig,
    cognito: CognitoConfig,
    authorizer_claims_header: String,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Clone, Debug)]
pub struct CognitoConfig {
    pub region: String,
    pub user_pool_id: String,
    pub app_client_id: String,
    pub endpoint: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_REGION: &str = "us-east-1";

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_claims_header() -> String {
    "x-authorizer-claims".into()
}

impl AppConfig {
    /// Build configuration from environment variables, letting a `.env` file
    /// populate them when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_map(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let port = match optional("MYSQLPORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("MYSQLPORT must be a port, got '{raw}'")))?,
            None => 3306,
        };

        let max_connections = match optional("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                ))
            })?,
            None => 5,
        };

        let run_migrations = optional("DATABASE_RUN_MIGRATIONS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        let database = DatabaseConfig {
            host: required("MYSQLHOST")?,
            port,
            database: required("MYSQLDATABASE")?,
            user: required("MYSQLUSER")?,
            password: lookup("MYSQLPASS").unwrap_or_default(),
            max_connections,
            run_migrations,
        };

        let user_pool_id = required("COGNITO_USER_POOL_ID")?;
        let app_client_id = required("COGNITO_APP_CLIENT_ID")?;
        let region = optional("AWS_DEFAULT_REGION")
            .or_else(|| region_from_pool_id(&user_pool_id))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let endpoint = optional("COGNITO_ENDPOINT").unwrap_or_else(|| regional_endpoint(&region));

        let authorizer_claims_header = optional("AUTHORIZER_CLAIMS_HEADER")
            .map(|h| h.trim().to_ascii_lowercase())
            .unwrap_or_else(default_claims_header);
        if axum::http::HeaderName::from_bytes(authorizer_claims_header.as_bytes()).is_err() {
            return Err(ConfigError::Invalid(format!(
                "AUTHORIZER_CLAIMS_HEADER is not a valid header name: '{authorizer_claims_header}'"
            )));
        }

        Ok(Self {
            listen_addr: optional("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
            database,
            cognito: CognitoConfig {
                region,
                user_pool_id,
                app_client_id,
                endpoint,
            },
            authorizer_claims_header,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    pub fn cognito(&self) -> &CognitoConfig {
        &self.cognito
    }

    pub fn authorizer_claims_header(&self) -> &str {
        &self.authorizer_claims_header
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

/// User pool ids are prefixed with their region: `us-east-1_AbCdEf123`.
fn region_from_pool_id(pool_id: &str) -> Option<String> {
    pool_id
        .split_once('_')
        .map(|(region, _)| region.to_string())
        .filter(|region| !region.is_empty())
}
