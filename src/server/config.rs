use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_AUTH_AUDIENCE: &str = "addressbook_api";
const DEFAULT_AUTH_SCOPE: &str = "addressbook_api";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub auth_introspection_url: String,
    pub auth_client_id: String,
    pub auth_client_secret: String,

    pub auth_audience: String,
    pub auth_scope: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            auth_introspection_url: required("AUTH_INTROSPECTION_URL")?,
            auth_client_id: required("AUTH_CLIENT_ID")?,
            auth_client_secret: required("AUTH_CLIENT_SECRET")?,
            auth_audience: optional("AUTH_AUDIENCE", DEFAULT_AUTH_AUDIENCE),
            auth_scope: optional("AUTH_SCOPE", DEFAULT_AUTH_SCOPE),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
