use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Application configuration loaded from the environment.
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Public base URL of the web client, used for post-login redirects and admin links.
    pub app_url: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    pub storage: StorageConfig,
}

/// Object storage API used for photo uploads.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Base URL of the storage API, objects are written to `{endpoint}/{bucket}/{key}`.
    pub endpoint: String,
    pub bucket: String,
    /// Bearer token sent with every storage request.
    pub token: String,
    /// Base URL under which uploaded objects are publicly served.
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: required("APP_URL")?,
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: required("OAUTH_AUTH_URL")?,
            oauth_token_url: required("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: required("OAUTH_USERINFO_URL")?,
            storage: StorageConfig {
                endpoint: required("STORAGE_ENDPOINT")?,
                bucket: required("STORAGE_BUCKET")?,
                token: required("STORAGE_TOKEN")?,
                public_url: required("STORAGE_PUBLIC_URL")?,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
