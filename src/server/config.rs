use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub app_url: Url,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url =
            std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: Url::parse(&app_url).map_err(|_| ConfigError::InvalidBaseUrl(app_url))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
