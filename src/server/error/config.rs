use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("{0} is not a valid base URL")]
    InvalidBaseUrl(String),
}
