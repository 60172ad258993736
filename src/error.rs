use thiserror::Error;

pub type Result<T> = std::result::Result<T, DdnsError>;

/// Every failure aborts the run; none of these are retried.
#[derive(Debug, Error)]
pub enum DdnsError {
    #[error("Error loading env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Missing required env variable: {0}")]
    MissingVar(&'static str),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse API response: {source}. Response: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not an IPv4 address ({what}): {value:?}")]
    InvalidIp { what: &'static str, value: String },

    #[error("DNS record not found for domain: {0}")]
    RecordNotFound(String),
}
