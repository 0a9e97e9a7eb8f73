use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaddieError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Aggregation error: {message}")]
    AggregationError { message: String },

    #[error("Cannot aggregate an empty group of rounds")]
    EmptyGroupError,
}

pub type Result<T> = std::result::Result<T, CaddieError>;
