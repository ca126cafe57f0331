use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Category {category_id} not found for portal {portal}")]
    CategoryNotFound { portal: String, category_id: String },

    #[error("Ingestion error: {message}")]
    IngestError { message: String },
}

impl ResolverError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ResolverError::IoError(_) => "Check that the store directory exists and is writable",
            ResolverError::SerializationError(_) => {
                "The store file is not valid JSON; restore it or re-run ingest"
            }
            ResolverError::ConfigError { .. }
            | ResolverError::ConfigValidationError { .. }
            | ResolverError::InvalidConfigValueError { .. }
            | ResolverError::MissingConfigError { .. } => {
                "Review the TOML configuration file and command line flags"
            }
            ResolverError::CategoryNotFound { .. } => {
                "Run ingest for the portal first, or check the category id"
            }
            ResolverError::IngestError { .. } => {
                "The settings payload must contain a `topics` array of {id, title} objects"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolverError>;
