use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalogue key: '{0}'")]
    InvalidCatalogueKey(String),

    #[error("Invalid value '{value}' for field {field}")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid record: expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("Error reading catalogue {catalogue}: {message}")]
    Source { catalogue: String, message: String },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl CatalogError {
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    pub fn reading(catalogue: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            catalogue: catalogue.into(),
            message: message.into(),
        }
    }
}
