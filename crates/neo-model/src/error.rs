use thiserror::Error;

/// Errors raised while building model records from raw source fields.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A required field was absent or empty in the source record.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A numeric field could not be parsed.
    #[error("malformed number in `{field}`: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    /// A calendar date could not be parsed.
    #[error("invalid calendar date: {value:?}")]
    InvalidTimestamp { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
