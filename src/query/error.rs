#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("invalid pattern '{pattern}' for column '{column}': {message}")]
    InvalidPattern {
        column: String,
        pattern: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, QueryError>;
