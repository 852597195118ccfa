use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Expected {expected} bytes, found {found}")]
    TableSize { expected: usize, found: usize },
    #[error("malformed {keyword} field: {token}")]
    MalformedField {
        keyword: &'static str,
        token: String,
    },
    #[error("missing {keyword} field")]
    MissingField { keyword: &'static str },
}

pub type Result<T> = std::result::Result<T, FontError>;
