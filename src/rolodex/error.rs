use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("No contact at position {0}")]
    ContactNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
