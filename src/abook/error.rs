use thiserror::Error;

/// Rejections raised when raw input does not make a valid field value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Contact name cannot be empty")]
    InvalidName,

    #[error("Phone number must be 10 digits, got '{0}'")]
    InvalidPhone(String),

    #[error("Invalid date '{0}'. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

#[derive(Error, Debug)]
pub enum AbookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Usage: {verb} {usage}")]
    Arguments { verb: String, usage: String },

    #[error("{0}")]
    Ambiguous(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl AbookError {
    pub fn arguments(verb: &str, usage: &str) -> Self {
        AbookError::Arguments {
            verb: verb.to_string(),
            usage: usage.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AbookError>;
