use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextChangerError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown option '{name}' in category {category}")]
    UnknownConverter { category: String, name: String },

    #[error("Invalid selector '{0}' (expected CATEGORY=OPTION)")]
    InvalidSelector(String),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Duplicate converter '{name}' in category {category}")]
    DuplicateConverter { category: String, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TextChangerError>;
