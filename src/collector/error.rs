use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid release date: {0:?}")]
    InvalidDate(String),

    #[error("Element <{element}> is missing attribute {attribute:?}")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Listing row for {version:?} has no release date")]
    MalformedRow { version: String },

    #[error("Invalid selector {selector:?}: {message}")]
    Selector {
        selector: &'static str,
        message: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
