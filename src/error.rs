//! Error types for mail2chat.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Email message type is not supported")]
    UnsupportedType,

    #[error("Improper email message object type")]
    InvalidInput,

    #[error("Message object does not contain any information")]
    EmptyContent,

    #[error("Failed to render email: {0}")]
    Render(String),

    #[error("Failed to parse message: {0}")]
    Parse(String),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a [`Notifier`](crate::notifier::Notifier).
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// Recoverable transport failure. The adapter logs and swallows it.
    #[error("Transport {transport} failed: {reason}")]
    Transport { transport: String, reason: String },

    /// The notifier refused the notification before attempting delivery.
    #[error("Notifier {transport} rejected notification: {reason}")]
    Rejected { transport: String, reason: String },
}

impl DeliveryError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),
}

/// Result type alias for mail2chat.
pub type Result<T> = std::result::Result<T, Error>;
