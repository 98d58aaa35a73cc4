//! Error types for the Cookbook application.

use thiserror::Error;

/// A shared error type for the entire Cookbook application.
///
/// Every failure is recovered at the boundary of the user action that
/// triggered it. None of these are fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CookbookError {
    /// No user is signed in.
    #[error("User is not authenticated")]
    NotAuthenticated,

    /// User input was rejected before any store access.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading from the document store failed.
    #[error("Read failure: {0}")]
    ReadFailure(String),

    /// Writing to the document store failed.
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// An image payload could not be decoded or encoded.
    #[error("Decode failure: {0}")]
    DecodeFailure(String),

    /// A picked resource is no longer readable.
    #[error("Resource unavailable: {handle}")]
    ResourceUnavailable { handle: String },

    /// A collection name or document key is not usable by the store.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CookbookError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a ReadFailure error
    pub fn read(message: impl Into<String>) -> Self {
        Self::ReadFailure(message.into())
    }

    /// Creates a WriteFailure error
    pub fn write(message: impl Into<String>) -> Self {
        Self::WriteFailure(message.into())
    }

    /// Creates a DecodeFailure error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeFailure(message.into())
    }

    /// Creates a ResourceUnavailable error
    pub fn resource_unavailable(handle: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            handle: handle.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::ReadFailure(_))
    }

    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::WriteFailure(_))
    }

    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::DecodeFailure(_))
    }

    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, Self::ResourceUnavailable { .. })
    }

    /// Returns true for failures that degrade gracefully instead of
    /// aborting the surrounding operation.
    pub fn is_degradable(&self) -> bool {
        self.is_decode_failure() || self.is_resource_unavailable()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CookbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CookbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CookbookError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CookbookError>`.
pub type Result<T> = std::result::Result<T, CookbookError>;
