//! Error types for Forge Preview

use thiserror::Error;

/// Main error type for Forge Preview operations
#[derive(Error, Debug)]
pub enum ForgeError {
    /// No persistent store exists in the host environment
    #[error("Storage unavailable")]
    StorageUnavailable,

    /// The store rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Two cards in one deck share an id
    #[error("Duplicate card id: {0}")]
    DuplicateCardId(String),

    /// A card was defined without an id
    #[error("Card at position {0} has an empty id")]
    EmptyCardId(usize),

    /// Bundled or user-supplied JSON could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// A tracking parameter could not be parsed or is not recognised
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),
}

/// Result type alias using ForgeError
pub type ForgeResult<T> = Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ForgeError::DuplicateCardId("frostcore-02".to_string());
        assert_eq!(format!("{}", err), "Duplicate card id: frostcore-02");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ForgeError = json_err.into();
        assert!(matches!(err, ForgeError::Config(_)));
    }
}
