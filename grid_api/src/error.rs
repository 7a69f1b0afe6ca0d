//! Error taxonomy shared by real and mock grid implementations.

/// Error type for grid data operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A data operation was attempted through a closed region service.
    #[error("cache is closed")]
    CacheClosed,

    /// The implementation does not support the requested operation.
    #[error("operation not supported: {operation}")]
    Unsupported {
        /// The unsupported operation.
        operation: String,
    },
}

/// Result type with a default error of [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(Error::CacheClosed.to_string(), "cache is closed");
        assert_eq!(
            Error::Unsupported {
                operation: "query".to_owned()
            }
            .to_string(),
            "operation not supported: query",
        );
    }
}
