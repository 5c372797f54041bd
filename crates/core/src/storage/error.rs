use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Every variant surfaces to the client as a 500 response carrying the
/// display message; the variant itself is the machine-readable kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Write failed: {0}")]
    WriteFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failed_display() {
        let error = RepositoryError::WriteFailed("table not found".to_string());
        assert_eq!(error.to_string(), "Write failed: table not found");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("throughput exceeded".to_string());
        assert_eq!(error.to_string(), "Query failed: throughput exceeded");
    }

    #[test]
    fn test_serialization_display() {
        let error = RepositoryError::Serialization("not valid JSON".to_string());
        assert_eq!(error.to_string(), "Serialization error: not valid JSON");
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("missing attribute: sk".to_string());
        assert_eq!(error.to_string(), "Invalid data: missing attribute: sk");
    }
}
