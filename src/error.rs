#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Identity error: {0}")]
    Identity(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Listing error: {0}")]
    Listing(String),

    /// Invocation failure carrying the service error code (e.g.
    /// `AccessDeniedException`), which is what the report line shows.
    #[error("Invocation error: {0}")]
    Invocation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProbeError::Invocation("AccessDeniedException".to_string());
        assert_eq!(err.to_string(), "Invocation error: AccessDeniedException");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let probe_err: ProbeError = io_err.into();
        assert!(matches!(probe_err, ProbeError::Io(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(ProbeError::Config("invalid".to_string()));
        assert!(err_result.is_err());
    }
}
