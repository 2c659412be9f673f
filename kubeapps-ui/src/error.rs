///! Error types for the landing view crate

/// UI error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownRoute("/nodes".to_string());
        assert_eq!(err.to_string(), "Unknown route: /nodes");

        let err = Error::InvalidConfig("base path must start with '/'".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: base path must start with '/'"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{ not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Malformed configuration JSON"));
    }
}
