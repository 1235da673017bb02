//! Error types for loading, generation and report writing

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a benchmark run
#[derive(Debug, Error)]
pub enum BenchError {
    /// A word list, input file or prompt could not be read
    #[error("could not read '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word-to-group data file is not a JSON object of word -> group id
    #[error("invalid group data in '{}': {source}", path.display())]
    GroupData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An artifact could not be written
    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures of the text-generation request.
///
/// Both variants carry enough of the raw exchange to be saved as the run's
/// raw-output artifact.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport failure or non-success HTTP status
    #[error("API request failed: {message}{}", format_response(*status, body))]
    Request {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    /// The payload parsed but did not have the expected shape
    #[error("Model response format was unexpected. {0}")]
    UnexpectedResponse(String),
}

fn format_response(status: Option<u16>, body: &Option<String>) -> String {
    match (status, body) {
        (Some(status), Some(body)) => {
            format!("\nResponse status code: {}\nResponse text: {}", status, body)
        }
        (Some(status), None) => format!("\nResponse status code: {}", status),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_path() {
        let err = BenchError::Load {
            path: PathBuf::from("verbs.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("verbs.txt"), "{}", msg);
        assert!(msg.contains("missing"), "{}", msg);
    }

    #[test]
    fn test_request_error_includes_status_and_body() {
        let err = GenerationError::Request {
            message: "HTTP status client error (401 Unauthorized)".to_string(),
            status: Some(401),
            body: Some("{\"error\":\"no auth\"}".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("API request failed: HTTP status"));
        assert!(msg.contains("Response status code: 401"));
        assert!(msg.contains("no auth"));
    }

    #[test]
    fn test_transport_error_without_response() {
        let err = GenerationError::Request {
            message: "connection refused".to_string(),
            status: None,
            body: None,
        };
        assert_eq!(err.to_string(), "API request failed: connection refused");
    }
}
