//! Crate error type.

use thiserror::Error;

/// Errors raised while loading users or setting up the program.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The request never produced a response (DNS, TLS, timeout...).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Endpoint that was requested.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{url} answered {status}")]
    Status {
        /// Endpoint that was requested.
        url: String,
        /// Status the endpoint answered with.
        status: reqwest::StatusCode,
    },

    /// The body was not a JSON array of users.
    #[error("invalid users payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The log file could not be opened.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        /// Requested log path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber was rejected.
    #[error("logging setup failed: {0}")]
    Logging(String),

    /// The terminal program failed to start or exited with an error.
    #[error("terminal program failed: {0}")]
    Program(#[from] bubbletea_rs::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn converts<E: Into<DashboardError>>() {}

    #[test]
    fn test_program_and_decode_errors_convert() {
        converts::<bubbletea_rs::Error>();
        converts::<serde_json::Error>();
    }

    #[test]
    fn test_status_message_names_url_and_code() {
        let err = DashboardError::Status {
            url: "http://localhost/members.json".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let msg = err.to_string();
        assert!(msg.contains("http://localhost/members.json"));
        assert!(msg.contains("404"));
    }
}
