//! Error types for the SlideSpeak API client

use std::time::Duration;

use thiserror::Error;

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the SlideSpeak API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected locally; nothing was sent upstream
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP transport failed (connection refused, timeout, DNS, ...)
    #[error("SlideSpeak API unreachable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("SlideSpeak API rejected the request (status {status}): {message}")]
    UpstreamRejected {
        /// HTTP status code
        status: u16,
        /// Response body returned by the API
        message: String,
    },

    /// The API answered 2xx but the body was not usable
    #[error("unexpected SlideSpeak API response: {0}")]
    InvalidResponse(String),

    /// The generation task itself failed upstream
    #[error("generation task {task_id} failed: {detail}")]
    GenerationFailed {
        /// Identifier of the failed task
        task_id: String,
        /// Failure detail reported by the API
        detail: String,
    },

    /// The task did not reach a terminal state within the wait budget
    #[error("timed out after {waited:?} waiting for task {task_id}")]
    PollTimeout {
        /// Identifier of the task still in flight
        task_id: String,
        /// How long we waited before giving up
        waited: Duration,
    },
}

impl ApiError {
    /// Create an `UpstreamRejected` error from a status code and message
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamRejected {
            status,
            message: message.into(),
        }
    }

    /// Check whether a later poll could still succeed.
    ///
    /// Transport failures, error statuses and malformed bodies on a single
    /// status check are all worth retrying; the task itself may be fine.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable(_) | Self::UpstreamRejected { .. } | Self::InvalidResponse(_)
        )
    }

    /// Check if this error means the wait budget ran out.
    ///
    /// The task may still complete upstream; callers can keep the task id
    /// and check its status later.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::PollTimeout { .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UpstreamRejected { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UpstreamRejected { status, .. } if *status >= 500)
    }
}
