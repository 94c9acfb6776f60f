//! Error types for the composer and its transport.
//!
//! Every failure is scoped to a single submit attempt. The user sees one
//! generic notice regardless of the variant; [`FailureKind`] keeps the
//! distinction available to logs and tests.

use thiserror::Error;

/// Failure while delivering a message to the chat endpoint.
#[derive(Error, Debug)]
pub enum SendError {
    /// HTTP request failed before a usable response arrived. Bodies are
    /// parsed separately, so a bad body is [`SendError::Malformed`], not this.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection-level failure. [`HttpTransport`](crate::transport::HttpTransport)
    /// never produces this; it is for other `MessageTransport` implementations.
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The endpoint answered with a non-success status.
    #[error("Server rejected message ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder if it could not be read.
        message: String,
    },

    /// Success status, but the body is not a sent message.
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure while mutating page elements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("DOM error: {0}")]
pub struct DomError(pub String);

impl DomError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Any failure that ends a submit attempt in the failure branch.
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error(transparent)]
    Send(#[from] SendError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Coarse classification of a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response.
    Transport,
    /// A response arrived with a failure status.
    ServerRejection,
    /// A success response whose body did not parse.
    MalformedResponse,
    /// The confirmed message could not be rendered.
    Render,
}

impl FailureKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::ServerRejection => "server_rejection",
            Self::MalformedResponse => "malformed_response",
            Self::Render => "render",
        }
    }
}

impl SendError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Http(_) | Self::Connection(_) | Self::InvalidUrl(_) => FailureKind::Transport,
            Self::Rejected { .. } => FailureKind::ServerRejection,
            Self::Malformed(_) => FailureKind::MalformedResponse,
        }
    }
}

impl ComposerError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Send(err) => err.kind(),
            Self::Dom(_) => FailureKind::Render,
        }
    }
}

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, SendError>;
