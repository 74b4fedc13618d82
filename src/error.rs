/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error taxonomy for the figo client
//!
//! Every failed operation surfaces as one [`AppError`]. Absence of a resource is
//! never an error: single-item lookups return `Ok(None)` and removals of an
//! unknown id return `Ok(false)`.

use reqwest::StatusCode;

/// Broad category of a failure, used by callers to branch without matching on messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The service understood the request and rejected it
    Domain,
    /// The request could not be completed at all
    Transport,
    /// The response did not match the expected shape
    Decode,
}

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The service (or local validation mirroring a service rule) rejected the request
    #[error("domain failure [{code}]: {message}")]
    Domain {
        /// HTTP status returned by the service, `None` when rejected before dispatch
        status: Option<u16>,
        /// Machine-readable error code
        code: String,
        /// Human-readable message
        message: String,
    },

    /// Connection refused, timeout, unreadable response and similar failures
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected type
    #[error("decode failure: {0}")]
    Decode(String),
}

impl AppError {
    /// Builds a domain failure that was detected before any request was sent
    pub fn rejected(code: &str, message: impl Into<String>) -> Self {
        AppError::Domain {
            status: None,
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Returns the category of this failure
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::Domain { .. } => FailureKind::Domain,
            AppError::Transport(_) => FailureKind::Transport,
            AppError::Decode(_) => FailureKind::Decode,
        }
    }

    /// Machine-readable code of a domain failure
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            AppError::Domain { code, .. } => Some(code),
            _ => None,
        }
    }

    /// HTTP status of a domain failure reported by the service
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Domain { status, .. } => *status,
            _ => None,
        }
    }

    /// True when the service refused the access token
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            AppError::Decode(error.to_string())
        } else {
            AppError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Decode(error.to_string())
    }
}

/// Result alias used across the crate
pub type FigoResult<T> = Result<T, AppError>;
