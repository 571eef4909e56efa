// src/error.rs
//! Application error types with structured error handling.
//!
//! Three families of failure matter to callers and are kept apart:
//! transport/service failures (the backend could not be reached or refused
//! the request), a missing article, and content that does not have the
//! expected localized shape.

use std::fmt;
use thiserror::Error;

/// Contentful API error IDs as a typed vocabulary.
///
/// Contentful reports failures as `{"sys": {"type": "Error", "id": "..."}}`.
/// The `id` is mapped here so callers never match on magic strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentfulErrorCode {
    /// The requested resource does not exist or is not visible to the token
    NotFound,
    /// The access token is missing, malformed or revoked
    AccessTokenInvalid,
    /// The token is valid but lacks permission for this resource
    AccessDenied,
    /// Too many requests in the current window
    RateLimitExceeded,
    /// The request itself was malformed
    BadRequest,
    /// Contentful internal server error
    ServerError,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error ID this client doesn't recognize yet
    Unknown(String),
}

impl ContentfulErrorCode {
    /// Parse a Contentful error ID into the typed vocabulary.
    pub fn from_api_response(id: &str) -> Self {
        match id {
            "NotFound" => Self::NotFound,
            "AccessTokenInvalid" => Self::AccessTokenInvalid,
            "AccessDenied" => Self::AccessDenied,
            "RateLimitExceeded" => Self::RateLimitExceeded,
            "BadRequest" => Self::BadRequest,
            "ServerError" => Self::ServerError,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound | Self::HttpStatus(404))
    }

    /// Whether the credentials were rejected.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::AccessTokenInvalid | Self::AccessDenied | Self::HttpStatus(401 | 403)
        )
    }
}

impl fmt::Display for ContentfulErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NotFound"),
            Self::AccessTokenInvalid => write!(f, "AccessTokenInvalid"),
            Self::AccessDenied => write!(f, "AccessDenied"),
            Self::RateLimitExceeded => write!(f, "RateLimitExceeded"),
            Self::BadRequest => write!(f, "BadRequest"),
            Self::ServerError => write!(f, "ServerError"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(id) => write!(f, "{}", id),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Contentful API returned an error ({code}): {message}")]
    ContentfulService {
        code: ContentfulErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Contentful(#[from] ContentfulClientError),

    #[error("article not found: entry '{article_id}' in space '{space_id}'")]
    ArticleNotFound { article_id: String, space_id: String },

    #[error("Field '{field}' is not a localized string: expected {expected}, found {found}")]
    FieldDecode {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// The backend answered, but has no entry for the requested identifiers.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::ArticleNotFound { .. })
    }

    /// The backend could not be reached, refused the credentials, or failed.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::NetworkFailure(_) | AppError::ContentfulService { .. } | AppError::Contentful(_)
        )
    }

    /// The entry exists but a field does not have the localized-string shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, AppError::FieldDecode { .. })
    }
}

/// Failures reported at the wire level by the Contentful API.
#[derive(Error, Debug)]
pub enum ContentfulClientError {
    #[error("Failed to deserialize response: {source}\nBody: {body}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Contentful API error ({status}): {code} - {message}")]
    ContentfulApi {
        status: u16,
        code: ContentfulErrorCode,
        message: String,
        request_id: Option<String>,
    },
}

impl ContentfulClientError {
    /// The typed error ID, when Contentful sent one.
    pub fn code(&self) -> Option<&ContentfulErrorCode> {
        match self {
            Self::ContentfulApi { code, .. } => Some(code),
            Self::Deserialization { .. } => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
