// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;
use url::Url;

/// Access token for Contentful Management API authentication
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token with validation
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.is_empty() {
            return Err(ValidationError::InvalidAccessToken {
                reason: "access token cannot be empty".to_string(),
            });
        }

        // Would produce an invalid Authorization header
        if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValidationError::InvalidAccessToken {
                reason: "access token must not contain whitespace".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Get the access token as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn redacted(&self) -> String {
        let visible: String = self.0.chars().take(4).collect();
        format!("{}...", visible)
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.redacted()).finish()
    }
}

/// Validated URL type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
