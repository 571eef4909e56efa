use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid {kind} ID: {reason}")]
    InvalidId { kind: &'static str, reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid access token format: {reason}")]
    InvalidAccessToken { reason: String },
}
