// src/api/parser.rs
//! Turns raw Contentful responses into domain values or typed errors.

use super::client::ApiResponse;
use super::responses::ContentfulError;
use crate::constants::RESPONSE_PREVIEW_LIMIT;
use crate::error::{AppError, ContentfulClientError, ContentfulErrorCode};
use crate::model::{Entry, Space};
use reqwest::StatusCode;

/// Parse any Contentful API response, mapping failures to typed errors
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        ContentfulClientError::Deserialization {
            source: e,
            body: preview(body),
        }
        .into()
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    // Try the Contentful error envelope first
    if let Ok(error) = serde_json::from_str::<ContentfulError>(body) {
        if error.is_error_envelope() {
            return ContentfulClientError::ContentfulApi {
                status: status.as_u16(),
                code: ContentfulErrorCode::from_api_response(&error.sys.id),
                message: error.message,
                request_id: error.request_id,
            }
            .into();
        }
    }

    // Fallback to generic error with HTTP status code
    AppError::ContentfulService {
        code: ContentfulErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    }
}

/// Truncates a body for inclusion in an error message.
fn preview(body: &str) -> String {
    if body.len() <= RESPONSE_PREVIEW_LIMIT {
        return body.to_string();
    }
    let mut end = RESPONSE_PREVIEW_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

/// Parse a space lookup. A missing space is an ordinary service error.
pub fn parse_space_response(result: ApiResponse<String>) -> Result<Space, AppError> {
    parse_api_response(result)
}

/// Parse an entry lookup.
///
/// A 404 carrying Contentful's `NotFound` envelope is the one failure that
/// means "no such entry" and maps to `None`. A bare 404 (a misrouted proxy,
/// a wrong base URL) stays a service error, like everything else.
pub fn parse_entry_response(result: ApiResponse<String>) -> Result<Option<Entry>, AppError> {
    if result.status != StatusCode::NOT_FOUND {
        return parse_api_response(result).map(Some);
    }

    match parse_error(&result.data, result.status, &result.url) {
        AppError::Contentful(ref api_error)
            if api_error.code().is_some_and(ContentfulErrorCode::is_not_found) =>
        {
            log::debug!("No entry at {}", result.url);
            Ok(None)
        }
        other => Err(other),
    }
}
