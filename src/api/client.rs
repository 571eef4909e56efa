// src/api/client.rs
//! Pure HTTP client wrapper for the Contentful Management API.
//!
//! This module provides a thin wrapper around reqwest for making
//! HTTP requests to Contentful. It handles authentication and
//! basic request/response operations without parsing or business logic.

use crate::constants::{CONTENTFUL_API_BASE_URL, CONTENTFUL_CONTENT_TYPE};
use crate::error::AppError;
use crate::model::{Entry, Space};
use crate::types::{AccessToken, EntryId, SpaceId, ValidatedUrl};
use reqwest::{header, Client, Response};
use std::time::Duration;

/// Transport settings passed through to reqwest.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Overrides the Contentful API base URL (proxies, tests).
    pub base_url: Option<ValidatedUrl>,
    /// Deadline applied to every request. `None` means no deadline.
    pub timeout: Option<Duration>,
}

/// A thin wrapper around reqwest Client for Contentful API requests.
#[derive(Clone)]
pub struct ContentfulHttpClient {
    client: Client,
    base_url: String,
}

impl ContentfulHttpClient {
    /// Creates a new HTTP client bound to the given access token.
    pub fn new(access_token: &AccessToken, options: &ClientOptions) -> Result<Self, AppError> {
        let mut builder = Client::builder().default_headers(Self::create_headers(access_token)?);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let base_url = options
            .base_url
            .as_ref()
            .map(ValidatedUrl::as_str)
            .unwrap_or(CONTENTFUL_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Creates the default headers for Contentful API requests.
    fn create_headers(access_token: &AccessToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", access_token.as_str());
        let mut auth_value = header::HeaderValue::from_str(&auth_header).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid access token format: {}", e))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(CONTENTFUL_CONTENT_TYPE),
        );

        Ok(headers)
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path (without base URL)
    ///
    /// # Returns
    ///
    /// A `Response` from Contentful, or an `AppError` if the request never completed.
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        log::debug!("{} -> {}", endpoint, response.status());

        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::ContentfulRepository for ContentfulHttpClient {
    async fn retrieve_space(&self, id: &SpaceId) -> Result<Space, AppError> {
        let response = self.get(&space_endpoint(id)).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_space_response(result)
    }

    async fn retrieve_entry(
        &self,
        space: &SpaceId,
        entry: &EntryId,
    ) -> Result<Option<Entry>, AppError> {
        let response = self.get(&entry_endpoint(space, entry)).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_entry_response(result)
    }
}

pub(super) fn space_endpoint(space: &SpaceId) -> String {
    format!("spaces/{}", space.as_str())
}

pub(super) fn entry_endpoint(space: &SpaceId, entry: &EntryId) -> String {
    format!("spaces/{}/entries/{}", space.as_str(), entry.as_str())
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
///
/// # Arguments
///
/// * `response` - The HTTP response to extract text from
///
/// # Returns
///
/// An `ApiResponse<String>` containing the response text along with status and URL metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
