// src/lib.rs
//! article-attribute library: reads an article entry from Contentful and
//! extracts its slug and a path-safe title.
//!
//! # Public API
//!
//! - **Fetcher**: `ArticleAttributeFetcher`, `Session`
//! - **Error handling**: `AppError`, `ContentfulClientError`, `ValidationError`
//! - **Configuration**: `AppConfig`, `ClientOptions`
//! - **Domain model**: `Space`, `Entry`, `ArticleAttributes`
//! - **Domain types**: `SpaceId`, `EntryId`, `AccessToken`, `ValidatedUrl`
//! - **API client**: `ContentfulRepository`, `ContentfulHttpClient`, parsers
//! - **Field decoding**: `decode_localized`, `normalize_title`, `extract_attributes`

mod api;
mod attribute;
mod config;
mod constants;
mod error;
mod fields;
mod model;
mod types;

// --- Fetcher ---
pub use crate::attribute::{ArticleAttributeFetcher, Session};

// --- Error Handling ---
pub use crate::error::{AppError, ContentfulClientError, ContentfulErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{AppConfig, CommandLineInput, ACCESS_TOKEN_ENV};

// --- Domain Model ---
pub use crate::model::{ArticleAttributes, Entry, Space, SystemProperties};

// --- Domain Types ---
pub use crate::types::{AccessToken, EntryId, Id, SpaceId, ValidatedUrl};

// --- API Client ---
pub use crate::api::{
    client::extract_response_text,
    parser::{parse_api_response, parse_entry_response, parse_space_response},
    ApiResponse, ClientOptions, ContentfulHttpClient, ContentfulRepository,
};

// --- Field Decoding ---
pub use crate::constants::{ARTICLE_LOCALE, CONTENTFUL_API_BASE_URL, FULLWIDTH_SOLIDUS};
pub use crate::fields::{decode_localized, extract_attributes, normalize_title};
