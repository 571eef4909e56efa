// src/api/mod.rs
//! Contentful API interaction: the ability to read spaces and entries.
//!
//! This module keeps I/O, parsing and business logic apart: the client
//! speaks HTTP, the parser turns bodies into domain values, and callers
//! depend only on [`ContentfulRepository`].

pub mod client;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::{Entry, Space};
use crate::types::{EntryId, SpaceId};

/// The ability to read content from a Contentful space.
///
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait ContentfulRepository: Send + Sync {
    /// Resolves a space by ID. A missing space is an error.
    async fn retrieve_space(&self, id: &SpaceId) -> Result<Space, AppError>;

    /// Retrieves an entry. `Ok(None)` means the space has no such entry.
    async fn retrieve_entry(
        &self,
        space: &SpaceId,
        entry: &EntryId,
    ) -> Result<Option<Entry>, AppError>;
}

// Re-export the public interface
pub use client::{ApiResponse, ClientOptions, ContentfulHttpClient};
