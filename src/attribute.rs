// src/attribute.rs
//! Article attribute fetching: resolve a space once, then read an entry's
//! slug and title on demand.

use crate::api::{ClientOptions, ContentfulHttpClient, ContentfulRepository};
use crate::error::AppError;
use crate::fields::extract_attributes;
use crate::model::{ArticleAttributes, Space};
use crate::types::{AccessToken, EntryId, SpaceId};
use std::sync::Arc;

/// An authenticated repository paired with the space it resolved.
pub struct Session {
    repository: Arc<dyn ContentfulRepository>,
    space: Space,
}

impl Session {
    /// Resolves the space through the repository. One network call.
    pub async fn open(
        repository: Arc<dyn ContentfulRepository>,
        space_id: &SpaceId,
    ) -> Result<Self, AppError> {
        let space = repository.retrieve_space(space_id).await?;
        log::info!("Resolved space {} ('{}')", space.id(), space.name);
        Ok(Self { repository, space })
    }

    pub fn space(&self) -> &Space {
        &self.space
    }
}

/// Fetches the slug and title of one article entry.
///
/// `get` takes `&mut self`, so one fetcher cannot be driven from several
/// tasks at once; create one fetcher per owner instead.
pub struct ArticleAttributeFetcher {
    article_id: EntryId,
    session: Session,
    attributes: Option<ArticleAttributes>,
}

impl ArticleAttributeFetcher {
    /// Validates the raw credentials and connects over HTTP.
    ///
    /// Empty or malformed identifiers are rejected before any request is made.
    pub async fn from_credentials(
        article_id: &str,
        access_token: &str,
        space_id: &str,
        options: &ClientOptions,
    ) -> Result<Self, AppError> {
        let article_id = EntryId::parse(article_id)?;
        let access_token = AccessToken::new(access_token)?;
        let space_id = SpaceId::parse(space_id)?;
        Self::connect(article_id, &access_token, &space_id, options).await
    }

    /// Builds an HTTP client for the token and resolves the space.
    pub async fn connect(
        article_id: EntryId,
        access_token: &AccessToken,
        space_id: &SpaceId,
        options: &ClientOptions,
    ) -> Result<Self, AppError> {
        let client = ContentfulHttpClient::new(access_token, options)?;
        Self::with_repository(Arc::new(client), article_id, space_id).await
    }

    /// Resolves the space through an arbitrary repository.
    pub async fn with_repository(
        repository: Arc<dyn ContentfulRepository>,
        article_id: EntryId,
        space_id: &SpaceId,
    ) -> Result<Self, AppError> {
        let session = Session::open(repository, space_id).await?;
        Ok(Self {
            article_id,
            session,
            attributes: None,
        })
    }

    /// Fetches the entry and extracts its attributes.
    ///
    /// Any previous result is discarded first, so after a failed call
    /// [`attributes`](Self::attributes) is `None` rather than stale.
    pub async fn get(&mut self) -> Result<&ArticleAttributes, AppError> {
        self.attributes = None;

        let space_id = self.session.space.id();
        let entry = self
            .session
            .repository
            .retrieve_entry(space_id, &self.article_id)
            .await?
            .ok_or_else(|| AppError::ArticleNotFound {
                article_id: self.article_id.to_string(),
                space_id: space_id.to_string(),
            })?;

        let attributes = extract_attributes(self.article_id.as_str(), &entry)?;
        log::info!(
            "Article {}: slug '{}', title '{}'",
            attributes.article_id,
            attributes.slug,
            attributes.title
        );

        Ok(self.attributes.insert(attributes))
    }

    /// The result of the last successful `get`, if the last call succeeded.
    pub fn attributes(&self) -> Option<&ArticleAttributes> {
        self.attributes.as_ref()
    }

    pub fn slug(&self) -> Option<&str> {
        self.attributes.as_ref().map(|a| a.slug.as_str())
    }

    pub fn title(&self) -> Option<&str> {
        self.attributes.as_ref().map(|a| a.title.as_str())
    }

    pub fn article_id(&self) -> &EntryId {
        &self.article_id
    }

    pub fn space(&self) -> &Space {
        self.session.space()
    }
}
