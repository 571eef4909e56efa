// tests/integration/fetch_pipeline.rs
//! End-to-end behavior of the fetch-and-normalize pipeline over an
//! in-memory repository.

use article_attribute::{
    AppError, ArticleAttributeFetcher, ArticleAttributes, ClientOptions, ContentfulErrorCode,
    ContentfulRepository, Entry, EntryId, Space, SpaceId, ValidatedUrl,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// What the fake backend answers for the entry lookup.
enum EntryOutcome {
    Found(Value),
    Missing,
    Unavailable,
}

struct InMemoryRepository {
    outcome: EntryOutcome,
}

impl InMemoryRepository {
    fn with_fields(fields: Value) -> Arc<Self> {
        Arc::new(Self {
            outcome: EntryOutcome::Found(fields),
        })
    }

    fn with_outcome(outcome: EntryOutcome) -> Arc<Self> {
        Arc::new(Self { outcome })
    }
}

#[async_trait::async_trait]
impl ContentfulRepository for InMemoryRepository {
    async fn retrieve_space(&self, id: &SpaceId) -> Result<Space, AppError> {
        Ok(serde_json::from_value(json!({
            "sys": { "id": id.as_str(), "type": "Space" },
            "name": "Engineering Blog"
        }))
        .expect("space fixture should deserialize"))
    }

    async fn retrieve_entry(
        &self,
        _space: &SpaceId,
        entry: &EntryId,
    ) -> Result<Option<Entry>, AppError> {
        match &self.outcome {
            EntryOutcome::Found(fields) => Ok(Some(
                serde_json::from_value(json!({
                    "sys": { "id": entry.as_str(), "type": "Entry" },
                    "fields": fields
                }))
                .expect("entry fixture should deserialize"),
            )),
            EntryOutcome::Missing => Ok(None),
            EntryOutcome::Unavailable => Err(AppError::ContentfulService {
                code: ContentfulErrorCode::HttpStatus(503),
                message: "HTTP 503 Service Unavailable".to_string(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }),
        }
    }
}

async fn fetcher_for(repository: Arc<InMemoryRepository>) -> ArticleAttributeFetcher {
    ArticleAttributeFetcher::with_repository(
        repository,
        EntryId::parse("my-article-id").expect("valid entry id"),
        &SpaceId::parse("blogspace01").expect("valid space id"),
    )
    .await
    .expect("space should resolve")
}

fn record(slug: &str, title: &str) -> ArticleAttributes {
    ArticleAttributes {
        article_id: "my-article-id".to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
    }
}

#[tokio::test]
async fn slug_and_title_are_extracted_and_title_is_path_safe() {
    let repository = InMemoryRepository::with_fields(json!({
        "slug": { "ja": "my-article" },
        "title": { "ja": "A/B Testing 入門" }
    }));
    let mut fetcher = fetcher_for(repository).await;

    let attributes = fetcher.get().await.unwrap().clone();

    assert_eq!(attributes, record("my-article", "A／B Testing 入門"));
    assert_eq!(fetcher.attributes(), Some(&attributes));
}

#[tokio::test]
async fn field_without_article_locale_decodes_to_empty() {
    let repository = InMemoryRepository::with_fields(json!({
        "slug": { "en": "x" },
        "title": { "ja": "T" }
    }));
    let mut fetcher = fetcher_for(repository).await;

    let attributes = fetcher.get().await.unwrap();

    assert_eq!(attributes, &record("", "T"));
}

#[tokio::test]
async fn missing_entry_is_distinct_not_found_error() {
    let mut fetcher = fetcher_for(InMemoryRepository::with_outcome(EntryOutcome::Missing)).await;

    let err = fetcher.get().await.unwrap_err();

    assert!(err.is_not_found());
    assert!(!err.is_transport());
    assert!(fetcher.attributes().is_none());
    assert!(fetcher.slug().is_none());
    assert!(fetcher.title().is_none());
}

#[tokio::test]
async fn backend_failure_is_transport_error_passed_through() {
    let mut fetcher =
        fetcher_for(InMemoryRepository::with_outcome(EntryOutcome::Unavailable)).await;

    let err = fetcher.get().await.unwrap_err();

    assert!(err.is_transport());
    assert!(!err.is_not_found());
    match err {
        AppError::ContentfulService { code, .. } => {
            assert_eq!(code, ContentfulErrorCode::HttpStatus(503))
        }
        other => panic!("Expected ContentfulService, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_backend_is_network_failure() {
    // Nothing listens on port 1; the connection is refused immediately.
    let options = ClientOptions {
        base_url: Some(ValidatedUrl::parse("http://127.0.0.1:1").unwrap()),
        timeout: Some(Duration::from_secs(5)),
    };

    let result = ArticleAttributeFetcher::from_credentials(
        "my-article-id",
        "CFPAT-not-a-real-token",
        "blogspace01",
        &options,
    )
    .await;

    match result {
        Err(err @ AppError::NetworkFailure(_)) => {
            assert!(err.is_transport());
            assert!(!err.is_not_found());
        }
        Err(other) => panic!("Expected NetworkFailure, got {:?}", other),
        Ok(_) => panic!("Expected the connection to fail"),
    }
}

#[tokio::test]
async fn repeated_get_yields_identical_record() {
    let repository = InMemoryRepository::with_fields(json!({
        "slug": { "ja": "stable" },
        "title": { "ja": "2024/01/19 リリースノート" }
    }));
    let mut fetcher = fetcher_for(repository).await;

    let first = fetcher.get().await.unwrap().clone();
    let second = fetcher.get().await.unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(first.title, "2024／01／19 リリースノート");
}

#[tokio::test]
async fn unrelated_fields_do_not_affect_the_record() {
    let repository = InMemoryRepository::with_fields(json!({
        "slug": { "ja": "with-extras" },
        "title": { "ja": "Extras" },
        "body": { "ja": 12 },
        "tags": ["not", "localized"],
        "Slug": { "ja": "wrong-case" },
        "publishedOn": null
    }));
    let mut fetcher = fetcher_for(repository).await;

    let attributes = fetcher.get().await.unwrap();

    assert_eq!(attributes, &record("with-extras", "Extras"));
}

#[tokio::test]
async fn malformed_field_commits_nothing() {
    let repository = InMemoryRepository::with_fields(json!({
        "slug": { "ja": "would-be-set" },
        "title": 42
    }));
    let mut fetcher = fetcher_for(repository).await;

    let err = fetcher.get().await.unwrap_err();

    assert!(err.is_decode());
    assert!(!err.is_not_found());
    assert!(fetcher.slug().is_none());
}

#[test]
fn normalization_only_touches_slashes() {
    let cases = [
        ("A/B", "A／B"),
        ("/leading and trailing/", "／leading and trailing／"),
        ("a//b", "a／／b"),
        ("already／fullwidth", "already／fullwidth"),
        ("no separators: ? * \\ |", "no separators: ? * \\ |"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(article_attribute::normalize_title(input), expected);
    }
}
