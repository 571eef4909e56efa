// tests/integration/response_fixtures.rs
//! Canned Contentful responses pushed through the same parsers used for
//! live traffic.

use article_attribute::{
    extract_attributes, parse_entry_response, parse_space_response, AppError, ApiResponse,
    ContentfulClientError, ContentfulErrorCode,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

const ENTRY_URL: &str =
    "https://api.contentful.com/spaces/blogspace01/entries/3kTGRgPbkWW6ouCu8CA6C2";

fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
    ApiResponse {
        data: body.to_string(),
        status,
        url: ENTRY_URL.to_string(),
    }
}

#[test]
fn published_entry_fixture_yields_attributes() {
    let body = include_str!("../fixtures/api_responses/entry_article.json");

    let entry = parse_entry_response(response(StatusCode::OK, body))
        .expect("fixture should parse")
        .expect("fixture is an existing entry");

    assert_eq!(entry.id().as_str(), "3kTGRgPbkWW6ouCu8CA6C2");
    assert_eq!(entry.sys.version, Some(13));
    assert_eq!(entry.fields.len(), 5);

    let attributes = extract_attributes(entry.id().as_str(), &entry).unwrap();
    assert_eq!(attributes.slug, "ci-cd-pipeline-intro");
    assert_eq!(attributes.title, "CI／CD パイプライン入門");
}

#[test]
fn space_fixture_resolves() {
    let body = include_str!("../fixtures/api_responses/space.json");

    let space = parse_space_response(response(StatusCode::OK, body)).unwrap();

    assert_eq!(space.id().as_str(), "blogspace01");
    assert_eq!(space.name, "Engineering Blog");
}

#[test]
fn not_found_envelope_means_no_entry() {
    let body = include_str!("../fixtures/api_responses/error_not_found.json");

    let result = parse_entry_response(response(StatusCode::NOT_FOUND, body)).unwrap();

    assert!(result.is_none());
}

#[test]
fn not_found_envelope_for_space_is_service_error() {
    let body = include_str!("../fixtures/api_responses/error_not_found.json");

    match parse_space_response(response(StatusCode::NOT_FOUND, body)) {
        Err(AppError::Contentful(ContentfulClientError::ContentfulApi {
            status,
            code,
            message,
            request_id,
        })) => {
            assert_eq!(status, 404);
            assert_eq!(code, ContentfulErrorCode::NotFound);
            assert_eq!(message, "The resource could not be found.");
            assert_eq!(
                request_id.as_deref(),
                Some("e1b2c3d4-0000-4000-8000-abcdefabcdef")
            );
        }
        other => panic!("Expected ContentfulApi error, got {:?}", other),
    }
}

#[test]
fn rejected_token_is_reported_verbatim() {
    let body = r#"{
        "sys": { "type": "Error", "id": "AccessTokenInvalid" },
        "message": "The access token you sent could not be found or is invalid.",
        "requestId": "req-401"
    }"#;

    let err = parse_entry_response(response(StatusCode::UNAUTHORIZED, body)).unwrap_err();

    assert!(err.is_transport());
    assert_eq!(
        err.to_string(),
        "Contentful API error (401): AccessTokenInvalid - The access token you sent could not be found or is invalid."
    );
}
