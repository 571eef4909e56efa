// src/fields.rs
//! Decoding of localized entry fields into article attributes.
//!
//! A Contentful field value is an object keyed by locale code. Only the
//! article locale is read; everything here is pure and never touches the
//! network.

use crate::constants::{
    ARTICLE_LOCALE, FULLWIDTH_SOLIDUS, PATH_SEPARATOR, SLUG_FIELD, TITLE_FIELD,
};
use crate::error::AppError;
use crate::model::{ArticleAttributes, Entry};
use serde_json::Value;

/// Decodes a locale-keyed field value into the article-locale string.
///
/// A `null` field, a missing locale, or a `null` locale value decodes to
/// the empty string. Any other non-object, or a locale value that is not a
/// string, is a decode error.
pub fn decode_localized(field: &str, value: &Value) -> Result<String, AppError> {
    let locales = match value {
        Value::Object(locales) => locales,
        Value::Null => return Ok(String::new()),
        other => return Err(decode_error(field, "object", other)),
    };

    match locales.get(ARTICLE_LOCALE) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(decode_error(field, "string", other)),
    }
}

/// Replaces every `/` with a fullwidth solidus so the title is path-safe.
pub fn normalize_title(title: &str) -> String {
    title.replace(PATH_SEPARATOR, &FULLWIDTH_SOLIDUS.to_string())
}

/// Builds the attribute record from an entry's `slug` and `title` fields.
///
/// Both fields are decoded before the record is assembled, so a failure on
/// either leaves nothing half-built. Fields other than these two are ignored.
pub fn extract_attributes(article_id: &str, entry: &Entry) -> Result<ArticleAttributes, AppError> {
    let slug = decode_field(entry, SLUG_FIELD)?;
    let title = normalize_title(&decode_field(entry, TITLE_FIELD)?);

    Ok(ArticleAttributes {
        article_id: article_id.to_string(),
        slug,
        title,
    })
}

fn decode_field(entry: &Entry, name: &str) -> Result<String, AppError> {
    match entry.field(name) {
        Some(value) => decode_localized(name, value).inspect_err(|e| {
            log::error!("Entry {}: {}", entry.id(), e);
        }),
        None => Ok(String::new()),
    }
}

fn decode_error(field: &str, expected: &'static str, found: &Value) -> AppError {
    AppError::FieldDecode {
        field: field.to_string(),
        expected,
        found: json_type_name(found),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
