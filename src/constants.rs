// src/constants.rs
//! Domain constants that define how the system talks to Contentful and
//! what shape of content it expects back.

// ---------------------------------------------------------------------------
// Contentful API boundaries
// ---------------------------------------------------------------------------

/// Base URL of the Contentful Content Management API.
pub const CONTENTFUL_API_BASE_URL: &str = "https://api.contentful.com";

/// Media type the Content Management API expects on every request.
pub const CONTENTFUL_CONTENT_TYPE: &str = "application/vnd.contentful.management.v1+json";

/// Upper bound on how much of an unparseable body ends up in an error message.
pub const RESPONSE_PREVIEW_LIMIT: usize = 500;

// ---------------------------------------------------------------------------
// Article content model
// ---------------------------------------------------------------------------

/// Entry field holding the article's URL slug.
pub const SLUG_FIELD: &str = "slug";

/// Entry field holding the article's title.
pub const TITLE_FIELD: &str = "title";

/// The only locale read from a localized field. Other locales are ignored.
pub const ARTICLE_LOCALE: &str = "ja";

/// Path separator that titles must not contain.
pub const PATH_SEPARATOR: char = '/';

/// FULLWIDTH SOLIDUS (U+FF0F), substituted for `/` in titles.
pub const FULLWIDTH_SOLIDUS: char = '\u{FF0F}';
