// src/api/responses.rs
//! Wire types for Contentful responses that are not part of the domain model.

use serde::{Deserialize, Serialize};

/// The envelope Contentful returns for every failed request.
///
/// ```json
/// {"sys": {"type": "Error", "id": "NotFound"},
///  "message": "The resource could not be found.",
///  "requestId": "..."}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentfulError {
    pub sys: ErrorSys,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorSys {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ContentfulError {
    /// Only bodies tagged `"type": "Error"` are treated as error envelopes.
    pub fn is_error_envelope(&self) -> bool {
        self.sys.kind == "Error"
    }
}
