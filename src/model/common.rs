use crate::types::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `sys` block Contentful attaches to every resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct SystemProperties<T> {
    pub id: Id<T>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
