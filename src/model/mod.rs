pub mod common;

pub use common::*;

use crate::types::{EntryId, EntryMarker, SpaceId, SpaceMarker};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Contentful space: the tenant that owns entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub sys: SystemProperties<SpaceMarker>,
    #[serde(default)]
    pub name: String,
}

impl Space {
    pub fn id(&self) -> &SpaceId {
        &self.sys.id
    }
}

/// A Contentful entry.
///
/// Each field maps locale codes to localized values. The values are kept
/// untyped here and decoded on demand by [`crate::fields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub sys: SystemProperties<EntryMarker>,
    #[serde(default)]
    pub fields: IndexMap<String, Value>,
}

impl Entry {
    pub fn id(&self) -> &EntryId {
        &self.sys.id
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// The flat record produced for an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleAttributes {
    pub article_id: String,
    pub slug: String,
    pub title: String,
}
