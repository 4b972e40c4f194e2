use crate::repository;
use bson::Bson;
use serde::Serialize;
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// Keys of [Magazine] that stored fields must not shadow once flattened
const RESERVED_KEYS: [&str; 5] = ["id", "code", "title", "created_at", "updated_at"];

#[derive(Debug, Serialize)]
pub struct Magazine {
    pub id: String,
    pub code: i64,
    pub title: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<repository::Magazine> for Magazine {
    fn from(mut value: repository::Magazine) -> Self {
        for key in RESERVED_KEYS {
            if value.attributes.remove(key).is_some() {
                tracing::debug!(
                    code = value.code,
                    key,
                    "dropped stored field shadowing magazine key"
                );
            }
        }

        let attributes = match Bson::Document(value.attributes).into_relaxed_extjson() {
            Value::Object(attributes) => attributes,
            _ => Map::new(),
        };

        Self {
            id: value.id.to_hex(),
            code: value.code,
            title: value.title,
            created_at: value.created_at,
            updated_at: value.updated_at,
            attributes,
        }
    }
}
