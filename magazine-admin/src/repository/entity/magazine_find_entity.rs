use bson::{oid::ObjectId, DateTime, Document};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MagazineFindEntity {
    pub _id: ObjectId,
    pub code: i64,
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,

    #[serde(flatten)]
    pub attributes: Document,
}
