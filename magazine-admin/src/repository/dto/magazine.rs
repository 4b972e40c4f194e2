use crate::repository::entity::MagazineFindEntity;
use bson::{oid::ObjectId, Document};
use time::OffsetDateTime;

#[derive(Debug)]
pub struct Magazine {
    pub id: ObjectId,
    pub code: i64,
    pub title: String,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,

    /// Remaining fields of the document
    pub attributes: Document,
}

impl From<MagazineFindEntity> for Magazine {
    fn from(value: MagazineFindEntity) -> Self {
        Self {
            id: value._id,
            code: value.code,
            title: value.title,
            created_at: value.created_at.map(OffsetDateTime::from),
            updated_at: value.updated_at.map(OffsetDateTime::from),
            attributes: value.attributes,
        }
    }
}
