use super::{entity::MagazineFindEntity, Error, Magazine, MagazinesRepository};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, options::IndexOptions, Database, IndexModel};

const MAGAZINES: &str = "magazines";
const INDEX_NAME_UNIQUE_CODE: &str = "unique_code";

pub struct MagazinesRepositoryImpl {
    database: Database,
}

impl MagazinesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(MAGAZINES);

        tracing::debug!("fetching index names");
        let index_names = match collection.list_index_names().await {
            Ok(index_names) => index_names,
            Err(err) if Self::is_namespace_not_found(&err) => Vec::new(),
            Err(err) => return Err(err),
        };

        if !index_names.contains(&INDEX_NAME_UNIQUE_CODE.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "code": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_CODE.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = MAGAZINES,
                index = INDEX_NAME_UNIQUE_CODE,
                "created index"
            );
        }

        Ok(Self { database })
    }

    ///
    /// Listing indexes of a collection that was not created yet fails
    ///
    fn is_namespace_not_found(err: &mongodb::error::Error) -> bool {
        const NAMESPACE_NOT_FOUND_CODE: i32 = 26;

        matches!(
            *err.kind,
            ErrorKind::Command(ref command_error) if command_error.code == NAMESPACE_NOT_FOUND_CODE
        )
    }
}

#[async_trait]
impl MagazinesRepository for MagazinesRepositoryImpl {
    async fn count_all(&self) -> Result<u64, Error> {
        let count = self
            .database
            .collection::<Document>(MAGAZINES)
            .count_documents(doc! {})
            .await?;

        Ok(count)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Magazine>, Error> {
        // mongo treats limit 0 as "no limit"
        if limit == 0 {
            return Ok(Vec::new());
        }

        let cursor = self
            .database
            .collection::<MagazineFindEntity>(MAGAZINES)
            .find(doc! {})
            .sort(doc! {
                "code": 1
            })
            .skip(offset)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;

        let magazines: Vec<Magazine> = cursor
            .map_ok(Magazine::from)
            .try_collect()
            .await
            .inspect_err(|err| {
                if let ErrorKind::BsonDeserialization(ref decode_error) = *err.kind {
                    tracing::error!(
                        collection = MAGAZINES,
                        offset,
                        limit,
                        %decode_error,
                        "stored magazine does not match expected shape"
                    );
                }
            })?;

        Ok(magazines)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::test::{create_test_database, destroy_test_database};
    use bson::{Bson, DateTime};
    use time::{macros::datetime, OffsetDateTime};

    async fn insert_magazines(database: &Database, codes: impl IntoIterator<Item = i64>) {
        let documents = codes
            .into_iter()
            .map(|code| {
                doc! {
                    "code": code,
                    "title": format!("magazine {code}"),
                }
            })
            .collect::<Vec<_>>();

        database
            .collection::<Document>(MAGAZINES)
            .insert_many(documents)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn new_creates_unique_code_index() {
        let db = create_test_database().await;
        MagazinesRepositoryImpl::new(db.clone()).await.unwrap();

        let index_names = db
            .collection::<Document>(MAGAZINES)
            .list_index_names()
            .await
            .unwrap();

        assert!(index_names.contains(&INDEX_NAME_UNIQUE_CODE.to_string()));

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn new_twice_ok() {
        let db = create_test_database().await;

        MagazinesRepositoryImpl::new(db.clone()).await.unwrap();
        let second = MagazinesRepositoryImpl::new(db.clone()).await;

        assert!(second.is_ok());

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn insert_duplicated_code_rejected() {
        let db = create_test_database().await;
        MagazinesRepositoryImpl::new(db.clone()).await.unwrap();

        insert_magazines(&db, [1]).await;
        let insert_result = db
            .collection::<Document>(MAGAZINES)
            .insert_one(doc! { "code": 1_i64, "title": "duplicate" })
            .await;

        assert!(insert_result.is_err());

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn count_all_empty() {
        let db = create_test_database().await;
        let repository = MagazinesRepositoryImpl::new(db.clone()).await.unwrap();

        let count = repository.count_all().await.unwrap();

        assert_eq!(count, 0);

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn count_all_counts_every_magazine() {
        let db = create_test_database().await;
        let repository = MagazinesRepositoryImpl::new(db.clone()).await.unwrap();
        insert_magazines(&db, 1..=25).await;

        let count = repository.count_all().await.unwrap();

        assert_eq!(count, 25);

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn find_page_sorted_ascending_by_code() {
        let db = create_test_database().await;
        let repository = MagazinesRepositoryImpl::new(db.clone()).await.unwrap();
        insert_magazines(&db, [7, 3, 25, 1, 12]).await;

        let magazines = repository.find_page(0, 10).await.unwrap();

        let codes = magazines.iter().map(|m| m.code).collect::<Vec<_>>();
        assert_eq!(codes, vec![1, 3, 7, 12, 25]);

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn find_page_offset_and_limit() {
        let db = create_test_database().await;
        let repository = MagazinesRepositoryImpl::new(db.clone()).await.unwrap();
        insert_magazines(&db, (1..=25).rev()).await;

        let first = repository.find_page(0, 10).await.unwrap();
        let last = repository.find_page(20, 10).await.unwrap();

        let first_codes = first.iter().map(|m| m.code).collect::<Vec<_>>();
        let last_codes = last.iter().map(|m| m.code).collect::<Vec<_>>();
        assert_eq!(first_codes, (1..=10).collect::<Vec<_>>());
        assert_eq!(last_codes, (21..=25).collect::<Vec<_>>());

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn find_page_offset_beyond_collection() {
        let db = create_test_database().await;
        let repository = MagazinesRepositoryImpl::new(db.clone()).await.unwrap();
        insert_magazines(&db, 1..=5).await;

        let magazines = repository.find_page(10, 10).await.unwrap();

        assert!(magazines.is_empty());

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn find_page_keeps_other_fields() {
        let db = create_test_database().await;
        let repository = MagazinesRepositoryImpl::new(db.clone()).await.unwrap();
        let created_at = datetime!(2019-03-14 10:21:00 UTC);

        db.collection::<Document>(MAGAZINES)
            .insert_one(doc! {
                "code": 1_i64,
                "title": "Revista Exame",
                "publisher": "Abril",
                "issues_per_year": 24,
                "created_at": DateTime::from(created_at),
                "updated_at": None as Option<DateTime>,
            })
            .await
            .unwrap();

        let mut magazines = repository.find_page(0, 1).await.unwrap();
        let magazine = magazines.pop().unwrap();

        assert_eq!(magazine.title, "Revista Exame");
        assert_eq!(magazine.created_at, Some(created_at));
        assert_eq!(magazine.updated_at, None::<OffsetDateTime>);
        assert_eq!(
            magazine.attributes.get("publisher"),
            Some(&Bson::String("Abril".to_string()))
        );
        assert_eq!(
            magazine.attributes.get("issues_per_year"),
            Some(&Bson::Int32(24))
        );
        assert!(magazine.attributes.get("code").is_none());

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn find_page_malformed_document_error() {
        let db = create_test_database().await;
        let repository = MagazinesRepositoryImpl::new(db.clone()).await.unwrap();

        db.collection::<Document>(MAGAZINES)
            .insert_one(doc! {
                "code": "A-12",
                "title": "Placar",
            })
            .await
            .unwrap();

        let err = repository.find_page(0, 10).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Mongo(ref err) if matches!(*err.kind, ErrorKind::BsonDeserialization(_))
        ));

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn find_page_missing_title_ok() {
        let db = create_test_database().await;
        let repository = MagazinesRepositoryImpl::new(db.clone()).await.unwrap();

        db.collection::<Document>(MAGAZINES)
            .insert_one(doc! { "code": 1_i64 })
            .await
            .unwrap();

        let magazines = repository.find_page(0, 10).await.unwrap();

        assert_eq!(magazines.len(), 1);
        assert!(magazines[0].title.is_empty());

        destroy_test_database(db).await;
    }
}
