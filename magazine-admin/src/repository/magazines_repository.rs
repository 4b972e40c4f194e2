use super::{dto::Magazine, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MagazinesRepository: Send + Sync {
    ///
    /// Counts all stored magazines
    ///
    async fn count_all(&self) -> Result<u64, Error>;

    ///
    /// Finds at most `limit` magazines, skipping first `offset` of them.
    /// Magazines are sorted ascending by code.
    ///
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Magazine>, Error>;
}
