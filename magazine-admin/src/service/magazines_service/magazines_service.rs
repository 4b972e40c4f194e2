use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MagazinesService: Send + Sync {
    ///
    /// Find one page of magazines sorted ascending by code.
    /// Missing page defaults to the first one and missing page size
    /// defaults to the configured one.
    ///
    /// ### Returns
    /// Page of magazines. Page outside of the range has no items.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - page is 0
    ///     - page size is 0 or greater than configured maximum
    /// - [Error::StorageUnavailable] when store cannot be queried
    ///
    async fn list_magazines(
        &self,
        pagination: input::Pagination,
    ) -> Result<output::Page<output::Magazine>, Error>;
}
