use super::{MagazinesService, MagazinesServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::MagazinesRepository,
};
use axum::async_trait;
use std::sync::Arc;

pub struct MagazinesServiceImpl {
    config: MagazinesServiceConfig,
    repository: Arc<dyn MagazinesRepository>,
}

impl MagazinesServiceImpl {
    pub fn new(config: MagazinesServiceConfig, repository: Arc<dyn MagazinesRepository>) -> Self {
        Self { config, repository }
    }

    ///
    /// ### Returns
    /// (page_number, page_size)
    ///
    fn validate_pagination(&self, pagination: &input::Pagination) -> Result<(u64, u64), Error> {
        let page_number = pagination.page.unwrap_or(1);
        if page_number == 0 {
            return Err(Error::Validation("page must be greater than 0"));
        }

        let page_size = pagination
            .page_size
            .unwrap_or(self.config.default_page_size);
        if page_size == 0 {
            return Err(Error::Validation("page_size must be greater than 0"));
        }
        if page_size > self.config.max_page_size {
            return Err(Error::Validation("page_size too large"));
        }

        Ok((page_number, page_size))
    }
}

#[async_trait]
impl MagazinesService for MagazinesServiceImpl {
    async fn list_magazines(
        &self,
        pagination: input::Pagination,
    ) -> Result<output::Page<output::Magazine>, Error> {
        tracing::info!("listing magazines");
        tracing::trace!(?pagination);

        let (page_number, page_size) = self.validate_pagination(&pagination)?;

        let total_items = self.repository.count_all().await?;

        let offset = (page_number - 1).saturating_mul(page_size);
        let magazines = match offset < total_items {
            true => self.repository.find_page(offset, page_size).await?,
            false => Vec::new(),
        };
        tracing::info!(
            page_number,
            count = magazines.len(),
            total_items,
            "found magazines"
        );

        let magazines = magazines
            .into_iter()
            .map(output::Magazine::from)
            .collect();

        Ok(output::Page::new(
            magazines,
            page_number,
            page_size,
            total_items,
        ))
    }
}
