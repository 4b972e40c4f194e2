use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    ///
    /// indexing starts at 1
    ///
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}
