use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    ///
    /// ### Panics
    /// when page_size is 0
    ///
    pub fn new(items: Vec<T>, page_number: u64, page_size: u64, total_items: u64) -> Self {
        Self {
            items,
            page_number,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size),
        }
    }
}
