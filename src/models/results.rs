use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of search results with paging metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Results<T> {
    /// Entities on this page
    pub results: Vec<T>,

    /// Matches across all pages
    #[schema(example = 57)]
    pub total_records: u64,

    /// 1-based
    #[schema(example = 1)]
    pub page_number: u32,

    #[schema(example = 20)]
    pub page_size: u32,

    #[schema(example = 3)]
    pub total_pages: u32,
}

impl<T> Results<T> {
    pub fn new(results: Vec<T>, total_records: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_records.div_ceil(u64::from(page_size)) as u32
        };

        Self {
            results,
            total_records,
            page_number,
            page_size,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
