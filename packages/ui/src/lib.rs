//! This crate contains all shared UI for the workspace: the components the
//! items page is assembled from, plus the sort and pagination logic they
//! rely on.

mod connection_banner;
pub use connection_banner::ConnectionBanner;

mod items_table;
pub use items_table::ItemsTable;

pub mod paging;
pub use paging::{page_count, page_slice, PAGE_SIZE};

mod pagination;
pub use pagination::Pagination;

pub mod sort;
pub use sort::{sort_items, SortDirection, SortField, SortState};

mod spinner;
pub use spinner::Spinner;
