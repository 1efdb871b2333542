//! Listing query construction: pagination and sort specs shared by the
//! read-side repositories.

pub mod page;
pub mod sort;

pub use page::PageRequest;
pub use sort::{
    ProductSortColumn, ReviewSortColumn, SortColumn, SortDirection, SortKey, SortParseError,
    SortSpec,
};
