//! Categories Data

use crate::listing::{PageRequest, ProductSortColumn, SortSpec};

/// Query options for a category's product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProductsQuery {
    pub page: PageRequest,
    pub sort: SortSpec<ProductSortColumn>,
    pub include_subcategories: bool,
}
