//! Category request parsing and validation.

use salvo::Request;

use storefront_app::{
    domain::categories::data::CategoryProductsQuery, listing::ProductSortColumn,
};

use crate::{envelope::ApiError, params};

/// The `level` parameter is required.
pub(crate) fn level(req: &Request) -> Result<i32, ApiError> {
    let raw = req
        .query::<String>("level")
        .ok_or_else(|| ApiError::invalid_input("missing `level` parameter"))?;

    raw.parse()
        .map_err(|_| ApiError::invalid_input(format!("`{raw}` is not a valid level")))
}

/// Category product listings default to the first page of ten, sorted by
/// newest first, with direct subcategories included.
pub(crate) fn category_products_query(req: &Request) -> Result<CategoryProductsQuery, ApiError> {
    Ok(CategoryProductsQuery {
        page: params::pagination_or_default(req)?,
        sort: params::sort_spec(req, ProductSortColumn::CreatedAt)?,
        include_subcategories: params::opt_query_bool(req, "includeSubcategories")?.unwrap_or(true),
    })
}
