//! Products Data

use jiff::Timestamp;

use crate::{
    domain::{
        categories::models::CategoryId,
        products::{
            filter::ProductFilter,
            models::{BrandId, ProductDetail, ProductId, ProductStatus, SellerId},
        },
    },
    listing::{PageRequest, ProductSortColumn, SortSpec},
};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub status: ProductStatus,
    pub seller_id: Option<SellerId>,
    pub brand_id: Option<BrandId>,
    pub categories: Vec<NewCategoryLink>,
    pub price: Option<NewPrice>,
}

/// A category assignment attached at product creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCategoryLink {
    pub category_id: CategoryId,
    pub is_primary: bool,
}

/// An initial price row attached at product creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPrice {
    pub base_price: i64,
    pub sale_price: i64,
    pub cost_price: i64,
    pub currency: String,
    pub tax_rate: f64,
}

/// Product Update Data
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub status: Option<ProductStatus>,
    pub seller_id: Option<SellerId>,
    pub brand_id: Option<BrandId>,
}

/// The minimal field set returned by a product update.
#[derive(Debug, Clone)]
pub struct UpdatedProduct {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub updated_at: Timestamp,
}

/// Listing query: filter, multi-key sort, and an optional page window.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: SortSpec<ProductSortColumn>,
    pub page: Option<PageRequest>,
}

/// One page of products plus the filter-wide total.
#[derive(Debug, Clone)]
pub struct ProductListing {
    pub total: i64,
    pub data: Vec<ProductDetail>,
}
