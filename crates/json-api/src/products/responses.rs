//! Product response shaping.

use serde::{Deserialize, Serialize};

use storefront_app::{
    domain::products::{
        data::{ProductListing, UpdatedProduct},
        models::{
            Brand, CategoryAssignment, OptionGroup, Price, Product, ProductDetail, ProductOption,
            Seller,
        },
    },
    listing::PageRequest,
};

use crate::categories::responses::CategoryResponse;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PartyResponse {
    pub id: i64,
    pub name: String,
}

impl From<Seller> for PartyResponse {
    fn from(seller: Seller) -> Self {
        Self {
            id: seller.id.get(),
            name: seller.name,
        }
    }
}

impl From<Brand> for PartyResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id.get(),
            name: brand.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PriceResponse {
    pub id: i64,
    pub base_price: i64,
    pub sale_price: i64,
    pub cost_price: i64,
    pub currency: String,
    pub tax_rate: f64,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            id: price.id.get(),
            base_price: price.base_price,
            sale_price: price.sale_price,
            cost_price: price.cost_price,
            currency: price.currency,
            tax_rate: price.tax_rate,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryAssignmentResponse {
    pub category: CategoryResponse,
    pub is_primary: bool,
}

impl From<CategoryAssignment> for CategoryAssignmentResponse {
    fn from(assignment: CategoryAssignment) -> Self {
        Self {
            category: assignment.category.into(),
            is_primary: assignment.is_primary,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OptionResponse {
    pub id: i64,
    pub name: String,
    pub additional_price: i64,
    pub sku: String,
    pub stock: i32,
    pub display_order: i32,
}

impl From<ProductOption> for OptionResponse {
    fn from(option: ProductOption) -> Self {
        Self {
            id: option.id.get(),
            name: option.name,
            additional_price: option.additional_price,
            sku: option.sku,
            stock: option.stock,
            display_order: option.display_order,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OptionGroupResponse {
    pub id: i64,
    pub name: String,
    pub display_order: i32,
    pub options: Vec<OptionResponse>,
}

impl From<OptionGroup> for OptionGroupResponse {
    fn from(group: OptionGroup) -> Self {
        Self {
            id: group.id.get(),
            name: group.name,
            display_order: group.display_order,
            options: group.options.into_iter().map(Into::into).collect(),
        }
    }
}

/// A product with all listed relations.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub status: String,
    pub seller: Option<PartyResponse>,
    pub brand: Option<PartyResponse>,
    pub prices: Vec<PriceResponse>,
    pub categories: Vec<CategoryAssignmentResponse>,
    pub option_groups: Vec<OptionGroupResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductDetail> for ProductResponse {
    fn from(detail: ProductDetail) -> Self {
        Self {
            id: detail.product.id.get(),
            name: detail.product.name,
            slug: detail.product.slug,
            short_description: detail.product.short_description,
            full_description: detail.product.full_description,
            status: detail.product.status.to_string(),
            seller: detail.seller.map(Into::into),
            brand: detail.brand.map(Into::into),
            prices: detail.prices.into_iter().map(Into::into).collect(),
            categories: detail.categories.into_iter().map(Into::into).collect(),
            option_groups: detail.option_groups.into_iter().map(Into::into).collect(),
            created_at: detail.product.created_at.to_string(),
            updated_at: detail.product.updated_at.to_string(),
        }
    }
}

/// A bare product row, without relations.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductSummaryResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub status: String,
    pub seller_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductSummaryResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name,
            slug: product.slug,
            short_description: product.short_description,
            full_description: product.full_description,
            status: product.status.to_string(),
            seller_id: product.seller_id.map(|id| id.get()),
            brand_id: product.brand_id.map(|id| id.get()),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// The listing payload; page facts are echoed only when pagination was
/// requested.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ListingResponse {
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    pub data: Vec<ProductResponse>,
}

impl ListingResponse {
    pub(crate) fn new(listing: ProductListing, page: Option<PageRequest>) -> Self {
        Self {
            total: listing.total,
            page: page.map(PageRequest::page),
            per_page: page.map(PageRequest::per_page),
            data: listing.data.into_iter().map(Into::into).collect(),
        }
    }
}

/// The minimal update contract.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UpdatedProductResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub updated_at: String,
}

impl From<UpdatedProduct> for UpdatedProductResponse {
    fn from(updated: UpdatedProduct) -> Self {
        Self {
            id: updated.id.get(),
            name: updated.name,
            slug: updated.slug,
            updated_at: updated.updated_at.to_string(),
        }
    }
}
