//! Product request parsing and validation.

use salvo::Request;
use serde::{Deserialize, Serialize};

use storefront_app::{
    TypedId,
    domain::products::{
        ProductFilter,
        data::{NewCategoryLink, NewPrice, NewProduct, ProductQuery, ProductUpdate},
        models::ProductStatus,
    },
    listing::ProductSortColumn,
};

use crate::{envelope::ApiError, params};

/// Parse the listing query string into a filter, sort, and page window.
pub(crate) fn listing_query(req: &Request) -> Result<ProductQuery, ApiError> {
    let page = params::pagination(req)?;
    let sort = params::sort_spec(req, ProductSortColumn::CreatedAt)?;

    let status = params::opt_query_str(req, "status")
        .map(|raw| {
            raw.parse::<ProductStatus>()
                .map_err(|error| ApiError::invalid_input(error.to_string()))
        })
        .transpose()?;

    let min_price = params::opt_query_i64(req, "minPrice")?;
    let max_price = params::opt_query_i64(req, "maxPrice")?;

    if let (Some(min), Some(max)) = (min_price, max_price) {
        if max <= min {
            return Err(ApiError::invalid_input(
                "maxPrice must be greater than minPrice",
            ));
        }
    }

    let filter = ProductFilter {
        status,
        min_price,
        max_price,
        categories: params::query_id_list(req, "category")?,
        seller: params::opt_query_id(req, "seller")?,
        brand: params::opt_query_id(req, "brand")?,
        in_stock: params::opt_query_bool(req, "inStock")?.unwrap_or(false),
        search: params::opt_query_str(req, "search"),
    };

    Ok(ProductQuery { filter, sort, page })
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub slug: String,
    #[serde(rename = "shortDescription")]
    pub short_description: String,
    #[serde(rename = "fullDescription")]
    pub full_description: String,
    pub status: String,
    #[serde(rename = "sellerId")]
    pub seller_id: Option<i64>,
    #[serde(rename = "brandId")]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub categories: Vec<CategoryLinkRequest>,
    pub price: Option<PriceRequest>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryLinkRequest {
    pub category_id: i64,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PriceRequest {
    pub base_price: i64,
    pub sale_price: i64,
    pub cost_price: i64,
    pub currency: String,
    pub tax_rate: f64,
}

impl CreateProductRequest {
    pub(crate) fn into_new_product(self) -> Result<NewProduct, ApiError> {
        let status = self
            .status
            .parse::<ProductStatus>()
            .map_err(|error| ApiError::invalid_input(error.to_string()))?;

        let categories = self
            .categories
            .into_iter()
            .map(|link| {
                Ok(NewCategoryLink {
                    category_id: positive_id(link.category_id, "category_id")?,
                    is_primary: link.is_primary,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        Ok(NewProduct {
            name: self.name,
            slug: self.slug,
            short_description: self.short_description,
            full_description: self.full_description,
            status,
            seller_id: self
                .seller_id
                .map(|id| positive_id::<_>(id, "sellerId"))
                .transpose()?,
            brand_id: self
                .brand_id
                .map(|id| positive_id::<_>(id, "brandId"))
                .transpose()?,
            categories,
            price: self.price.map(|price| NewPrice {
                base_price: price.base_price,
                sale_price: price.sale_price,
                cost_price: price.cost_price,
                currency: price.currency,
                tax_rate: price.tax_rate,
            }),
        })
    }
}

/// Update Product Request
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,
    #[serde(rename = "fullDescription")]
    pub full_description: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "sellerId")]
    pub seller_id: Option<i64>,
    #[serde(rename = "brandId")]
    pub brand_id: Option<i64>,
}

impl UpdateProductRequest {
    pub(crate) fn into_update(self) -> Result<ProductUpdate, ApiError> {
        let status = self
            .status
            .map(|raw| {
                raw.parse::<ProductStatus>()
                    .map_err(|error| ApiError::invalid_input(error.to_string()))
            })
            .transpose()?;

        Ok(ProductUpdate {
            name: self.name,
            slug: self.slug,
            short_description: self.short_description,
            full_description: self.full_description,
            status,
            seller_id: self
                .seller_id
                .map(|id| positive_id::<_>(id, "sellerId"))
                .transpose()?,
            brand_id: self
                .brand_id
                .map(|id| positive_id::<_>(id, "brandId"))
                .transpose()?,
        })
    }
}

fn positive_id<T>(id: i64, name: &str) -> Result<TypedId<T>, ApiError> {
    if id < 1 {
        return Err(ApiError::invalid_input(format!(
            "{name} must be a positive integer"
        )));
    }

    Ok(TypedId::from_i64(id))
}
