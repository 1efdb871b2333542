//! Product Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};
use thiserror::Error;

use crate::{
    domain::categories::models::Category,
    ids::TypedId,
};

/// Product ID
pub type ProductId = TypedId<Product>;

/// Seller ID
pub type SellerId = TypedId<Seller>;

/// Brand ID
pub type BrandId = TypedId<Brand>;

/// Price ID
pub type PriceId = TypedId<Price>;

/// Option Group ID
pub type OptionGroupId = TypedId<OptionGroup>;

/// Product Option ID
pub type OptionId = TypedId<ProductOption>;

/// Product lifecycle status, stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    Active,
    OutOfStock,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid product status")]
pub struct ParseProductStatusError(String);

impl ProductStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::OutOfStock => "OUT_OF_STOCK",
            Self::Deleted => "DELETED",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = ParseProductStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "OUT_OF_STOCK" => Ok(Self::OutOfStock),
            "DELETED" => Ok(Self::Deleted),
            other => Err(ParseProductStatusError(other.to_string())),
        }
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub status: ProductStatus,
    pub seller_id: Option<SellerId>,
    pub brand_id: Option<BrandId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Seller Model
#[derive(Debug, Clone)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
}

/// Brand Model
#[derive(Debug, Clone)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

/// Price Model
///
/// A product keeps a history of price rows; the current price is the
/// earliest row by ascending id.
#[derive(Debug, Clone)]
pub struct Price {
    pub id: PriceId,
    pub product_id: ProductId,
    pub base_price: i64,
    pub sale_price: i64,
    pub cost_price: i64,
    pub currency: String,
    pub tax_rate: f64,
}

/// A category assignment on a product.
#[derive(Debug, Clone)]
pub struct CategoryAssignment {
    pub category: Category,
    pub is_primary: bool,
}

/// Option Group Model
#[derive(Debug, Clone)]
pub struct OptionGroup {
    pub id: OptionGroupId,
    pub product_id: ProductId,
    pub name: String,
    pub display_order: i32,
    pub options: Vec<ProductOption>,
}

/// Product Option Model
#[derive(Debug, Clone)]
pub struct ProductOption {
    pub id: OptionId,
    pub option_group_id: OptionGroupId,
    pub name: String,
    pub additional_price: i64,
    pub sku: String,
    pub stock: i32,
    pub display_order: i32,
}

/// A product with its listed relations: prices, category assignments,
/// seller, brand, and option groups with options.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    pub seller: Option<Seller>,
    pub brand: Option<Brand>,
    pub prices: Vec<Price>,
    pub categories: Vec<CategoryAssignment>,
    pub option_groups: Vec<OptionGroup>,
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            short_description: row.try_get("short_description")?,
            full_description: row.try_get("full_description")?,
            status,
            seller_id: row
                .try_get::<Option<i64>, _>("seller_id")?
                .map(SellerId::from_i64),
            brand_id: row
                .try_get::<Option<i64>, _>("brand_id")?
                .map(BrandId::from_i64),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Price {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: PriceId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            base_price: row.try_get("base_price")?,
            sale_price: row.try_get("sale_price")?,
            cost_price: row.try_get("cost_price")?,
            currency: row.try_get("currency")?,
            tax_rate: row.try_get("tax_rate")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductOption {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OptionId::from_i64(row.try_get("id")?),
            option_group_id: OptionGroupId::from_i64(row.try_get("option_group_id")?),
            name: row.try_get("name")?,
            additional_price: row.try_get("additional_price")?,
            sku: row.try_get("sku")?,
            stock: row.try_get("stock")?,
            display_order: row.try_get("display_order")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            ProductStatus::Active,
            ProductStatus::OutOfStock,
            ProductStatus::Deleted,
        ] {
            assert_eq!(status.as_str().parse::<ProductStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("DISCONTINUED".parse::<ProductStatus>().is_err());
    }
}
