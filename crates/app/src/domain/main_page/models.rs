//! Main Page View Models

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::domain::{
    categories::models::CategoryId,
    products::models::{ProductId, ProductStatus},
    reviews::models::round2,
};

/// The image surfaced on a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub alt_text: Option<String>,
}

/// A brand or seller reduced to its public identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub id: i64,
    pub name: String,
}

/// Flattened public product view shared by the new and popular lists.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub base_price: Option<i64>,
    pub sale_price: Option<i64>,
    pub currency: String,
    pub primary_image: Option<ImageRef>,
    pub brand: Option<EntityRef>,
    pub seller: Option<EntityRef>,
    pub rating: Option<f64>,
    pub review_count: i64,
    pub in_stock: bool,
    pub status: ProductStatus,
    pub created_at: Timestamp,
}

/// Raw card columns as selected by the main-page queries.
#[derive(Debug, Clone)]
pub(crate) struct ProductCardRow {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) short_description: String,
    pub(crate) status: ProductStatus,
    pub(crate) created_at: Timestamp,
    pub(crate) base_price: Option<i64>,
    pub(crate) sale_price: Option<i64>,
    pub(crate) currency: Option<String>,
    pub(crate) image_url: Option<String>,
    pub(crate) image_alt_text: Option<String>,
    pub(crate) brand_id: Option<i64>,
    pub(crate) brand_name: Option<String>,
    pub(crate) seller_id: Option<i64>,
    pub(crate) seller_name: Option<String>,
    pub(crate) review_count: i64,
    pub(crate) rating_sum: i64,
    pub(crate) in_stock: bool,
}

impl From<ProductCardRow> for ProductCard {
    fn from(row: ProductCardRow) -> Self {
        let rating = if row.review_count > 0 {
            Some(round2(row.rating_sum as f64 / row.review_count as f64))
        } else {
            None
        };

        Self {
            id: ProductId::from_i64(row.id),
            name: row.name,
            slug: row.slug,
            short_description: row.short_description,
            base_price: row.base_price,
            sale_price: row.sale_price,
            currency: row.currency.unwrap_or_else(|| "KRW".to_string()),
            primary_image: row.image_url.map(|url| ImageRef {
                url,
                alt_text: row.image_alt_text,
            }),
            brand: row
                .brand_id
                .zip(row.brand_name)
                .map(|(id, name)| EntityRef { id, name }),
            seller: row
                .seller_id
                .zip(row.seller_name)
                .map(|(id, name)| EntityRef { id, name }),
            rating,
            review_count: row.review_count,
            in_stock: row.in_stock,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// A level-1 category ranked by its product count.
#[derive(Debug, Clone)]
pub struct CategoryCard {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub product_count: i64,
}

/// The aggregated homepage payload.
#[derive(Debug, Clone)]
pub struct MainPage {
    pub new_products: Vec<ProductCard>,
    pub popular_products: Vec<ProductCard>,
    pub featured_categories: Vec<CategoryCard>,
}

impl<'r> FromRow<'r, PgRow> for ProductCardRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            short_description: row.try_get("short_description")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            base_price: row.try_get("base_price")?,
            sale_price: row.try_get("sale_price")?,
            currency: row.try_get("currency")?,
            image_url: row.try_get("image_url")?,
            image_alt_text: row.try_get("image_alt_text")?,
            brand_id: row.try_get("brand_id")?,
            brand_name: row.try_get("brand_name")?,
            seller_id: row.try_get("seller_id")?,
            seller_name: row.try_get("seller_name")?,
            review_count: row.try_get("review_count")?,
            rating_sum: row.try_get("rating_sum")?,
            in_stock: row.try_get("in_stock")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryCard {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CategoryId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            image_url: row.try_get("image_url")?,
            product_count: row.try_get("product_count")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_row() -> ProductCardRow {
        ProductCardRow {
            id: 1,
            name: "Leather Sofa".to_string(),
            slug: "leather-sofa".to_string(),
            short_description: "Three-seater".to_string(),
            status: ProductStatus::Active,
            created_at: Timestamp::UNIX_EPOCH,
            base_price: Some(599_000),
            sale_price: Some(499_000),
            currency: Some("KRW".to_string()),
            image_url: Some("https://img.example/sofa.jpg".to_string()),
            image_alt_text: None,
            brand_id: Some(2),
            brand_name: Some("Acme".to_string()),
            seller_id: Some(7),
            seller_name: Some("Acme Store".to_string()),
            review_count: 4,
            rating_sum: 17,
            in_stock: true,
        }
    }

    #[test]
    fn card_rating_is_rounded_mean_of_review_ratings() {
        // Ratings [5, 5, 4, 3]
        let card = ProductCard::from(card_row());

        assert_eq!(card.rating, Some(4.25));
        assert_eq!(card.review_count, 4);
    }

    #[test]
    fn card_rating_is_none_without_reviews() {
        let card = ProductCard::from(ProductCardRow {
            review_count: 0,
            rating_sum: 0,
            ..card_row()
        });

        assert_eq!(card.rating, None);
    }

    #[test]
    fn card_prices_are_none_without_a_price_row() {
        let card = ProductCard::from(ProductCardRow {
            base_price: None,
            sale_price: None,
            currency: None,
            ..card_row()
        });

        assert_eq!(card.base_price, None);
        assert_eq!(card.sale_price, None);
        assert_eq!(card.currency, "KRW");
    }

    #[test]
    fn card_image_is_none_without_a_primary_image() {
        let card = ProductCard::from(ProductCardRow {
            image_url: None,
            image_alt_text: None,
            ..card_row()
        });

        assert_eq!(card.primary_image, None);
    }

    #[test]
    fn card_brand_and_seller_reduce_to_id_and_name() {
        let card = ProductCard::from(card_row());

        assert_eq!(
            card.brand,
            Some(EntityRef {
                id: 2,
                name: "Acme".to_string()
            })
        );
        assert_eq!(
            card.seller,
            Some(EntityRef {
                id: 7,
                name: "Acme Store".to_string()
            })
        );
    }
}
