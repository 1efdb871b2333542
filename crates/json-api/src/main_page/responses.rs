//! Main page response shaping.

use serde::{Deserialize, Serialize};

use storefront_app::domain::main_page::models::{
    CategoryCard, EntityRef, ImageRef, MainPage, ProductCard,
};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ImageResponse {
    pub url: String,
    pub alt_text: Option<String>,
}

impl From<ImageRef> for ImageResponse {
    fn from(image: ImageRef) -> Self {
        Self {
            url: image.url,
            alt_text: image.alt_text,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct EntityRefResponse {
    pub id: i64,
    pub name: String,
}

impl From<EntityRef> for EntityRefResponse {
    fn from(entity: EntityRef) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// The flattened public product card.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductCardResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub base_price: Option<i64>,
    pub sale_price: Option<i64>,
    pub currency: String,
    pub primary_image: Option<ImageResponse>,
    pub brand: Option<EntityRefResponse>,
    pub seller: Option<EntityRefResponse>,
    pub rating: Option<f64>,
    pub review_count: i64,
    pub in_stock: bool,
    pub status: String,
    pub created_at: String,
}

impl From<ProductCard> for ProductCardResponse {
    fn from(card: ProductCard) -> Self {
        Self {
            id: card.id.get(),
            name: card.name,
            slug: card.slug,
            short_description: card.short_description,
            base_price: card.base_price,
            sale_price: card.sale_price,
            currency: card.currency,
            primary_image: card.primary_image.map(Into::into),
            brand: card.brand.map(Into::into),
            seller: card.seller.map(Into::into),
            rating: card.rating,
            review_count: card.review_count,
            in_stock: card.in_stock,
            status: card.status.to_string(),
            created_at: card.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryCardResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub product_count: i64,
}

impl From<CategoryCard> for CategoryCardResponse {
    fn from(card: CategoryCard) -> Self {
        Self {
            id: card.id.get(),
            name: card.name,
            slug: card.slug,
            image_url: card.image_url,
            product_count: card.product_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct MainPageResponse {
    pub new_products: Vec<ProductCardResponse>,
    pub popular_products: Vec<ProductCardResponse>,
    pub featured_categories: Vec<CategoryCardResponse>,
}

impl From<MainPage> for MainPageResponse {
    fn from(page: MainPage) -> Self {
        Self {
            new_products: page.new_products.into_iter().map(Into::into).collect(),
            popular_products: page.popular_products.into_iter().map(Into::into).collect(),
            featured_categories: page
                .featured_categories
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
