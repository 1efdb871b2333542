//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::domain::{
    categories::{
        MockCategoriesService,
        models::{Category, CategoryId},
    },
    main_page::{
        MockMainPageService,
        models::{CategoryCard, EntityRef, ImageRef, ProductCard},
    },
    products::{
        MockProductsService,
        models::{Product, ProductDetail, ProductId, ProductStatus},
    },
    reviews::{
        MockReviewsService,
        models::{Review, ReviewAuthor, ReviewWithAuthor, UserId},
    },
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_category_products().never();

    categories
}

fn strict_reviews_mock() -> MockReviewsService {
    let mut reviews = MockReviewsService::new();

    reviews.expect_product_reviews().never();
    reviews.expect_create_review().never();
    reviews.expect_update_review().never();
    reviews.expect_delete_review().never();

    reviews
}

fn strict_main_page_mock() -> MockMainPageService {
    let mut main_page = MockMainPageService::new();

    main_page.expect_main_page().never();

    main_page
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(products),
        Arc::new(strict_categories_mock()),
        Arc::new(strict_reviews_mock()),
        Arc::new(strict_main_page_mock()),
    ))
}

pub(crate) fn state_with_categories(categories: MockCategoriesService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_products_mock()),
        Arc::new(categories),
        Arc::new(strict_reviews_mock()),
        Arc::new(strict_main_page_mock()),
    ))
}

pub(crate) fn state_with_reviews(reviews: MockReviewsService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_products_mock()),
        Arc::new(strict_categories_mock()),
        Arc::new(reviews),
        Arc::new(strict_main_page_mock()),
    ))
}

pub(crate) fn state_with_main_page(main_page: MockMainPageService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_products_mock()),
        Arc::new(strict_categories_mock()),
        Arc::new(strict_reviews_mock()),
        Arc::new(main_page),
    ))
}

fn service_for(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_for(state_with_products(products), route)
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service_for(state_with_categories(categories), route)
}

pub(crate) fn reviews_service(reviews: MockReviewsService, route: Router) -> Service {
    service_for(state_with_reviews(reviews), route)
}

pub(crate) fn main_page_service(main_page: MockMainPageService, route: Router) -> Service {
    service_for(state_with_main_page(main_page), route)
}

pub(crate) fn make_product(id: ProductId) -> Product {
    Product {
        id,
        name: "Test Product".to_string(),
        slug: "test-product".to_string(),
        short_description: "short".to_string(),
        full_description: "full".to_string(),
        status: ProductStatus::Active,
        seller_id: None,
        brand_id: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_detail(id: ProductId) -> ProductDetail {
    ProductDetail {
        product: make_product(id),
        seller: None,
        brand: None,
        prices: vec![],
        categories: vec![],
        option_groups: vec![],
    }
}

pub(crate) fn make_category(id: i64, level: i32, parent_id: Option<i64>) -> Category {
    Category {
        id: CategoryId::from_i64(id),
        name: format!("Category {id}"),
        slug: format!("category-{id}"),
        level,
        parent_id: parent_id.map(CategoryId::from_i64),
        image_url: None,
    }
}

pub(crate) fn make_review(id: i64, product_id: i64, rating: i16) -> Review {
    Review {
        id: storefront_app::TypedId::from_i64(id),
        product_id: ProductId::from_i64(product_id),
        user_id: Some(UserId::from_i64(1)),
        rating,
        title: "Great product".to_string(),
        content: "Fast delivery, great quality.".to_string(),
        verified_purchase: true,
        helpful_votes: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_review_with_author(id: i64, product_id: i64, rating: i16) -> ReviewWithAuthor {
    ReviewWithAuthor {
        review: make_review(id, product_id, rating),
        author: Some(ReviewAuthor {
            id: UserId::from_i64(1),
            name: "Reviewer".to_string(),
            avatar_url: None,
        }),
    }
}

pub(crate) fn make_product_card(id: i64) -> ProductCard {
    ProductCard {
        id: ProductId::from_i64(id),
        name: "Leather Sofa".to_string(),
        slug: "leather-sofa".to_string(),
        short_description: "Three-seater".to_string(),
        base_price: Some(599_000),
        sale_price: Some(499_000),
        currency: "KRW".to_string(),
        primary_image: Some(ImageRef {
            url: "https://img.example/sofa.jpg".to_string(),
            alt_text: None,
        }),
        brand: Some(EntityRef {
            id: 2,
            name: "Acme".to_string(),
        }),
        seller: Some(EntityRef {
            id: 7,
            name: "Acme Store".to_string(),
        }),
        rating: Some(4.25),
        review_count: 4,
        in_stock: true,
        status: ProductStatus::Active,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_category_card(id: i64) -> CategoryCard {
    CategoryCard {
        id: CategoryId::from_i64(id),
        name: "Furniture".to_string(),
        slug: "furniture".to_string(),
        image_url: None,
        product_count: 12,
    }
}
