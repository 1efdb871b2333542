//! State

use std::sync::Arc;

use storefront_app::{
    context::AppContext,
    domain::{
        categories::CategoriesService, main_page::MainPageService, products::ProductsService,
        reviews::ReviewsService,
    },
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
    pub(crate) categories: Arc<dyn CategoriesService>,
    pub(crate) reviews: Arc<dyn ReviewsService>,
    pub(crate) main_page: Arc<dyn MainPageService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        products: Arc<dyn ProductsService>,
        categories: Arc<dyn CategoriesService>,
        reviews: Arc<dyn ReviewsService>,
        main_page: Arc<dyn MainPageService>,
    ) -> Self {
        Self {
            products,
            categories,
            reviews,
            main_page,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(
            app.products,
            app.categories,
            app.reviews,
            app.main_page,
        ))
    }
}
