//! App Router

use salvo::Router;

use crate::{categories, healthcheck, main_page, products, reviews};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("main").get(main_page::get::handler))
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .push(Router::with_path("{id}/products").get(categories::products::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(
                            Router::with_path("reviews")
                                .get(reviews::index::handler)
                                .post(reviews::create::handler)
                                .push(
                                    Router::with_path("{review_id}")
                                        .put(reviews::update::handler)
                                        .delete(reviews::delete::handler),
                                ),
                        ),
                ),
        )
}
