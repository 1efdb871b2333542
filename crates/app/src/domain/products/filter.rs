//! Product listing filter construction.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::{
    categories::models::CategoryId,
    products::models::{BrandId, ProductStatus, SellerId},
};

/// The current price of a product is its earliest price row by ascending id.
/// Every price-based predicate goes through this one subquery.
pub(crate) const CURRENT_PRICE_SQL: &str =
    "(SELECT pr.base_price FROM prices pr WHERE pr.product_id = p.id ORDER BY pr.id ASC LIMIT 1)";

/// Optional listing filters, AND-ed together when supplied.
///
/// An empty filter matches every product; DELETED products are not excluded
/// implicitly, callers opt in to `status = ACTIVE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub status: Option<ProductStatus>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub categories: Vec<CategoryId>,
    pub seller: Option<SellerId>,
    pub brand: Option<BrandId>,
    pub in_stock: bool,
    pub search: Option<String>,
}

impl ProductFilter {
    /// Append the `WHERE` clause for this filter. All caller-supplied values
    /// are bound as parameters, never interpolated into the SQL text.
    pub(crate) fn push_conditions(&self, query: &mut QueryBuilder<'_, Postgres>) {
        let mut first = true;

        let mut sep = move |query: &mut QueryBuilder<'_, Postgres>| {
            if first {
                first = false;
                query.push(" WHERE ");
            } else {
                query.push(" AND ");
            }
        };

        if let Some(status) = self.status {
            sep(query);
            query.push("p.status = ");
            query.push_bind(status.as_str());
        }

        if let Some(min_price) = self.min_price {
            sep(query);
            query.push(CURRENT_PRICE_SQL);
            query.push(" >= ");
            query.push_bind(min_price);
        }

        if let Some(max_price) = self.max_price {
            sep(query);
            query.push(CURRENT_PRICE_SQL);
            query.push(" <= ");
            query.push_bind(max_price);
        }

        if !self.categories.is_empty() {
            let ids: Vec<i64> = self.categories.iter().map(|id| id.get()).collect();

            sep(query);
            query.push(
                "EXISTS (SELECT 1 FROM product_categories pc \
                 WHERE pc.product_id = p.id AND pc.category_id = ANY(",
            );
            query.push_bind(ids);
            query.push("))");
        }

        if let Some(seller) = self.seller {
            sep(query);
            query.push("p.seller_id = ");
            query.push_bind(seller.get());
        }

        if let Some(brand) = self.brand {
            sep(query);
            query.push("p.brand_id = ");
            query.push_bind(brand.get());
        }

        if self.in_stock {
            sep(query);
            query.push(
                "EXISTS (SELECT 1 FROM product_option_groups og \
                 JOIN product_options o ON o.option_group_id = og.id \
                 WHERE og.product_id = p.id AND o.stock > 0)",
            );
        }

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");

            sep(query);
            query.push("(p.name LIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR p.short_description LIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR p.full_description LIKE ");
            query.push_bind(pattern);
            query.push(")");
        }
    }
}
