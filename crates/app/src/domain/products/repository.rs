//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use sqlx::{
    FromRow, PgPool, Postgres, QueryBuilder, Row, Transaction, postgres::PgRow, query, query_as,
    query_scalar,
};

use crate::{
    domain::{
        categories::models::Category,
        products::{
            data::{NewProduct, ProductUpdate, UpdatedProduct},
            filter::ProductFilter,
            models::{
                Brand, CategoryAssignment, OptionGroup, OptionGroupId, Price, Product,
                ProductDetail, ProductId, ProductOption, ProductStatus, Seller,
            },
        },
    },
    listing::{PageRequest, ProductSortColumn, SortSpec},
};

const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const PRODUCT_PRICES_SQL: &str = include_str!("sql/product_prices.sql");
const PRODUCT_CATEGORIES_SQL: &str = include_str!("sql/product_categories.sql");
const PRODUCT_OPTION_GROUPS_SQL: &str = include_str!("sql/product_option_groups.sql");
const PRODUCT_OPTIONS_SQL: &str = include_str!("sql/product_options.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const LINK_CATEGORY_SQL: &str = include_str!("sql/link_category.sql");
const CREATE_PRICE_SQL: &str = include_str!("sql/create_price.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Base projection shared by the listing query and the single lookup.
const LISTING_SELECT_SQL: &str = "SELECT p.id, p.name, p.slug, p.short_description, \
     p.full_description, p.status, p.seller_id, p.brand_id, p.created_at, p.updated_at, \
     s.name AS seller_name, b.name AS brand_name \
     FROM products p \
     LEFT JOIN sellers s ON s.id = p.seller_id \
     LEFT JOIN brands b ON b.id = p.brand_id";

const COUNT_SELECT_SQL: &str = "SELECT COUNT(*) FROM products p";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

/// A product row joined with its seller and brand names.
#[derive(Debug, Clone)]
pub(crate) struct ProductBaseRow {
    pub(crate) product: Product,
    pub(crate) seller: Option<Seller>,
    pub(crate) brand: Option<Brand>,
}

#[derive(Debug)]
struct ProductCategoryRow {
    product_id: i64,
    assignment: CategoryAssignment,
}

#[derive(Debug)]
struct OptionGroupRow {
    group: OptionGroup,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn count_products(
        &self,
        pool: &PgPool,
        filter: &ProductFilter,
    ) -> Result<i64, sqlx::Error> {
        let mut query = QueryBuilder::new(COUNT_SELECT_SQL);

        filter.push_conditions(&mut query);

        query.build_query_scalar::<i64>().fetch_one(pool).await
    }

    pub(crate) async fn list_product_rows(
        &self,
        pool: &PgPool,
        filter: &ProductFilter,
        sort: &SortSpec<ProductSortColumn>,
        page: Option<PageRequest>,
    ) -> Result<Vec<ProductBaseRow>, sqlx::Error> {
        let mut query = QueryBuilder::new(LISTING_SELECT_SQL);

        filter.push_conditions(&mut query);
        sort.push_order_by(&mut query, "p.id ASC");

        if let Some(page) = page {
            page.push_limit_offset(&mut query);
        }

        query
            .build_query_as::<ProductBaseRow>()
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn get_product_row(
        &self,
        pool: &PgPool,
        product: ProductId,
    ) -> Result<ProductBaseRow, sqlx::Error> {
        query_as::<Postgres, ProductBaseRow>(GET_PRODUCT_SQL)
            .bind(product.get())
            .fetch_one(pool)
            .await
    }

    /// Attach prices, category assignments, and option groups to the given
    /// base rows with one batched read per relation.
    pub(crate) async fn load_details(
        &self,
        pool: &PgPool,
        rows: Vec<ProductBaseRow>,
    ) -> Result<Vec<ProductDetail>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.product.id.get()).collect();

        let (prices, categories, groups, options) = tokio::try_join!(
            query_as::<Postgres, Price>(PRODUCT_PRICES_SQL)
                .bind(ids.clone())
                .fetch_all(pool),
            query_as::<Postgres, ProductCategoryRow>(PRODUCT_CATEGORIES_SQL)
                .bind(ids.clone())
                .fetch_all(pool),
            query_as::<Postgres, OptionGroupRow>(PRODUCT_OPTION_GROUPS_SQL)
                .bind(ids.clone())
                .fetch_all(pool),
            query_as::<Postgres, ProductOption>(PRODUCT_OPTIONS_SQL)
                .bind(ids)
                .fetch_all(pool),
        )?;

        let mut prices_by_product: FxHashMap<i64, Vec<Price>> = FxHashMap::default();

        for price in prices {
            prices_by_product
                .entry(price.product_id.get())
                .or_default()
                .push(price);
        }

        let mut categories_by_product: FxHashMap<i64, Vec<CategoryAssignment>> =
            FxHashMap::default();

        for row in categories {
            categories_by_product
                .entry(row.product_id)
                .or_default()
                .push(row.assignment);
        }

        let mut options_by_group: FxHashMap<i64, Vec<ProductOption>> = FxHashMap::default();

        for option in options {
            options_by_group
                .entry(option.option_group_id.get())
                .or_default()
                .push(option);
        }

        let mut groups_by_product: FxHashMap<i64, Vec<OptionGroup>> = FxHashMap::default();

        for row in groups {
            let mut group = row.group;
            group.options = options_by_group.remove(&group.id.get()).unwrap_or_default();

            groups_by_product
                .entry(group.product_id.get())
                .or_default()
                .push(group);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let id = row.product.id.get();

                ProductDetail {
                    seller: row.seller,
                    brand: row.brand,
                    prices: prices_by_product.remove(&id).unwrap_or_default(),
                    categories: categories_by_product.remove(&id).unwrap_or_default(),
                    option_groups: groups_by_product.remove(&id).unwrap_or_default(),
                    product: row.product,
                }
            })
            .collect())
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        new: &NewProduct,
    ) -> Result<ProductId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_PRODUCT_SQL)
            .bind(&new.name)
            .bind(&new.slug)
            .bind(&new.short_description)
            .bind(&new.full_description)
            .bind(new.status.as_str())
            .bind(new.seller_id.map(|seller| seller.get()))
            .bind(new.brand_id.map(|brand| brand.get()))
            .fetch_one(&mut **tx)
            .await?;

        for link in &new.categories {
            query(LINK_CATEGORY_SQL)
                .bind(id)
                .bind(link.category_id.get())
                .bind(link.is_primary)
                .execute(&mut **tx)
                .await?;
        }

        if let Some(price) = &new.price {
            query(CREATE_PRICE_SQL)
                .bind(id)
                .bind(price.base_price)
                .bind(price.sale_price)
                .bind(price.cost_price)
                .bind(&price.currency)
                .bind(price.tax_rate)
                .execute(&mut **tx)
                .await?;
        }

        Ok(ProductId::from_i64(id))
    }

    pub(crate) async fn update_product(
        &self,
        pool: &PgPool,
        product: ProductId,
        update: &ProductUpdate,
    ) -> Result<UpdatedProduct, sqlx::Error> {
        query_as::<Postgres, UpdatedProduct>(UPDATE_PRODUCT_SQL)
            .bind(product.get())
            .bind(update.name.as_deref())
            .bind(update.slug.as_deref())
            .bind(update.short_description.as_deref())
            .bind(update.full_description.as_deref())
            .bind(update.status.map(ProductStatus::as_str))
            .bind(update.seller_id.map(|seller| seller.get()))
            .bind(update.brand_id.map(|brand| brand.get()))
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        pool: &PgPool,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.get())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductBaseRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let product = Product::from_row(row)?;

        let seller_name: Option<String> = row.try_get("seller_name")?;
        let brand_name: Option<String> = row.try_get("brand_name")?;

        let seller = product
            .seller_id
            .zip(seller_name)
            .map(|(id, name)| Seller { id, name });

        let brand = product
            .brand_id
            .zip(brand_name)
            .map(|(id, name)| Brand { id, name });

        Ok(Self {
            product,
            seller,
            brand,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductCategoryRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_id: row.try_get("product_id")?,
            assignment: CategoryAssignment {
                category: Category::from_row(row)?,
                is_primary: row.try_get("is_primary")?,
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OptionGroupRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            group: OptionGroup {
                id: OptionGroupId::from_i64(row.try_get("id")?),
                product_id: ProductId::from_i64(row.try_get("product_id")?),
                name: row.try_get("name")?,
                display_order: row.try_get("display_order")?,
                options: Vec::new(),
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for UpdatedProduct {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
