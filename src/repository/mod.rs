use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::product::{NewProduct, ProductListQuery, ProductWithCategory, UpdateProduct};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over category records.
pub trait CategoryReader {
    /// All categories sorted ascending by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
    /// Case-insensitive exact match on the category name.
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<ProductWithCategory>>;
    /// Products matching `query`, newest-created first, each with its
    /// resolved category summary.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<ProductWithCategory>>;
    /// Number of products referencing the given category.
    fn count_products_in_category(&self, category_id: i32) -> RepositoryResult<i64>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<ProductWithCategory>;
    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<ProductWithCategory>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}
