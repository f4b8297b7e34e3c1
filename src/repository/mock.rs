use mockall::mock;

use super::{CategoryReader, CategoryWriter, ProductReader, ProductWriter};
use crate::domain::{
    category::{Category, NewCategory, UpdateCategory},
    product::{NewProduct, ProductListQuery, ProductWithCategory, UpdateProduct},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub CatalogRepository {}

    impl CategoryReader for CatalogRepository {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
        fn get_category_by_id(&self, category_id: i32) -> RepositoryResult<Option<Category>>;
        fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
    }

    impl CategoryWriter for CatalogRepository {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }

    impl ProductReader for CatalogRepository {
        fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<ProductWithCategory>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<ProductWithCategory>>;
        fn count_products_in_category(&self, category_id: i32) -> RepositoryResult<i64>;
    }

    impl ProductWriter for CatalogRepository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<ProductWithCategory>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<ProductWithCategory>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}
