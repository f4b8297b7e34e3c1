use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::{
    CategorySummary, NewProduct as DomainNewProduct, ProductListQuery, ProductWithCategory,
    UpdateProduct as DomainUpdateProduct,
};
use crate::models::category::Category as DbCategory;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<ProductWithCategory>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let row = products::table
            .inner_join(categories::table)
            .filter(products::id.eq(product_id))
            .first::<(DbProduct, DbCategory)>(&mut conn)
            .optional()?;

        Ok(row.map(with_category))
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<ProductWithCategory>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let mut items = products::table
            .inner_join(categories::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_id) = query.category_id {
            items = items.filter(products::category_id.eq(category_id));
        }

        if let Some(active) = query.active {
            items = items.filter(products::active.eq(active));
        }

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items = items.filter(
                products::name
                    .like(pattern.clone())
                    .or(products::description.like(pattern)),
            );
        }

        // Same-second inserts tie on created_at; id breaks the tie.
        items = items.order((products::created_at.desc(), products::id.desc()));

        let rows = items.load::<(DbProduct, DbCategory)>(&mut conn)?;

        Ok(rows.into_iter().map(with_category).collect())
    }

    fn count_products_in_category(&self, category_id: i32) -> RepositoryResult<i64> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let total = products::table
            .filter(products::category_id.eq(category_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<ProductWithCategory> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let insertable = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        resolve_category(&mut conn, created)
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<ProductWithCategory> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateProduct::from(updates);

        let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        resolve_category(&mut conn, updated)
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn with_category((product, category): (DbProduct, DbCategory)) -> ProductWithCategory {
    ProductWithCategory {
        product: product.into(),
        category: CategorySummary {
            id: category.id,
            name: category.name,
            description: category.description,
        },
    }
}

fn resolve_category(
    conn: &mut SqliteConnection,
    product: DbProduct,
) -> RepositoryResult<ProductWithCategory> {
    use crate::schema::categories;

    let category = categories::table
        .filter(categories::id.eq(product.category_id))
        .first::<DbCategory>(conn)?;

    Ok(with_category((product, category)))
}
