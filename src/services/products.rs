use serde::Deserialize;

use crate::domain::product::{ProductListQuery, ProductWithCategory};
use crate::errors::{ApiError, ApiResult};
use crate::forms::parse_id;
use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{CategoryReader, ProductReader, ProductWriter};

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional exact category id filter.
    pub category: Option<String>,
    /// Optional active filter; only the literal `"true"` selects active
    /// products, any other literal selects inactive ones.
    pub active: Option<String>,
    /// Optional case-insensitive substring applied to name or description.
    pub search: Option<String>,
}

/// Loads products matching the given filters, newest first.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ApiResult<Vec<ProductWithCategory>>
where
    R: ProductReader + ?Sized,
{
    let mut list_query = ProductListQuery::new();

    if let Some(raw) = query.category.as_deref() {
        let category_id = parse_id(raw).ok_or_else(|| ApiError::cast("category", raw))?;
        list_query = list_query.category(category_id);
    }

    if let Some(raw) = query.active.as_deref() {
        list_query = list_query.active(raw == "true");
    }

    if let Some(term) = query.search.as_deref().filter(|term| !term.is_empty()) {
        list_query = list_query.search(term);
    }

    Ok(repo.list_products(list_query)?)
}

/// Loads one product with its resolved category summary.
pub fn get_product<R>(repo: &R, raw_id: &str) -> ApiResult<ProductWithCategory>
where
    R: ProductReader + ?Sized,
{
    let product_id = parse_id(raw_id).ok_or_else(|| ApiError::bad_request("invalid id"))?;

    repo.get_product_by_id(product_id)?
        .ok_or_else(|| ApiError::not_found("product not found"))
}

/// Creates a new product after resolving its category reference.
pub fn create_product<R>(repo: &R, form: CreateProductForm) -> ApiResult<ProductWithCategory>
where
    R: CategoryReader + ProductWriter + ?Sized,
{
    let category_id = resolve_category(repo, form.category.as_deref())?;

    let new_product = form
        .into_new_product(category_id)
        .map_err(ApiError::validation)?;

    Ok(repo.create_product(&new_product)?)
}

/// Applies a partial update to an existing product.
pub fn modify_product<R>(
    repo: &R,
    raw_id: &str,
    form: UpdateProductForm,
) -> ApiResult<ProductWithCategory>
where
    R: CategoryReader + ProductWriter + ?Sized,
{
    let product_id = parse_id(raw_id).ok_or_else(|| ApiError::bad_request("invalid id"))?;

    let category_id = resolve_category(repo, form.category.as_deref())?;

    let update = form
        .into_update_product(category_id)
        .map_err(ApiError::validation)?;

    match repo.update_product(product_id, &update) {
        Ok(product) => Ok(product),
        Err(RepositoryError::NotFound) => Err(ApiError::not_found("product not found")),
        Err(err) => Err(err.into()),
    }
}

/// Deletes a product.
pub fn remove_product<R>(repo: &R, raw_id: &str) -> ApiResult<()>
where
    R: ProductWriter + ?Sized,
{
    let product_id = parse_id(raw_id).ok_or_else(|| ApiError::bad_request("invalid id"))?;

    match repo.delete_product(product_id) {
        Ok(()) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ApiError::not_found("product not found")),
        Err(err) => Err(err.into()),
    }
}

/// Loads the active products of the category matching `name`
/// case-insensitively; an unknown name yields an empty list, not an error.
pub fn list_products_by_category_name<R>(
    repo: &R,
    name: &str,
) -> ApiResult<Vec<ProductWithCategory>>
where
    R: CategoryReader + ProductReader + ?Sized,
{
    let category = match repo.get_category_by_name(name)? {
        Some(category) => category,
        None => return Ok(Vec::new()),
    };

    Ok(repo.list_products(ProductListQuery::new().category(category.id).active(true))?)
}

/// Checks the format and existence of a category reference supplied with a
/// product write.
fn resolve_category<R>(repo: &R, raw: Option<&str>) -> ApiResult<Option<i32>>
where
    R: CategoryReader + ?Sized,
{
    let Some(raw) = raw else {
        return Ok(None);
    };

    let category_id = parse_id(raw).ok_or_else(|| ApiError::bad_request("invalid category id"))?;

    if repo.get_category_by_id(category_id)?.is_none() {
        return Err(ApiError::not_found("category not found"));
    }

    Ok(Some(category_id))
}
