use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::errors::ApiError;
use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::DieselRepository;
use crate::routes::{ItemResponse, ListResponse};
use crate::services::products::{
    ProductsQuery, create_product, get_product, list_products, list_products_by_category_name,
    modify_product, remove_product,
};

#[get("/api/products")]
pub async fn show_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let products = list_products(repo.get_ref(), params.into_inner())?;

    Ok(HttpResponse::Ok().json(ListResponse::new(products)))
}

#[get("/api/products/category/{name}")]
pub async fn show_products_by_category(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let products = list_products_by_category_name(repo.get_ref(), &path.into_inner())?;

    Ok(HttpResponse::Ok().json(ListResponse::new(products)))
}

// The id checks live in the service layer for product routes.

#[get("/api/products/{id}")]
pub async fn show_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let product = get_product(repo.get_ref(), &path.into_inner())?;

    Ok(HttpResponse::Ok().json(ItemResponse::new(product)))
}

#[post("/api/products")]
pub async fn add_product(
    form: web::Json<CreateProductForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let product = create_product(repo.get_ref(), form.into_inner())?;

    Ok(HttpResponse::Created().json(ItemResponse::new(product)))
}

#[put("/api/products/{id}")]
pub async fn edit_product(
    path: web::Path<String>,
    form: web::Json<UpdateProductForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let product = modify_product(repo.get_ref(), &path.into_inner(), form.into_inner())?;

    Ok(HttpResponse::Ok().json(ItemResponse::new(product)))
}

#[delete("/api/products/{id}")]
pub async fn delete_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    remove_product(repo.get_ref(), &path.into_inner())?;

    Ok(HttpResponse::NoContent().finish())
}
