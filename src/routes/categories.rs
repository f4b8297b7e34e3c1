use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::errors::ApiError;
use crate::forms::categories::{CreateCategoryForm, UpdateCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::{ItemResponse, ListResponse, parse_id_param};
use crate::services::categories::{
    create_category, get_category, list_categories, modify_category, remove_category,
};

#[get("/api/categories")]
pub async fn show_categories(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let categories = list_categories(repo.get_ref())?;

    Ok(HttpResponse::Ok().json(ListResponse::new(categories)))
}

#[get("/api/categories/{id}")]
pub async fn show_category(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let category_id = parse_id_param(&path.into_inner(), "id")?;

    let data = get_category(repo.get_ref(), category_id)?;

    Ok(HttpResponse::Ok().json(ItemResponse::new(data)))
}

#[post("/api/categories")]
pub async fn add_category(
    form: web::Json<CreateCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let category = create_category(repo.get_ref(), form.into_inner())?;

    Ok(HttpResponse::Created().json(ItemResponse::new(category)))
}

#[put("/api/categories/{id}")]
pub async fn edit_category(
    path: web::Path<String>,
    form: web::Json<UpdateCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let category_id = parse_id_param(&path.into_inner(), "id")?;

    let category = modify_category(repo.get_ref(), category_id, form.into_inner())?;

    Ok(HttpResponse::Ok().json(ItemResponse::new(category)))
}

#[delete("/api/categories/{id}")]
pub async fn delete_category(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let category_id = parse_id_param(&path.into_inner(), "id")?;

    remove_category(repo.get_ref(), category_id)?;

    Ok(HttpResponse::NoContent().finish())
}
