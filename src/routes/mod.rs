use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::errors::ApiError;
use crate::forms::parse_id;

pub mod categories;
pub mod products;

/// Envelope returned by list endpoints: `{success, count, data}`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Envelope returned by single-item endpoints: `{success, data}`.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ItemResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Guard for resource-id path segments: rejects the request with 400 naming
/// the parameter when the value is not a well-formed identifier.
pub fn parse_id_param(value: &str, name: &str) -> Result<i32, ApiError> {
    parse_id(value).ok_or_else(|| ApiError::bad_request(format!("invalid {name}")))
}

#[get("/")]
pub async fn banner() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "online",
    }))
}

#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": "route not found",
    }))
}

/// Registers every route; shared between the binary and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(banner)
        .service(health)
        .service(categories::show_categories)
        .service(categories::show_category)
        .service(categories::add_category)
        .service(categories::edit_category)
        .service(categories::delete_category)
        .service(products::show_products)
        .service(products::show_products_by_category)
        .service(products::show_product)
        .service(products::add_product)
        .service(products::edit_product)
        .service(products::delete_product);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_param_names_the_parameter() {
        let err = parse_id_param("zzz", "id").expect_err("expected failure");
        assert!(matches!(err, ApiError::BadRequest(message) if message == "invalid id"));

        assert_eq!(parse_id_param("5", "id").expect("expected success"), 5);
    }

    #[test]
    fn list_response_counts_its_data() {
        let response = ListResponse::new(vec![1, 2, 3]);
        assert!(response.success);
        assert_eq!(response.count, 3);

        let empty: ListResponse<i32> = ListResponse::new(Vec::new());
        assert_eq!(empty.count, 0);
    }
}
