//! Product REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{CreateProductRequest, PaginationQuery, ProductResponse, UpdateProductRequest};
use crate::application::ProductService;
use crate::interfaces::http::common::{
    bad_request, domain_error, ApiError, ApiResponse, ValidatedJson, ValidatedQuery,
};

#[derive(Clone)]
pub struct ProductsState {
    pub service: Arc<ProductService>,
}

fn parse_uuid(raw: &str) -> Result<String, ApiError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| bad_request(format!("Validation failed (uuid is expected): {}", raw)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid data or duplicate title/slug"),
        (status = 500, description = "Unexpected storage failure")
    )
)]
pub async fn create_product(
    State(state): State<ProductsState>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponse>>), ApiError> {
    let created = state
        .service
        .create(body.into())
        .await
        .map_err(|e| domain_error(e, StatusCode::NOT_FOUND))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Invalid pagination")
    )
)]
pub async fn list_products(
    State(state): State<ProductsState>,
    ValidatedQuery(query): ValidatedQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ProductResponse>>>, ApiError> {
    let page = state
        .service
        .find_all(query.into())
        .await
        .map_err(|e| domain_error(e, StatusCode::NOT_FOUND))?;

    Ok(Json(ApiResponse::success(
        page.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{term}",
    tag = "Products",
    params(("term" = String, Path, description = "Product id (UUID), title or slug")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 400, description = "No product matches the term")
    )
)]
pub async fn get_product(
    State(state): State<ProductsState>,
    Path(term): Path<String>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let product = state
        .service
        .find_one_plain(&term)
        .await
        .map_err(|e| domain_error(e, StatusCode::BAD_REQUEST))?;

    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id (UUID)")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid id, invalid data or duplicate title/slug"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<ProductsState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let id = parse_uuid(&id)?;
    let updated = state
        .service
        .update(&id, body.into())
        .await
        .map_err(|e| domain_error(e, StatusCode::NOT_FOUND))?;

    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 200, description = "Removed product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<ProductsState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let id = parse_uuid(&id)?;
    let removed = state
        .service
        .remove(&id)
        .await
        .map_err(|e| domain_error(e, StatusCode::NOT_FOUND))?;

    Ok(Json(ApiResponse::success(removed.into())))
}
