//! Seed handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use log::error;

use crate::application::SeedService;
use crate::interfaces::http::common::{ApiError, ApiResponse};

#[derive(Clone)]
pub struct SeedState {
    pub service: Arc<SeedService>,
}

#[utoipa::path(
    get,
    path = "/api/seed",
    tag = "Seed",
    responses(
        (status = 200, description = "Catalog wiped and reseeded", body = ApiResponse<String>),
        (status = 500, description = "Seeding failed")
    )
)]
pub async fn run_seed(
    State(state): State<SeedState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    match state.service.run_seed().await {
        Ok(message) => Ok(Json(ApiResponse::success(message.to_string()))),
        Err(e) => {
            error!("Seed failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Seed failed: {}", e))),
            ))
        }
    }
}
