use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use portfolio_core::{Asset, AssetCatalog};

use crate::{ApiResponse, AppError, AppState};

pub fn asset_routes() -> Router<AppState> {
    Router::new().route("/assets", get(list_assets))
}

async fn list_assets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Asset>>>, AppError> {
    let assets = state.service.list_assets().await?;
    Ok(Json(ApiResponse::success(assets)))
}
