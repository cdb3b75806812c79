use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use portfolio_core::{PortfolioPriceHistory, PriceHistoryProvider, ProfileProvider, UserProfile};
use portfolio_data::CustomPortfolioRequest;
use ratio_engine::{RatioEngine, RatioSection};

use crate::{ApiResponse, AppError, AppState};

pub fn portfolio_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/profile", get(get_profile))
        .route("/users/:user_id/price-history", get(get_price_history))
        .route("/users/:user_id/analysis", get(get_analysis))
        .route("/portfolio/custom", post(post_custom_portfolio))
        .route(
            "/portfolio/custom/price-history",
            post(post_custom_price_history),
        )
        .route("/portfolio/custom/analysis", post(post_custom_analysis))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let profile = state.service.load_profile(&user_id).await?;
    Ok(Json(ApiResponse::success(profile)))
}

async fn get_price_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<PortfolioPriceHistory>>, AppError> {
    let profile = state.service.load_profile(&user_id).await?;
    let history = state.service.price_history(&profile).await?;
    Ok(Json(ApiResponse::success(history)))
}

async fn get_analysis(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<RatioSection>>>, AppError> {
    let profile = state.service.load_profile(&user_id).await?;
    let history = state.service.price_history(&profile).await?;
    let sections = RatioEngine::analyze(&profile, &history);
    Ok(Json(ApiResponse::success(sections)))
}

async fn post_custom_portfolio(
    State(state): State<AppState>,
    Json(request): Json<CustomPortfolioRequest>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let profile = state.service.custom_profile(&request)?;
    Ok(Json(ApiResponse::success(profile)))
}

async fn post_custom_price_history(
    State(state): State<AppState>,
    Json(request): Json<CustomPortfolioRequest>,
) -> Result<Json<ApiResponse<PortfolioPriceHistory>>, AppError> {
    let profile = state.service.custom_profile(&request)?;
    let history = state.service.price_history(&profile).await?;
    Ok(Json(ApiResponse::success(history)))
}

async fn post_custom_analysis(
    State(state): State<AppState>,
    Json(request): Json<CustomPortfolioRequest>,
) -> Result<Json<ApiResponse<Vec<RatioSection>>>, AppError> {
    let profile = state.service.custom_profile(&request)?;
    let history = state.service.price_history(&profile).await?;
    let sections = RatioEngine::analyze(&profile, &history);
    Ok(Json(ApiResponse::success(sections)))
}
