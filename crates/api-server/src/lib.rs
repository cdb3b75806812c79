use std::sync::Arc;

use anyhow::Context;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use portfolio_core::DataError;
use portfolio_data::DataService;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod asset_routes;
mod config;
mod portfolio_routes;

pub use config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DataService>,
}

/// Uniform response envelope for every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error wrapper bridging data-layer and internal failures into JSON
/// responses.
pub enum AppError {
    Data(DataError),
    Internal(anyhow::Error),
}

impl From<DataError> for AppError {
    fn from(e: DataError) -> Self {
        AppError::Data(e)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Data(DataError::UnknownAsset { .. }) => StatusCode::BAD_REQUEST,
            AppError::Data(DataError::ProfileNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Data(DataError::InvalidData(_)) => StatusCode::BAD_REQUEST,
            AppError::Data(DataError::FileError(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Data(e) => e.to_string(),
            AppError::Internal(e) => e.to_string(),
        };
        if status.is_server_error() {
            tracing::error!("request failed: {message}");
        }
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

pub fn build_router(state: AppState, config: &ServerConfig) -> anyhow::Result<Router> {
    let cors = match config.frontend_origin.as_deref() {
        Some(origin) => {
            let origin = origin
                .parse::<axum::http::HeaderValue>()
                .with_context(|| format!("invalid FRONTEND_ORIGIN '{origin}'"))?;
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(origin))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Ok(Router::new()
        .route("/health", get(health))
        .merge(asset_routes::asset_routes())
        .merge(portfolio_routes::portfolio_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let config = ServerConfig::from_env()?;
    tracing::info!("Starting personal finance dashboard API");
    tracing::info!("  Bind address: {}", config.bind_addr);
    tracing::info!("  Data directory: {}", config.data_dir.display());

    let service = DataService::load(&config.data_dir)?;
    let state = AppState {
        service: Arc::new(service),
    };

    let app = build_router(state, &config)?;
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_success_shape() {
        let resp = ApiResponse::success(vec![1, 2, 3]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn api_response_error_shape() {
        let resp = ApiResponse::<()>::error("boom");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn data_errors_map_to_client_statuses() {
        let unknown = AppError::Data(DataError::UnknownAsset {
            asset_id: "SPY".to_string(),
            available: vec![],
        });
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

        let missing = AppError::Data(DataError::ProfileNotFound("user_042".to_string()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let internal = AppError::Internal(anyhow::anyhow!("io"));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
