mod form;
pub mod handlers;
mod types;

pub use types::{ErrorResponse, HealthResponse, PredictResponse};

use crate::{Result, artifact, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub async fn run(config: Config) -> Result<()> {
    // Load artifacts once; a failure keeps the form up with an inline error
    let state = match artifact::load_predictor(&config.artifacts).await {
        Ok(predictor) => AppState::ready(predictor),
        Err(e) => {
            error!("Error loading model or feature names: {}", e);
            AppState::failed(e)
        }
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/predict", post(handlers::predict_form))
        .route("/api/predict", post(handlers::predict_api))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
