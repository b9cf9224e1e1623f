use super::form::{Outcome, PageView, parse_fields, render_page};
use super::types::{ErrorResponse, HealthResponse, PredictResponse};
use crate::{Error, features::CarInput, predictor::Predictor};
use axum::{
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::StatusCode,
    response::{Html, Json},
};
use std::{collections::HashMap, sync::Arc};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Result<Predictor, Error>>,
}

impl AppState {
    pub fn ready(predictor: Predictor) -> Self {
        Self {
            predictor: Arc::new(Ok(predictor)),
        }
    }

    pub fn failed(error: Error) -> Self {
        Self {
            predictor: Arc::new(Err(error)),
        }
    }

    fn load_error(&self) -> Option<String> {
        (*self.predictor).as_ref().err().map(|e| e.to_string())
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let input = CarInput::default();
    let load_error = state.load_error();
    Html(render_page(&PageView {
        input: &input,
        load_error: load_error.as_deref(),
        outcome: None,
    }))
}

pub async fn predict_form(
    State(state): State<AppState>,
    form: Result<axum::Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let load_error = state.load_error();

    let (input, outcome) = match form {
        Ok(axum::Form(fields)) => {
            let (input, problems) = parse_fields(&fields);
            let outcome = if !problems.is_empty() {
                let message = problems.join("; ");
                warn!("Rejected form submission: {}", message);
                Some(Outcome::Error(message))
            } else {
                match &*state.predictor {
                    Ok(predictor) => match predictor.predict(&input) {
                        Ok(prediction) => {
                            info!("Form prediction: {}", prediction.formatted());
                            Some(Outcome::Price(prediction.formatted()))
                        }
                        Err(e) => {
                            warn!("Form prediction failed: {}", e);
                            Some(Outcome::Error(e.to_string()))
                        }
                    },
                    // The page already carries the load error.
                    Err(_) => None,
                }
            };
            (input, outcome)
        }
        Err(rejection) => {
            warn!("Rejected form submission: {}", rejection.body_text());
            (
                CarInput::default(),
                Some(Outcome::Error(rejection.body_text())),
            )
        }
    };

    Html(render_page(&PageView {
        input: &input,
        load_error: load_error.as_deref(),
        outcome: outcome.as_ref(),
    }))
}

pub async fn predict_api(
    State(state): State<AppState>,
    body: Result<Json<CarInput>, JsonRejection>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(input) = body.map_err(|rejection| {
        warn!("Rejected prediction request: {}", rejection.body_text());
        error_response(rejection.status(), rejection.body_text())
    })?;

    let predictor = (*state.predictor).as_ref().map_err(|e| {
        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Model unavailable: {}", e),
        )
    })?;

    let prediction_id = Uuid::new_v4().to_string();

    match predictor.predict(&input) {
        Ok(prediction) => {
            info!(
                "Prediction {} succeeded: {}",
                prediction_id,
                prediction.formatted()
            );
            Ok(Json(PredictResponse {
                prediction_id,
                formatted: prediction.formatted(),
                price: prediction.price,
            }))
        }
        Err(e @ Error::InvalidInput(_)) => {
            warn!("Prediction {} rejected: {}", prediction_id, e);
            Err(error_response(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            error!("Prediction {} failed: {}", prediction_id, e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error making prediction: {}", e),
            ))
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(match &*state.predictor {
        Ok(predictor) => HealthResponse {
            status: "ok",
            model_loaded: true,
            features: predictor.schema().len(),
            error: None,
        },
        Err(e) => HealthResponse {
            status: "degraded",
            model_loaded: false,
            features: 0,
            error: Some(e.to_string()),
        },
    })
}

fn error_response(status: StatusCode, error: String) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error }))
}
