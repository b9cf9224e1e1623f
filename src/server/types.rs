use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction_id: String,
    pub price: f64,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub features: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
