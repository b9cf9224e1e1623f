use car_price_rust::{Error, Result, model::Regressor};
use std::sync::{Arc, Mutex};

/// Mock regressor that records every vector it is asked to evaluate
#[derive(Debug, Clone)]
pub struct MockRegressor {
    pub n_features: usize,
    pub price: f64,
    pub error: Option<String>,
    pub calls: Arc<Mutex<Vec<Vec<f64>>>>,
}

impl MockRegressor {
    pub fn new(n_features: usize, price: f64) -> Self {
        Self {
            n_features,
            price,
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_calls(&self) -> Vec<Vec<f64>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Regressor for MockRegressor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        self.calls.lock().unwrap().push(features.to_vec());

        if let Some(error) = &self.error {
            return Err(Error::prediction(error.clone()));
        }

        Ok(self.price)
    }
}
