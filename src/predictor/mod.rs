mod currency;

pub use currency::format_euro;

use crate::{
    Error, Result,
    features::{CarInput, FeatureSchema, InputRecord, build_vector, unmatched_columns},
    model::Regressor,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Loaded model and schema, read-only for the life of the process.
#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn Regressor>,
    schema: Arc<FeatureSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub price: f64,
}

impl Prediction {
    pub fn formatted(&self) -> String {
        format_euro(self.price)
    }
}

impl Predictor {
    /// Fails when the model and schema disagree on the vector width.
    pub fn new(model: Arc<dyn Regressor>, schema: FeatureSchema) -> Result<Self> {
        if schema.is_empty() {
            return Err(Error::artifact("feature schema is empty"));
        }
        if model.n_features() != schema.len() {
            return Err(Error::artifact(format!(
                "model expects {} features but schema lists {} columns",
                model.n_features(),
                schema.len()
            )));
        }

        let unmatched = unmatched_columns(&schema);
        if !unmatched.is_empty() {
            warn!(
                "{} schema columns are not exposed by the form and will always be 0: {}",
                unmatched.len(),
                unmatched.join(", ")
            );
        }

        info!("Predictor ready with {} features", schema.len());

        Ok(Self {
            model,
            schema: Arc::new(schema),
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn predict(&self, input: &CarInput) -> Result<Prediction> {
        input.validate()?;

        let record = InputRecord::from_input(input);
        let vector = build_vector(&record, &self.schema)?;
        let price = self.model.predict(vector.as_slice())?;

        if !price.is_finite() {
            return Err(Error::prediction("model returned a non-finite price"));
        }

        debug!("Predicted price {} for {}", price, input.brand);
        Ok(Prediction { price })
    }
}
