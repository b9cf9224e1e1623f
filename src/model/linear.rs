use super::{Regressor, check_input};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(Error::artifact("linear model has no coefficients"));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::artifact("linear model has non-finite parameters"));
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        check_input(self.n_features(), features)?;
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_predict() {
        let model = LinearModel {
            intercept: 1000.0,
            coefficients: vec![10.0, -2.0],
        };
        assert_eq!(model.predict(&[5.0, 25.0]).unwrap(), 1000.0);
    }

    #[test]
    fn test_linear_rejects_wrong_length() {
        let model = LinearModel {
            intercept: 0.0,
            coefficients: vec![1.0, 1.0],
        };
        let err = model.predict(&[1.0]).unwrap_err();
        assert!(matches!(err, Error::Prediction(_)));
    }
}
