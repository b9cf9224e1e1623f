use super::catalog::{self, CategoricalDomain};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const POWER_KW: &str = "power_kw";
pub const POWER_PS: &str = "power_ps";
pub const FUEL_CONSUMPTION: &str = "fuel_consumption_g_km";
pub const MILEAGE: &str = "mileage_in_km";
pub const CAR_AGE: &str = "car_age_years";

pub const NUMERIC_COLUMNS: [&str; 5] = [POWER_KW, POWER_PS, FUEL_CONSUMPTION, MILEAGE, CAR_AGE];

/// One user submission: five numeric fields and one tag per categorical domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarInput {
    pub power_kw: f64,
    pub power_ps: f64,
    #[serde(alias = "fuel_consumption")]
    pub fuel_consumption_g_km: f64,
    pub mileage_in_km: f64,
    #[serde(alias = "car_age")]
    pub car_age_years: u32,
    pub brand: String,
    pub color: String,
    pub transmission: String,
    pub fuel_type: String,
}

impl Default for CarInput {
    fn default() -> Self {
        Self {
            power_kw: 0.0,
            power_ps: 0.0,
            fuel_consumption_g_km: 0.0,
            mileage_in_km: 0.0,
            car_age_years: 0,
            brand: catalog::BRAND.default_tag().to_string(),
            color: catalog::COLOR.default_tag().to_string(),
            transmission: catalog::TRANSMISSION.default_tag().to_string(),
            fuel_type: catalog::FUEL_TYPE.default_tag().to_string(),
        }
    }
}

impl CarInput {
    pub fn numeric_values(&self) -> [(&'static str, f64); 5] {
        [
            (POWER_KW, self.power_kw),
            (POWER_PS, self.power_ps),
            (FUEL_CONSUMPTION, self.fuel_consumption_g_km),
            (MILEAGE, self.mileage_in_km),
            (CAR_AGE, f64::from(self.car_age_years)),
        ]
    }

    pub fn selections(&self) -> [(&'static CategoricalDomain, &str); 4] {
        [
            (&catalog::BRAND, self.brand.as_str()),
            (&catalog::COLOR, self.color.as_str()),
            (&catalog::TRANSMISSION, self.transmission.as_str()),
            (&catalog::FUEL_TYPE, self.fuel_type.as_str()),
        ]
    }

    pub fn selection(&self, domain: &CategoricalDomain) -> Option<&str> {
        self.selections()
            .into_iter()
            .find(|(d, _)| d.name == domain.name)
            .map(|(_, tag)| tag)
    }

    /// Numbers must be finite and non-negative; every selection must belong to its domain.
    pub fn validate(&self) -> Result<()> {
        for (column, value) in self.numeric_values() {
            if !value.is_finite() {
                return Err(Error::invalid_input(format!("{} must be a number", column)));
            }
            if value < 0.0 {
                return Err(Error::invalid_input(format!(
                    "{} must be non-negative, got {}",
                    column, value
                )));
            }
        }

        for (domain, tag) in self.selections() {
            if !domain.contains(tag) {
                return Err(Error::invalid_input(format!(
                    "unknown {} '{}'",
                    domain.name, tag
                )));
            }
        }

        Ok(())
    }
}

/// Named column values assembled for a single prediction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRecord {
    values: HashMap<String, f64>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five numerics plus every indicator column of every domain.
    pub fn from_input(input: &CarInput) -> Self {
        let mut record = Self::new();

        for (column, value) in input.numeric_values() {
            record.insert(column, value);
        }

        for (domain, selected) in input.selections() {
            for (column, value) in domain.one_hot(selected) {
                record.insert(column, value);
            }
        }

        record
    }

    pub fn insert(&mut self, column: impl Into<String>, value: f64) {
        self.values.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Ordered column names the model was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Rejects duplicate column names. An empty schema is representable but
    /// cannot be used to build a vector.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(Error::artifact(format!(
                    "duplicate column '{}' in feature schema",
                    column
                )));
            }
        }
        Ok(Self { columns })
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let columns: Vec<String> = serde_json::from_slice(bytes)?;
        Self::new(columns)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// Model input in schema order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
