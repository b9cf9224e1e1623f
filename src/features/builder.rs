use super::{
    catalog,
    types::{FeatureSchema, FeatureVector, InputRecord, NUMERIC_COLUMNS},
};
use crate::{Error, Result};
use tracing::debug;

/// Reconciles `record` against `schema`.
///
/// The output has one value per schema column, in schema order. Columns the
/// record does not supply are zero-filled; record columns the schema does not
/// name are dropped.
pub fn build_vector(record: &InputRecord, schema: &FeatureSchema) -> Result<FeatureVector> {
    if schema.is_empty() {
        return Err(Error::construction("feature schema is empty"));
    }

    let mut zero_filled = 0usize;
    let values: Vec<f64> = schema
        .columns()
        .iter()
        .map(|column| match record.get(column) {
            Some(value) => value,
            None => {
                zero_filled += 1;
                0.0
            }
        })
        .collect();

    let dropped = record
        .columns()
        .filter(|column| !schema.contains(column))
        .count();

    debug!(
        "Built feature vector: {} columns, {} zero-filled, {} dropped",
        values.len(),
        zero_filled,
        dropped
    );

    Ok(FeatureVector::from(values))
}

/// Schema columns that neither the numeric inputs nor any exposed domain can
/// ever set. These are always zero-filled.
pub fn unmatched_columns(schema: &FeatureSchema) -> Vec<&str> {
    schema
        .columns()
        .iter()
        .map(String::as_str)
        .filter(|column| !NUMERIC_COLUMNS.contains(column) && catalog::domain_of(column).is_none())
        .collect()
}
