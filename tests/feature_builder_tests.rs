use car_price_rust::{
    Error,
    features::{CarInput, InputRecord, build_vector, catalog},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::test_utils::{bmw_input, scenario_schema, schema_of};

/// Every column any domain can produce, plus the numerics
fn full_schema_columns() -> Vec<String> {
    let mut columns: Vec<String> = car_price_rust::features::NUMERIC_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect();
    for domain in catalog::DOMAINS {
        columns.extend(domain.tags.iter().map(|t| t.to_string()));
    }
    columns
}

#[test]
fn test_reference_scenario() {
    let record = InputRecord::from_input(&bmw_input());
    let vector = build_vector(&record, &scenario_schema()).unwrap();

    assert_eq!(
        vector.into_inner(),
        vec![100.0, 136.0, 120.0, 50000.0, 5.0, 1.0, 0.0, 1.0, 1.0, 1.0]
    );
}

#[test]
fn test_unselected_brand_in_schema_is_zero() {
    let schema = schema_of(&["power_kw", "brand_lada", "brand_bmw"]);
    let record = InputRecord::from_input(&bmw_input());

    let vector = build_vector(&record, &schema).unwrap();
    assert_eq!(vector.as_slice(), &[100.0, 0.0, 1.0]);
}

#[test]
fn test_selected_brand_missing_from_schema_is_dropped() {
    let input = CarInput {
        brand: "brand_mazda".to_string(),
        ..bmw_input()
    };
    let schema = scenario_schema();
    let record = InputRecord::from_input(&input);
    assert_eq!(record.get("brand_mazda"), Some(1.0));

    let vector = build_vector(&record, &schema).unwrap();
    assert_eq!(vector.len(), schema.len());
    // Neither brand column of the schema is active
    assert_eq!(&vector.as_slice()[5..7], &[0.0, 0.0]);
}

#[test]
fn test_unknown_columns_are_zero_filled() {
    let schema = schema_of(&["seats", "power_kw", "brand_tesla", "color_pink"]);
    let record = InputRecord::from_input(&bmw_input());

    let vector = build_vector(&record, &schema).unwrap();
    assert_eq!(vector.as_slice(), &[0.0, 100.0, 0.0, 0.0]);
}

#[test]
fn test_schema_order_is_authoritative() {
    let schema = schema_of(&["car_age_years", "fuel_type_Diesel", "power_kw"]);
    let record = InputRecord::from_input(&bmw_input());

    let vector = build_vector(&record, &schema).unwrap();
    assert_eq!(vector.as_slice(), &[5.0, 1.0, 100.0]);
}

#[test]
fn test_empty_schema_fails() {
    let record = InputRecord::from_input(&bmw_input());
    let err = build_vector(&record, &schema_of(&[])).unwrap_err();
    assert!(matches!(err, Error::Construction(_)));
}

#[test]
fn test_build_is_idempotent() {
    let schema = scenario_schema();
    let input = bmw_input();

    let first = build_vector(&InputRecord::from_input(&input), &schema).unwrap();
    let second = build_vector(&InputRecord::from_input(&input), &schema).unwrap();

    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(first.as_slice()), bits(second.as_slice()));
}

#[test]
fn test_record_covers_all_domain_tags() {
    let record = InputRecord::from_input(&bmw_input());
    let expected = 5 + catalog::DOMAINS.iter().map(|d| d.tags.len()).sum::<usize>();
    assert_eq!(record.len(), expected);
}

#[rstest]
#[case("brand_alfa-romeo", "color_yellow", "transmission_type_Unknown", "fuel_type_Other")]
#[case("brand_land-rover", "color_grey", "transmission_type_Manual", "fuel_type_LPG")]
#[case("brand_mazda", "color_black", "transmission_type_Semi-automatic", "fuel_type_CNG")]
#[case("brand_bmw", "color_white", "transmission_type_Automatic", "fuel_type_Hydrogen")]
fn test_exactly_one_indicator_per_domain(
    #[case] brand: &str,
    #[case] color: &str,
    #[case] transmission: &str,
    #[case] fuel_type: &str,
) {
    let columns = full_schema_columns();
    let schema = car_price_rust::features::FeatureSchema::new(columns.clone()).unwrap();
    let input = CarInput {
        brand: brand.to_string(),
        color: color.to_string(),
        transmission: transmission.to_string(),
        fuel_type: fuel_type.to_string(),
        ..bmw_input()
    };
    input.validate().unwrap();

    let vector = build_vector(&InputRecord::from_input(&input), &schema).unwrap();
    assert_eq!(vector.len(), schema.len());

    for domain in catalog::DOMAINS {
        let active: Vec<&str> = columns
            .iter()
            .zip(vector.as_slice())
            .filter(|(column, _)| domain.contains(column))
            .filter(|(_, value)| **value == 1.0)
            .map(|(column, _)| column.as_str())
            .collect();
        let zeros = columns
            .iter()
            .zip(vector.as_slice())
            .filter(|(column, value)| domain.contains(column) && **value == 0.0)
            .count();

        assert_eq!(active, vec![input.selection(domain).unwrap()]);
        assert_eq!(zeros, domain.tags.len() - 1);
    }
}

#[rstest]
#[case::negative_power(CarInput { power_kw: -1.0, ..bmw_input() })]
#[case::nan_mileage(CarInput { mileage_in_km: f64::NAN, ..bmw_input() })]
#[case::infinite_ps(CarInput { power_ps: f64::INFINITY, ..bmw_input() })]
#[case::unknown_brand(CarInput { brand: "brand_tesla".to_string(), ..bmw_input() })]
#[case::color_in_brand_slot(CarInput { brand: "color_black".to_string(), ..bmw_input() })]
fn test_invalid_input_rejected(#[case] input: CarInput) {
    assert!(matches!(input.validate(), Err(Error::InvalidInput(_))));
}

#[test]
fn test_zero_values_are_valid() {
    let input = CarInput::default();
    assert!(input.validate().is_ok());
}

#[test]
fn test_duplicate_schema_columns_rejected() {
    let result = car_price_rust::features::FeatureSchema::new(vec![
        "power_kw".to_string(),
        "power_kw".to_string(),
    ]);
    assert!(matches!(result, Err(Error::Artifact(_))));
}
