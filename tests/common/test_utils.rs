use car_price_rust::{
    config::{ArtifactSource, ArtifactsConfig},
    features::{CarInput, FeatureSchema},
};
use serde_json::json;
use tempfile::TempDir;

/// Schema used by the reference scenario
pub const SCENARIO_COLUMNS: [&str; 10] = [
    "power_kw",
    "power_ps",
    "fuel_consumption_g_km",
    "mileage_in_km",
    "car_age_years",
    "brand_bmw",
    "brand_audi",
    "color_black",
    "transmission_type_Automatic",
    "fuel_type_Diesel",
];

pub fn schema_of(columns: &[&str]) -> FeatureSchema {
    FeatureSchema::new(columns.iter().map(|c| c.to_string()).collect()).unwrap()
}

pub fn scenario_schema() -> FeatureSchema {
    schema_of(&SCENARIO_COLUMNS)
}

/// The reference BMW submission
pub fn bmw_input() -> CarInput {
    CarInput {
        power_kw: 100.0,
        power_ps: 136.0,
        fuel_consumption_g_km: 120.0,
        mileage_in_km: 50000.0,
        car_age_years: 5,
        brand: "brand_bmw".to_string(),
        color: "color_black".to_string(),
        transmission: "transmission_type_Automatic".to_string(),
        fuel_type: "fuel_type_Diesel".to_string(),
    }
}

/// Linear model over the scenario schema:
/// 10000 + 50*power_kw - 0.125*mileage - 500*age + 5000*brand_bmw
pub fn scenario_model_json() -> serde_json::Value {
    json!({
        "type": "linear",
        "intercept": 10000.0,
        "coefficients": [50.0, 0.0, 0.0, -0.125, -500.0, 5000.0, 0.0, 0.0, 0.0, 0.0]
    })
}

/// Price `scenario_model_json` gives for `bmw_input`
pub const SCENARIO_PRICE: f64 = 10000.0 + 5000.0 - 6250.0 - 2500.0 + 5000.0;

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write model and feature artifacts into `dir` and point a config at them
pub fn write_artifacts(
    dir: &TempDir,
    model: &serde_json::Value,
    columns: &[&str],
) -> ArtifactsConfig {
    let model_path = dir.path().join("model.json");
    let features_path = dir.path().join("features.json");

    std::fs::write(&model_path, model.to_string()).unwrap();
    std::fs::write(&features_path, json!(columns).to_string()).unwrap();

    ArtifactsConfig {
        model: ArtifactSource::local(model_path.to_string_lossy()),
        features: ArtifactSource::local(features_path.to_string_lossy()),
    }
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"
artifacts:
  model:
    path: "data/final_model.json"
    url: "https://models.example.com/final_model.json"
    sha256: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
  features:
    path: "data/final_model_features.json"
"#;
