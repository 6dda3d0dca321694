// Loading of scenario and pricing files

use std::fs;
use std::path::Path;

use crate::app::AppError;
use crate::models::CalculationRequest;
use crate::pricing::PricingTable;

/// Reads a pricing table from TOML, or returns the built-in table
pub fn load_pricing(path: Option<&Path>) -> Result<PricingTable, AppError> {
    match path {
        Some(path) => {
            log::info!("reading pricing table from {}", path.display());
            let source = fs::read_to_string(path)?;
            Ok(PricingTable::from_toml_str(&source)?)
        }
        None => Ok(PricingTable::default()),
    }
}

/// Reads a single calculation request from a JSON file
pub fn load_request(path: &Path) -> Result<CalculationRequest, AppError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

/// Reads a JSON array of calculation requests
pub fn load_requests(path: &Path) -> Result<Vec<CalculationRequest>, AppError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_default_pricing() {
        let table = load_pricing(None).unwrap();
        assert_eq!(table, PricingTable::default());
    }

    #[test]
    fn test_load_request_file() {
        let path = env::temp_dir().join("fare_advisor_scenario_test.json");
        fs::write(
            &path,
            r#"{
                "profile": { "age_bracket": "senior", "travel_class": "first" },
                "pattern": { "direct": { "annual_spend": 4200 } },
                "allow_reload": false
            }"#,
        )
        .unwrap();

        let request = load_request(&path).unwrap();
        assert!(!request.allow_reload);
        assert!(request.pattern.routes().is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = env::temp_dir().join("fare_advisor_missing_scenario.json");
        assert!(matches!(
            load_request(&path),
            Err(AppError::StdIoError { .. })
        ));
    }
}
