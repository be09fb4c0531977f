pub mod dates;
pub mod rows;
pub mod schema;

use crate::error::WellstatError;
use schema::BaselineStructuredData;
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// Load a baseline dataset from a JSON file.
pub fn load_baseline(path: &Path) -> Result<BaselineStructuredData, WellstatError> {
    let content = std::fs::read_to_string(path).map_err(|e| WellstatError::BaselineLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_baseline(&content, path)
}

/// Parse a baseline dataset from a JSON string.
pub fn parse_baseline(json: &str, source: &Path) -> Result<BaselineStructuredData, WellstatError> {
    let data: BaselineStructuredData =
        serde_json::from_str(json).map_err(|e| WellstatError::BaselineLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    import(data)
}

/// Parse a baseline dataset from a JSON string (no file path context).
pub fn parse_baseline_str(json: &str) -> Result<BaselineStructuredData, WellstatError> {
    let data: BaselineStructuredData = serde_json::from_str(json).map_err(WellstatError::Json)?;
    import(data)
}

/// Validate, then tag production rows so rate lookups skip label matching.
fn import(mut data: BaselineStructuredData) -> Result<BaselineStructuredData, WellstatError> {
    validate_baseline(&data)?;
    rows::tag_rows(&mut data.pdp_assumptions);
    rows::tag_rows(&mut data.pdsi_assumptions);
    Ok(data)
}

/// Validate that a baseline dataset is well-formed.
///
/// Every row may only carry values for listed periods. Period keys that
/// do not parse as dates are allowed (exact lookups still work) but logged.
pub fn validate_baseline(data: &BaselineStructuredData) -> Result<(), WellstatError> {
    let known: HashSet<&str> = data.dates.iter().map(String::as_str).collect();

    if known.len() != data.dates.len() {
        return Err(WellstatError::BaselineInvalid(
            "dates must not contain duplicates".into(),
        ));
    }

    for date in &data.dates {
        if dates::parse_date(date).is_none() {
            warn!(date = %date, "baseline period is not a recognizable date");
        }
    }

    for (collection, rows) in data.collections() {
        for row in rows {
            if row.label.trim().is_empty() {
                return Err(WellstatError::BaselineInvalid(format!(
                    "{collection} contains a row with an empty label"
                )));
            }

            if let Some(unknown) = row.values.keys().find(|d| !known.contains(d.as_str())) {
                return Err(WellstatError::BaselineInvalid(format!(
                    "{collection} row '{}' has a value for '{}', which is not in dates",
                    row.label, unknown
                )));
            }
        }
    }

    Ok(())
}
