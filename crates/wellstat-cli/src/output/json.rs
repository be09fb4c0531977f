use serde::Serialize;
use std::path::Path;
use wellstat_core::error::WellstatError;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), WellstatError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Write pretty JSON to `path`.
pub fn write<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), WellstatError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
