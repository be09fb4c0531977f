use serde::Serialize;
use std::path::{Path, PathBuf};
use wellstat_core::error::WellstatError;
use wellstat_core::model::{load_collection, MeterReading, RunTicket, TankGauging, Well};

use crate::output;

pub fn gas(
    readings_file: PathBuf,
    wells_file: PathBuf,
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), WellstatError> {
    let wells: Vec<Well> = load_collection(&wells_file, "wells")?;
    let readings: Vec<MeterReading> = load_collection(&readings_file, "meterReadings")?;
    let series = wellstat_core::gas_rate_series(&wells, &readings);

    emit(&series, output_format, out.as_deref(), || {
        output::table::print_gas(&series)
    })
}

pub fn oil(
    gaugings_file: PathBuf,
    wells_file: PathBuf,
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), WellstatError> {
    let wells: Vec<Well> = load_collection(&wells_file, "wells")?;
    let gaugings: Vec<TankGauging> = load_collection(&gaugings_file, "tankGaugings")?;
    let series = wellstat_core::oil_inventory_series(&wells, &gaugings);

    emit(&series, output_format, out.as_deref(), || {
        output::table::print_oil(&series)
    })
}

pub fn tickets(
    tickets_file: PathBuf,
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), WellstatError> {
    let tickets: Vec<RunTicket> = load_collection(&tickets_file, "runTickets")?;
    let series = wellstat_core::run_ticket_series(&tickets);

    emit(&series, output_format, out.as_deref(), || {
        output::table::print_tickets(&series)
    })
}

/// Print a series, or write it as JSON when an output file is given.
fn emit<T: Serialize>(
    series: &[T],
    output_format: &str,
    out: Option<&Path>,
    print_table: impl FnOnce(),
) -> Result<(), WellstatError> {
    match out {
        Some(path) => {
            // Always write JSON when saving to file
            output::json::write(series, path)?;
            eprintln!("{} day(s) written to {}", series.len(), path.display());
        }
        None => match output_format {
            "json" => output::json::print(series)?,
            _ => print_table(),
        },
    }
    Ok(())
}
