use std::path::PathBuf;
use wellstat_core::baseline::load_baseline;
use wellstat_core::error::WellstatError;

use crate::output;

pub fn run(
    baseline_file: PathBuf,
    dates: &[String],
    output_format: &str,
    verbose: bool,
) -> Result<(), WellstatError> {
    let data = load_baseline(&baseline_file)?;

    if verbose {
        let traces = wellstat_core::explain_baseline_rates(&data, dates);
        return match output_format {
            "json" => output::json::print(&traces),
            _ => {
                output::table::print_traces(&traces);
                Ok(())
            }
        };
    }

    let rates = wellstat_core::baseline_rates(&data, dates);

    match output_format {
        "json" => output::json::print(&rates)?,
        _ => output::table::print_rates(&rates),
    }

    Ok(())
}
