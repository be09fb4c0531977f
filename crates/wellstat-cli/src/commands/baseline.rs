use std::path::Path;
use wellstat_core::baseline::load_baseline;
use wellstat_core::baseline::rows::find_row;
use wellstat_core::baseline::schema::RowKind;
use wellstat_core::error::WellstatError;

pub fn validate(file: &Path) -> Result<(), WellstatError> {
    let data = load_baseline(file)?;

    println!("Baseline '{}' is valid.", file.display());
    println!("  Periods: {}", data.dates.len());
    for (collection, rows) in data.collections() {
        println!("  {collection}: {} rows", rows.len());
    }

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for (collection, rows) in data.collections().into_iter().take(2) {
        for kind in RowKind::ALL {
            if find_row(rows, kind).is_none() {
                warnings.push(format!(
                    "{collection} has no {} row; it will contribute 0",
                    kind_name(kind)
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    Ok(())
}

pub fn explain(file: &Path) -> Result<(), WellstatError> {
    let data = load_baseline(file)?;

    let dates = data.sorted_dates();
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => {
            println!("Periods: {} ({} to {})\n", dates.len(), first, last)
        }
        _ => println!("Periods: none\n"),
    }

    println!("Daily rates are read from these rows (PDP + PDSI, summed):\n");
    for (collection, rows) in data.collections().into_iter().take(2) {
        println!("  {collection}");
        for kind in RowKind::ALL {
            let label = find_row(rows, kind).map_or("-", |r| r.label.as_str());
            println!("    {:<10} {}", kind_name(kind), label);
        }
        println!();
    }

    println!("Monthly volumes are MBbl (oil) and MMcf (gas). Each period's value");
    println!("is converted with value * 1000 / days in that period's month.");
    println!("BOE = oil + gas / 6. Dates between periods use the nearest period.\n");

    Ok(())
}

fn kind_name(kind: RowKind) -> &'static str {
    match kind {
        RowKind::GrossOil => "gross oil",
        RowKind::GrossGas => "gross gas",
    }
}
