use wellstat_core::aggregate::{GasRatePoint, OilInventoryPoint, RunTicketPoint};
use wellstat_core::rates::DailyRates;
use wellstat_core::trace::RateTrace;

pub fn print_rates(rates: &[DailyRates]) {
    if rates.is_empty() {
        println!("No dates to report.");
        return;
    }

    let width = rates.iter().map(|r| r.date.len()).max().unwrap_or(10).max(4);
    println!(
        "  {:<width$}  {:>12}  {:>12}  {:>12}",
        "Date", "Oil Bbl/d", "Gas Mcf/d", "BOE/d"
    );
    println!("  {}", "-".repeat(width + 42));
    for r in rates {
        println!(
            "  {:<width$}  {:>12.2}  {:>12.2}  {:>12.2}",
            r.date, r.oil_rate, r.gas_rate, r.boe
        );
    }
}

pub fn print_traces(traces: &[RateTrace]) {
    for t in traces {
        let resolved = match t.resolved_date.as_deref() {
            Some(d) if d != t.query_date => format!(" (period {d})"),
            _ => String::new(),
        };
        println!(
            "=== {} {}{}: {:.2} {} ===",
            t.query_date,
            t.kind,
            resolved,
            t.daily_rate,
            t.kind.unit()
        );
        for step in &t.steps {
            println!("    {}", step.message);
        }
        println!();
    }
}

pub fn print_gas(series: &[GasRatePoint]) {
    if series.is_empty() {
        println!("No gas readings.");
        return;
    }

    println!("  {:<10}  {:>14}  {:>18}", "Date", "Gas Rate", "Instant Gas Rate");
    println!("  {}", "-".repeat(46));
    for p in series {
        println!(
            "  {:<10}  {:>14.2}  {:>18.2}",
            p.date.to_string(),
            p.total_gas_rate,
            p.total_instant_gas_rate
        );
    }
}

pub fn print_oil(series: &[OilInventoryPoint]) {
    if series.is_empty() {
        println!("No tank gaugings.");
        return;
    }

    println!("  {:<10}  {:>14}", "Date", "Oil (Bbl)");
    println!("  {}", "-".repeat(26));
    for p in series {
        println!("  {:<10}  {:>14.2}", p.date.to_string(), p.total);
    }
}

pub fn print_tickets(series: &[RunTicketPoint]) {
    if series.is_empty() {
        println!("No run tickets.");
        return;
    }

    println!("  {:<10}  {:>12}  {:>14}", "Date", "Daily Bbl", "Cumulative");
    println!("  {}", "-".repeat(40));
    for p in series {
        println!(
            "  {:<10}  {:>12.2}  {:>14.2}",
            p.date.to_string(),
            p.daily,
            p.cumulative
        );
    }
}
