pub mod aggregate;
pub mod baseline;
pub mod error;
pub mod model;
pub mod rates;
pub mod trace;

use baseline::schema::BaselineStructuredData;
use rates::DailyRates;
use trace::RateTrace;

pub use aggregate::{gas_rate_series, oil_inventory_series, run_ticket_series};
pub use rates::{daily_rate, rates_for_dates, RateKind};

/// Main API entry point for baseline charts: daily rates for each date.
///
/// With no dates given, every period in the baseline is used, in ascending
/// calendar order.
pub fn baseline_rates(data: &BaselineStructuredData, dates: &[String]) -> Vec<DailyRates> {
    if dates.is_empty() {
        rates_for_dates(Some(data), &data.sorted_dates())
    } else {
        rates_for_dates(Some(data), dates)
    }
}

/// Explain oil, gas and BOE derivation for each date, in the same order as
/// [`baseline_rates`].
pub fn explain_baseline_rates(data: &BaselineStructuredData, dates: &[String]) -> Vec<RateTrace> {
    let dates = if dates.is_empty() {
        data.sorted_dates()
    } else {
        dates.to_vec()
    };

    dates
        .iter()
        .flat_map(|date| {
            [RateKind::Oil, RateKind::Gas, RateKind::Boe]
                .into_iter()
                .filter_map(move |kind| trace::explain_rate(Some(data), date, kind))
        })
        .collect()
}
