use crate::baseline::dates;
use crate::baseline::rows::find_row;
use crate::baseline::schema::{BaselineAssumptionRow, BaselineStructuredData, RowKind};
use crate::rates::outcome::{DailyRates, RateKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

/// Mcf of gas per barrel of oil equivalent.
pub const MCF_PER_BOE: f64 = 6.0;

/// Monthly volumes are in thousands (MBbl, MMcf); daily rates are in units.
const MONTHLY_UNIT_SCALE: u32 = 1000;

/// Derive a daily rate from the baseline for `date`.
///
/// Returns `None` only when `data` is absent. Missing rows or values
/// yield `Some(0.0)`.
pub fn daily_rate(
    data: Option<&BaselineStructuredData>,
    date: &str,
    kind: RateKind,
) -> Option<f64> {
    let data = data?;
    match kind.row_kind() {
        Some(row_kind) => Some(volume_rate(data, date, row_kind).daily_rate),
        None => {
            let oil = daily_rate(Some(data), date, RateKind::Oil)?;
            let gas = daily_rate(Some(data), date, RateKind::Gas)?;
            Some(boe(oil, gas))
        }
    }
}

/// Barrels of oil equivalent from oil (Bbl) and gas (Mcf).
pub fn boe(oil: f64, gas: f64) -> f64 {
    oil + gas / MCF_PER_BOE
}

/// Derive oil, gas and BOE rates for each date.
///
/// Empty when `data` is absent.
pub fn rates_for_dates<S: AsRef<str>>(
    data: Option<&BaselineStructuredData>,
    dates: &[S],
) -> Vec<DailyRates> {
    if data.is_none() {
        return Vec::new();
    }

    dates
        .iter()
        .map(|date| {
            let date = date.as_ref();
            DailyRates {
                date: date.to_string(),
                oil_rate: daily_rate(data, date, RateKind::Oil).unwrap_or(0.0),
                gas_rate: daily_rate(data, date, RateKind::Gas).unwrap_or(0.0),
                boe: daily_rate(data, date, RateKind::Boe).unwrap_or(0.0),
            }
        })
        .collect()
}

/// Intermediate results of one oil or gas rate derivation.
#[derive(Debug, Clone)]
pub(crate) struct VolumeRate<'a> {
    pub resolved_date: Option<&'a str>,
    pub pdp_row: Option<&'a BaselineAssumptionRow>,
    pub pdsi_row: Option<&'a BaselineAssumptionRow>,
    pub monthly: Decimal,
    /// `None` when the monthly value was zero and no conversion happened.
    pub days_in_month: Option<u32>,
    pub daily_rate: f64,
}

pub(crate) fn volume_rate<'a>(
    data: &'a BaselineStructuredData,
    date: &str,
    kind: RowKind,
) -> VolumeRate<'a> {
    let resolved_date = dates::resolve_date(&data.dates, date);
    let pdp_row = find_row(&data.pdp_assumptions, kind);
    let pdsi_row = find_row(&data.pdsi_assumptions, kind);

    if pdp_row.is_none() && pdsi_row.is_none() {
        debug!(?kind, "no baseline row found in PDP or PDSI assumptions");
    }

    let monthly = match resolved_date {
        Some(key) => value_at(pdp_row, key).saturating_add(value_at(pdsi_row, key)),
        None => Decimal::ZERO,
    };

    let mut rate = VolumeRate {
        resolved_date,
        pdp_row,
        pdsi_row,
        monthly,
        days_in_month: None,
        daily_rate: 0.0,
    };

    // A zero month never reaches the calendar, so bad keys cannot matter.
    if monthly.is_zero() {
        return rate;
    }

    let days = dates::days_in_month(resolved_date.unwrap_or_default());
    rate.days_in_month = Some(days);
    rate.daily_rate = monthly_to_daily(monthly, days);
    rate
}

fn value_at(row: Option<&BaselineAssumptionRow>, date: &str) -> Decimal {
    row.and_then(|r| r.value_at(date)).unwrap_or(Decimal::ZERO)
}

/// `monthly * 1000 / days`, in exact decimal arithmetic where it fits.
fn monthly_to_daily(monthly: Decimal, days: u32) -> f64 {
    monthly
        .checked_mul(Decimal::from(MONTHLY_UNIT_SCALE))
        .and_then(|scaled| scaled.checked_div(Decimal::from(days)))
        .and_then(|daily| daily.to_f64())
        .unwrap_or_else(|| {
            monthly.to_f64().unwrap_or(0.0) * f64::from(MONTHLY_UNIT_SCALE) / f64::from(days)
        })
}
