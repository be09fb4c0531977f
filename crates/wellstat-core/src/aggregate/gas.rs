use super::outcome::GasRatePoint;
use super::{
    fill_forward, observation_day, record_latest, resolve_well, settle, well_index, Stamped,
};
use crate::model::{MeterReading, Observation, Well};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// The two gas meter series tracked per well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GasSeries {
    GasRate,
    InstantGasRate,
}

impl GasSeries {
    pub const ALL: [GasSeries; 2] = [GasSeries::GasRate, GasSeries::InstantGasRate];

    /// Match a reading's `meterType`, ignoring case and surrounding space.
    pub fn from_meter_type(meter_type: &str) -> Option<GasSeries> {
        let meter_type = meter_type.trim();
        if meter_type.eq_ignore_ascii_case("gas rate") {
            Some(GasSeries::GasRate)
        } else if meter_type.eq_ignore_ascii_case("instant gas rate") {
            Some(GasSeries::InstantGasRate)
        } else {
            None
        }
    }
}

/// Daily field-wide gas rate and instant gas rate.
///
/// Within a day the latest reading per well and series wins. Wells with no
/// reading on a day contribute their last known value.
pub fn gas_rate_series(wells: &[Well], readings: &[MeterReading]) -> Vec<GasRatePoint> {
    let index = well_index(wells);
    let mut days: BTreeMap<NaiveDate, BTreeMap<(usize, GasSeries), Stamped>> = BTreeMap::new();

    for reading in readings {
        let Some(day) = observation_day(reading, &reading.id) else {
            continue;
        };
        let bucket = days.entry(day).or_default();

        let Some(series) = reading
            .meter_type
            .as_deref()
            .and_then(GasSeries::from_meter_type)
        else {
            continue;
        };
        let Some(well) = resolve_well(&index, &reading.well_id) else {
            continue;
        };

        record_latest(bucket, (well, series), reading.value, reading.observed_at());
    }

    let keys: Vec<(usize, GasSeries)> = (0..wells.len())
        .flat_map(|well| GasSeries::ALL.map(|series| (well, series)))
        .collect();

    fill_forward(&settle(days), &keys)
        .into_iter()
        .map(|(date, values)| {
            let total = |wanted: GasSeries| -> f64 {
                keys.iter()
                    .zip(&values)
                    .filter(|((_, series), _)| *series == wanted)
                    .map(|(_, v)| v)
                    .sum()
            };
            GasRatePoint {
                date,
                total_gas_rate: total(GasSeries::GasRate),
                total_instant_gas_rate: total(GasSeries::InstantGasRate),
            }
        })
        .collect()
}
