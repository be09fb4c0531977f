//! Day-bucketed production series for charting.
//!
//! Every variant follows the same shape: bucket observations by calendar
//! day, collapse competing observations within a day, carry each well's
//! last known value forward over days it has no observation, and total
//! across wells. Only days that occur in the input produce output rows.

pub mod gas;
pub mod oil;
pub mod outcome;
pub mod tickets;

pub use gas::gas_rate_series;
pub use oil::oil_inventory_series;
pub use outcome::{GasRatePoint, OilInventoryPoint, RunTicketPoint};
pub use tickets::run_ticket_series;

use crate::model::{Observation, Well};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Observed values per calendar day, keyed by series.
pub(crate) type DayBuckets<K> = BTreeMap<NaiveDate, BTreeMap<K, f64>>;

/// A value with the instant it was observed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stamped {
    pub value: f64,
    pub at: Option<DateTime<Utc>>,
}

/// Keep the latest observation for `key`.
///
/// An equal or newer instant replaces the current value, and so does any
/// observation when the current value is 0.
pub(crate) fn record_latest<K: Ord>(
    bucket: &mut BTreeMap<K, Stamped>,
    key: K,
    value: f64,
    at: Option<DateTime<Utc>>,
) {
    match bucket.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(Stamped { value, at });
        }
        Entry::Occupied(mut slot) => {
            let current = slot.get_mut();
            if current.value == 0.0 || at >= current.at {
                *current = Stamped { value, at };
            }
        }
    }
}

/// Drop timestamps once a day's bucket is settled.
pub(crate) fn settle<K: Ord>(
    days: BTreeMap<NaiveDate, BTreeMap<K, Stamped>>,
) -> DayBuckets<K> {
    days.into_iter()
        .map(|(day, bucket)| {
            let values: BTreeMap<K, f64> =
                bucket.into_iter().map(|(k, s)| (k, s.value)).collect();
            (day, values)
        })
        .collect()
}

/// Carry each series' last observed value across ascending days.
///
/// Returns one row per day in `days`, with values aligned to `series`.
/// Series never observed so far read as 0.
pub(crate) fn fill_forward<K: Ord>(
    days: &DayBuckets<K>,
    series: &[K],
) -> Vec<(NaiveDate, Vec<f64>)> {
    days.iter()
        .scan(vec![0.0; series.len()], |last, (day, observed)| {
            for (value, key) in last.iter_mut().zip(series) {
                if let Some(v) = observed.get(key) {
                    *value = *v;
                }
            }
            Some((*day, last.clone()))
        })
        .collect()
}

/// Position of each well in the caller's list, by id.
pub(crate) fn well_index(wells: &[Well]) -> HashMap<&str, usize> {
    wells
        .iter()
        .enumerate()
        .map(|(i, w)| (w.id.as_str(), i))
        .collect()
}

/// Calendar day of an observation, logging the ones that have none.
pub(crate) fn observation_day<O: Observation>(observation: &O, id: &str) -> Option<NaiveDate> {
    let day = observation.day();
    if day.is_none() {
        warn!(id, "skipping observation without timestamp, createdAt or date");
    }
    day
}

/// Look up a reading's well, logging readings for wells outside the list.
pub(crate) fn resolve_well(index: &HashMap<&str, usize>, well_id: &str) -> Option<usize> {
    let idx = index.get(well_id).copied();
    if idx.is_none() {
        debug!(well_id, "ignoring reading for a well that was not supplied");
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_record_latest_newer_wins() {
        let mut bucket = BTreeMap::new();
        let early = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).single();
        let late = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).single();
        record_latest(&mut bucket, "a", 7.0, late);
        record_latest(&mut bucket, "a", 3.0, early);
        assert_eq!(bucket["a"].value, 7.0);
        record_latest(&mut bucket, "a", 9.0, late);
        assert_eq!(bucket["a"].value, 9.0);
    }

    #[test]
    fn test_record_latest_zero_is_overwritten() {
        let mut bucket = BTreeMap::new();
        let late = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).single();
        record_latest(&mut bucket, "a", 0.0, late);
        record_latest(&mut bucket, "a", 4.0, None);
        assert_eq!(bucket["a"].value, 4.0);
    }

    #[test]
    fn test_fill_forward_carries_values() {
        let mut days: DayBuckets<&str> = BTreeMap::new();
        days.insert(day(1), BTreeMap::from([("a", 5.0)]));
        days.insert(day(2), BTreeMap::from([("b", 2.0)]));
        days.insert(day(4), BTreeMap::from([("a", 6.0)]));

        let filled = fill_forward(&days, &["a", "b"]);
        assert_eq!(
            filled,
            vec![
                (day(1), vec![5.0, 0.0]),
                (day(2), vec![5.0, 2.0]),
                (day(4), vec![6.0, 2.0]),
            ]
        );
    }

    #[test]
    fn test_fill_forward_empty() {
        let days: DayBuckets<&str> = BTreeMap::new();
        assert!(fill_forward(&days, &["a"]).is_empty());
    }
}
