use super::outcome::OilInventoryPoint;
use super::{fill_forward, observation_day, resolve_well, well_index, DayBuckets};
use crate::model::{TankGauging, Well};
use std::fmt;

/// The tanks tracked on every well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tank {
    One,
    Two,
    Three,
}

impl Tank {
    pub const ALL: [Tank; 3] = [Tank::One, Tank::Two, Tank::Three];

    /// Parse a gauging's `tankNumber`: "Tank 2", "tank 2" or "2".
    pub fn from_label(label: &str) -> Option<Tank> {
        let label = label.trim();
        let number = match label.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("tank") => label[4..].trim(),
            _ => label,
        };
        match number {
            "1" => Some(Tank::One),
            "2" => Some(Tank::Two),
            "3" => Some(Tank::Three),
            _ => None,
        }
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tank::One => write!(f, "Tank 1"),
            Tank::Two => write!(f, "Tank 2"),
            Tank::Three => write!(f, "Tank 3"),
        }
    }
}

/// Daily field-wide oil inventory in barrels.
///
/// Gauge levels are converted with each well's tank factor. Within a day
/// the highest reading per well and tank is kept. Tanks with no gauging on
/// a day contribute their last known volume.
pub fn oil_inventory_series(wells: &[Well], gaugings: &[TankGauging]) -> Vec<OilInventoryPoint> {
    let index = well_index(wells);
    let factors: Vec<f64> = wells.iter().map(Well::tank_factor).collect();
    let mut days: DayBuckets<(usize, Tank)> = DayBuckets::new();

    for gauging in gaugings {
        let Some(day) = observation_day(gauging, &gauging.id) else {
            continue;
        };
        let bucket = days.entry(day).or_default();

        let Some(tank) = gauging.tank_number.as_deref().and_then(Tank::from_label) else {
            continue;
        };
        let Some(well) = resolve_well(&index, &gauging.well_id) else {
            continue;
        };

        let barrels = gauging.level * factors[well];
        bucket
            .entry((well, tank))
            .and_modify(|kept| *kept = kept.max(barrels))
            .or_insert(barrels);
    }

    let keys: Vec<(usize, Tank)> = (0..wells.len())
        .flat_map(|well| Tank::ALL.map(|tank| (well, tank)))
        .collect();

    fill_forward(&days, &keys)
        .into_iter()
        .map(|(date, values)| OilInventoryPoint {
            date,
            total: values.iter().sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn well(id: &str, factor: f64) -> Well {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": id,
            "metadata": { "tankFactor": factor },
        }))
        .unwrap()
    }

    fn gauging(well_id: &str, tank: &str, level: f64, d: u32, hour: u32) -> TankGauging {
        TankGauging {
            id: format!("{well_id}-{tank}-{d}-{hour}"),
            well_id: well_id.into(),
            level,
            tank_number: Some(tank.into()),
            timestamp: Utc.with_ymd_and_hms(2024, 3, d, hour, 0, 0).single(),
            created_at: None,
            date: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_tank_labels() {
        assert_eq!(Tank::from_label("Tank 1"), Some(Tank::One));
        assert_eq!(Tank::from_label("tank 3"), Some(Tank::Three));
        assert_eq!(Tank::from_label("2"), Some(Tank::Two));
        assert_eq!(Tank::from_label("Tank 4"), None);
        assert_eq!(Tank::from_label("Water Tank"), None);
        assert_eq!(Tank::ALL.map(|t| t.to_string())[1], "Tank 2");
    }

    #[test]
    fn test_level_converted_with_tank_factor() {
        let wells = vec![well("a", 1.5)];
        let series = oil_inventory_series(&wells, &[gauging("a", "Tank 1", 100.0, 1, 8)]);
        assert_eq!(series, vec![OilInventoryPoint { date: day(1), total: 150.0 }]);
    }

    #[test]
    fn test_same_day_keeps_maximum() {
        let wells = vec![well("a", 1.0)];
        let gaugings = vec![
            gauging("a", "Tank 1", 50.0, 1, 6),
            gauging("a", "Tank 1", 80.0, 1, 12),
            gauging("a", "Tank 1", 60.0, 1, 18),
        ];
        let series = oil_inventory_series(&wells, &gaugings);
        assert_eq!(series[0].total, 80.0);
    }

    #[test]
    fn test_tanks_forward_filled_independently() {
        let wells = vec![well("a", 1.0), well("b", 2.0)];
        let gaugings = vec![
            gauging("a", "Tank 1", 10.0, 1, 8),
            gauging("a", "Tank 2", 20.0, 1, 8),
            gauging("b", "Tank 1", 5.0, 1, 8),
            gauging("a", "Tank 2", 25.0, 2, 8),
        ];
        let series = oil_inventory_series(&wells, &gaugings);
        assert_eq!(series[0].total, 10.0 + 20.0 + 10.0);
        // Tank 1 on well a and well b carried; Tank 2 updated.
        assert_eq!(series[1].total, 10.0 + 25.0 + 10.0);
    }

    #[test]
    fn test_missing_tank_factor_counts_zero() {
        let wells: Vec<Well> =
            serde_json::from_str(r#"[{ "id": "a", "name": "A", "metadata": {} }]"#).unwrap();
        let series = oil_inventory_series(&wells, &[gauging("a", "Tank 1", 100.0, 1, 8)]);
        assert_eq!(series[0].total, 0.0);
    }

    #[test]
    fn test_empty_gaugings() {
        assert!(oil_inventory_series(&[well("a", 1.0)], &[]).is_empty());
    }
}
