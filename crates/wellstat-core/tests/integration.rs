//! End-to-end tests: JSON exports in, chart-ready series out.

use chrono::NaiveDate;
use wellstat_core::baseline::{load_baseline, parse_baseline_str};
use wellstat_core::model::{load_collection, MeterReading, RunTicket, TankGauging, Well};
use wellstat_core::{
    baseline_rates, daily_rate, explain_baseline_rates, gas_rate_series, oil_inventory_series,
    run_ticket_series, RateKind,
};

const BASELINE: &str = r#"{
    "pdpAssumptions": [
        { "label": "Gross Prod Oil (MBbl)", "values": { "2024-03-15": "31", "2024-01-15": "300" } },
        { "label": "Gross Sales Gas (MMcf)", "values": { "2024-03-15": "93", "2024-01-15": "620" } },
        { "label": "Net Oil (MBbl)", "values": { "2024-03-15": "25", "2024-01-15": "240" } }
    ],
    "pdsiAssumptions": [
        { "label": "GROSS OIL", "values": { "2024-01-15": "10" } }
    ],
    "prices": [
        { "label": "Oil Price ($/Bbl)", "values": { "2024-03-15": "78.25", "2024-01-15": "71.10" } }
    ],
    "cashFlows": [],
    "dates": ["2024-03-15", "2024-01-15"]
}"#;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ---------------------------------------------------------------------------
// Rate deriver
// ---------------------------------------------------------------------------
#[test]
fn baseline_rates_default_to_sorted_periods() {
    let data = parse_baseline_str(BASELINE).unwrap();
    let rates = baseline_rates(&data, &[]);

    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].date, "2024-01-15");
    assert_eq!(rates[1].date, "2024-03-15");

    // (300 + 10) MBbl * 1000 / 31 days
    assert_eq!(rates[0].oil_rate, 10000.0);
    // 620 MMcf * 1000 / 31 days
    assert_eq!(rates[0].gas_rate, 20000.0);
    assert_eq!(rates[0].boe, 10000.0 + 20000.0 / 6.0);

    // 31 MBbl / 31 days, 93 MMcf / 31 days
    assert_eq!(rates[1].oil_rate, 1000.0);
    assert_eq!(rates[1].gas_rate, 3000.0);
    assert_eq!(rates[1].boe, 1500.0);
}

#[test]
fn nearest_period_is_used_for_off_grid_dates() {
    let data = parse_baseline_str(BASELINE).unwrap();
    // 17 days from Jan 15, 43 days from Mar 15.
    let oil = daily_rate(Some(&data), "2024-02-01", RateKind::Oil);
    assert_eq!(oil, Some(10000.0));
}

#[test]
fn explain_covers_every_kind_for_every_date() {
    let data = parse_baseline_str(BASELINE).unwrap();
    let traces = explain_baseline_rates(&data, &["2024-02-01".to_string()]);
    assert_eq!(traces.len(), 3);
    assert_eq!(traces[0].kind, RateKind::Oil);
    assert_eq!(traces[0].resolved_date.as_deref(), Some("2024-01-15"));
    assert_eq!(traces[2].kind, RateKind::Boe);
    assert_eq!(traces[2].daily_rate, 10000.0 + 20000.0 / 6.0);
}

#[test]
fn rates_serialize_with_chart_field_names() {
    let data = parse_baseline_str(BASELINE).unwrap();
    let json = serde_json::to_value(baseline_rates(&data, &[])).unwrap();
    let first = &json[0];
    assert!(first.get("oilRate").is_some());
    assert!(first.get("gasRate").is_some());
    assert!(first.get("boe").is_some());
    assert_eq!(first["date"], "2024-01-15");
}

#[test]
fn baseline_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    std::fs::write(&path, BASELINE).unwrap();

    let data = load_baseline(&path).unwrap();
    assert_eq!(data.prices.len(), 1);
    assert_eq!(
        daily_rate(Some(&data), "2024-03-15", RateKind::Gas),
        Some(3000.0)
    );
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------
fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const WELLS: &str = r#"[
    { "id": "w1", "name": "Smith 1H", "wellNumber": "1H", "metadata": { "tankFactor": 1.67 } },
    { "id": "w2", "name": "Smith 2H", "wellNumber": "2H", "metadata": { "tankFactor": "2" } }
]"#;

#[test]
fn gas_single_reading_carried_through_later_days() {
    let dir = tempfile::tempdir().unwrap();
    let wells: Vec<Well> = load_collection(&write(&dir, "wells.json", WELLS), "wells").unwrap();
    let readings: Vec<MeterReading> = load_collection(
        &write(
            &dir,
            "readings.json",
            r#"[
                { "id": "r1", "wellId": "w1", "value": 250, "meterType": "Gas Rate",
                  "timestamp": "2024-03-01T07:00:00Z" },
                { "id": "r2", "wellId": "w2", "value": 10, "meterType": "Gas Rate",
                  "timestamp": "2024-03-02T07:00:00Z" },
                { "id": "r3", "wellId": "w2", "value": 12, "meterType": "Gas Rate",
                  "timestamp": "2024-03-03T07:00:00Z" },
                { "id": "r4", "wellId": "w2", "value": 14, "meterType": "Gas Rate",
                  "timestamp": "2024-03-04T07:00:00Z" },
                { "id": "r5", "wellId": "w2", "value": 16, "meterType": "Gas Rate",
                  "createdAt": "2024-03-05T07:00:00Z" }
            ]"#,
        ),
        "meterReadings",
    )
    .unwrap();

    let series = gas_rate_series(&wells, &readings);
    assert_eq!(series.len(), 5);
    assert_eq!(series[0].total_gas_rate, 250.0);
    for (point, w2) in series[1..].iter().zip([10.0, 12.0, 14.0, 16.0]) {
        assert_eq!(point.total_gas_rate, 250.0 + w2);
    }
    assert_eq!(series[4].date, day("2024-03-05"));
}

#[test]
fn days_without_readings_are_not_synthesized() {
    let wells: Vec<Well> = serde_json::from_str(WELLS).unwrap();
    let gaugings: Vec<TankGauging> = serde_json::from_str(
        r#"[
            { "wellId": "w2", "level": 40, "tankNumber": "Tank 1", "date": "2024-03-01" },
            { "wellId": "w2", "level": 25, "tankNumber": "Tank 1",
              "timestamp": "2024-03-01T12:00:00Z" },
            { "wellId": "w2", "level": 30, "tankNumber": "Tank 2", "date": "2024-03-10" }
        ]"#,
    )
    .unwrap();

    let series = oil_inventory_series(&wells, &gaugings);
    let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![day("2024-03-01"), day("2024-03-10")]);
    // Max of 40 and 25 gauge inches, times factor 2.
    assert_eq!(series[0].total, 80.0);
    assert_eq!(series[1].total, 80.0 + 60.0);
}

#[test]
fn aggregate_outputs_serialize_with_chart_field_names() {
    let wells: Vec<Well> = serde_json::from_str(WELLS).unwrap();
    let readings: Vec<MeterReading> = serde_json::from_str(
        r#"[{ "wellId": "w1", "value": 3, "meterType": "instant gas rate", "date": "2024-03-01" }]"#,
    )
    .unwrap();
    let tickets: Vec<RunTicket> =
        serde_json::from_str(r#"[{ "wellId": "w1", "value": 180, "date": "2024-03-01" }]"#)
            .unwrap();

    let gas = serde_json::to_value(gas_rate_series(&wells, &readings)).unwrap();
    assert_eq!(gas[0]["date"], "2024-03-01");
    assert_eq!(gas[0]["totalGasRate"], 0.0);
    assert_eq!(gas[0]["totalInstantGasRate"], 3.0);

    let runs = serde_json::to_value(run_ticket_series(&tickets)).unwrap();
    assert_eq!(runs[0]["daily"], 180.0);
    assert_eq!(runs[0]["cumulative"], 180.0);
}

#[test]
fn empty_inputs_yield_empty_series() {
    let wells: Vec<Well> = serde_json::from_str(WELLS).unwrap();
    assert!(gas_rate_series(&wells, &[]).is_empty());
    assert!(oil_inventory_series(&wells, &[]).is_empty());
    assert!(run_ticket_series(&[]).is_empty());
}
