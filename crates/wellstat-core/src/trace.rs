use crate::baseline::schema::{BaselineAssumptionRow, BaselineStructuredData, RowKind};
use crate::rates::engine::{boe, volume_rate, VolumeRate};
use crate::rates::outcome::RateKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    ResolveDate,
    SelectRow,
    CombineValues,
    ConvertUnits,
    CombineBoe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

/// How a row was picked for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSelection {
    Tagged,
    Label,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRow {
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub selection: RowSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_value: Option<Decimal>,
}

/// Explanation of one derived rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTrace {
    pub trace_schema_version: String,
    pub query_date: String,
    pub kind: RateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<String>,
    pub rows: Vec<TraceRow>,
    pub steps: Vec<TraceStep>,
    pub daily_rate: f64,
}

/// Derive a rate and record each step. `None` when `data` is absent.
pub fn explain_rate(
    data: Option<&BaselineStructuredData>,
    date: &str,
    kind: RateKind,
) -> Option<RateTrace> {
    let data = data?;

    let trace = match kind.row_kind() {
        Some(row_kind) => {
            let rate = volume_rate(data, date, row_kind);
            let mut steps = Vec::new();
            let rows = volume_steps(&rate, date, row_kind, kind, &mut steps);
            RateTrace {
                trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
                query_date: date.to_string(),
                kind,
                resolved_date: rate.resolved_date.map(str::to_string),
                rows,
                steps,
                daily_rate: rate.daily_rate,
            }
        }
        None => {
            let oil = explain_rate(Some(data), date, RateKind::Oil)?;
            let gas = explain_rate(Some(data), date, RateKind::Gas)?;
            let daily_rate = boe(oil.daily_rate, gas.daily_rate);

            let mut steps = oil.steps;
            steps.extend(gas.steps);
            steps.push(TraceStep {
                step_type: TraceStepType::CombineBoe,
                message: format!(
                    "{} Bbl/d + {} Mcf/d / 6 = {} BOE/d",
                    oil.daily_rate, gas.daily_rate, daily_rate
                ),
            });

            let mut rows = oil.rows;
            rows.extend(gas.rows);

            RateTrace {
                trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
                query_date: date.to_string(),
                kind,
                resolved_date: oil.resolved_date,
                rows,
                steps,
                daily_rate,
            }
        }
    };

    Some(trace)
}

fn volume_steps(
    rate: &VolumeRate<'_>,
    date: &str,
    row_kind: RowKind,
    kind: RateKind,
    steps: &mut Vec<TraceStep>,
) -> Vec<TraceRow> {
    steps.push(TraceStep {
        step_type: TraceStepType::ResolveDate,
        message: match rate.resolved_date {
            Some(key) if key == date => format!("Period '{key}' matched exactly"),
            Some(key) => format!("No period '{date}', using nearest period '{key}'"),
            None => format!("'{date}' matches no period and is not a date"),
        },
    });

    let rows: Vec<TraceRow> = [
        ("pdpAssumptions", rate.pdp_row),
        ("pdsiAssumptions", rate.pdsi_row),
    ]
    .into_iter()
    .map(|(collection, row)| trace_row(collection, row, row_kind, rate.resolved_date))
    .collect();

    for r in &rows {
        steps.push(TraceStep {
            step_type: TraceStepType::SelectRow,
            message: match (&r.selection, &r.label) {
                (RowSelection::Tagged, Some(label)) => {
                    format!("{}: '{}' (tagged {kind})", r.collection, label)
                }
                (RowSelection::Label, Some(label)) => {
                    format!("{}: '{}' (label match)", r.collection, label)
                }
                _ => format!("{}: no {kind} row, contributes 0", r.collection),
            },
        });
    }

    steps.push(TraceStep {
        step_type: TraceStepType::CombineValues,
        message: format!("PDP + PDSI = {} per month", rate.monthly),
    });

    steps.push(TraceStep {
        step_type: TraceStepType::ConvertUnits,
        message: match rate.days_in_month {
            Some(days) => format!(
                "{} * 1000 / {} days = {} {}",
                rate.monthly,
                days,
                rate.daily_rate,
                kind.unit()
            ),
            None => format!("Monthly value is 0 -> 0 {}", kind.unit()),
        },
    });

    rows
}

fn trace_row(
    collection: &str,
    row: Option<&BaselineAssumptionRow>,
    row_kind: RowKind,
    resolved_date: Option<&str>,
) -> TraceRow {
    match row {
        Some(r) => TraceRow {
            collection: collection.to_string(),
            label: Some(r.label.clone()),
            selection: if r.kind == Some(row_kind) {
                RowSelection::Tagged
            } else {
                RowSelection::Label
            },
            monthly_value: resolved_date.and_then(|d| r.value_at(d)),
        },
        None => TraceRow {
            collection: collection.to_string(),
            label: None,
            selection: RowSelection::Missing,
            monthly_value: None,
        },
    }
}
