use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field-wide gas rates for one day, in Mcf/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasRatePoint {
    pub date: NaiveDate,
    pub total_gas_rate: f64,
    pub total_instant_gas_rate: f64,
}

/// Field-wide oil in tanks for one day, in barrels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OilInventoryPoint {
    pub date: NaiveDate,
    pub total: f64,
}

/// Run ticket volume for one day and to date, in barrels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTicketPoint {
    pub date: NaiveDate,
    pub daily: f64,
    pub cumulative: f64,
}
