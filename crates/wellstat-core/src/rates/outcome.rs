use crate::baseline::schema::RowKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which daily rate to derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateKind {
    /// Bbl/day.
    Oil,
    /// Mcf/day.
    Gas,
    /// Barrels of oil equivalent per day.
    Boe,
}

impl RateKind {
    /// The baseline row a volume rate is read from. BOE is derived, not read.
    pub fn row_kind(self) -> Option<RowKind> {
        match self {
            RateKind::Oil => Some(RowKind::GrossOil),
            RateKind::Gas => Some(RowKind::GrossGas),
            RateKind::Boe => None,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            RateKind::Oil => "Bbl/d",
            RateKind::Gas => "Mcf/d",
            RateKind::Boe => "BOE/d",
        }
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateKind::Oil => write!(f, "oil"),
            RateKind::Gas => write!(f, "gas"),
            RateKind::Boe => write!(f, "boe"),
        }
    }
}

/// Daily rates for one requested date, ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRates {
    /// The date as requested (not the resolved period key).
    pub date: String,
    /// Bbl/day.
    pub oil_rate: f64,
    /// Mcf/day.
    pub gas_rate: f64,
    /// BOE/day.
    pub boe: f64,
}
