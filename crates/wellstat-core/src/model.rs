use crate::error::WellstatError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A producing well. Readings refer to it by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Well {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub well_number: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Well {
    /// Multiplier from gauge level to barrels, read from `metadata.tankFactor`.
    ///
    /// Accepts a JSON number or a numeric string. Anything else is 0.
    pub fn tank_factor(&self) -> f64 {
        let factor = match self.metadata.get("tankFactor") {
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        factor.filter(|f| f.is_finite()).unwrap_or(0.0)
    }
}

/// A meter reading (gas rate, instant gas rate, pressures, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReading {
    #[serde(default)]
    pub id: String,
    pub well_id: String,
    pub value: f64,
    #[serde(default)]
    pub meter_type: Option<String>,
    #[serde(default, deserialize_with = "instant::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "instant::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// A tank gauging: raw gauge level for one tank on one well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankGauging {
    #[serde(default)]
    pub id: String,
    pub well_id: String,
    pub level: f64,
    #[serde(default)]
    pub tank_number: Option<String>,
    #[serde(default, deserialize_with = "instant::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "instant::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// A run ticket: oil volume hauled off lease, in barrels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTicket {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub well_id: String,
    #[serde(alias = "value")]
    pub volume: f64,
    #[serde(default, deserialize_with = "instant::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "instant::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Lenient timestamps for exported documents.
mod instant {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use tracing::warn;

    /// Offset-less timestamps are read as UTC.
    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    /// Accepts RFC 3339 or a naive timestamp. Anything else is dropped with
    /// a warning so one bad document does not fail the whole collection.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| {
            let parsed = parse(&s);
            if parsed.is_none() {
                warn!(value = %s, "ignoring unrecognized timestamp");
            }
            parsed
        }))
    }

    fn parse(s: &str) -> Option<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

/// Anything recorded at a point in time that can be bucketed by day.
pub trait Observation {
    /// When the observation was taken: `timestamp`, else `createdAt`.
    fn observed_at(&self) -> Option<DateTime<Utc>>;

    /// Explicit calendar date, used when no instant is recorded.
    fn recorded_date(&self) -> Option<NaiveDate>;

    /// Calendar day the observation belongs to. Time of day is discarded.
    fn day(&self) -> Option<NaiveDate> {
        self.observed_at()
            .map(|at| at.date_naive())
            .or_else(|| self.recorded_date())
    }
}

macro_rules! impl_observation {
    ($($ty:ty),*) => {
        $(
            impl Observation for $ty {
                fn observed_at(&self) -> Option<DateTime<Utc>> {
                    self.timestamp.or(self.created_at)
                }

                fn recorded_date(&self) -> Option<NaiveDate> {
                    self.date
                }
            }
        )*
    };
}

impl_observation!(MeterReading, TankGauging, RunTicket);

/// Load a JSON array exported from one database collection.
///
/// `collection` names the collection in error messages ("wells",
/// "meterReadings", ...).
pub fn load_collection<T: DeserializeOwned>(
    path: &Path,
    collection: &'static str,
) -> Result<Vec<T>, WellstatError> {
    let load_error = |reason: String| WellstatError::CollectionLoad {
        collection,
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| load_error(e.to_string()))
}
