use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Production line items that the rate deriver knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Gross oil production, MBbl per month.
    GrossOil,
    /// Gross sales gas, MMcf per month.
    GrossGas,
}

/// One named line item from the baseline spreadsheet, with a value per period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineAssumptionRow {
    pub label: String,
    /// Map of date string -> monthly value. Quoted strings keep exact decimals;
    /// plain JSON numbers are accepted too.
    #[serde(default)]
    pub values: BTreeMap<String, Decimal>,
    /// Explicit row kind. Untagged rows are matched by label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RowKind>,
}

impl BaselineAssumptionRow {
    /// Value for a period, or `None` if the row has no entry for it.
    pub fn value_at(&self, date: &str) -> Option<Decimal> {
        self.values.get(date).copied()
    }
}

/// A baseline underwriting dataset as imported from the forecast workbook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineStructuredData {
    /// Producing Developed Producing assumptions.
    #[serde(default)]
    pub pdp_assumptions: Vec<BaselineAssumptionRow>,
    /// Producing Developed Shut-In/Infill assumptions.
    #[serde(default)]
    pub pdsi_assumptions: Vec<BaselineAssumptionRow>,
    #[serde(default)]
    pub prices: Vec<BaselineAssumptionRow>,
    #[serde(default)]
    pub cash_flows: Vec<BaselineAssumptionRow>,
    /// Period keys. Not guaranteed to be sorted.
    #[serde(default)]
    pub dates: Vec<String>,
}

impl BaselineStructuredData {
    /// Period keys in ascending calendar order. Unparseable keys sort last,
    /// keeping their original relative order.
    pub fn sorted_dates(&self) -> Vec<String> {
        let mut dates = self.dates.clone();
        dates.sort_by_key(|d| {
            let parsed = super::dates::parse_date(d);
            (parsed.is_none(), parsed)
        });
        dates
    }

    /// All row collections with their names, in a fixed order.
    pub fn collections(&self) -> [(&'static str, &[BaselineAssumptionRow]); 4] {
        [
            ("pdpAssumptions", self.pdp_assumptions.as_slice()),
            ("pdsiAssumptions", self.pdsi_assumptions.as_slice()),
            ("prices", self.prices.as_slice()),
            ("cashFlows", self.cash_flows.as_slice()),
        ]
    }
}
