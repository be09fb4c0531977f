pub mod engine;
pub mod outcome;

pub use engine::{boe, daily_rate, rates_for_dates, MCF_PER_BOE};
pub use outcome::{DailyRates, RateKind};
