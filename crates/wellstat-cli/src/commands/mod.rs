pub mod aggregate;
pub mod baseline;
pub mod rates;
