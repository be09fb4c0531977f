use super::observation_day;
use super::outcome::RunTicketPoint;
use crate::model::RunTicket;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Daily and cumulative run ticket volume across all wells.
pub fn run_ticket_series(tickets: &[RunTicket]) -> Vec<RunTicketPoint> {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for ticket in tickets {
        if let Some(day) = observation_day(ticket, &ticket.id) {
            *daily.entry(day).or_default() += ticket.volume;
        }
    }

    daily
        .into_iter()
        .scan(0.0, |cumulative, (date, volume)| {
            *cumulative += volume;
            Some(RunTicketPoint {
                date,
                daily: volume,
                cumulative: *cumulative,
            })
        })
        .collect()
}
