//! Timesheet totals.

use crate::models::TimesheetRow;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub hours: f64,
    pub entries: usize,
}

/// Rows grouped per day, in date order, with a grand total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimesheetReport {
    pub days: Vec<DayTotal>,
    pub total_hours: f64,
}

impl TimesheetReport {
    pub fn from_rows(rows: &[TimesheetRow]) -> Self {
        let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for row in rows {
            let entry = by_day.entry(row.date).or_default();
            entry.0 += row.hours;
            entry.1 += 1;
        }

        let days: Vec<DayTotal> = by_day
            .into_iter()
            .map(|(date, (hours, entries))| DayTotal {
                date,
                hours,
                entries,
            })
            .collect();
        let total_hours = days.iter().map(|d| d.hours).sum();

        Self { days, total_hours }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
