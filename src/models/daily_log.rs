//! Daily log model
//!
//! Logged entries grouped by calendar-day key, with totals computed on read.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{LoggedEntry, Macros};

/// Key format for a calendar day: "2025-01-09"
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Append-only log of entries per day
///
/// Entries within a day keep insertion order. There is no removal, edit or
/// reordering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyLog {
    days: BTreeMap<String, Vec<LoggedEntry>>,
}

impl DailyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a day, creating the day if needed
    pub fn append(&mut self, key: &str, entry: LoggedEntry) {
        self.days.entry(key.to_string()).or_default().push(entry);
    }

    /// Entries for a day in log order; empty if nothing was logged
    pub fn entries(&self, key: &str) -> &[LoggedEntry] {
        self.days.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of each macro across a day's entries
    pub fn totals(&self, key: &str) -> Macros {
        self.entries(key).iter().map(LoggedEntry::macros).sum()
    }

    /// Day keys with at least one entry, oldest first
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of entries across all days
    pub fn entry_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, calories: f64, protein: f64) -> LoggedEntry {
        LoggedEntry {
            food_name: name.to_string(),
            grams: 100.0,
            calories,
            protein,
            fat: 1.0,
            carbs: 2.0,
            fiber: 0.5,
        }
    }

    #[test]
    fn test_empty_day_sums_to_zero() {
        let log = DailyLog::new();
        assert_eq!(log.totals("2025-01-09"), Macros::zero());
        assert!(log.entries("2025-01-09").is_empty());
    }

    #[test]
    fn test_totals_sum_each_field() {
        let mut log = DailyLog::new();
        log.append("2025-01-09", entry("Roti", 220.0, 6.0));
        log.append("2025-01-09", entry("Milk (toned)", 144.0, 7.2));

        let totals = log.totals("2025-01-09");
        assert_eq!(totals.calories, 364.0);
        assert!((totals.protein - 13.2).abs() < 1e-9);
        assert_eq!(totals.fat, 2.0);
        assert_eq!(totals.carbs, 4.0);
        assert_eq!(totals.fiber, 1.0);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut log = DailyLog::new();
        log.append("2025-01-09", entry("first", 1.0, 0.0));
        log.append("2025-01-09", entry("second", 2.0, 0.0));

        let names: Vec<&str> = log
            .entries("2025-01-09")
            .iter()
            .map(|e| e.food_name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_append_leaves_other_days_untouched() {
        let mut log = DailyLog::new();
        log.append("2025-01-08", entry("Roti", 110.0, 3.0));
        let before = log.totals("2025-01-08");

        log.append("2025-01-09", entry("Milk (toned)", 60.0, 3.0));

        assert_eq!(log.totals("2025-01-08"), before);
        assert_eq!(log.entries("2025-01-08").len(), 1);
        assert_eq!(log.day_count(), 2);
        assert_eq!(log.entry_count(), 2);
        assert_eq!(log.days().collect::<Vec<_>>(), vec!["2025-01-08", "2025-01-09"]);
    }

    #[test]
    fn test_date_key_format() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(date_key(date), "2025-01-09");
    }
}
