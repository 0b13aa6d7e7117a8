//! FoodLog Status Tool
//!
//! Runtime status of the service and usage instructions for assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use super::screen::FoodLogScreen;
use crate::build_info::BuildInfo;

/// Food logging instructions for AI assistants
pub const LOGGING_INSTRUCTIONS: &str = r#"
# FoodLog Instructions

FoodLog keeps one log screen session: a search box, the food being edited,
a selected day and an in-memory log of what was eaten per day. Nothing is
persisted; the log is lost when the server stops.

## Logging a food

1. `search_foods` with part of the food name (case-insensitive). An empty
   query returns no results.
2. `select_food` with the `id` of a result. The quantity resets to "1" and
   the unit to the food's first unit.
3. Adjust with `set_quantity` (text, e.g. "2" or "1.5") and `set_unit`
   (one of the food's `unit_options`). Every call returns the live macro
   preview.
4. `add_to_log` appends the previewed values to the selected day and
   clears the selection.

## Units

- "grams", "g" and "ml" count as one gram per unit (ml is not
  density-aware).
- Other units use the food's own factor (Roti: piece = 40g, Milk: cup =
  240g).
- A unit the food has no factor for counts as one gram per unit.
- A quantity that is not a number counts as 0.

## Rounding

Calories and grams are whole numbers; protein, fat, carbs and fiber have
one decimal.

## Days

- `get_day` shows totals, net calories (consumed minus calories out) and
  goal progress (capped at 100%) for the selected day or a given
  YYYY-MM-DD date.
- Move the selected day with `previous_day`, `next_day`, `go_to_today` or
  `select_date`.
- `list_days` shows every day with logged food.

## Photos

`simulate_photo_pick` replays a photo picker result. Recognition is a stub:
the photo library always yields 1 piece of Roti and the camera 240 ml of
Milk (toned).
"#;

/// Status response
#[derive(Debug, Serialize)]
pub struct FoodLogStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Session information
    pub selected_date: String,
    pub logged_days: usize,
    pub logged_entries: usize,
    pub photo_capture: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn get_status(&self, screen: &FoodLogScreen) -> FoodLogStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FoodLogStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            selected_date: screen.selected_date().to_string(),
            logged_days: screen.log().day_count(),
            logged_entries: screen.log().entry_count(),
            photo_capture: screen.config().photo_capture,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::NaiveDate;

    #[test]
    fn test_status_reports_session_counts() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        let mut screen = FoodLogScreen::new(Config::default(), today);
        screen.select_food("roti").unwrap();
        screen.add_to_log().unwrap();

        let status = StatusTracker::new().get_status(&screen);
        assert_eq!(status.selected_date, "2025-01-09");
        assert_eq!(status.logged_days, 1);
        assert_eq!(status.logged_entries, 1);
        assert!(status.photo_capture);
        assert_eq!(status.process_id, std::process::id());
    }
}
