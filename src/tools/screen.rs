//! Food log screen session
//!
//! Owns everything the log screen shows: the search query, the food being
//! edited, the selected day and the per-day log. All arithmetic is
//! delegated to the pure functions in [`crate::nutrition`].

use chrono::NaiveDate;
use serde::Serialize;

use super::recognizer::{FoodRecognizer, ImageSource, PickerOutcome};
use super::search::search_foods;
use crate::config::Config;
use crate::error::{FoodLogError, FoodLogResult};
use crate::models::{date_key, find_food, DailyLog, FoodDefinition, LoggedEntry, ScaledMacros};
use crate::nutrition::{grams_for, parse_quantity, scale_macros, DEFAULT_UNIT};

/// Quantity preselected whenever a food is chosen
pub const DEFAULT_QUANTITY: &str = "1";

/// The food currently being edited, with its live macro preview
#[derive(Debug, Clone, Serialize)]
pub struct SelectionView {
    pub food_id: String,
    pub food_name: String,
    pub quantity: String,
    pub unit: String,
    pub unit_options: Vec<String>,
    pub preview: ScaledMacros,
}

/// Totals and entries for one day
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub consumed: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub calories_out: f64,
    pub net: f64,
    pub target_calories: f64,
    /// consumed / target as a percentage, capped at 100
    pub goal_progress_percent: f64,
    pub entries: Vec<LoggedEntry>,
}

/// One line of the history listing
#[derive(Debug, Clone, Serialize)]
pub struct DayOverview {
    pub date: String,
    pub calories: f64,
    pub entry_count: usize,
}

/// Outcome of a photo picker flow
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PickerResult {
    PermissionNeeded { title: String, message: String },
    Canceled,
    NotRecognized,
    Selected { selection: SelectionView },
}

/// Percentage of the calorie goal reached, capped at 100
pub fn goal_progress_percent(consumed: f64, target: f64) -> f64 {
    (consumed / target.max(1.0) * 100.0).min(100.0)
}

/// Parse an ISO date ("2025-01-09")
pub fn parse_date(s: &str) -> FoodLogResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FoodLogError::InvalidDate(s.to_string()))
}

/// State of one food log screen
#[derive(Debug, Clone)]
pub struct FoodLogScreen {
    config: Config,
    query: String,
    selected_food: Option<&'static FoodDefinition>,
    quantity_text: String,
    unit: String,
    selected_date: NaiveDate,
    target_calories: f64,
    calories_out: f64,
    log: DailyLog,
}

impl FoodLogScreen {
    pub fn new(config: Config, today: NaiveDate) -> Self {
        Self {
            target_calories: config.target_calories,
            calories_out: config.calories_out,
            config,
            query: String::new(),
            selected_food: None,
            quantity_text: DEFAULT_QUANTITY.to_string(),
            unit: DEFAULT_UNIT.to_string(),
            selected_date: today,
            log: DailyLog::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn log(&self) -> &DailyLog {
        &self.log
    }

    // ------------------------------------------------------------------
    // Search & selection
    // ------------------------------------------------------------------

    /// Update the search text and return the matching foods
    pub fn set_query(&mut self, text: &str) -> Vec<&'static FoodDefinition> {
        self.query = text.to_string();
        search_foods(&self.query)
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Choose a food; resets quantity and picks the food's first unit
    pub fn select_food(&mut self, id: &str) -> FoodLogResult<SelectionView> {
        let food = find_food(id).ok_or_else(|| FoodLogError::UnknownFood(id.to_string()))?;
        self.selected_food = Some(food);
        self.unit = food.default_unit().to_string();
        self.quantity_text = DEFAULT_QUANTITY.to_string();
        tracing::info!("Selected '{}' ({})", food.name, self.unit);
        self.selection().ok_or(FoodLogError::NothingSelected)
    }

    pub fn set_quantity(&mut self, text: &str) -> Option<SelectionView> {
        self.quantity_text = text.to_string();
        self.selection()
    }

    pub fn set_unit(&mut self, unit: &str) -> Option<SelectionView> {
        self.unit = unit.to_string();
        self.selection()
    }

    /// Scaled macros for the current selection
    pub fn preview(&self) -> Option<ScaledMacros> {
        let food = self.selected_food?;
        let grams = grams_for(parse_quantity(&self.quantity_text), &self.unit, Some(food));
        Some(scale_macros(&food.base, grams))
    }

    pub fn selection(&self) -> Option<SelectionView> {
        let food = self.selected_food?;
        let preview = self.preview()?;
        Some(SelectionView {
            food_id: food.id.clone(),
            food_name: food.name.clone(),
            quantity: self.quantity_text.clone(),
            unit: self.unit.clone(),
            unit_options: food.unit_options(),
            preview,
        })
    }

    /// Log the current selection on the selected day
    ///
    /// Clears the selection and the search afterwards.
    pub fn add_to_log(&mut self) -> FoodLogResult<LoggedEntry> {
        let food = self.selected_food.ok_or(FoodLogError::NothingSelected)?;
        let scaled = self.preview().ok_or(FoodLogError::NothingSelected)?;
        let entry = LoggedEntry::from_scaled(food, &scaled);
        let key = date_key(self.selected_date);

        self.log.append(&key, entry.clone());
        tracing::info!(
            "Logged {}g of '{}' on {} ({} kcal)",
            entry.grams,
            entry.food_name,
            key,
            entry.calories
        );

        self.selected_food = None;
        self.quantity_text = DEFAULT_QUANTITY.to_string();
        self.unit = DEFAULT_UNIT.to_string();
        self.query.clear();
        Ok(entry)
    }

    // ------------------------------------------------------------------
    // Date cursor
    // ------------------------------------------------------------------

    pub fn previous_day(&mut self) -> NaiveDate {
        self.selected_date = self.selected_date.pred_opt().unwrap_or(self.selected_date);
        tracing::debug!("Selected date {}", self.selected_date);
        self.selected_date
    }

    pub fn next_day(&mut self) -> NaiveDate {
        self.selected_date = self.selected_date.succ_opt().unwrap_or(self.selected_date);
        tracing::debug!("Selected date {}", self.selected_date);
        self.selected_date
    }

    pub fn go_to_today(&mut self, today: NaiveDate) -> NaiveDate {
        self.select_date(today)
    }

    pub fn select_date(&mut self, date: NaiveDate) -> NaiveDate {
        self.selected_date = date;
        tracing::debug!("Selected date {}", self.selected_date);
        self.selected_date
    }

    // ------------------------------------------------------------------
    // Goals & summaries
    // ------------------------------------------------------------------

    pub fn set_target_calories(&mut self, calories: f64) {
        self.target_calories = calories.max(0.0);
    }

    pub fn set_calories_out(&mut self, calories: f64) {
        self.calories_out = calories.max(0.0);
    }

    /// Summary of the selected day
    pub fn summary(&self) -> DaySummary {
        self.summary_for(self.selected_date)
    }

    pub fn summary_for(&self, date: NaiveDate) -> DaySummary {
        let key = date_key(date);
        let totals = self.log.totals(&key);
        DaySummary {
            consumed: totals.calories,
            protein: totals.protein,
            carbs: totals.carbs,
            fat: totals.fat,
            fiber: totals.fiber,
            calories_out: self.calories_out,
            net: totals.calories - self.calories_out,
            target_calories: self.target_calories,
            goal_progress_percent: goal_progress_percent(totals.calories, self.target_calories),
            entries: self.log.entries(&key).to_vec(),
            date: key,
        }
    }

    /// Days with logged food, oldest first
    pub fn logged_days(&self) -> Vec<DayOverview> {
        self.log
            .days()
            .map(|key| DayOverview {
                date: key.to_string(),
                calories: self.log.totals(key).calories,
                entry_count: self.log.entries(key).len(),
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Photo pickers
    // ------------------------------------------------------------------

    /// Apply the result of a photo picker flow
    ///
    /// A canceled picker changes nothing. A recognized food becomes the
    /// current selection with the recognized quantity and unit.
    pub async fn apply_picker(
        &mut self,
        source: ImageSource,
        outcome: PickerOutcome,
        recognizer: &dyn FoodRecognizer,
    ) -> FoodLogResult<PickerResult> {
        if !self.config.photo_capture {
            return Err(FoodLogError::PhotoCaptureDisabled);
        }

        let image = match outcome {
            PickerOutcome::PermissionDenied => {
                tracing::warn!("{:?} permission denied", source);
                return Ok(PickerResult::PermissionNeeded {
                    title: "Permission needed".to_string(),
                    message: source.permission_message().to_string(),
                });
            }
            PickerOutcome::Canceled => return Ok(PickerResult::Canceled),
            PickerOutcome::Selected(image) => image,
        };

        let Some(recognition) = recognizer.recognize(source, &image).await else {
            return Ok(PickerResult::NotRecognized);
        };

        let food = find_food(&recognition.food_id)
            .ok_or_else(|| FoodLogError::UnknownFood(recognition.food_id.clone()))?;
        self.selected_food = Some(food);
        self.quantity_text = recognition.quantity;
        self.unit = recognition.unit;
        tracing::info!("Recognized '{}' from {:?}", food.name, source);

        let selection = self.selection().ok_or(FoodLogError::NothingSelected)?;
        Ok(PickerResult::Selected { selection })
    }
}
