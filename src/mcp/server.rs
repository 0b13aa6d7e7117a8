//! FoodLog MCP Server Implementation
//!
//! Exposes the food log screen session as MCP tools.

use std::sync::Arc;

use chrono::Local;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::FoodLogError;
use crate::models::{catalog, find_food, LoggedEntry, ScaledMacros};
use crate::nutrition::{grams_for, parse_quantity, scale_macros};
use crate::tools::recognizer::{
    CapturedImage, FoodRecognizer, ImageSource, PickerOutcome, StubRecognizer,
};
use crate::tools::screen::{parse_date, DayOverview, DaySummary, FoodLogScreen, SelectionView};
use crate::tools::search::{search_response, FoodSummary};
use crate::tools::status::{StatusTracker, LOGGING_INSTRUCTIONS};

/// FoodLog MCP Service
#[derive(Clone)]
pub struct FoodLogService {
    status_tracker: Arc<StatusTracker>,
    screen: Arc<Mutex<FoodLogScreen>>,
    recognizer: Arc<dyn FoodRecognizer>,
    tool_router: ToolRouter<FoodLogService>,
}

impl FoodLogService {
    pub fn new(config: Config) -> Self {
        Self::with_recognizer(config, Arc::new(StubRecognizer))
    }

    pub fn with_recognizer(config: Config, recognizer: Arc<dyn FoodRecognizer>) -> Self {
        let today = Local::now().date_naive();
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            screen: Arc::new(Mutex::new(FoodLogScreen::new(config, today))),
            recognizer,
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid(e: FoodLogError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

// ============================================================================
// Response Structs
// ============================================================================

#[derive(Debug, Serialize)]
struct CatalogResponse {
    items: Vec<FoodSummary>,
    total: usize,
}

#[derive(Debug, Serialize)]
struct CalculateMacrosResponse {
    food_id: String,
    food_name: String,
    quantity: f64,
    unit: String,
    scaled: ScaledMacros,
}

#[derive(Debug, Serialize)]
struct SelectionResponse {
    selected: bool,
    selection: Option<SelectionView>,
}

impl From<Option<SelectionView>> for SelectionResponse {
    fn from(selection: Option<SelectionView>) -> Self {
        Self {
            selected: selection.is_some(),
            selection,
        }
    }
}

#[derive(Debug, Serialize)]
struct AddToLogResponse {
    entry: LoggedEntry,
    day: DaySummary,
}

#[derive(Debug, Serialize)]
struct ListDaysResponse {
    days: Vec<DayOverview>,
    total: usize,
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    /// Part of a food name, case-insensitive
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMacrosParams {
    /// Catalog food ID
    pub food_id: String,
    /// Quantity as typed, e.g. "2" or "1.5"; non-numbers count as 0
    pub quantity: String,
    /// Unit, e.g. "grams", "ml", "cup", "piece"
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectFoodParams {
    /// Catalog food ID
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetQuantityParams {
    /// Quantity as typed; non-numbers count as 0
    pub quantity: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetUnitParams {
    /// One of the selected food's unit options
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDayParams {
    /// ISO date (YYYY-MM-DD); defaults to the selected day
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectDateParams {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetGoalsParams {
    /// Daily calorie goal
    pub target_calories: Option<f64>,
    /// Calories burned today
    pub calories_out: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SimulatePhotoPickParams {
    /// "photo_library" or "camera"
    pub source: String,
    /// Whether the platform granted access (default true)
    #[serde(default = "default_true")]
    pub permission_granted: bool,
    /// Whether the user backed out of the picker (default false)
    #[serde(default)]
    pub canceled: bool,
    /// Image URI returned by the picker
    pub uri: Option<String>,
}

fn default_true() -> bool { true }

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FoodLogService {
    // --- Status ---

    #[tool(description = "Get the current status of the FoodLog service including build info, session counts and process information")]
    async fn foodlog_status(&self) -> Result<CallToolResult, McpError> {
        let screen = self.screen.lock().await;
        json_result(&self.status_tracker.get_status(&screen))
    }

    #[tool(description = "Get instructions for searching foods and logging them. Call this when starting a food logging session.")]
    fn logging_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(LOGGING_INSTRUCTIONS)]))
    }

    // --- Catalog ---

    #[tool(description = "List every food in the catalog with its reference weight, calories and units")]
    fn list_catalog(&self) -> Result<CallToolResult, McpError> {
        let items: Vec<FoodSummary> = catalog().iter().map(FoodSummary::from).collect();
        json_result(&CatalogResponse { total: items.len(), items })
    }

    #[tool(description = "Search foods by name (case-insensitive substring). An empty query returns no results.")]
    async fn search_foods(&self, Parameters(p): Parameters<SearchFoodsParams>) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        screen.set_query(&p.query);
        json_result(&search_response(screen.query()))
    }

    #[tool(description = "Convert a quantity and unit of a food to grams and scale its macros, without touching the log")]
    fn calculate_macros(&self, Parameters(p): Parameters<CalculateMacrosParams>) -> Result<CallToolResult, McpError> {
        let food = find_food(&p.food_id)
            .ok_or_else(|| invalid(FoodLogError::UnknownFood(p.food_id.clone())))?;
        let quantity = parse_quantity(&p.quantity);
        let scaled = scale_macros(&food.base, grams_for(quantity, &p.unit, Some(food)));
        json_result(&CalculateMacrosResponse {
            food_id: food.id.clone(),
            food_name: food.name.clone(),
            quantity,
            unit: p.unit,
            scaled,
        })
    }

    // --- Selection ---

    #[tool(description = "Select a food to log. Resets quantity to 1 and the unit to the food's first unit; returns the macro preview.")]
    async fn select_food(&self, Parameters(p): Parameters<SelectFoodParams>) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        let selection = screen.select_food(&p.id).map_err(invalid)?;
        json_result(&SelectionResponse::from(Some(selection)))
    }

    #[tool(description = "Set the quantity text for the selected food; returns the macro preview")]
    async fn set_quantity(&self, Parameters(p): Parameters<SetQuantityParams>) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        json_result(&SelectionResponse::from(screen.set_quantity(&p.quantity)))
    }

    #[tool(description = "Set the unit for the selected food; returns the macro preview")]
    async fn set_unit(&self, Parameters(p): Parameters<SetUnitParams>) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        json_result(&SelectionResponse::from(screen.set_unit(&p.unit)))
    }

    #[tool(description = "Show the selected food, quantity, unit and scaled macros")]
    async fn preview_selection(&self) -> Result<CallToolResult, McpError> {
        let screen = self.screen.lock().await;
        json_result(&SelectionResponse::from(screen.selection()))
    }

    #[tool(description = "Add the selected food to the selected day's log, then clear the selection and search")]
    async fn add_to_log(&self) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        let entry = screen.add_to_log().map_err(invalid)?;
        json_result(&AddToLogResponse { entry, day: screen.summary() })
    }

    // --- Days ---

    #[tool(description = "Get totals, net calories, goal progress and entries for a day (default: the selected day)")]
    async fn get_day(&self, Parameters(p): Parameters<GetDayParams>) -> Result<CallToolResult, McpError> {
        let screen = self.screen.lock().await;
        let summary = match p.date.as_deref() {
            Some(date) => screen.summary_for(parse_date(date).map_err(invalid)?),
            None => screen.summary(),
        };
        json_result(&summary)
    }

    #[tool(description = "List all days with logged food, oldest first")]
    async fn list_days(&self) -> Result<CallToolResult, McpError> {
        let screen = self.screen.lock().await;
        let days = screen.logged_days();
        json_result(&ListDaysResponse { total: days.len(), days })
    }

    #[tool(description = "Move the selected day back by one day; returns that day's summary")]
    async fn previous_day(&self) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        screen.previous_day();
        json_result(&screen.summary())
    }

    #[tool(description = "Move the selected day forward by one day; returns that day's summary")]
    async fn next_day(&self) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        screen.next_day();
        json_result(&screen.summary())
    }

    #[tool(description = "Jump the selected day to today; returns today's summary")]
    async fn go_to_today(&self) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        screen.go_to_today(Local::now().date_naive());
        json_result(&screen.summary())
    }

    #[tool(description = "Select a specific day (YYYY-MM-DD); returns that day's summary")]
    async fn select_date(&self, Parameters(p): Parameters<SelectDateParams>) -> Result<CallToolResult, McpError> {
        let date = parse_date(&p.date).map_err(invalid)?;
        let mut screen = self.screen.lock().await;
        screen.select_date(date);
        json_result(&screen.summary())
    }

    #[tool(description = "Set the daily calorie goal and/or calories burned; returns the selected day's summary")]
    async fn set_goals(&self, Parameters(p): Parameters<SetGoalsParams>) -> Result<CallToolResult, McpError> {
        let mut screen = self.screen.lock().await;
        if let Some(target) = p.target_calories {
            screen.set_target_calories(target);
        }
        if let Some(out) = p.calories_out {
            screen.set_calories_out(out);
        }
        json_result(&screen.summary())
    }

    // --- Photos ---

    #[tool(description = "Replay a photo picker result (photo_library or camera). A recognized photo becomes the current selection.")]
    async fn simulate_photo_pick(&self, Parameters(p): Parameters<SimulatePhotoPickParams>) -> Result<CallToolResult, McpError> {
        let source = ImageSource::from_str(&p.source).ok_or_else(|| {
            McpError::invalid_params(
                format!("Unknown image source '{}', expected photo_library or camera", p.source),
                None,
            )
        })?;
        let outcome = if !p.permission_granted {
            PickerOutcome::PermissionDenied
        } else if p.canceled {
            PickerOutcome::Canceled
        } else {
            PickerOutcome::Selected(CapturedImage { uri: p.uri })
        };

        let mut screen = self.screen.lock().await;
        let result = screen
            .apply_picker(source, outcome, self.recognizer.as_ref())
            .await
            .map_err(invalid)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FoodLogService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "foodlog".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FoodLog".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FoodLog - food search, macro scaling and daily food logging. \
                 Call logging_instructions first. \
                 Catalog: list_catalog/search_foods/calculate_macros. \
                 Logging: select_food, set_quantity, set_unit, preview_selection, add_to_log. \
                 Days: get_day/list_days, previous_day/next_day/go_to_today/select_date, set_goals. \
                 Photos: simulate_photo_pick. Status: foodlog_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info() {
        let info = FoodLogService::new(Config::default()).get_info();
        assert_eq!(info.server_info.name, "foodlog");
        assert_eq!(info.server_info.version, crate::build_info::VERSION);
    }

    #[test]
    fn test_calculate_macros_unknown_food() {
        let service = FoodLogService::new(Config::default());
        let result = service.calculate_macros(Parameters(CalculateMacrosParams {
            food_id: "pizza".to_string(),
            quantity: "1".to_string(),
            unit: "grams".to_string(),
        }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_select_and_add_through_tools() {
        let service = FoodLogService::new(Config::default());
        assert!(service.add_to_log().await.is_err());

        service
            .select_food(Parameters(SelectFoodParams { id: "roti".to_string() }))
            .await
            .unwrap();
        service
            .set_quantity(Parameters(SetQuantityParams { quantity: "2".to_string() }))
            .await
            .unwrap();
        service.add_to_log().await.unwrap();

        let screen = service.screen.lock().await;
        let summary = screen.summary();
        assert_eq!(summary.consumed, 220.0);
        assert_eq!(summary.entries.len(), 1);
    }

    #[tokio::test]
    async fn test_photo_pick_rejects_unknown_source() {
        let service = FoodLogService::new(Config::default());
        let result = service
            .simulate_photo_pick(Parameters(SimulatePhotoPickParams {
                source: "scanner".to_string(),
                permission_granted: true,
                canceled: false,
                uri: None,
            }))
            .await;
        assert!(result.is_err());
    }
}
