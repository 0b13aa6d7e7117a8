//! FoodLog Tools module
//!
//! Session logic behind the MCP tools.

pub mod recognizer;
pub mod screen;
pub mod search;
pub mod status;
