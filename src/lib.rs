//! FoodLog Library
//!
//! Food search, macro scaling and per-day food logging.

pub mod build_info;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
