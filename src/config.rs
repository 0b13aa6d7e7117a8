//! Runtime configuration
//!
//! Read once at startup from `FOODLOG_*` environment variables.

use thiserror::Error;

/// Default daily calorie goal
pub const DEFAULT_TARGET_CALORIES: f64 = 2000.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

/// Screen configuration
///
/// The rich and the simplified variants of the log screen differ only in
/// whether photo capture is offered.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub target_calories: f64,
    pub calories_out: f64,
    pub photo_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_calories: DEFAULT_TARGET_CALORIES,
            calories_out: 0.0,
            photo_capture: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            target_calories: number_var(&lookup, "FOODLOG_TARGET_CALORIES")?
                .unwrap_or(defaults.target_calories),
            calories_out: number_var(&lookup, "FOODLOG_CALORIES_OUT")?
                .unwrap_or(defaults.calories_out),
            photo_capture: flag_var(&lookup, "FOODLOG_PHOTO_CAPTURE")?
                .unwrap_or(defaults.photo_capture),
        })
    }
}

fn number_var<F>(lookup: &F, name: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        _ => Err(ConfigError::InvalidNumber { name, value: raw }),
    }
}

fn flag_var<F>(lookup: &F, name: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidFlag { name, value: raw }),
    }
}
