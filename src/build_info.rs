//! Build information
//!
//! Compile-time constants embedded by `build.rs`.

use serde::Serialize;

use crate::config::Config;

pub const BUILD_NUMBER: u64 = match option_env!("FOODLOG_BUILD_NUMBER") {
    Some(s) => match parse_build_number(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// ISO 8601 build timestamp
pub const BUILD_TIMESTAMP: &str = match option_env!("FOODLOG_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Parses a decimal build number in a const context
const fn parse_build_number(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }
}

/// Print the startup banner to stderr (stdout carries the MCP transport)
pub fn print_startup_banner(config: &Config) {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  FoodLog {} (build {})", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!(
        "  Goal: {} kcal | Photo capture: {}",
        config.target_calories,
        if config.photo_capture { "on" } else { "off" }
    );
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_number() {
        assert_eq!(parse_build_number("42"), Some(42));
        assert_eq!(parse_build_number("0"), Some(0));
        assert_eq!(parse_build_number(""), None);
        assert_eq!(parse_build_number("4a"), None);
    }

    #[test]
    fn test_build_info_current() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "foodlog");
        assert_eq!(info.version, VERSION);
    }
}
