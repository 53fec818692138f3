//! Panel configuration parsed from environment variables.

use std::path::PathBuf;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, HEADER_PATHS};

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Initial canvas width, until the window reports a real size.
    pub width: f64,
    /// Initial canvas height.
    pub height: f64,
    /// Header image locations, tried in order.
    pub header_paths: Vec<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            header_paths: HEADER_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl UiConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `REFRACTOR_UI_WIDTH`: default 956
    /// - `REFRACTOR_UI_HEIGHT`: default 546
    /// - `REFRACTOR_HEADER_PATH`: tried before the install locations
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`UiConfig::from_env`] with an injectable variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            width: parse_extent(lookup("REFRACTOR_UI_WIDTH"), CANVAS_WIDTH),
            height: parse_extent(lookup("REFRACTOR_UI_HEIGHT"), CANVAS_HEIGHT),
            ..Self::default()
        };
        if let Some(path) = lookup("REFRACTOR_HEADER_PATH").filter(|p| !p.trim().is_empty()) {
            config.header_paths.insert(0, PathBuf::from(path));
        }
        config
    }
}

fn parse_extent(raw: Option<String>, default: f64) -> f64 {
    match raw.map(|v| v.trim().parse::<f64>()) {
        Some(Ok(v)) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
