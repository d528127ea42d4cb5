//! Drilldown Menu TUI Library
//!
//! Exposes the navigation core and pure logic modules for testing

pub mod config;
pub mod logic;
pub mod model;

/// Item detail display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Off,          // Labels only
    Descriptions, // Show item descriptions next to labels
}

impl DisplayMode {
    /// Cycle to the next mode (single toggle for now)
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Off => DisplayMode::Descriptions,
            DisplayMode::Descriptions => DisplayMode::Off,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DisplayMode::Off => "Labels",
            DisplayMode::Descriptions => "Details",
        }
    }
}
