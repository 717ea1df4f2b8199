//! Data models for podlytics commands and services
//!
//! This module organizes the chart and forecast structs passed between
//! commands, services, and the chart backend.

pub mod chart;
pub mod forecast;

// Re-export commonly used types for convenience
pub use chart::{ChartHandle, ChartSeries, ChartSpec};
pub use forecast::ForecastResult;
