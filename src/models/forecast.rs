//! Forecast models

use crate::api::listeners::ListenerPoint;

/// Result of a linear listener forecast
#[derive(Debug, Clone)]
pub struct ForecastResult {
    pub slope: f64,
    pub intercept: f64,
    pub observed: usize,
    pub points: Vec<ListenerPoint>,
}
