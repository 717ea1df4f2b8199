//! Chart models

use chrono::{DateTime, Utc};

/// Index-aligned label and value sequences shaped from a listener series.
/// `None` marks a point that supplied neither numeric field.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Line chart configuration handed to the chart backend
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub label: String,
    pub color: String,
    pub tension: f64,
    pub width: u32,
    pub height: u32,
    pub begin_at_zero: bool,
}

impl ChartSpec {
    /// A spec with the dashboard defaults: mild smoothing, 1024x768,
    /// value axis starting at zero.
    pub fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            tension: 0.1,
            width: 1024,
            height: 768,
            begin_at_zero: true,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Record of a chart rendered onto a mount point
#[derive(Debug, Clone)]
pub struct ChartHandle {
    pub mount: String,
    pub label: String,
    pub point_count: usize,
    pub byte_len: usize,
    pub rendered_at: DateTime<Utc>,
}
