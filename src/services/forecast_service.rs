use chrono::{Duration, NaiveDate, Utc};
use tracing::debug;

use crate::api::listeners::ListenerPoint;
use crate::models::ForecastResult;
use crate::utils::ChartError;

/// Least-squares fit of y against x. Returns (slope, intercept), or None
/// when there are fewer than two distinct observations.
fn fit_line(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    if xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

/// Project the daily listener trend `days` past the end of the series.
///
/// Fits the observed daily counts against their point index, skipping
/// points with no daily count. Projected counts are clamped at zero and
/// dated by continuing from the final label, or from today when that
/// label is not a plain `YYYY-MM-DD` date.
pub fn forecast_listeners(
    points: &[ListenerPoint],
    days: usize,
) -> Result<ForecastResult, ChartError> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (i, point) in points.iter().enumerate() {
        if let Some(count) = point.daily_listeners {
            xs.push(i as f64);
            ys.push(count);
        }
    }

    let (slope, intercept) = fit_line(&xs, &ys).ok_or_else(|| {
        ChartError::Forecast(format!(
            "need at least 2 observed days, got {}",
            xs.len()
        ))
    })?;
    debug!(
        "Fitted listener trend over {} observations: slope {:.4}, intercept {:.4}",
        xs.len(),
        slope,
        intercept
    );

    let last_date = points
        .last()
        .and_then(|p| NaiveDate::parse_from_str(&p.date, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive());

    let last_index = points.len() - 1;
    let mut projected = Vec::with_capacity(days);
    for offset in 1..=days {
        let x = (last_index + offset) as f64;
        let date = last_date + Duration::days(offset as i64);
        projected.push(ListenerPoint {
            date: date.format("%Y-%m-%d").to_string(),
            daily_listeners: None,
            predicted_listeners: Some((slope * x + intercept).max(0.0)),
        });
    }

    Ok(ForecastResult {
        slope,
        intercept,
        observed: xs.len(),
        points: projected,
    })
}
