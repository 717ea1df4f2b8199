use crate::api::listeners::AnalyticsClient;
use crate::models::ChartSpec;
use crate::services::chart_service::{self, PlottersBackend};
use crate::services::{forecast_service, series_service};
use crate::utils::{user_facing_message, ChartError};

const DEFAULT_HORIZON_DAYS: usize = 30;

/// Fetch a listener series, extend it with a linear projection, and
/// render the combined chart
pub async fn execute(args: &[&str]) -> Result<(), String> {
    tracing::info!("🔮 Forecast command called with args: {:?}", args);

    if args.len() < 2 {
        return Err(
            "❌ Usage: `podlytics forecast <url> <mount.png> [days] [label] [color]`".to_string(),
        );
    }

    let url = args[0];
    let mount = args[1];
    let days: usize = match args.get(2) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("❌ Invalid forecast horizon: '{}'", raw))?,
        None => DEFAULT_HORIZON_DAYS,
    };
    let label = args.get(3).copied().unwrap_or("Listeners (forecast)");
    let color = args.get(4).copied().unwrap_or(super::chart::DEFAULT_COLOR);

    let client = AnalyticsClient::new();
    let mut points = client
        .fetch_listener_series(url)
        .await
        .map_err(|e| user_facing_message(&ChartError::Api(e)))?;

    let forecast =
        forecast_service::forecast_listeners(&points, days).map_err(|e| user_facing_message(&e))?;
    tracing::info!(
        "Projected {} days (slope {:.2}/day over {} observations)",
        days,
        forecast.slope,
        forecast.observed
    );
    points.extend(forecast.points.iter().cloned());

    let series = series_service::shape_series(&points);
    let (width, height) = super::chart::chart_dimensions();
    let spec = ChartSpec::new(label, color).with_size(width, height);

    let handle = chart_service::publish_chart(&PlottersBackend, &series, &spec, mount)
        .map_err(|e| user_facing_message(&e))?;

    println!(
        "🔮 {} -> {} ({} observed + {} projected points)",
        label, handle.mount, forecast.observed, days
    );

    Ok(())
}
