use crate::api::listeners::AnalyticsClient;
use crate::models::ChartSpec;
use crate::services::chart_service::{self, PlottersBackend};
use crate::utils::user_facing_message;

pub const DEFAULT_LABEL: &str = "Daily Listeners";
pub const DEFAULT_COLOR: &str = "#3e95cd";

pub async fn execute(args: &[&str]) -> Result<(), String> {
    tracing::info!("📊 Chart command called with args: {:?}", args);

    if args.len() < 2 {
        return Err(
            "❌ Usage: `podlytics chart <url> <mount.png> [label] [color]`\n\
             Example: `podlytics chart http://localhost:5000/api/listeners daily.png`"
                .to_string(),
        );
    }

    let url = args[0];
    let mount = args[1];
    let label = args.get(2).copied().unwrap_or(DEFAULT_LABEL);
    let color = args.get(3).copied().unwrap_or(DEFAULT_COLOR);

    let (width, height) = chart_dimensions();
    let spec = ChartSpec::new(label, color).with_size(width, height);

    let client = AnalyticsClient::new();
    let handle = chart_service::render_listener_chart(&client, &PlottersBackend, url, mount, spec)
        .await
        .map_err(|e| user_facing_message(&e))?;

    tracing::info!(
        "✓ Chart rendered: {} ({} points, {} bytes)",
        handle.mount,
        handle.point_count,
        handle.byte_len
    );
    println!(
        "📈 {} -> {} ({} points)",
        handle.label, handle.mount, handle.point_count
    );

    Ok(())
}

/// Raster size, overridable through CHART_WIDTH / CHART_HEIGHT
pub(crate) fn chart_dimensions() -> (u32, u32) {
    let width = std::env::var("CHART_WIDTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1024);
    let height = std::env::var("CHART_HEIGHT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(768);
    (width, height)
}
