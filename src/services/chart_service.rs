use plotters::prelude::*;
use std::fs;
use tracing::debug;

use crate::api::listeners::AnalyticsClient;
use crate::models::{ChartHandle, ChartSeries, ChartSpec};
use crate::services::series_service;
use crate::utils::registry;
use crate::utils::{parse_color, ChartError};

/// Charting collaborator: turns a spec and a shaped series into PNG bytes.
/// Injected into the loader so tests can substitute a double.
pub trait ChartBackend {
    fn render(&self, spec: &ChartSpec, series: &ChartSeries) -> Result<Vec<u8>, ChartError>;
}

/// Production backend drawing with plotters
pub struct PlottersBackend;

impl ChartBackend for PlottersBackend {
    fn render(&self, spec: &ChartSpec, series: &ChartSeries) -> Result<Vec<u8>, ChartError> {
        let stroke = parse_color(&spec.color)?;

        // Use a temporary file path for BitMapBackend
        let temp_file = format!(
            "/tmp/podlytics_chart_{}.png",
            chrono::Utc::now().timestamp_millis()
        );

        {
            let backend = BitMapBackend::new(&temp_file, (spec.width, spec.height));
            let root = backend.into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

            // The x axis is the point index; date labels are shown verbatim
            let point_count = series.len();
            let x_max = if point_count > 1 {
                (point_count - 1) as f64
            } else {
                1.0
            };

            let plotted: Vec<f64> = series.values.iter().flatten().copied().collect();
            let (y_min, y_max) = if plotted.is_empty() {
                // Empty series still gets axes, just with a unit range
                (0.0, 1.0)
            } else {
                let min_value = plotted.iter().copied().fold(f64::INFINITY, f64::min);
                let max_value = plotted.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let range = (max_value - min_value).max(1e-8);
                let padding = range * 0.1;
                let y_min = if spec.begin_at_zero {
                    0.0
                } else {
                    (min_value - padding).max(0.0)
                };
                (y_min, max_value + padding)
            };

            let labels = series.labels.clone();
            let label_fmt = |x: &f64| -> String {
                let idx = x.round();
                if idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            };

            let mut chart = ChartBuilder::on(&root)
                .caption(&spec.label, ("sans-serif", 40.0).into_font())
                .margin(15)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(-0.5..x_max + 0.5, y_min..y_max)
                .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

            chart
                .configure_mesh()
                .y_desc("Listeners")
                .x_desc("Date")
                .x_labels(series.len().clamp(2, 12))
                .x_label_formatter(&label_fmt)
                .draw()
                .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

            // Each run of present values becomes one smoothed line; gaps
            // stay gaps, and isolated points are drawn as markers only
            for run in contiguous_runs(&series.values) {
                if run.len() > 1 {
                    let path = smooth_run(&run, spec.tension);
                    chart
                        .draw_series(std::iter::once(PathElement::new(
                            path,
                            stroke.stroke_width(2),
                        )))
                        .map_err(|e| ChartError::Render(format!("Failed to draw line: {}", e)))?;
                }
                for &(x, y) in &run {
                    chart
                        .draw_series(std::iter::once(Circle::new((x, y), 3, stroke.filled())))
                        .map_err(|e| ChartError::Render(format!("Failed to draw point: {}", e)))?;
                }
            }

            root.present()
                .map_err(|e| ChartError::Render(format!("Failed to render chart: {}", e)))?;
        }

        // Read the temporary file into memory
        let image_data = fs::read(&temp_file)
            .map_err(|e| ChartError::Render(format!("Failed to read chart file: {}", e)))?;

        // Clean up temporary file
        let _ = fs::remove_file(&temp_file);

        Ok(image_data)
    }
}

/// Split the plotted values into runs of consecutive present points,
/// keyed by their index on the x axis
fn contiguous_runs(values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push((i as f64, *v)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Sample a cardinal spline through `points`.
///
/// Tension 0 keeps the straight polyline; 0.1 gives the mild bend the
/// dashboard charts use. The sampled curve passes through every knot.
pub fn smooth_run(points: &[(f64, f64)], tension: f64) -> Vec<(f64, f64)> {
    if tension <= 0.0 || points.len() < 3 {
        return points.to_vec();
    }

    const STEPS: usize = 8;
    let mut sampled = Vec::with_capacity((points.len() - 1) * STEPS + 1);
    sampled.push(points[0]);

    for i in 0..points.len() - 1 {
        let p0 = if i == 0 { points[0] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < points.len() {
            points[i + 2]
        } else {
            points[i + 1]
        };

        let m1 = ((p2.0 - p0.0) * tension, (p2.1 - p0.1) * tension);
        let m2 = ((p3.0 - p1.0) * tension, (p3.1 - p1.1) * tension);

        for step in 1..=STEPS {
            let t = step as f64 / STEPS as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;
            sampled.push((
                h00 * p1.0 + h10 * m1.0 + h01 * p2.0 + h11 * m2.0,
                h00 * p1.1 + h10 * m1.1 + h01 * p2.1 + h11 * m2.1,
            ));
        }
    }

    sampled
}

/// Fetch a listener series from `url` and render it onto `mount`.
///
/// The full pipeline behind the `chart` command: one GET, shape the
/// labels/values, render through the injected backend, write the PNG,
/// and register the handle.
pub async fn render_listener_chart(
    client: &AnalyticsClient,
    backend: &dyn ChartBackend,
    url: &str,
    mount: &str,
    spec: ChartSpec,
) -> Result<ChartHandle, ChartError> {
    let points = client.fetch_listener_series(url).await?;
    debug!("Fetched {} listener points from {}", points.len(), url);

    let series = series_service::shape_series(&points);
    publish_chart(backend, &series, &spec, mount)
}

/// Render a shaped series and install it on a mount point, displacing
/// any chart already mounted there
pub fn publish_chart(
    backend: &dyn ChartBackend,
    series: &ChartSeries,
    spec: &ChartSpec,
    mount: &str,
) -> Result<ChartHandle, ChartError> {
    let image_data = backend.render(spec, series)?;

    fs::write(mount, &image_data).map_err(|e| ChartError::Mount(format!("{}: {}", mount, e)))?;

    let handle = ChartHandle {
        mount: mount.to_string(),
        label: spec.label.clone(),
        point_count: series.len(),
        byte_len: image_data.len(),
        rendered_at: chrono::Utc::now(),
    };

    if let Some(previous) = registry::register(handle.clone()) {
        debug!(
            "Disposed previous chart on {} ({} points, rendered at {})",
            mount, previous.point_count, previous.rendered_at
        );
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Backend double that records what it was asked to draw
    struct RecordingBackend {
        rendered: Mutex<Vec<(ChartSpec, ChartSeries)>>,
    }

    impl RecordingBackend {
        fn new() -> Self {
            Self {
                rendered: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChartBackend for RecordingBackend {
        fn render(&self, spec: &ChartSpec, series: &ChartSeries) -> Result<Vec<u8>, ChartError> {
            self.rendered
                .lock()
                .unwrap()
                .push((spec.clone(), series.clone()));
            Ok(vec![0x89, b'P', b'N', b'G'])
        }
    }

    /// Backend double that always fails
    struct FailingBackend;

    impl ChartBackend for FailingBackend {
        fn render(&self, _spec: &ChartSpec, _series: &ChartSeries) -> Result<Vec<u8>, ChartError> {
            Err(ChartError::Render("no surface".to_string()))
        }
    }

    fn series(values: Vec<Option<f64>>) -> ChartSeries {
        let labels = (0..values.len()).map(|i| format!("2024-01-{:02}", i + 1)).collect();
        ChartSeries { labels, values }
    }

    fn temp_mount(name: &str) -> String {
        std::env::temp_dir()
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn publish_hands_spec_and_series_to_the_backend() {
        let backend = RecordingBackend::new();
        let spec = ChartSpec::new("Daily Listeners", "#3e95cd");
        let mount = temp_mount("podlytics_publish_test.png");

        let handle =
            publish_chart(&backend, &series(vec![Some(100.0), Some(120.0)]), &spec, &mount)
                .expect("publish failed");

        assert_eq!(handle.point_count, 2);
        assert_eq!(handle.byte_len, 4);
        let drawn = backend.rendered.lock().unwrap();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].0.label, "Daily Listeners");
        assert_eq!(drawn[0].1.values, vec![Some(100.0), Some(120.0)]);

        assert!(std::fs::read(&mount).unwrap().starts_with(&[0x89, b'P']));
        let _ = std::fs::remove_file(&mount);
        registry::release(&mount);
    }

    #[test]
    fn republishing_a_mount_replaces_the_registered_chart() {
        let backend = RecordingBackend::new();
        let spec = ChartSpec::new("Daily Listeners", "blue");
        let mount = temp_mount("podlytics_replace_test.png");

        publish_chart(&backend, &series(vec![Some(1.0)]), &spec, &mount).unwrap();
        publish_chart(&backend, &series(vec![Some(1.0), Some(2.0)]), &spec, &mount).unwrap();

        let live = registry::active(&mount).expect("no live chart");
        assert_eq!(live.point_count, 2);

        let _ = std::fs::remove_file(&mount);
        registry::release(&mount);
    }

    #[test]
    fn backend_failure_neither_mounts_nor_registers() {
        let spec = ChartSpec::new("Daily Listeners", "blue");
        let mount = temp_mount("podlytics_failure_test.png");

        let result = publish_chart(&FailingBackend, &series(vec![Some(1.0)]), &spec, &mount);
        assert!(matches!(result, Err(ChartError::Render(_))));
        assert!(!std::path::Path::new(&mount).exists());
        assert!(registry::active(&mount).is_none());
    }

    #[test]
    fn unwritable_mount_fails_with_mount_error() {
        let backend = RecordingBackend::new();
        let spec = ChartSpec::new("Daily Listeners", "blue");
        let mount = temp_mount("no_such_dir/podlytics_mount_test.png");

        let result = publish_chart(&backend, &series(vec![Some(1.0)]), &spec, &mount);
        assert!(matches!(result, Err(ChartError::Mount(_))));
    }

    #[test]
    fn empty_series_still_publishes() {
        let backend = RecordingBackend::new();
        let spec = ChartSpec::new("Daily Listeners", "blue");
        let mount = temp_mount("podlytics_empty_test.png");

        let handle = publish_chart(&backend, &series(vec![]), &spec, &mount).unwrap();
        assert_eq!(handle.point_count, 0);

        let _ = std::fs::remove_file(&mount);
        registry::release(&mount);
    }

    #[test]
    fn gaps_split_the_line_into_runs() {
        let runs = contiguous_runs(&[Some(1.0), Some(2.0), None, Some(4.0), None, None]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 1.0), (1.0, 2.0)]);
        assert_eq!(runs[1], vec![(3.0, 4.0)]);
    }

    #[test]
    fn no_values_means_no_runs() {
        assert!(contiguous_runs(&[None, None]).is_empty());
        assert!(contiguous_runs(&[]).is_empty());
    }

    #[test]
    fn zero_tension_keeps_the_polyline() {
        let points = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)];
        assert_eq!(smooth_run(&points, 0.0), points);
    }

    #[test]
    fn smoothing_passes_through_every_knot() {
        let points = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 5.0)];
        let sampled = smooth_run(&points, 0.1);
        for knot in &points {
            assert!(
                sampled
                    .iter()
                    .any(|p| (p.0 - knot.0).abs() < 1e-9 && (p.1 - knot.1).abs() < 1e-9),
                "knot {:?} missing from sampled curve",
                knot
            );
        }
        assert!(sampled.len() > points.len());
    }

    #[test]
    fn short_runs_are_not_smoothed() {
        let pair = vec![(0.0, 1.0), (1.0, 2.0)];
        assert_eq!(smooth_run(&pair, 0.1), pair);
    }
}
