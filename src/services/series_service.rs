use crate::api::listeners::ListenerPoint;
use crate::models::ChartSeries;

/// Shape a fetched listener series into index-aligned labels and values.
/// Labels carry the `date` strings verbatim; values follow the fallback
/// rule in [`plotted_value`].
pub fn shape_series(points: &[ListenerPoint]) -> ChartSeries {
    ChartSeries {
        labels: points.iter().map(|p| p.date.clone()).collect(),
        values: points.iter().map(plotted_value).collect(),
    }
}

/// Pick the plotted value for a single point.
///
/// A zero daily count falls through to the prediction, exactly as the
/// upstream dashboard behaves. Real zero-listener days are therefore
/// plotted as the prediction (or as a gap when there is none).
pub fn plotted_value(point: &ListenerPoint) -> Option<f64> {
    match point.daily_listeners {
        Some(count) if count != 0.0 => Some(count),
        _ => point.predicted_listeners,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, daily: Option<f64>, predicted: Option<f64>) -> ListenerPoint {
        ListenerPoint {
            date: date.to_string(),
            daily_listeners: daily,
            predicted_listeners: predicted,
        }
    }

    #[test]
    fn labels_keep_input_length_and_order() {
        let points = vec![
            point("2024-01-01", Some(100.0), None),
            point("2024-01-02", None, Some(120.0)),
            point("2024-01-03", None, None),
        ];
        let series = shape_series(&points);
        assert_eq!(
            series.labels,
            vec!["2024-01-01", "2024-01-02", "2024-01-03"]
        );
        assert_eq!(series.values.len(), 3);
    }

    #[test]
    fn nonzero_daily_count_wins() {
        assert_eq!(
            plotted_value(&point("2024-01-01", Some(42.0), Some(99.0))),
            Some(42.0)
        );
    }

    #[test]
    fn missing_daily_count_falls_back_to_prediction() {
        assert_eq!(
            plotted_value(&point("2024-01-02", None, Some(120.0))),
            Some(120.0)
        );
    }

    #[test]
    fn zero_daily_count_falls_back_to_prediction() {
        // The zero-is-missing quirk: a genuine 0 is discarded
        assert_eq!(
            plotted_value(&point("2024-01-03", Some(0.0), Some(50.0))),
            Some(50.0)
        );
        assert_eq!(plotted_value(&point("2024-01-03", Some(0.0), None)), None);
    }

    #[test]
    fn both_fields_absent_yields_a_gap() {
        assert_eq!(plotted_value(&point("2024-01-04", None, None)), None);
    }

    #[test]
    fn mixed_series_scenario() {
        let points = vec![
            point("2024-01-01", Some(100.0), None),
            point("2024-01-02", None, Some(120.0)),
        ];
        let series = shape_series(&points);
        assert_eq!(series.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(series.values, vec![Some(100.0), Some(120.0)]);
    }

    #[test]
    fn empty_input_shapes_to_empty_series() {
        let series = shape_series(&[]);
        assert!(series.is_empty());
        assert!(series.labels.is_empty());
        assert!(series.values.is_empty());
    }
}
