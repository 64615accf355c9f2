use livechart_rs::core::{ChartRange, PlotSize, build_series_path};
use proptest::prelude::*;

proptest! {
    #[test]
    fn path_points_are_finite_and_inside_plot_height(
        values in proptest::collection::vec(0.0f64..5_000.0, 4..64),
        max in 1.0f64..5_000.0,
        width in 0.0f64..2_000.0,
        height in 1.0f64..2_000.0,
        offset in -500.0f64..500.0
    ) {
        let path = build_series_path(&values, ChartRange::new(max), PlotSize::new(width, height));
        prop_assert_eq!(path.len(), values.len());

        for (x, y) in path.points(offset) {
            prop_assert!(x.is_finite());
            prop_assert!(y >= 0.0 && y <= height.round());
        }
    }

    #[test]
    fn points_advance_by_step_width(
        count in 4usize..64,
        width in 1.0f64..2_000.0
    ) {
        let values = vec![0.0; count];
        let path = build_series_path(&values, ChartRange::new(1.0), PlotSize::new(width, 10.0));
        let points = path.points(0.0);

        for pair in points.windows(2) {
            let gap = pair[1].0 - pair[0].0;
            prop_assert!((gap - path.step_width).abs() <= 1e-6 * path.step_width.max(1.0));
        }
        let expected_line = path.step_width * (count - 1) as f64;
        prop_assert!((path.line_width - expected_line).abs() <= 1e-9 * expected_line.max(1.0));
    }
}
