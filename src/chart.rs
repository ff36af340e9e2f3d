use crate::data::model::{Column, MetricTable};
use crate::data::smooth::{WindowSize, rolling_mean};

// ---------------------------------------------------------------------------
// Chart description (toolkit independent)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Connected line through every point.
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label.
    pub name: String,
    pub style: SeriesStyle,
    /// `[iteration, value]` pairs in row order.
    pub points: Vec<[f64; 2]>,
}

/// A raw series and its moving average against `Iteration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `[raw, moving average]`.
    pub series: [Series; 2],
}

impl Chart {
    pub fn raw(&self) -> &Series {
        &self.series[0]
    }

    pub fn moving_average(&self) -> &Series {
        &self.series[1]
    }
}

/// A chart under its section heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub metric: Column,
    pub heading: &'static str,
    pub chart: Chart,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Build the raw + moving-average chart for `metric`.
///
/// Rows without a full window get no point in the average series.
pub fn compose(table: &MetricTable, metric: Column, window: WindowSize) -> Chart {
    let x = table.column(Column::Iteration);
    let y = table.column(metric);
    let ma = rolling_mean(&y, window);

    let raw_points = x.iter().zip(&y).map(|(&xi, &yi)| [xi, yi]).collect();
    let ma_points = x
        .iter()
        .zip(&ma)
        .filter_map(|(&xi, mi)| mi.map(|m| [xi, m]))
        .collect();

    let name = metric.name();
    Chart {
        title: format!("{name} and Moving Average"),
        x_label: Column::Iteration.name().to_string(),
        y_label: name.to_string(),
        series: [
            Series {
                name: name.to_string(),
                style: SeriesStyle::Line,
                points: raw_points,
            },
            Series {
                name: format!("{name} (MA)"),
                style: SeriesStyle::Line,
                points: ma_points,
            },
        ],
    }
}

/// One panel per charted metric, in display order.
pub fn compose_dashboard(table: &MetricTable, window: WindowSize) -> Vec<Panel> {
    Column::METRICS
        .iter()
        .map(|&metric| Panel {
            metric,
            heading: metric.heading(),
            chart: compose(table, metric, window),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;

    fn log_lines() -> Vec<String> {
        [(3, 1.0), (5, 2.0), (8, 3.0), (9, 4.0)]
            .iter()
            .map(|(it, r)| {
                format!(
                    "Iter: {it} | Avg Reward: {r:.1} | Avg Return: {:.1} | Avg Value: 0.5 | Avg Episode Length: {:.1}",
                    r * 2.0,
                    100.0 + r
                )
            })
            .collect()
    }

    fn window(n: usize) -> WindowSize {
        WindowSize::new(n).unwrap()
    }

    #[test]
    fn labels_follow_metric() {
        let table = parse(log_lines());
        let chart = compose(&table, Column::AvgReward, window(2));

        assert_eq!(chart.title, "Avg Reward and Moving Average");
        assert_eq!(chart.x_label, "Iteration");
        assert_eq!(chart.y_label, "Avg Reward");
        assert_eq!(chart.raw().name, "Avg Reward");
        assert_eq!(chart.moving_average().name, "Avg Reward (MA)");
        assert!(chart.series.iter().all(|s| s.style == SeriesStyle::Line));
    }

    #[test]
    fn moving_average_omits_missing_rows() {
        let table = parse(log_lines());
        let chart = compose(&table, Column::AvgReward, window(2));

        assert_eq!(
            chart.raw().points,
            vec![[3.0, 1.0], [5.0, 2.0], [8.0, 3.0], [9.0, 4.0]]
        );
        assert_eq!(
            chart.moving_average().points,
            vec![[5.0, 1.5], [8.0, 2.5], [9.0, 3.5]]
        );
    }

    #[test]
    fn full_table_window_leaves_one_point() {
        let table = parse(log_lines());
        let chart = compose(&table, Column::AvgReward, window(4));
        assert_eq!(chart.moving_average().points, vec![[9.0, 2.5]]);
    }

    #[test]
    fn empty_table_gives_empty_series() {
        let chart = compose(&MetricTable::default(), Column::AvgValue, WindowSize::default());
        assert!(chart.raw().points.is_empty());
        assert!(chart.moving_average().points.is_empty());
        assert_eq!(chart.title, "Avg Value and Moving Average");
    }

    #[test]
    fn dashboard_has_four_panels_in_order() {
        let table = parse(log_lines());
        let panels = compose_dashboard(&table, WindowSize::default());

        let headings: Vec<_> = panels.iter().map(|p| p.heading).collect();
        assert_eq!(
            headings,
            [
                "Average Reward",
                "Average Return",
                "Average Value",
                "Average Episode Length"
            ]
        );
        assert_eq!(panels[3].chart.y_label, "Avg Episode Length");
        // Default window of 10 exceeds the four rows.
        assert!(panels.iter().all(|p| p.chart.moving_average().points.is_empty()));
    }

    #[test]
    fn composition_is_repeatable() {
        let lines = log_lines();
        let first = compose_dashboard(&parse(&lines), window(3));
        let second = compose_dashboard(&parse(&lines), window(3));
        assert_eq!(first, second);
    }
}
