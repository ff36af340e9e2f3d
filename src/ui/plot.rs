use eframe::egui::{self, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::{Chart, SeriesStyle};
use crate::color::SeriesColors;
use crate::data::model::Column;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Metric charts (central panel)
// ---------------------------------------------------------------------------

pub fn empty_hint(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a training log to view metrics  (File → Open…, or drop a .log file)");
    });
}

/// Render every panel under its section heading.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    for panel in &state.panels {
        ui.heading(panel.heading);
        metric_chart(ui, panel.metric, &panel.chart);
        ui.add_space(12.0);
    }
}

fn metric_chart(ui: &mut Ui, metric: Column, chart: &Chart) {
    let colors = SeriesColors::for_metric(metric);

    ui.label(egui::RichText::new(&chart.title).strong());
    Plot::new(("metric_plot", metric))
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let traces = [
                (chart.raw(), colors.raw, 1.0_f32),
                (chart.moving_average(), colors.moving_average, 2.0),
            ];
            for (series, color, width) in traces {
                let points: PlotPoints = series.points.iter().copied().collect();
                match series.style {
                    SeriesStyle::Line => plot_ui.line(
                        Line::new(points)
                            .name(&series.name)
                            .color(color)
                            .width(width),
                    ),
                }
            }
        });
}
