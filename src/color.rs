use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Column;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Base hue for each charted metric, evenly spread over the colour wheel.
fn metric_hue(metric: Column) -> f32 {
    let n = Column::METRICS.len();
    let idx = Column::METRICS
        .iter()
        .position(|&m| m == metric)
        .unwrap_or(0);
    (idx as f32 / n as f32) * 360.0 + 210.0
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colours for the raw trace and its moving average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColors {
    pub raw: Color32,
    pub moving_average: Color32,
}

impl SeriesColors {
    /// The raw trace is a pale tint so the average stands out on top of it.
    pub fn for_metric(metric: Column) -> Self {
        let hue = metric_hue(metric);
        SeriesColors {
            raw: hsl_to_color32(hue, 0.45, 0.72),
            moving_average: hsl_to_color32(hue + 180.0, 0.85, 0.50),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_and_average_differ() {
        for metric in Column::METRICS {
            let c = SeriesColors::for_metric(metric);
            assert_ne!(c.raw, c.moving_average);
        }
    }

    #[test]
    fn metrics_get_distinct_averages() {
        let colors: Vec<_> = Column::METRICS
            .iter()
            .map(|&m| SeriesColors::for_metric(m).moving_average)
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
