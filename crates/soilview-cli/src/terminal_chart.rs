//! Bar chart drawn with block characters.

use soilview_core::models::{CanvasId, ChartSeries};
use soilview_core::ports::ChartBackend;
use soilview_core::Result;

const BAR_WIDTH: usize = 40;

/// A chart laid out for the terminal, printed under its panel
#[derive(Debug)]
pub struct TerminalChart {
    canvas: CanvasId,
    title: String,
    lines: Vec<String>,
}

impl TerminalChart {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Chart backend that lays out horizontal bars
#[derive(Debug, Default)]
pub struct TerminalChartBackend;

impl ChartBackend for TerminalChartBackend {
    type Chart = TerminalChart;

    fn draw(&mut self, canvas: &CanvasId, series: &ChartSeries) -> Result<TerminalChart> {
        Ok(TerminalChart {
            canvas: canvas.clone(),
            title: format!("[{}] {}", canvas, series.label),
            lines: render_bars(series),
        })
    }

    fn destroy(&mut self, chart: TerminalChart) {
        tracing::debug!(canvas = %chart.canvas, lines = chart.lines.len(), "Chart discarded");
    }
}

/// One line per category, bars scaled to the largest value
pub fn render_bars(series: &ChartSeries) -> Vec<String> {
    let max = series.values.iter().copied().fold(0.0_f64, f64::max);
    let label_width = series.categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);

    series
        .points()
        .map(|(category, value)| {
            let filled = if max > 0.0 {
                ((value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!("{:<width$} {} {}", category, "█".repeat(filled), value, width = label_width)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soilview_core::models::SoilSample;

    #[test]
    fn test_bars_scale_to_largest_value() {
        let lines = render_bars(&SoilSample::chart_sample().chart_series());

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Potassium"));
        assert_eq!(lines[2].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[1].matches('█').count(), 20);
        assert!(lines[3].ends_with("6.5"));
    }

    #[test]
    fn test_draw_keeps_lines_for_the_panel() {
        let mut backend = TerminalChartBackend;
        let series = SoilSample::chart_sample().chart_series();

        let chart = backend.draw(&CanvasId::default(), &series).unwrap();
        assert_eq!(chart.lines(), render_bars(&series).as_slice());
        assert!(chart.title().starts_with("[nutrientChart]"));
    }

    #[test]
    fn test_empty_series_draws_nothing() {
        let series = ChartSeries {
            label: "empty".to_string(),
            categories: Vec::new(),
            values: Vec::new(),
        };
        assert!(render_bars(&series).is_empty());
    }
}
