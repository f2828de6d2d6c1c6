use crate::error::Result;
use crate::models::{CanvasId, ChartSeries};

/// Port for the external charting capability.
///
/// The backend draws and hands ownership of the chart instance back to the
/// caller, which must pass it to `destroy` before drawing on the same canvas
/// again.
pub trait ChartBackend {
    /// Live chart instance
    type Chart;

    /// Draw a bar chart of `series` on `canvas`
    fn draw(&mut self, canvas: &CanvasId, series: &ChartSeries) -> Result<Self::Chart>;

    /// Tear down a chart returned by `draw`
    fn destroy(&mut self, chart: Self::Chart);
}
