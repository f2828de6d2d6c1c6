use std::collections::HashMap;

use crate::error::Result;
use crate::models::{CanvasId, ChartSeries};
use crate::ports::ChartBackend;

/// Keeps at most one live chart per canvas
pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
    live: HashMap<CanvasId, B::Chart>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Destroy whatever is bound to `canvas`, then draw `series` on it.
    ///
    /// If drawing fails the canvas is left empty.
    pub fn render_chart(&mut self, canvas: &CanvasId, series: &ChartSeries) -> Result<()> {
        if self.dispose(canvas) {
            tracing::debug!(canvas = %canvas, "Destroyed previous chart");
        }

        let chart = self.backend.draw(canvas, series)?;
        self.live.insert(canvas.clone(), chart);

        tracing::debug!(canvas = %canvas, points = series.values.len(), "Chart rendered");
        Ok(())
    }

    /// Destroy the chart bound to `canvas`, if any
    pub fn dispose(&mut self, canvas: &CanvasId) -> bool {
        match self.live.remove(canvas) {
            Some(chart) => {
                self.backend.destroy(chart);
                true
            }
            None => false,
        }
    }

    pub fn dispose_all(&mut self) {
        for (_, chart) in self.live.drain() {
            self.backend.destroy(chart);
        }
    }

    /// The chart currently bound to `canvas`
    pub fn chart(&self, canvas: &CanvasId) -> Option<&B::Chart> {
        self.live.get(canvas)
    }

    pub fn is_live(&self, canvas: &CanvasId) -> bool {
        self.live.contains_key(canvas)
    }

    /// Canvases with a live chart
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
