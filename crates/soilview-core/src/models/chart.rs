use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the canvas a chart is bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasId(pub String);

impl CanvasId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CanvasId {
    fn default() -> Self {
        Self::new("nutrientChart")
    }
}

impl fmt::Display for CanvasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category to value series for a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Dataset label
    pub label: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Category/value pairs in order
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories.iter().map(String::as_str).zip(self.values.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
