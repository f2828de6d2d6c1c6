use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ChartSeries, Variant};

/// Nutrient measured in a soil sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
    #[serde(rename = "pH")]
    Ph,
}

impl Nutrient {
    /// Chart category label
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
            Nutrient::Ph => "pH",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nutrient::Ph => f.write_str("pH"),
            other => f.write_str(&other.label().to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientStatus {
    Low,
    Optimal,
    High,
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NutrientStatus::Low => "Low",
            NutrientStatus::Optimal => "Optimal",
            NutrientStatus::High => "High",
        };
        f.write_str(name)
    }
}

/// One reading in a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientReading {
    pub nutrient: Nutrient,
    pub value: f64,

    /// Empty for unitless readings such as pH
    pub unit: String,

    pub status: NutrientStatus,
}

impl NutrientReading {
    fn new(nutrient: Nutrient, value: f64, unit: &str, status: NutrientStatus) -> Self {
        Self {
            nutrient,
            value,
            unit: unit.to_string(),
            status,
        }
    }

    /// Value with its unit, e.g. `25 ppm`
    pub fn display_value(&self) -> String {
        if self.unit.is_empty() {
            format!("{}", self.value)
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

/// Static demo sample shown on the home and dashboard panels.
///
/// Display-only: it is never derived from uploaded photos and never changes
/// while the process runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub id: String,
    pub date: NaiveDate,

    /// Readings in display order
    pub nutrients: Vec<NutrientReading>,

    pub recommendation: String,
}

impl SoilSample {
    /// The sample baked into a variant
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Basic | Variant::Portal => Self::field_sample(),
            Variant::Dashboard => Self::chart_sample(),
        }
    }

    /// Sample shown by the router and navigation mockups
    pub fn field_sample() -> Self {
        Self {
            id: "SAMPLE-001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap_or_default(),
            nutrients: vec![
                NutrientReading::new(Nutrient::Nitrogen, 25.0, "ppm", NutrientStatus::Low),
                NutrientReading::new(Nutrient::Phosphorus, 50.0, "ppm", NutrientStatus::Optimal),
                NutrientReading::new(Nutrient::Potassium, 120.0, "ppm", NutrientStatus::High),
            ],
            recommendation: "Add a nitrogen-rich fertilizer. Avoid high-potassium amendments \
                             for the next 6 months."
                .to_string(),
        }
    }

    /// Sample plotted by the dashboard chart
    pub fn chart_sample() -> Self {
        Self {
            id: "SAMPLE-002".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap_or_default(),
            nutrients: vec![
                NutrientReading::new(Nutrient::Nitrogen, 45.0, "ppm", NutrientStatus::Optimal),
                NutrientReading::new(Nutrient::Phosphorus, 30.0, "ppm", NutrientStatus::Low),
                NutrientReading::new(Nutrient::Potassium, 60.0, "ppm", NutrientStatus::Optimal),
                NutrientReading::new(Nutrient::Ph, 6.5, "", NutrientStatus::Optimal),
            ],
            recommendation: "Apply a phosphorus-rich amendment before the next planting. \
                             Nitrogen, potassium and pH are within range."
                .to_string(),
        }
    }

    pub fn reading(&self, nutrient: Nutrient) -> Option<&NutrientReading> {
        self.nutrients.iter().find(|r| r.nutrient == nutrient)
    }

    /// Category/value series handed to the charting collaborator
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            label: format!("Sample {}", self.id),
            categories: self.nutrients.iter().map(|r| r.nutrient.label().to_string()).collect(),
            values: self.nutrients.iter().map(|r| r.value).collect(),
        }
    }
}
