use serde::Serialize;
use soilview_core::models::{NutrientReading, SoilSample, ViewState};
use tabled::Tabled;

/// Row of the `views` listing
#[derive(Debug, Serialize, Tabled)]
pub struct ViewRow {
    #[tabled(rename = "View")]
    pub route: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Requires Login")]
    pub requires_login: bool,
}

impl From<ViewState> for ViewRow {
    fn from(view: ViewState) -> Self {
        Self {
            route: view.route_name().to_string(),
            title: view.title().to_string(),
            requires_login: !view.is_public(),
        }
    }
}

/// Output for the views command
#[derive(Debug, Serialize)]
pub struct ViewsOutput {
    pub variant: String,
    pub views: Vec<ViewRow>,
}

/// Row of the nutrient table
#[derive(Debug, Serialize, Tabled)]
pub struct NutrientRow {
    #[tabled(rename = "Nutrient")]
    pub nutrient: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&NutrientReading> for NutrientRow {
    fn from(reading: &NutrientReading) -> Self {
        Self {
            nutrient: reading.nutrient.to_string(),
            value: reading.display_value(),
            status: reading.status.to_string(),
        }
    }
}

pub fn nutrient_rows(sample: &SoilSample) -> Vec<NutrientRow> {
    sample.nutrients.iter().map(NutrientRow::from).collect()
}

/// Output for the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
