use super::photos::PhotoPreview;
use crate::models::{CanvasId, ChartSeries, SoilSample, ViewState};

/// What is on screen. Exactly one panel exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<'a> {
    Login,
    Signup,
    /// Sample analysis, recommendation and the upload card
    Home { sample: &'a SoilSample },
    /// Nutrient chart bound to a canvas
    Dashboard { canvas: &'a CanvasId, series: ChartSeries },
    Photos { previews: &'a [PhotoPreview] },
    Analysis { sample: &'a SoilSample },
    Reports { sample: &'a SoilSample },
    Profile,
    Contact,
}

impl Panel<'_> {
    pub fn view(&self) -> ViewState {
        match self {
            Panel::Login => ViewState::Login,
            Panel::Signup => ViewState::Signup,
            Panel::Home { .. } => ViewState::Home,
            Panel::Dashboard { .. } => ViewState::Dashboard,
            Panel::Photos { .. } => ViewState::Photos,
            Panel::Analysis { .. } => ViewState::Analysis,
            Panel::Reports { .. } => ViewState::Reports,
            Panel::Profile => ViewState::Profile,
            Panel::Contact => ViewState::Contact,
        }
    }

    /// Heading shown at the top of the panel
    pub fn heading(&self) -> String {
        match self {
            Panel::Login => "Welcome Back!".to_string(),
            Panel::Signup => "Create Account".to_string(),
            Panel::Home { .. } => "Soil Nutrient Analysis".to_string(),
            Panel::Dashboard { .. } => "Nutrient Levels".to_string(),
            Panel::Photos { .. } => "Soil Photos".to_string(),
            Panel::Analysis { sample } => format!("Analysis for Sample: {}", sample.id),
            Panel::Reports { .. } => "Reports".to_string(),
            Panel::Profile => "Profile".to_string(),
            Panel::Contact => "Contact Us".to_string(),
        }
    }
}
