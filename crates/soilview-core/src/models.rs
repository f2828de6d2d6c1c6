pub mod chart;
pub mod photo;
pub mod sample;
pub mod session;
pub mod view;

pub use chart::{CanvasId, ChartSeries};
pub use photo::{DisplayUrl, FileHandle, PhotoId};
pub use sample::{Nutrient, NutrientReading, NutrientStatus, SoilSample};
pub use session::Session;
pub use view::{Variant, ViewState};
