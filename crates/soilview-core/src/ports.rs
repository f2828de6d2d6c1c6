//! Port trait definitions
//!
//! These traits define the collaborators the view controller delegates to.

pub mod chart;
pub mod display_url;

pub use chart::ChartBackend;
pub use display_url::DisplayUrlProvider;
