//! SoilView Core - View-state model, soil sample data, and configuration
//!
//! This crate contains the view controller for the soil nutrient analysis
//! screens and the port definitions for its photo-preview and charting
//! collaborators.

pub mod config;
pub mod controller;
pub mod error;
pub mod memory;
pub mod models;
pub mod ports;

pub use controller::{Navigation, Panel, ViewController};
pub use error::{Result, SoilviewError, ValidationError};
