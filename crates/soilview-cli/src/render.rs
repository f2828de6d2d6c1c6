//! Panel rendering for the terminal

use console::style;
use soilview_core::controller::Panel;
use soilview_core::models::SoilSample;

use crate::output::OutputWriter;
use crate::output_types::nutrient_rows;
use crate::terminal_chart::TerminalChart;

pub fn panel(panel: &Panel<'_>, output: &OutputWriter) {
    output.section(panel.heading());

    match panel {
        Panel::Login => {
            output.info("Login to access your soil analysis dashboard.");
        }
        Panel::Signup => {
            output.info("Get started with your soil analysis journey.");
        }
        Panel::Home { sample } => {
            sample_summary(sample, output);
            output.section("AI-Powered Recommendations");
            println!("{}", sample.recommendation);
            output.section("Analyze a New Sample");
            output.info("Upload a photo of your soil sample to get started.");
        }
        Panel::Dashboard { canvas, series } => {
            output.kv("Canvas", canvas);
            output.kv("Categories", series.categories.join(", "));
        }
        Panel::Photos { previews } => {
            if previews.is_empty() {
                output.info("No photos selected.");
            }
            for preview in previews.iter() {
                let url = preview
                    .display_url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "(loaded)".to_string());
                output.kv(&preview.handle().name, url);
            }
        }
        Panel::Analysis { sample } => {
            output.kv("Analysis Date", sample.date);
            output.table(nutrient_rows(sample));
            output.section("Recommendation");
            println!("{}", sample.recommendation);
        }
        Panel::Reports { sample } => {
            sample_summary(sample, output);
        }
        Panel::Profile => {
            output.kv("Session", "Logged in");
        }
        Panel::Contact => {
            output.info("Questions about a result? Include the sample ID when you get in touch.");
        }
    }
}

/// Print a drawn chart under the dashboard panel
pub fn chart(chart: &TerminalChart) {
    println!("{}", style(chart.title()).dim());
    for line in chart.lines() {
        println!("{}", line);
    }
}

fn sample_summary(sample: &SoilSample, output: &OutputWriter) {
    output.kv("Sample", &sample.id);
    output.kv("Analysis Date", sample.date);
    output.table(nutrient_rows(sample));
}
