//! Sample command implementation

use crate::output::OutputWriter;
use crate::output_types::nutrient_rows;
use anyhow::Result;
use soilview_core::config::LayeredConfig;
use soilview_core::models::SoilSample;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let sample = SoilSample::for_variant(config.variant.value);

    if output.is_json() {
        return output.result(&sample);
    }

    output.section(format!("Analysis for Sample: {}", sample.id));
    output.kv("Analysis Date", sample.date);
    output.table(nutrient_rows(&sample));

    output.section("Recommendation");
    println!("{}", sample.recommendation);

    Ok(())
}
