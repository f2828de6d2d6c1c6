//! Views command implementation

use crate::output::OutputWriter;
use crate::output_types::{ViewRow, ViewsOutput};
use anyhow::Result;
use soilview_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let variant = config.variant.value;
    let rows: Vec<ViewRow> = variant.views().iter().copied().map(ViewRow::from).collect();

    if output.is_json() {
        output.result(ViewsOutput {
            variant: variant.to_string(),
            views: rows,
        })?;
    } else {
        output.section(format!("Views ({} variant)", variant));
        output.table(rows);
    }

    Ok(())
}
