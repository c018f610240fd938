//! Output rendering for measurement records.
//!
//! Two modes, chosen by the caller: a human-readable table for stdout, or a
//! JSON array written to a file. The `--list` printout of the static
//! registries also lives here. Rendering has no side effects beyond the
//! destination it writes to.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use tabled::Table;
use tabled::settings::Style;

use crate::model::Measurement;
use crate::stations::{CONTAMINANT_REGISTRY, STATION_REGISTRY};

/// Renders the record sequence as a psql-style table.
pub fn render_table(records: &[Measurement]) -> String {
    Table::new(records).with(Style::psql()).to_string()
}

/// Serializes the full ordered record sequence as a JSON array to `path`.
pub fn write_json(path: &Path, records: &[Measurement]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer(file, records)?;
    Ok(())
}

/// Prints the station and contaminant registries (the `--list` mode).
pub fn print_registries() {
    println!("STATIONS");
    println!("{}", Table::new(STATION_REGISTRY).with(Style::psql()));
    println!();
    println!("CONTAMINANTS");
    println!("{}", Table::new(CONTAMINANT_REGISTRY).with(Style::psql()));
}
