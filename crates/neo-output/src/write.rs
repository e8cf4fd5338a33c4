//! Close-approach report writers for the CSV and JSON output contracts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use neo_model::{LinkedApproach, NeoRecord};
use serde::Serialize;
use tracing::info;

use crate::common::{
    CSV_FIELDS, display_diameter, display_hazardous, display_name, ensure_parent_dir,
};

/// One entry of the JSON output array: the approach's flat serialized form
/// with the owning NEO's serialized form nested under `neo`.
#[derive(Debug, Serialize)]
struct JsonEntry {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: NeoRecord,
}

/// Write close approaches as CSV rows per the output field contract.
///
/// Emits the literal header
/// `datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous`
/// followed by one row per approach, in input order. Every record carries
/// its owning NEO by construction of [`LinkedApproach`].
pub fn write_to_csv(results: &[LinkedApproach<'_>], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer.write_record(CSV_FIELDS).context("write csv header")?;
    for linked in results {
        let approach = linked.approach;
        let neo = linked.neo;
        writer
            .write_record([
                approach.time_str(),
                approach.distance().to_string(),
                approach.velocity().to_string(),
                neo.designation().to_string(),
                display_name(neo.name()).to_string(),
                display_diameter(neo.diameter()),
                display_hazardous(neo.is_hazardous()).to_string(),
            ])
            .with_context(|| format!("write csv row for {}", neo.designation()))?;
    }
    writer.flush().context("flush csv output")?;
    info!(rows = results.len(), path = %path.display(), "wrote csv report");
    Ok(())
}

/// Write close approaches as a JSON array with the NEO nested under `neo`.
///
/// The array order equals the input order, and the document is
/// pretty-printed with 2-space indentation. An unknown diameter encodes as
/// `null` at the JSON text layer; the in-memory record keeps the numeric
/// NaN sentinel.
pub fn write_to_json(results: &[LinkedApproach<'_>], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let entries: Vec<JsonEntry> = results
        .iter()
        .map(|linked| {
            let record = linked.approach.serialize();
            JsonEntry {
                datetime_utc: record.datetime_utc,
                distance_au: record.distance_au,
                velocity_km_s: record.velocity_km_s,
                neo: linked.neo.serialize(),
            }
        })
        .collect();
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &entries).context("write json output")?;
    writer.flush().context("flush json output")?;
    info!(entries = entries.len(), path = %path.display(), "wrote json report");
    Ok(())
}
