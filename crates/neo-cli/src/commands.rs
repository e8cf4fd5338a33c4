//! Subcommand implementations: load, link, query, report.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use neo_ingest::{load_approaches, load_neos};
use neo_model::LinkedApproach;
use neo_output::{write_to_csv, write_to_json};
use neo_query::{Filters, NeoDatabase};

use crate::cli::{InspectArgs, QueryArgs};
use crate::summary::print_results;

/// Default result count when printing to the terminal.
const DEFAULT_PRINT_LIMIT: usize = 10;

pub fn run_inspect(neofile: &Path, cadfile: &Path, args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect");
    let _guard = span.enter();
    let database = build_database(neofile, cadfile)?;

    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), _) => database.get_neo_by_designation(pdes),
        (None, Some(name)) => database.get_neo_by_name(name),
        (None, None) => bail!("inspect requires --pdes or --name"),
    };
    let Some(neo) = neo else {
        bail!("no matching near-Earth object found");
    };

    println!("{neo}");
    if args.approaches {
        for approach in database.approaches_of(neo) {
            match database.linked(approach) {
                Some(linked) => println!("- {linked}"),
                None => println!("- {approach}"),
            }
        }
    }
    Ok(())
}

pub fn run_query(neofile: &Path, cadfile: &Path, args: &QueryArgs) -> Result<()> {
    let span = info_span!("query");
    let _guard = span.enter();
    let database = build_database(neofile, cadfile)?;
    let filters = build_filters(args);

    match &args.outfile {
        Some(path) => {
            let results: Vec<LinkedApproach<'_>> = match args.limit {
                Some(limit) => database.query(&filters).take(limit).collect(),
                None => database.query(&filters).collect(),
            };
            info!(matched = results.len(), "query complete");
            write_results(&results, path)?;
            println!("Wrote {} close approaches to {}", results.len(), path.display());
        }
        None => {
            let limit = args.limit.unwrap_or(DEFAULT_PRINT_LIMIT);
            let results: Vec<LinkedApproach<'_>> =
                database.query(&filters).take(limit).collect();
            info!(matched = results.len(), "query complete");
            print_results(&results);
        }
    }
    Ok(())
}

/// Load both source files and build the linked database.
fn build_database(neofile: &Path, cadfile: &Path) -> Result<NeoDatabase> {
    let started = Instant::now();
    let neos = load_neos(neofile).context("load near-Earth objects")?;
    let approaches = load_approaches(cadfile).context("load close approaches")?;
    let database = NeoDatabase::new(neos, approaches);
    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "database ready"
    );
    Ok(database)
}

fn build_filters(args: &QueryArgs) -> Filters {
    Filters {
        date: args.date,
        start_date: args.start_date,
        end_date: args.end_date,
        min_distance: args.min_distance,
        max_distance: args.max_distance,
        min_velocity: args.min_velocity,
        max_velocity: args.max_velocity,
        min_diameter: args.min_diameter,
        max_diameter: args.max_diameter,
        hazardous: if args.hazardous {
            Some(true)
        } else if args.not_hazardous {
            Some(false)
        } else {
            None
        },
    }
}

/// Dispatch on the output extension: `.csv` or `.json`.
fn write_results(results: &[LinkedApproach<'_>], path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => write_to_csv(results, path),
        Some("json") => write_to_json(results, path),
        _ => bail!(
            "unsupported output extension (expected .csv or .json): {}",
            path.display()
        ),
    }
}
