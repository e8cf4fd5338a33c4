//! Tabular rendering of query results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use neo_model::LinkedApproach;
use neo_output::{display_diameter, display_hazardous, display_name};

pub fn print_results(results: &[LinkedApproach<'_>]) {
    if results.is_empty() {
        println!("No matching close approaches.");
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Date (UTC)",
        "Designation",
        "Name",
        "Distance (au)",
        "Velocity (km/s)",
        "Diameter (km)",
        "Hazardous",
    ]);
    for linked in results {
        table.add_row(vec![
            Cell::new(linked.approach.time_str()),
            Cell::new(linked.neo.designation()),
            Cell::new(display_name(linked.neo.name())),
            Cell::new(format!("{:.4}", linked.approach.distance()))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", linked.approach.velocity()))
                .set_alignment(CellAlignment::Right),
            Cell::new(display_diameter(linked.neo.diameter())).set_alignment(CellAlignment::Right),
            Cell::new(display_hazardous(linked.neo.is_hazardous()))
                .set_alignment(CellAlignment::Center),
        ]);
    }
    println!("{table}");
}
