//! Golden-output tests for the CSV and JSON writers.

use std::fs;

use neo_model::{CloseApproach, LinkedApproach, NearEarthObject};
use neo_output::{write_to_csv, write_to_json};
use tempfile::TempDir;

fn eros() -> NearEarthObject {
    NearEarthObject::from_fields("2000433", "Eros", "16.84", "N").unwrap()
}

fn apophis() -> NearEarthObject {
    NearEarthObject::from_fields("2099942", "", "", "Y").unwrap()
}

fn eros_approach() -> CloseApproach {
    CloseApproach::from_fields("2000433", "2021-Jan-01 00:00", "0.15", "5.2").unwrap()
}

fn apophis_approach() -> CloseApproach {
    CloseApproach::from_fields("2099942", "2029-Apr-13 21:46", "0.00025", "7.42").unwrap()
}

#[test]
fn csv_output_matches_the_field_contract() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    let neo = eros();
    let approach = eros_approach();
    let results = [LinkedApproach {
        approach: &approach,
        neo: &neo,
    }];

    write_to_csv(&results, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous\n\
         2021-Jan-01 00:00,0.15,5.2,2000433,Eros,16.84,False\n"
    );
}

#[test]
fn csv_renders_unset_name_and_diameter_as_nan_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");
    let neo = apophis();
    let approach = apophis_approach();
    let results = [LinkedApproach {
        approach: &approach,
        neo: &neo,
    }];

    write_to_csv(&results, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written.lines().nth(1).unwrap(),
        "2029-Apr-13 21:46,0.00025,7.42,2099942,nan,nan,True"
    );
}

#[test]
fn json_output_nests_the_owning_neo() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    let neo = eros();
    let approach = eros_approach();
    let results = [LinkedApproach {
        approach: &approach,
        neo: &neo,
    }];

    write_to_json(&results, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        r#"[
  {
    "datetime_utc": "2021-Jan-01 00:00",
    "distance_au": 0.15,
    "velocity_km_s": 5.2,
    "neo": {
      "designation": "2000433",
      "name": "Eros",
      "diameter_km": 16.84,
      "potentially_hazardous": false
    }
  }
]"#
    );
}

#[test]
fn json_encodes_unknown_diameter_as_null() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    let neo = apophis();
    let approach = apophis_approach();
    let results = [LinkedApproach {
        approach: &approach,
        neo: &neo,
    }];

    write_to_json(&results, &path).unwrap();

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &document[0];
    assert_eq!(entry["neo"]["designation"], "2099942");
    assert_eq!(entry["neo"]["name"], "");
    assert_eq!(entry["neo"]["diameter_km"], serde_json::Value::Null);
    assert_eq!(entry["neo"]["potentially_hazardous"], true);
    assert_eq!(entry["distance_au"], 0.00025);
}

#[test]
fn output_order_equals_input_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");
    let eros = eros();
    let apophis = apophis();
    let first = apophis_approach();
    let second = eros_approach();
    let results = [
        LinkedApproach {
            approach: &first,
            neo: &apophis,
        },
        LinkedApproach {
            approach: &second,
            neo: &eros,
        },
    ];

    write_to_json(&results, &path).unwrap();

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let dates: Vec<&str> = document
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["datetime_utc"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2029-Apr-13 21:46", "2021-Jan-01 00:00"]);
}

#[test]
fn empty_results_still_write_valid_documents() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("empty.csv");
    let json_path = dir.path().join("empty.json");

    write_to_csv(&[], &csv_path).unwrap();
    write_to_json(&[], &json_path).unwrap();

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv,
        "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous\n"
    );
    assert_eq!(fs::read_to_string(&json_path).unwrap(), "[]");
}
