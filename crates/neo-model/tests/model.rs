//! Tests for neo-model serialization contracts.

use neo_model::{CloseApproach, NearEarthObject};

#[test]
fn neo_record_serializes_with_contract_field_names() {
    let neo = NearEarthObject::from_fields("2000433", "Eros", "16.84", "N").unwrap();
    let json = serde_json::to_value(neo.serialize()).expect("serialize record");
    assert_eq!(
        json,
        serde_json::json!({
            "designation": "2000433",
            "name": "Eros",
            "diameter_km": 16.84,
            "potentially_hazardous": false,
        })
    );
}

#[test]
fn unknown_diameter_encodes_as_null_in_json_text() {
    let neo = NearEarthObject::from_fields("2099942", "", "", "Y").unwrap();
    let record = neo.serialize();
    assert!(record.diameter_km.is_nan());
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["diameter_km"], serde_json::Value::Null);
    assert_eq!(json["name"], "");
    assert_eq!(json["potentially_hazardous"], true);
}

#[test]
fn approach_record_serializes_with_contract_field_names() {
    let approach =
        CloseApproach::from_fields("2000433", "2021-Jan-01 00:00", "0.15", "5.2").unwrap();
    let json = serde_json::to_string(&approach.serialize()).expect("serialize record");
    assert_eq!(
        json,
        r#"{"datetime_utc":"2021-Jan-01 00:00","distance_au":0.15,"velocity_km_s":5.2}"#
    );
}

#[test]
fn approach_record_never_carries_the_join_key() {
    let approach = CloseApproach::from_fields("433", "2021-Jan-01", "0.15", "5.2").unwrap();
    let json = serde_json::to_value(approach.serialize()).expect("serialize record");
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["datetime_utc", "distance_au", "velocity_km_s"]);
}
