//! Property tests for the normalization-on-construction rules.

use neo_model::{CloseApproach, NearEarthObject};
use proptest::prelude::*;

proptest! {
    /// The hazardous flag is true for exactly the literal "Y".
    #[test]
    fn hazardous_only_for_literal_y(flag in "[A-Za-z]{0,3}") {
        let neo = NearEarthObject::from_fields("433", "", "", &flag).unwrap();
        prop_assert_eq!(neo.is_hazardous(), flag == "Y");
    }

    /// A non-empty name is kept verbatim; serialization restores it.
    #[test]
    fn name_round_trips(name in "[A-Za-z][A-Za-z ]{0,20}") {
        let neo = NearEarthObject::from_fields("433", &name, "", "N").unwrap();
        prop_assert_eq!(neo.name(), Some(name.as_str()));
        prop_assert_eq!(neo.serialize().name, name);
    }

    /// Finite diameters survive parse and serialization bit-for-bit.
    #[test]
    fn diameter_round_trips(diameter in 0.0f64..1.0e6) {
        let raw = diameter.to_string();
        let neo = NearEarthObject::from_fields("433", "", &raw, "N").unwrap();
        prop_assert_eq!(neo.diameter(), diameter);
        prop_assert_eq!(neo.serialize().diameter_km, diameter);
    }

    /// Distance and velocity are preserved through the serialization contract.
    #[test]
    fn approach_numbers_round_trip(distance in 0.0f64..50.0, velocity in 0.0f64..100.0) {
        let approach = CloseApproach::from_fields(
            "433",
            "2021-Jan-01 00:00",
            &distance.to_string(),
            &velocity.to_string(),
        )
        .unwrap();
        let record = approach.serialize();
        prop_assert_eq!(record.distance_au, distance);
        prop_assert_eq!(record.velocity_km_s, velocity);
    }
}
