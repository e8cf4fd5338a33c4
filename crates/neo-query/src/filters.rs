//! Query criteria over linked close approaches.

use chrono::NaiveDate;
use neo_model::{CloseApproach, NearEarthObject};

/// Optional criteria restricting a close-approach query.
///
/// Every field defaults to unset; [`Filters::matches`] is the conjunction of
/// the set criteria. Date bounds are inclusive and compare against the
/// approach date. Diameter bounds follow IEEE comparison semantics, so an
/// unknown (NaN) diameter fails every bound.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    pub min_velocity: Option<f64>,
    pub max_velocity: Option<f64>,
    pub min_diameter: Option<f64>,
    pub max_diameter: Option<f64>,
    pub hazardous: Option<bool>,
}

impl Filters {
    /// True when the approach and its owning NEO satisfy every set criterion.
    pub fn matches(&self, approach: &CloseApproach, neo: &NearEarthObject) -> bool {
        let date = approach.time().date();
        if let Some(expected) = self.date {
            if date != expected {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if date > end {
                return false;
            }
        }
        if let Some(min) = self.min_distance {
            if approach.distance() < min {
                return false;
            }
        }
        if let Some(max) = self.max_distance {
            if approach.distance() > max {
                return false;
            }
        }
        if let Some(min) = self.min_velocity {
            if approach.velocity() < min {
                return false;
            }
        }
        if let Some(max) = self.max_velocity {
            if approach.velocity() > max {
                return false;
            }
        }
        // A NaN diameter must fail both bounds.
        if let Some(min) = self.min_diameter {
            if !(neo.diameter() >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_diameter {
            if !(neo.diameter() <= max) {
                return false;
            }
        }
        if let Some(expected) = self.hazardous {
            if neo.is_hazardous() != expected {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_model::{CloseApproach, NearEarthObject};

    fn eros() -> NearEarthObject {
        NearEarthObject::from_fields("433", "Eros", "16.84", "N").unwrap()
    }

    fn unknown_diameter() -> NearEarthObject {
        NearEarthObject::from_fields("2010 PK9", "", "", "Y").unwrap()
    }

    fn approach() -> CloseApproach {
        CloseApproach::from_fields("433", "2021-Jan-01 12:00", "0.15", "5.2").unwrap()
    }

    #[test]
    fn empty_filters_match_everything() {
        assert!(Filters::default().matches(&approach(), &eros()));
    }

    #[test]
    fn date_compares_against_the_approach_date() {
        let mut filters = Filters {
            date: Some(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
            ..Filters::default()
        };
        assert!(filters.matches(&approach(), &eros()));
        filters.date = Some(NaiveDate::from_ymd_opt(2021, 1, 2).unwrap());
        assert!(!filters.matches(&approach(), &eros()));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let filters = Filters {
            start_date: Some(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
            end_date: Some(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
            ..Filters::default()
        };
        assert!(filters.matches(&approach(), &eros()));
    }

    #[test]
    fn distance_and_velocity_bounds() {
        let filters = Filters {
            min_distance: Some(0.1),
            max_distance: Some(0.2),
            min_velocity: Some(5.0),
            max_velocity: Some(6.0),
            ..Filters::default()
        };
        assert!(filters.matches(&approach(), &eros()));
        let tight = Filters {
            max_distance: Some(0.1),
            ..Filters::default()
        };
        assert!(!tight.matches(&approach(), &eros()));
    }

    #[test]
    fn nan_diameter_fails_every_diameter_bound() {
        let min = Filters {
            min_diameter: Some(0.0),
            ..Filters::default()
        };
        let max = Filters {
            max_diameter: Some(100.0),
            ..Filters::default()
        };
        assert!(!min.matches(&approach(), &unknown_diameter()));
        assert!(!max.matches(&approach(), &unknown_diameter()));
        assert!(min.matches(&approach(), &eros()));
    }

    #[test]
    fn hazardous_criterion_matches_the_flag() {
        let hazardous_only = Filters {
            hazardous: Some(true),
            ..Filters::default()
        };
        assert!(!hazardous_only.matches(&approach(), &eros()));
        assert!(hazardous_only.matches(&approach(), &unknown_diameter()));
    }
}
