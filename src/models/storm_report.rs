use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};

/// Storm intensity on the Saffir-Simpson scale, extended downwards with
/// tropical storm and subtropical
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StormCategory {
    Subtropical,
    #[serde(rename = "Tropical Storm")]
    TropicalStorm,
    #[serde(rename = "Cat 1 Hurricane")]
    Cat1,
    #[serde(rename = "Cat 2 Hurricane")]
    Cat2,
    #[serde(rename = "Cat 3 Hurricane")]
    Cat3,
    #[serde(rename = "Cat 4 Hurricane")]
    Cat4,
    #[serde(rename = "Cat 5 Hurricane")]
    Cat5,
}

impl StormCategory {
    /// Returns the category for a sustained wind speed, lower bounds are inclusive
    ///
    /// # Arguments
    ///
    /// * 'wind_mph' - maximum sustained wind in mph
    pub fn from_wind(wind_mph: u32) -> StormCategory {
        match wind_mph {
            157.. => StormCategory::Cat5,
            130.. => StormCategory::Cat4,
            111.. => StormCategory::Cat3,
            96..  => StormCategory::Cat2,
            74..  => StormCategory::Cat1,
            39..  => StormCategory::TropicalStorm,
            _     => StormCategory::Subtropical,
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for StormCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StormCategory::Subtropical   => write!(f, "Subtropical"),
            StormCategory::TropicalStorm => write!(f, "Tropical Storm"),
            StormCategory::Cat1          => write!(f, "Cat 1 Hurricane"),
            StormCategory::Cat2          => write!(f, "Cat 2 Hurricane"),
            StormCategory::Cat3          => write!(f, "Cat 3 Hurricane"),
            StormCategory::Cat4          => write!(f, "Cat 4 Hurricane"),
            StormCategory::Cat5          => write!(f, "Cat 5 Hurricane"),
        }
    }
}

/// Storm attributes extracted from the current public advisory.
///
/// The category is not stored, it always follows from `wind_mph`. It is however
/// part of the serialized document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(into = "AdvisoryDocument", from = "AdvisoryDocument")]
pub struct AdvisoryRecord {
    pub issued_at: String,
    pub latitude: f64,
    pub longitude: f64,
    pub wind_mph: u32,
    pub pressure_mbar: u32,
    pub radius_mi: f64,
    pub landfall_text: String,
    pub movement_dir_deg: u32,
    pub movement_speed_mph: u32,
    pub watch_text: String,
    pub warning_text: String,
    pub summary_text: String,
}

impl AdvisoryRecord {
    pub fn category(&self) -> StormCategory {
        StormCategory::from_wind(self.wind_mph)
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for AdvisoryRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} at {:.1}/{:.1}, {} mph, {} mbar, radius {:.0} mi, moving {} deg at {} mph ({})",
               self.category(),
               self.latitude, self.longitude,
               self.wind_mph, self.pressure_mbar, self.radius_mi,
               self.movement_dir_deg, self.movement_speed_mph,
               self.issued_at)
    }
}

/// Serialized shape of an advisory record
#[derive(Serialize, Deserialize)]
struct AdvisoryDocument {
    issued_at: String,
    latitude: f64,
    longitude: f64,
    wind_mph: u32,
    category: StormCategory,
    pressure_mbar: u32,
    radius_mi: f64,
    landfall_text: String,
    movement_dir_deg: u32,
    movement_speed_mph: u32,
    watch_text: String,
    warning_text: String,
    summary_text: String,
}

impl From<AdvisoryRecord> for AdvisoryDocument {
    fn from(r: AdvisoryRecord) -> Self {
        AdvisoryDocument {
            category: r.category(),
            issued_at: r.issued_at,
            latitude: r.latitude,
            longitude: r.longitude,
            wind_mph: r.wind_mph,
            pressure_mbar: r.pressure_mbar,
            radius_mi: r.radius_mi,
            landfall_text: r.landfall_text,
            movement_dir_deg: r.movement_dir_deg,
            movement_speed_mph: r.movement_speed_mph,
            watch_text: r.watch_text,
            warning_text: r.warning_text,
            summary_text: r.summary_text,
        }
    }
}

impl From<AdvisoryDocument> for AdvisoryRecord {
    fn from(d: AdvisoryDocument) -> Self {
        AdvisoryRecord {
            issued_at: d.issued_at,
            latitude: d.latitude,
            longitude: d.longitude,
            wind_mph: d.wind_mph,
            pressure_mbar: d.pressure_mbar,
            radius_mi: d.radius_mi,
            landfall_text: d.landfall_text,
            movement_dir_deg: d.movement_dir_deg,
            movement_speed_mph: d.movement_speed_mph,
            watch_text: d.watch_text,
            warning_text: d.warning_text,
            summary_text: d.summary_text,
        }
    }
}

/// Outcome of one pass over a feed snapshot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status")]
pub enum StormReport {
    #[serde(rename = "no_current_storm")]
    NoCurrentStorm,
    #[serde(rename = "advisory")]
    Advisory(AdvisoryRecord),
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for StormReport {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StormReport::NoCurrentStorm => write!(f, "NO CURRENT STORM"),
            StormReport::Advisory(record) => write!(f, "{}", record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wind_mph: u32) -> AdvisoryRecord {
        AdvisoryRecord {
            issued_at: "1100 AM EDT".to_string(),
            latitude: 25.4,
            longitude: -80.1,
            wind_mph,
            pressure_mbar: 987,
            radius_mi: 300.0,
            landfall_text: "TIME OF LANDFALL UNKNOWN".to_string(),
            movement_dir_deg: 30,
            movement_speed_mph: 12,
            watch_text: String::new(),
            warning_text: " HURRICANE  WARNING ".to_string(),
            summary_text: "DANGEROUS STORM".to_string(),
        }
    }

    #[test]
    fn category_boundaries_belong_to_the_higher_category() {
        let tests = vec![
            // wind, expected
            (0, StormCategory::Subtropical),
            (38, StormCategory::Subtropical),
            (39, StormCategory::TropicalStorm),
            (73, StormCategory::TropicalStorm),
            (74, StormCategory::Cat1),
            (95, StormCategory::Cat1),
            (96, StormCategory::Cat2),
            (110, StormCategory::Cat2),
            (111, StormCategory::Cat3),
            (129, StormCategory::Cat3),
            (130, StormCategory::Cat4),
            (156, StormCategory::Cat4),
            (157, StormCategory::Cat5),
            (200, StormCategory::Cat5),
        ];

        tests.iter().for_each(|x| {
            assert_eq!(StormCategory::from_wind(x.0), x.1, "wind {}", x.0);
        });
    }

    #[test]
    fn category_never_decreases_with_wind() {
        let mut previous = StormCategory::from_wind(0);
        for wind in 1..=250 {
            let category = StormCategory::from_wind(wind);
            assert!(category >= previous, "wind {} dropped to {}", wind, category);
            previous = category;
        }
    }

    #[test]
    fn no_current_storm_serializes_as_tag_only() {
        let json = serde_json::to_value(&StormReport::NoCurrentStorm).unwrap();
        assert_eq!(json, serde_json::json!({"status": "no_current_storm"}));
    }

    #[test]
    fn advisory_document_carries_derived_category() {
        let json = serde_json::to_value(&StormReport::Advisory(record(85))).unwrap();
        assert_eq!(json["status"], "advisory");
        assert_eq!(json["category"], "Cat 1 Hurricane");
        assert_eq!(json["wind_mph"], 85);
        assert_eq!(json["longitude"], -80.1);
    }

    #[test]
    fn advisory_reads_back_from_its_document() {
        let report = StormReport::Advisory(record(131));
        let json = serde_json::to_string(&report).unwrap();
        let back: StormReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        if let StormReport::Advisory(r) = back {
            assert_eq!(r.category(), StormCategory::Cat4);
        }
    }
}
