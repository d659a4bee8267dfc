use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::GeoPoint;

/// Meters in one international yard
pub const METERS_PER_YARD: f64 = 0.9144;

/// Great-circle distance in meters on a spherical Earth
///
/// Uses the haversine formula with the mean Earth radius (6,371,008.8 m).
pub fn haversine_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    Haversine::distance(geo::Point::from(a), geo::Point::from(b))
}

pub fn meters_to_yards(meters: f64) -> f64 {
    meters / METERS_PER_YARD
}

pub fn yards_to_meters(yards: f64) -> f64 {
    yards * METERS_PER_YARD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Meters,
    Yards,
}

impl DistanceUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Yards => "yd",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Meters => write!(f, "meters"),
            DistanceUnit::Yards => write!(f, "yards"),
        }
    }
}

/// Exact conversion between units, no rounding
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    match (from, to) {
        (DistanceUnit::Meters, DistanceUnit::Yards) => meters_to_yards(value),
        (DistanceUnit::Yards, DistanceUnit::Meters) => yards_to_meters(value),
        _ => value,
    }
}

/// Round a meter value to the nearest whole `unit` for display
///
/// Only call this at the output boundary; chained computations stay in f64 meters.
pub fn to_display_distance(meters: f64, unit: DistanceUnit) -> i64 {
    convert_distance(meters, DistanceUnit::Meters, unit).round() as i64
}

/// Display string such as `"152 m"` or `"167 yd"`
pub fn format_distance(meters: f64, unit: DistanceUnit) -> String {
    format!("{} {}", to_display_distance(meters, unit), unit.suffix())
}
