use serde::{Deserialize, Serialize};

/// Position on a static hole image, in percent of the image width/height
///
/// Unrelated to [`GeoPoint`](super::GeoPoint); the two are never converted
/// into each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point pinned to the `[0, 100]` image domain
    pub fn clamped(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(Self::MIN, Self::MAX),
            y: y.clamp(Self::MIN, Self::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeeColor {
    White,
    Yellow,
    Red,
    Orange,
}

/// Hole length from each tee colour
///
/// Values are meters; the live estimator rescales image distances against them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeeYardages {
    pub white: f64,
    pub yellow: f64,
    #[serde(default)]
    pub red: Option<f64>,
    #[serde(default)]
    pub orange: Option<f64>,
}

/// Tee marker positions on the hole image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeeMarkers {
    pub white: NormalizedPoint,
    pub yellow: NormalizedPoint,
    #[serde(default)]
    pub red: Option<NormalizedPoint>,
    #[serde(default)]
    pub orange: Option<NormalizedPoint>,
}

/// A tee that has both a marker and a length on this hole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentTee {
    pub color: TeeColor,
    pub marker: NormalizedPoint,
    pub yardage: f64,
}

/// Static layout of one hole image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleMapData {
    pub hole: u32,
    pub par: u8,
    pub stroke_index: u8,
    pub yardages: TeeYardages,
    pub tees: TeeMarkers,
    pub green: NormalizedPoint,
    /// Asset reference of the top-down hole image
    pub image: String,
    #[serde(default)]
    pub green_depth_m: f64,
}

impl HoleMapData {
    /// White and yellow always, red and orange only when both marker and length exist
    pub fn present_tees(&self) -> Vec<PresentTee> {
        let mut tees = vec![
            PresentTee {
                color: TeeColor::White,
                marker: self.tees.white,
                yardage: self.yardages.white,
            },
            PresentTee {
                color: TeeColor::Yellow,
                marker: self.tees.yellow,
                yardage: self.yardages.yellow,
            },
        ];

        let optional = [
            (TeeColor::Red, self.tees.red, self.yardages.red),
            (TeeColor::Orange, self.tees.orange, self.yardages.orange),
        ];
        for (color, marker, yardage) in optional {
            if let (Some(marker), Some(yardage)) = (marker, yardage) {
                tees.push(PresentTee {
                    color,
                    marker,
                    yardage,
                });
            }
        }

        tees
    }

    /// Distances to the front and back edge of the green, given the distance to its middle
    pub fn green_front_back(&self, remaining_meters: u32) -> (u32, u32) {
        let half = (self.green_depth_m.max(0.0) / 2.0).round() as u32;
        (remaining_meters.saturating_sub(half), remaining_meters + half)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallSource {
    Manual,
    Gps,
}

/// Ball marker placed on the hole image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallPoint {
    #[serde(flatten)]
    pub point: NormalizedPoint,
    pub source: BallSource,
}

impl BallPoint {
    pub fn manual(point: NormalizedPoint) -> Self {
        Self {
            point,
            source: BallSource::Manual,
        }
    }

    pub fn gps(point: NormalizedPoint) -> Self {
        Self {
            point,
            source: BallSource::Gps,
        }
    }
}
