use serde::{Deserialize, Serialize};

use super::club::{Club, recommend_club};
use crate::domain::{BallPoint, GeoPoint, Hole, HoleMapData};
use crate::geometry::{DistanceUnit, YardageScale, format_distance, haversine_meters};

/// What the play view shows for the current ball position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveAdvice {
    pub remaining_meters: u32,
    pub recommended_club: Club,
}

impl LiveAdvice {
    pub fn for_distance(meters: f64) -> Self {
        let remaining_meters = meters.max(0.0).round() as u32;
        Self {
            remaining_meters,
            recommended_club: recommend_club(remaining_meters as f64),
        }
    }

    pub fn describe(&self, unit: DistanceUnit) -> String {
        format!(
            "{} to the green, {}",
            format_distance(self.remaining_meters as f64, unit),
            self.recommended_club
        )
    }
}

/// Advice for a ball marker on the hole image
///
/// Returns `None` when the layout cannot be calibrated (tees drawn on the green).
pub fn estimate_advice(map: &HoleMapData, ball: &BallPoint) -> Option<LiveAdvice> {
    let scale = YardageScale::from_map(map)?;
    let remaining_meters = scale.remaining_meters(ball.point);
    Some(LiveAdvice {
        remaining_meters,
        recommended_club: recommend_club(remaining_meters as f64),
    })
}

/// Advice for a device position fix, measured to the middle of the green
pub fn advice_from_fix(fix: GeoPoint, hole: &Hole) -> LiveAdvice {
    LiveAdvice::for_distance(haversine_meters(fix, hole.green.middle))
}
