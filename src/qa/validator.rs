//! Course geometry validation
//!
//! Runs a fixed sequence of checks per hole and collects every problem as a
//! [`QaIssue`] instead of failing:
//! - tee presence
//! - tee-to-green distance plausibility
//! - fairway and green boundary vertex counts
//! - hazard boundary vertex counts and placement inside the fairway

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use super::tee::get_hole_tee_point;
use crate::domain::{HazardZone, Hole, Polygon, QaIssue, QaReport};
use crate::error::{GolfGeoError, Result};
use crate::geometry::{centroid, haversine_meters, is_point_in_polygon};

fn default_min_tee_to_green() -> f64 {
    45.0
}
fn default_max_tee_to_green() -> f64 {
    700.0
}

/// Distance bounds for the tee-to-green plausibility check, in meters
#[derive(Debug, Clone, Deserialize)]
pub struct QaThresholds {
    #[serde(default = "default_min_tee_to_green", rename = "min_tee_to_green_m")]
    pub min_tee_to_green: f64,
    #[serde(default = "default_max_tee_to_green", rename = "max_tee_to_green_m")]
    pub max_tee_to_green: f64,
}

impl Default for QaThresholds {
    fn default() -> Self {
        Self {
            min_tee_to_green: default_min_tee_to_green(),
            max_tee_to_green: default_max_tee_to_green(),
        }
    }
}

impl QaThresholds {
    /// Reject bounds that would flag a hole as both too short and too long
    pub fn validate(&self) -> Result<()> {
        if self.min_tee_to_green > self.max_tee_to_green {
            return Err(GolfGeoError::InvalidThresholds {
                min: self.min_tee_to_green,
                max: self.max_tee_to_green,
            });
        }
        Ok(())
    }
}

/// Validate a course with default thresholds, stamped with the current time
pub fn validate_course_geometry(holes: &[Hole]) -> QaReport {
    validate_with(holes, &QaThresholds::default(), Utc::now())
}

/// Validate with default thresholds and a caller-supplied timestamp
///
/// Identical input and timestamp always produce an identical report.
pub fn validate_course_geometry_at(holes: &[Hole], checked_at: DateTime<Utc>) -> QaReport {
    validate_with(holes, &QaThresholds::default(), checked_at)
}

pub fn validate_with(
    holes: &[Hole],
    thresholds: &QaThresholds,
    checked_at: DateTime<Utc>,
) -> QaReport {
    let mut issues = Vec::new();

    for hole in holes {
        let before = issues.len();
        validate_hole(hole, thresholds, &mut issues);
        debug!(
            hole = hole.number,
            issues = issues.len() - before,
            "validated hole geometry"
        );
    }

    let report = QaReport::from_issues(issues, checked_at);
    info!(
        holes = holes.len(),
        errors = report.error_count,
        warnings = report.warning_count,
        "course geometry validation finished"
    );
    report
}

fn validate_hole(hole: &Hole, thresholds: &QaThresholds, issues: &mut Vec<QaIssue>) {
    let n = hole.number;

    match get_hole_tee_point(hole) {
        None => issues.push(QaIssue::error(n, "tee-missing", "Missing tee point.")),
        Some(tee) => {
            let distance = haversine_meters(tee, hole.green.middle);
            if distance < thresholds.min_tee_to_green {
                issues.push(QaIssue::warning(
                    n,
                    "tee-green-short",
                    format!("Tee to green distance looks short ({}m).", distance.round()),
                ));
            } else if distance > thresholds.max_tee_to_green {
                issues.push(QaIssue::warning(
                    n,
                    "tee-green-long",
                    format!("Tee to green distance looks long ({}m).", distance.round()),
                ));
            }
        }
    }

    if hole.fairway_len() < 3 {
        issues.push(QaIssue::error(
            n,
            "fairway-points",
            "Fairway polygon requires at least 3 points.",
        ));
    }

    if hole.green_boundary_len() < 3 {
        issues.push(QaIssue::error(
            n,
            "green-points",
            "Green polygon requires at least 3 points.",
        ));
    }

    let fairway = hole.valid_fairway();
    for (index, hazard) in hole.hazards.iter().enumerate() {
        let key = hazard_key(&hole.hazards, index);
        validate_hazard(n, hazard, &key, fairway, issues);
    }
}

/// Id fragment for a hazard's issues
///
/// The hazard id when it is non-empty and unique on the hole, otherwise the
/// list index is added so issue ids never collide.
fn hazard_key(hazards: &[HazardZone], index: usize) -> String {
    let id = hazards[index].id.as_str();
    if id.is_empty() {
        return index.to_string();
    }
    if hazards.iter().filter(|h| h.id == id).count() > 1 {
        return format!("{}-{}", id, index);
    }
    id.to_string()
}

fn validate_hazard(
    hole: u32,
    hazard: &HazardZone,
    key: &str,
    fairway: Option<&Polygon>,
    issues: &mut Vec<QaIssue>,
) {
    if !hazard.boundary.is_valid() {
        issues.push(QaIssue::error(
            hole,
            &format!("hazard-{}-points", key),
            format!(
                "Hazard \"{}\" polygon requires at least 3 points.",
                hazard.name
            ),
        ));
        return;
    }

    // Placement is only meaningful against a usable fairway.
    let Some(fairway) = fairway else {
        return;
    };

    let center = centroid(hazard.boundary.points());
    if !is_point_in_polygon(center, fairway.points()) {
        issues.push(QaIssue::warning(
            hole,
            &format!("hazard-{}-outside-fairway", key),
            format!("Hazard \"{}\" appears outside fairway bounds.", hazard.name),
        ));
    }
}
