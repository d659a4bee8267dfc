use crate::domain::{HoleMapData, NormalizedPoint};

/// Straight-line distance in image percent units
pub fn planar_distance(p: NormalizedPoint, q: NormalizedPoint) -> f64 {
    ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
}

/// Mean position of every tee marker present on the hole
pub fn tee_reference(map: &HoleMapData) -> NormalizedPoint {
    let tees = map.present_tees();
    let n = tees.len() as f64;
    let (x, y) = tees
        .iter()
        .fold((0.0, 0.0), |(x, y), t| (x + t.marker.x, y + t.marker.y));
    NormalizedPoint::new(x / n, y / n)
}

/// Mean hole length over the same tees as [`tee_reference`]
pub fn reference_yardage(map: &HoleMapData) -> f64 {
    let tees = map.present_tees();
    tees.iter().map(|t| t.yardage).sum::<f64>() / tees.len() as f64
}

/// Linear image-to-meters scale for one hole image
///
/// Calibrated by matching the image distance from the averaged tee to the
/// green against the averaged hole length. Assumes the image is a roughly
/// uniform-scale top-down view; panoramic or heavily distorted artwork
/// breaks the estimate.
#[derive(Debug, Clone)]
pub struct YardageScale {
    green: NormalizedPoint,
    /// Meters per image percent unit
    scale: f64,
}

impl YardageScale {
    /// Calibrate against a hole layout
    ///
    /// # Returns
    /// * `None` when the averaged tee sits on the green, which leaves no
    ///   distance to calibrate against
    pub fn from_map(map: &HoleMapData) -> Option<Self> {
        let tee_to_green = planar_distance(tee_reference(map), map.green);
        if tee_to_green == 0.0 {
            return None;
        }

        Some(Self {
            green: map.green,
            scale: reference_yardage(map) / tee_to_green,
        })
    }

    /// Estimated meters from `ball` to the middle of the green, rounded
    pub fn remaining_meters(&self, ball: NormalizedPoint) -> u32 {
        (planar_distance(ball, self.green) * self.scale).max(0.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hole_map::tests::sample_map;

    #[test]
    fn test_planar_distance() {
        let d = planar_distance(NormalizedPoint::new(0.0, 0.0), NormalizedPoint::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_tee_reference_and_yardage_use_present_tees() {
        let map = sample_map();

        // white, yellow, red; orange has no length
        let reference = tee_reference(&map);
        assert!((reference.x - 50.0).abs() < 1e-9);
        assert!((reference.y - 89.0).abs() < 1e-9);
        assert!((reference_yardage(&map) - 1000.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ball_on_tee_reference_gets_reference_yardage() {
        let map = sample_map();
        let scale = YardageScale::from_map(&map).unwrap();

        let remaining = scale.remaining_meters(tee_reference(&map));
        assert!((remaining as f64 - reference_yardage(&map).round()).abs() <= 1.0);
    }

    #[test]
    fn test_halfway_ball() {
        let map = sample_map();
        let scale = YardageScale::from_map(&map).unwrap();

        // tee reference (50, 89), green (50, 10): halfway is y = 49.5
        let remaining = scale.remaining_meters(NormalizedPoint::new(50.0, 49.5));
        assert_eq!(remaining, 167);
    }

    #[test]
    fn test_ball_on_green_is_zero() {
        let map = sample_map();
        let scale = YardageScale::from_map(&map).unwrap();
        assert_eq!(scale.remaining_meters(map.green), 0);
    }

    #[test]
    fn test_degenerate_layout_has_no_scale() {
        let mut map = sample_map();
        map.tees.red = None;
        map.tees.white = map.green;
        map.tees.yellow = map.green;

        assert!(YardageScale::from_map(&map).is_none());
    }
}
