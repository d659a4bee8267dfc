//! Containment and centroid on geodetic polygons
//!
//! Both functions treat latitude/longitude as planar coordinates, which is
//! fine at hole scale. Callers filter out polygons with fewer than three
//! vertices before calling either one.

use crate::domain::GeoPoint;

/// Arithmetic mean of the vertices
///
/// This is not the area-weighted centroid. For small, roughly convex shapes
/// like bunkers it lands close enough, and the QA thresholds are tuned
/// against this exact value, so do not swap the formula.
pub fn centroid(points: &[GeoPoint]) -> GeoPoint {
    if points.is_empty() {
        return GeoPoint::new(0.0, 0.0);
    }

    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));

    GeoPoint::new(lat_sum / n, lng_sum / n)
}

/// Even-odd ray casting, longitude as x and latitude as y
pub fn is_point_in_polygon(point: GeoPoint, polygon: &[GeoPoint]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let (x, y) = (point.lng, point.lat);
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (polygon[i].lng, polygon[i].lat);
        let (xj, yj) = (polygon[j].lng, polygon[j].lat);

        // The straddle test guarantees yi != yj before dividing.
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_centroid_of_square() {
        let c = centroid(&square());
        assert_eq!(c, GeoPoint::new(0.5, 0.5));
    }

    #[test]
    fn test_centroid_is_vertex_mean_not_area_weighted() {
        // Extra vertices bunched on one corner pull the mean towards it
        let mut poly = square();
        poly.insert(1, GeoPoint::new(0.0, 0.1));
        poly.insert(1, GeoPoint::new(0.0, 0.05));

        let c = centroid(&poly);
        assert!((c.lat - 2.0 / 6.0).abs() < 1e-12);
        assert!((c.lng - 2.15 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_inside_and_outside() {
        let poly = square();
        assert!(is_point_in_polygon(GeoPoint::new(0.5, 0.5), &poly));
        assert!(!is_point_in_polygon(GeoPoint::new(1.5, 0.5), &poly));
        assert!(!is_point_in_polygon(GeoPoint::new(0.5, -0.2), &poly));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // U shape opening to the north
        let poly = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 3.0),
            GeoPoint::new(3.0, 3.0),
            GeoPoint::new(3.0, 2.0),
            GeoPoint::new(1.0, 2.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(3.0, 1.0),
            GeoPoint::new(3.0, 0.0),
        ];

        assert!(is_point_in_polygon(GeoPoint::new(2.0, 0.5), &poly));
        assert!(is_point_in_polygon(GeoPoint::new(2.0, 2.5), &poly));
        assert!(!is_point_in_polygon(GeoPoint::new(2.0, 1.5), &poly));
    }

    #[test]
    fn test_vertex_order_direction_does_not_matter() {
        let mut poly = square();
        poly.reverse();
        assert!(is_point_in_polygon(GeoPoint::new(0.25, 0.75), &poly));
    }

    #[test]
    fn test_degenerate_polygon_never_contains() {
        let line = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];
        assert!(!is_point_in_polygon(GeoPoint::new(0.5, 0.5), &line));
    }
}
