use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lng, p.lat)
    }
}

/// Closed boundary as an ordered ring of vertices (first vertex is not repeated)
///
/// An empty polygon stands in for a boundary that was never drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon(pub Vec<GeoPoint>);

impl Polygon {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// At least three vertices, the minimum for containment and centroid checks
    pub fn is_valid(&self) -> bool {
        self.0.len() >= 3
    }
}

impl From<Vec<GeoPoint>> for Polygon {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }
}

/// Front, middle and back aim points on a green
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreenTargets {
    pub front: GeoPoint,
    pub middle: GeoPoint,
    pub back: GeoPoint,
}

impl GreenTargets {
    /// All three targets on the same point, handy when only a pin position is known
    pub fn at(point: GeoPoint) -> Self {
        Self {
            front: point,
            middle: point,
            back: point,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Bunker,
    Water,
    Trees,
    Layup,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardZone {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HazardKind,
    #[serde(default)]
    pub boundary: Polygon,
}

impl HazardZone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: HazardKind,
        boundary: Polygon,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            boundary,
        }
    }
}

/// Authoring geometry for one hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    /// 1-based, unique within a course
    pub number: u32,
    pub par: u8,
    /// Legacy single tee position
    #[serde(default)]
    pub tee: Option<GeoPoint>,
    /// Named tee sets such as "white" or "red"
    #[serde(default)]
    pub tees: BTreeMap<String, GeoPoint>,
    pub green: GreenTargets,
    #[serde(default)]
    pub hazards: Vec<HazardZone>,
    #[serde(default)]
    pub fairway: Option<Polygon>,
    #[serde(default)]
    pub green_boundary: Option<Polygon>,
}

impl Hole {
    pub fn new(number: u32, par: u8, green: GreenTargets) -> Self {
        Self {
            number,
            par,
            tee: None,
            tees: BTreeMap::new(),
            green,
            hazards: Vec::new(),
            fairway: None,
            green_boundary: None,
        }
    }

    pub fn with_tee(mut self, tee: GeoPoint) -> Self {
        self.tee = Some(tee);
        self
    }

    pub fn with_named_tee(mut self, name: impl Into<String>, tee: GeoPoint) -> Self {
        self.tees.insert(name.into(), tee);
        self
    }

    pub fn with_fairway(mut self, fairway: Polygon) -> Self {
        self.fairway = Some(fairway);
        self
    }

    pub fn with_green_boundary(mut self, green: Polygon) -> Self {
        self.green_boundary = Some(green);
        self
    }

    pub fn with_hazard(mut self, hazard: HazardZone) -> Self {
        self.hazards.push(hazard);
        self
    }

    /// Vertex count of the fairway boundary, zero when it was never drawn
    pub fn fairway_len(&self) -> usize {
        self.fairway.as_ref().map_or(0, Polygon::len)
    }

    pub fn green_boundary_len(&self) -> usize {
        self.green_boundary.as_ref().map_or(0, Polygon::len)
    }

    /// The fairway polygon, only when it has enough vertices to test against
    pub fn valid_fairway(&self) -> Option<&Polygon> {
        self.fairway.as_ref().filter(|p| p.is_valid())
    }
}

/// A course as supplied by the authoring collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub holes: Vec<Hole>,
}

impl Course {
    pub fn hole(&self, number: u32) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_validity() {
        let mut poly = Polygon::default();
        assert!(!poly.is_valid());

        poly.0.push(GeoPoint::new(0.0, 0.0));
        poly.0.push(GeoPoint::new(0.0, 1.0));
        assert!(!poly.is_valid());

        poly.0.push(GeoPoint::new(1.0, 1.0));
        assert!(poly.is_valid());
    }

    #[test]
    fn test_geo_point_into_geo_crate_point() {
        let p: geo::Point<f64> = GeoPoint::new(51.5, -0.12).into();
        assert_eq!(p.x(), -0.12);
        assert_eq!(p.y(), 51.5);
    }

    #[test]
    fn test_missing_boundaries_count_as_empty() {
        let hole = Hole::new(1, 4, GreenTargets::at(GeoPoint::new(0.0, 0.0)));
        assert_eq!(hole.fairway_len(), 0);
        assert_eq!(hole.green_boundary_len(), 0);
        assert!(hole.valid_fairway().is_none());
    }

    #[test]
    fn test_parse_hole_json() {
        let json = r#"{
            "number": 7,
            "par": 3,
            "tees": {"white": {"lat": 1.0, "lng": 2.0}},
            "green": {
                "front": {"lat": 1.001, "lng": 2.0},
                "middle": {"lat": 1.0012, "lng": 2.0},
                "back": {"lat": 1.0014, "lng": 2.0}
            },
            "hazards": [
                {"id": "b1", "name": "Pot bunker", "type": "bunker",
                 "boundary": [{"lat": 1.0, "lng": 2.0}, {"lat": 1.0, "lng": 2.1}, {"lat": 1.1, "lng": 2.0}]}
            ],
            "greenBoundary": []
        }"#;

        let hole: Hole = serde_json::from_str(json).unwrap();
        assert_eq!(hole.number, 7);
        assert!(hole.tee.is_none());
        assert_eq!(hole.tees.len(), 1);
        assert_eq!(hole.hazards[0].kind, HazardKind::Bunker);
        assert!(hole.hazards[0].boundary.is_valid());
        assert!(hole.fairway.is_none());
        assert_eq!(hole.green_boundary_len(), 0);
    }
}
