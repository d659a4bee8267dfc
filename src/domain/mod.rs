pub mod course;
pub mod hole_map;
pub mod qa;

pub use course::{Course, GeoPoint, GreenTargets, HazardKind, HazardZone, Hole, Polygon};
pub use hole_map::{
    BallPoint, BallSource, HoleMapData, NormalizedPoint, PresentTee, TeeColor, TeeMarkers,
    TeeYardages,
};
pub use qa::{QaIssue, QaReport, Severity};
