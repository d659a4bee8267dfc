pub mod distance;
pub mod polygon;
pub mod projection;
pub mod viewport;

pub use distance::{
    DistanceUnit, convert_distance, format_distance, haversine_meters, meters_to_yards,
    to_display_distance, yards_to_meters,
};
pub use polygon::{centroid, is_point_in_polygon};
pub use projection::{YardageScale, planar_distance, reference_yardage, tee_reference};
pub use viewport::ImageBounds;
