pub mod tee;
pub mod validator;

pub use tee::get_hole_tee_point;
pub use validator::{
    QaThresholds, validate_course_geometry, validate_course_geometry_at, validate_with,
};
