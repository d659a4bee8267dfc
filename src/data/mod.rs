//! Loaders for course authoring data and hole-map layouts
//!
//! Both arrive as JSON files from collaborators. Parsing is strict about
//! shape but leaves geometric problems for the validator to report.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::domain::{Course, HoleMapData};
use crate::error::{GolfGeoError, Result};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| GolfGeoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| GolfGeoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a course file (`{"courseId": ..., "holes": [...]}`)
pub fn load_course(path: &Path) -> Result<Course> {
    let course: Course = read_json(path)?;
    debug!(
        course = %course.course_id,
        holes = course.holes.len(),
        "loaded course"
    );
    Ok(course)
}

/// Hole-map layouts for every known course, keyed by course id
#[derive(Debug, Default, Deserialize)]
pub struct HoleMapCatalog {
    courses: HashMap<String, Vec<HoleMapData>>,
}

impl HoleMapCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let catalog: Self = read_json(path)?;
        debug!(courses = catalog.courses.len(), "loaded hole map catalog");
        Ok(catalog)
    }

    pub fn insert(&mut self, course_id: impl Into<String>, holes: Vec<HoleMapData>) {
        self.courses.insert(course_id.into(), holes);
    }

    pub fn holes(&self, course_id: &str) -> Result<&[HoleMapData]> {
        self.courses
            .get(course_id)
            .map(Vec::as_slice)
            .ok_or_else(|| GolfGeoError::UnknownCourse(course_id.to_string()))
    }

    pub fn hole(&self, course_id: &str, hole: u32) -> Result<&HoleMapData> {
        self.holes(course_id)?
            .iter()
            .find(|h| h.hole == hole)
            .ok_or_else(|| GolfGeoError::UnknownHole {
                course: course_id.to_string(),
                hole,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hole_map::tests::sample_map;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_course() {
        let file = write_temp(
            r#"{
                "courseId": "links",
                "name": "Links Course",
                "holes": [{
                    "number": 1, "par": 4,
                    "tee": {"lat": 0.0, "lng": 0.0},
                    "green": {
                        "front": {"lat": 0.0, "lng": 0.0029},
                        "middle": {"lat": 0.0, "lng": 0.003},
                        "back": {"lat": 0.0, "lng": 0.0031}
                    }
                }]
            }"#,
        );

        let course = load_course(file.path()).unwrap();
        assert_eq!(course.course_id, "links");
        assert_eq!(course.holes.len(), 1);
        assert!(course.hole(1).is_some());
        assert!(course.hole(2).is_none());
    }

    #[test]
    fn test_load_course_missing_file() {
        let err = load_course(Path::new("/nonexistent/course.json")).unwrap_err();
        assert!(matches!(err, GolfGeoError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read /nonexistent/course.json"));
    }

    #[test]
    fn test_load_course_bad_json() {
        let file = write_temp(r#"{"courseId": "links", "holes": [{"number": 1}]}"#);
        let err = load_course(file.path()).unwrap_err();
        assert!(matches!(err, GolfGeoError::Parse { .. }));
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = HoleMapCatalog::default();
        catalog.insert("links", vec![sample_map()]);

        assert_eq!(catalog.hole("links", 1).unwrap().par, 4);
        assert!(matches!(
            catalog.hole("links", 9),
            Err(GolfGeoError::UnknownHole { hole: 9, .. })
        ));
        assert!(matches!(
            catalog.hole("parkland", 1),
            Err(GolfGeoError::UnknownCourse(_))
        ));
    }

    #[test]
    fn test_load_catalog() {
        let file = write_temp(
            r#"{"courses": {"links": [{
                "hole": 5, "par": 5, "strokeIndex": 1,
                "yardages": {"white": 480, "yellow": 455, "red": 410},
                "tees": {"white": {"x": 30, "y": 95}, "yellow": {"x": 32, "y": 93}, "red": {"x": 35, "y": 88}},
                "green": {"x": 70, "y": 8},
                "image": "links/h05.png",
                "greenDepthM": 32
            }]}}"#,
        );

        let catalog = HoleMapCatalog::load(file.path()).unwrap();
        let hole = catalog.hole("links", 5).unwrap();
        assert_eq!(hole.present_tees().len(), 3);
        assert_eq!(hole.green_depth_m, 32.0);
    }
}
