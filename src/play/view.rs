use tracing::debug;

use super::advice::{LiveAdvice, advice_from_fix};
use crate::domain::{BallPoint, GeoPoint, Hole, HoleMapData, NormalizedPoint};
use crate::geometry::{ImageBounds, YardageScale};
use crate::location::LocationOutcome;

/// Marker the user is currently dragging or inspecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveMarker {
    Ball,
    Green,
}

/// Last known state of the position request, as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub enum LocationStatus {
    Idle,
    Locating,
    Located(GeoPoint),
    /// Denied or timed out; manual taps keep working
    Unavailable(String),
}

/// Transient state of the hole map screen
///
/// Owned by whoever renders the hole image. Showing a different hole or a
/// different image clears the ball, the active marker and the location status.
#[derive(Debug, Clone)]
pub struct HoleView {
    course_id: String,
    map: Option<HoleMapData>,
    scale: Option<YardageScale>,
    ball: Option<BallPoint>,
    active_marker: Option<ActiveMarker>,
    location: LocationStatus,
}

impl Default for HoleView {
    fn default() -> Self {
        Self {
            course_id: String::new(),
            map: None,
            scale: None,
            ball: None,
            active_marker: None,
            location: LocationStatus::Idle,
        }
    }
}

impl HoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the view to a hole layout
    ///
    /// # Returns
    /// * `true` if the transient state was reset
    pub fn show(&mut self, course_id: &str, map: HoleMapData) -> bool {
        let changed = match &self.map {
            Some(current) => {
                self.course_id != course_id
                    || current.hole != map.hole
                    || current.image != map.image
            }
            None => true,
        };

        if changed {
            debug!(course = course_id, hole = map.hole, "hole view reset");
            self.course_id = course_id.to_string();
            self.ball = None;
            self.active_marker = None;
            self.location = LocationStatus::Idle;
        }

        self.scale = YardageScale::from_map(&map);
        self.map = Some(map);
        changed
    }

    pub fn map(&self) -> Option<&HoleMapData> {
        self.map.as_ref()
    }

    pub fn ball(&self) -> Option<BallPoint> {
        self.ball
    }

    pub fn active_marker(&self) -> Option<ActiveMarker> {
        self.active_marker
    }

    pub fn location_status(&self) -> &LocationStatus {
        &self.location
    }

    /// Place a manual ball where the user tapped
    ///
    /// Ignored when no hole is shown or the image has no size yet.
    pub fn tap(&mut self, bounds: &ImageBounds, tap_x: f64, tap_y: f64) -> Option<BallPoint> {
        self.map.as_ref()?;
        let point = bounds.tap_to_normalized(tap_x, tap_y)?;
        let ball = BallPoint::manual(point);
        self.ball = Some(ball);
        self.active_marker = Some(ActiveMarker::Ball);
        Some(ball)
    }

    /// Place a ball informed by a position fix
    ///
    /// Ignored when no hole is shown.
    pub fn place_gps_ball(&mut self, point: NormalizedPoint) -> Option<BallPoint> {
        self.map.as_ref()?;
        let ball = BallPoint::gps(NormalizedPoint::clamped(point.x, point.y));
        self.ball = Some(ball);
        self.active_marker = Some(ActiveMarker::Ball);
        Some(ball)
    }

    /// Viewport pixel position at which to draw a marker
    ///
    /// `None` when the marker has nothing to point at or the image has no size yet.
    pub fn marker_position(
        &self,
        marker: ActiveMarker,
        bounds: &ImageBounds,
    ) -> Option<(f64, f64)> {
        if bounds.is_empty() {
            return None;
        }
        let point = match marker {
            ActiveMarker::Ball => self.ball?.point,
            ActiveMarker::Green => self.map.as_ref()?.green,
        };
        Some(bounds.to_viewport(point))
    }

    pub fn select_marker(&mut self, marker: Option<ActiveMarker>) {
        self.active_marker = marker;
    }

    pub fn clear_ball(&mut self) {
        self.ball = None;
        if self.active_marker == Some(ActiveMarker::Ball) {
            self.active_marker = None;
        }
    }

    /// Advice for the placed ball, if there is a ball and a usable layout
    pub fn advice(&self) -> Option<LiveAdvice> {
        let scale = self.scale.as_ref()?;
        let ball = self.ball?;
        Some(LiveAdvice::for_distance(
            scale.remaining_meters(ball.point) as f64,
        ))
    }

    pub fn begin_locating(&mut self) {
        self.location = LocationStatus::Locating;
    }

    pub fn apply_location(&mut self, outcome: &LocationOutcome) {
        self.location = match outcome {
            LocationOutcome::Fix(point) => LocationStatus::Located(*point),
            other => LocationStatus::Unavailable(other.to_string()),
        };
    }

    /// Geodetic advice from the last fix, measured on the authoring geometry
    pub fn gps_advice(&self, hole: &Hole) -> Option<LiveAdvice> {
        match self.location {
            LocationStatus::Located(fix) => Some(advice_from_fix(fix, hole)),
            _ => None,
        }
    }
}
