use crate::domain::NormalizedPoint;

/// Rendered rectangle of the hole image, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ImageBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Map a viewport tap to image percent coordinates
    ///
    /// Taps outside the image are pinned to the nearest edge, so the result
    /// always lies in `[0, 100]` on both axes.
    ///
    /// # Returns
    /// * `None` if the image has not been laid out yet (zero-sized bounds)
    pub fn tap_to_normalized(&self, tap_x: f64, tap_y: f64) -> Option<NormalizedPoint> {
        if self.is_empty() {
            return None;
        }

        let x = (tap_x - self.left) / self.width * 100.0;
        let y = (tap_y - self.top) / self.height * 100.0;
        Some(NormalizedPoint::clamped(x, y))
    }

    /// Inverse of [`tap_to_normalized`](Self::tap_to_normalized), used to draw markers
    pub fn to_viewport(&self, point: NormalizedPoint) -> (f64, f64) {
        (
            self.left + point.x / 100.0 * self.width,
            self.top + point.y / 100.0 * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_inside() {
        let bounds = ImageBounds::new(10.0, 20.0, 200.0, 400.0);
        let p = bounds.tap_to_normalized(110.0, 120.0).unwrap();
        assert_eq!(p, NormalizedPoint::new(50.0, 25.0));
    }

    #[test]
    fn test_tap_on_edges() {
        let bounds = ImageBounds::new(0.0, 0.0, 300.0, 600.0);
        assert_eq!(
            bounds.tap_to_normalized(0.0, 0.0).unwrap(),
            NormalizedPoint::new(0.0, 0.0)
        );
        assert_eq!(
            bounds.tap_to_normalized(300.0, 600.0).unwrap(),
            NormalizedPoint::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_tap_outside_is_clamped() {
        let bounds = ImageBounds::new(50.0, 50.0, 100.0, 100.0);
        let p = bounds.tap_to_normalized(-20.0, 400.0).unwrap();
        assert_eq!(p, NormalizedPoint::new(0.0, 100.0));
    }

    #[test]
    fn test_empty_bounds() {
        let bounds = ImageBounds::new(0.0, 0.0, 0.0, 480.0);
        assert!(bounds.is_empty());
        assert!(bounds.tap_to_normalized(10.0, 10.0).is_none());
    }

    #[test]
    fn test_to_viewport() {
        let bounds = ImageBounds::new(10.0, 20.0, 200.0, 400.0);
        assert_eq!(bounds.to_viewport(NormalizedPoint::new(50.0, 25.0)), (110.0, 120.0));
    }
}
