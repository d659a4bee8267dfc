use crate::domain::{GeoPoint, Hole};

/// Tee set preferred when a hole only carries named tees
pub const PREFERRED_TEE: &str = "white";

/// Pick the one tee position that distance checks measure from
///
/// Resolution order:
/// 1. the legacy single tee point
/// 2. the `"white"` named tee
/// 3. the named tee whose key sorts first
///
/// Named tees are kept in a sorted map, so step 3 does not depend on input
/// order. Returns `None` when the hole has no tee data at all.
pub fn get_hole_tee_point(hole: &Hole) -> Option<GeoPoint> {
    if let Some(tee) = hole.tee {
        return Some(tee);
    }

    hole.tees
        .get(PREFERRED_TEE)
        .or_else(|| hole.tees.values().next())
        .copied()
}
