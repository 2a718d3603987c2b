//! Triangle face normals and guarded normalization.

use glam::Vec3;
use vela_types::constants::DEGENERATE_LENGTH_THRESHOLD;

/// Unnormalized face normal of the triangle `(p0, p1, p2)`.
///
/// Cross product of the two edge vectors leaving `p0`; the magnitude is
/// twice the triangle area, so accumulating these at a vertex weights
/// each adjacent face by its area.
#[inline]
pub fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(p2 - p0)
}

/// Normalize `v`, or return `None` when its length is below the
/// degeneracy threshold (a collapsed triangle fan accumulates to the
/// zero vector, which has no direction to normalize).
#[inline]
pub fn normalize_guarded(v: Vec3) -> Option<Vec3> {
    let len = v.length();
    if len < DEGENERATE_LENGTH_THRESHOLD {
        return None;
    }
    Some(v / len)
}
