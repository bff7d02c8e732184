//! Normal computation helpers.

use glam::Vec3;
use weft_types::constants::DEGENERATE_AREA_THRESHOLD;

/// Unit normal of triangle `(p1, p2, p3)`: `normalize((p2 - p1) × (p3 - p1))`.
///
/// Counter-clockwise winding (seen from the side the normal points to)
/// is load-bearing: swapping any two corners flips the result.
///
/// Returns `None` when the corners are coincident or colinear, or when
/// any input is non-finite.
#[inline]
pub fn triangle_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Option<Vec3> {
    let cross = (p2 - p1).cross(p3 - p1);
    let len2 = cross.length_squared();
    if !len2.is_finite() || len2 <= DEGENERATE_AREA_THRESHOLD {
        return None;
    }
    Some(cross / len2.sqrt())
}

/// Normalizes `v`, or returns `fallback` if `v` has no usable direction.
#[inline]
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let len2 = v.length_squared();
    if len2.is_finite() && len2 > DEGENERATE_AREA_THRESHOLD {
        v / len2.sqrt()
    } else {
        fallback
    }
}
