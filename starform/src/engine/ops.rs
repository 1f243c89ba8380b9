use log::debug;

use crate::engine::boundary::first_out_of_bounds;
use crate::engine::status::{IgnoreReason, RejectReason, Status};
use crate::geometry::Transformation;
use crate::geometry::geo_enums::ReflectAxis;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Polygon, Rect};
use crate::util::assertions;

/// Shifts every vertex by `(dx, dy)`.
///
/// All or nothing: if any shifted vertex would end up outside of `rect`, the translation is rejected
/// and an identical copy of `polygon` is returned. No clamping takes place.
/// This is the only operation that checks the boundary.
pub fn translate(polygon: &Polygon, (dx, dy): (f64, f64), rect: &Rect) -> (Polygon, Status) {
    let candidate = polygon.transform_clone(&Transformation::from_translation((dx, dy)));

    match first_out_of_bounds(candidate.vertices(), rect) {
        Some(i) => {
            debug!(
                "translation by ({dx}, {dy}) rejected: vertex {i} would move to {:?}, outside of {rect:?}",
                candidate.vertex(i)
            );
            (polygon.clone(), Status::Rejected(RejectReason::OutOfBounds))
        }
        None => {
            debug_assert!(assertions::same_vertex_count(polygon, &candidate));
            debug_assert!(assertions::polygon_in_bounds(&candidate, rect));
            (candidate, Status::Applied)
        }
    }
}

/// Rotates the polygon by `angle` radians around its centroid.
pub fn rotate(polygon: &Polygon, angle: f64) -> Polygon {
    let pivot = polygon.centroid();
    polygon.transform_around_clone(&Transformation::from_rotation(angle), pivot)
}

/// Scales the polygon around its centroid, independently per axis.
/// Any real factor is accepted: negative factors mirror, zero collapses the axis.
/// Each axis is scaled on its own (`x' = cx + (x - cx) * sx`), huge factors may overflow the scaled axis to infinity.
pub fn scale(polygon: &Polygon, (sx, sy): (f64, f64)) -> Polygon {
    let pivot = polygon.centroid();
    polygon.transform_around_clone(&Transformation::from_scale((sx, sy)), pivot)
}

/// Mirrors the polygon across the line through its centroid perpendicular to the flipped coordinate.
pub fn reflect(polygon: &Polygon, axis: ReflectAxis) -> Polygon {
    let pivot = polygon.centroid();
    polygon.transform_around_clone(&Transformation::from_reflection(axis), pivot)
}

/// Same as [`reflect`], with the axis given by name (`"x"`/`"horizontal"`, `"y"`/`"vertical"`).
/// Unknown names leave the polygon unchanged.
pub fn reflect_named(polygon: &Polygon, axis: &str) -> (Polygon, Status) {
    match axis.parse::<ReflectAxis>() {
        Ok(axis) => (reflect(polygon, axis), Status::Applied),
        Err(e) => {
            debug!("reflection ignored: {e}");
            (polygon.clone(), Status::Ignored(IgnoreReason::InvalidAxis))
        }
    }
}
