use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect};

/// Closed containment test: reaching the border of `rect` is legal, exceeding it is not.
#[inline(always)]
pub fn in_bounds(point: &Point, rect: &Rect) -> bool {
    rect.collides_with(point)
}

/// Index of the first point that lies outside of `rect`, if any.
pub fn first_out_of_bounds(points: &[Point], rect: &Rect) -> Option<usize> {
    points.iter().position(|p| !in_bounds(p, rect))
}
