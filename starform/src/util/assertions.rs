use log::error;

use crate::engine::in_bounds;
use crate::geometry::primitives::{Point, Polygon, Rect};
use crate::util::FPA;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn same_vertex_count(before: &Polygon, after: &Polygon) -> bool {
    if before.n_vertices() != after.n_vertices() {
        error!(
            "vertex count changed from {} to {}",
            before.n_vertices(),
            after.n_vertices()
        );
        return false;
    }
    true
}

pub fn all_vertices_finite(polygon: &Polygon) -> bool {
    polygon
        .vertex_iter()
        .all(|Point(x, y)| x.is_finite() && y.is_finite())
}

pub fn polygon_in_bounds(polygon: &Polygon, rect: &Rect) -> bool {
    polygon.vertex_iter().all(|p| in_bounds(&p, rect))
}

pub fn points_almost_equal(a: Point, b: Point) -> bool {
    FPA(a.0) == FPA(b.0) && FPA(a.1) == FPA(b.1)
}

pub fn polygons_almost_equal(a: &Polygon, b: &Polygon) -> bool {
    a.n_vertices() == b.n_vertices()
        && a
            .vertex_iter()
            .zip(b.vertex_iter())
            .all(|(p, q)| points_almost_equal(p, q))
}
