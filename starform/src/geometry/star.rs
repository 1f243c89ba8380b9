use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Polygon};

/// Parameters of a star-shaped polygon
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Number of outer tips, the polygon has twice as many vertices
    pub n_points: usize,
}

impl StarParams {
    pub fn generate(&self) -> Polygon {
        generate_star(
            self.center,
            self.inner_radius,
            self.outer_radius,
            self.n_points,
        )
    }
}

/// Generates a star with `n_points` tips around `center`.
///
/// The `2 * n_points` vertices alternate between `outer_radius` (even indices) and `inner_radius` (odd indices).
/// The first vertex points straight up on screen (−90° from the positive x-axis, y grows downward)
/// and every next vertex advances by `180° / n_points`.
///
/// Panics if `n_points` is zero or if any of the inputs is not finite.
pub fn generate_star(center: Point, inner_radius: f64, outer_radius: f64, n_points: usize) -> Polygon {
    assert!(n_points > 0, "a star needs at least one point");

    let angle_step = PI / n_points as f64;
    let radii = [outer_radius, inner_radius];

    let vertices = (0..2 * n_points)
        .map(|i| {
            let angle = -FRAC_PI_2 + i as f64 * angle_step;
            let r = radii[i % 2];
            let (sin, cos) = angle.sin_cos();
            Point(center.0 + r * cos, center.1 + r * sin)
        })
        .collect();

    Polygon::new(vertices).expect("star vertices should form a valid polygon")
}
