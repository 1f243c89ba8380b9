use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};

/// Ordered, fixed-length sequence of vertices describing a closed outline.
///
/// The number of vertices is fixed at creation: no operation on a [`Polygon`] adds, removes or reorders vertices.
/// Self-intersecting or degenerate outlines (e.g. after a zero scale) are allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        ensure!(!vertices.is_empty(), "polygon must have at least one vertex");
        ensure!(
            vertices.iter().all(|p| p.0.is_finite() && p.1.is_finite()),
            "polygon contains non-finite coordinates: {vertices:?}"
        );
        Ok(Polygon { vertices })
    }

    #[inline(always)]
    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().copied()
    }

    /// Iterates over all edges as (start, end) pairs, including the closing edge.
    pub fn edge_iter(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices.iter().copied().circular_tuple_windows()
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices rounded to integer coordinates, for renderers working on a pixel grid.
    pub fn quantized(&self) -> Vec<(i64, i64)> {
        self.vertices.iter().map(Point::quantized).collect_vec()
    }
}

impl Transformable for Polygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        self.vertices.iter_mut().for_each(|v| {
            v.transform(t);
        });
        self
    }

    fn transform_around(&mut self, t: &Transformation, pivot: Point) -> &mut Self {
        self.vertices.iter_mut().for_each(|v| {
            v.transform_around(t, pivot);
        });
        self
    }
}

impl Shape for Polygon {
    /// Arithmetic mean of the vertices (not area-weighted).
    /// Always computed from the current vertices, never cached.
    fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sum_x, sum_y) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
        Point(sum_x / n, sum_y / n)
    }

    fn bbox(&self) -> Rect {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in self.vertices.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }
}
