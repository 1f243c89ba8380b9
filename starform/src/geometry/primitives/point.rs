use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, Transformable};

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Transformable for Point {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Point(x, y) = self;
        let (tx, ty) = t.apply(*x, *y);
        *x = tx;
        *y = ty;
        self
    }

    fn transform_around(&mut self, t: &Transformation, pivot: Point) -> &mut Self {
        let Point(px, py) = pivot;
        let (lx, ly) = t.apply(self.0 - px, self.1 - py);
        self.0 = px + lx;
        self.1 = py + ly;
        self
    }
}

impl Point {
    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    pub fn sq_distance_to(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    /// Rounds both coordinates to the nearest integer, used when handing points to a renderer.
    pub fn quantized(&self) -> (i64, i64) {
        (self.0.round() as i64, self.1.round() as i64)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = self.0.to_bits();
        let y = self.1.to_bits();
        x.hash(state);
        y.hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl<T> CollidesWith<T> for Point
where
    T: CollidesWith<Point>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}
