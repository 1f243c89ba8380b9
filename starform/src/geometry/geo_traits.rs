use crate::geometry::Transformation;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
/// Touching counts as colliding.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can be modified by a [`Transformation`].
pub trait Transformable: Clone {
    /// Applies a transformation to `self`.
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }

    /// Applies `t` in the frame centered on `pivot`: `p' = pivot + t(p - pivot)`.
    ///
    /// Evaluated per point instead of through a composed matrix, so an overflowing axis
    /// cannot leak into the other one.
    fn transform_around(&mut self, t: &Transformation, pivot: Point) -> &mut Self;

    /// Same as [`Transformable::transform_around`], applied to a clone.
    fn transform_around_clone(&self, t: &Transformation, pivot: Point) -> Self {
        let mut clone = self.clone();
        clone.transform_around(t, pivot);
        clone
    }
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Center of the shape, used as the pivot of rotations, scalings and reflections
    fn centroid(&self) -> Point;

    /// Bounding box of the shape
    fn bbox(&self) -> Rect;
}
