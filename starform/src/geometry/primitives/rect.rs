use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;

///Axis-aligned rectangle, closed on all four sides.
///
///Also used as the *boundary rectangle* of a session: the legal region for polygon vertices under translation.
///In screen coordinates `y_min` is the bottom border (0) and `y_max` the top border (viewport height).
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Creates a rectangle from its four borders, `bottom <= top`.
    pub fn from_borders(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self> {
        Rect::try_new(left, bottom, right, top)
    }

    pub fn left(&self) -> f64 {
        self.x_min
    }

    pub fn right(&self) -> f64 {
        self.x_max
    }

    pub fn top(&self) -> f64 {
        self.y_max
    }

    pub fn bottom(&self) -> f64 {
        self.y_min
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
