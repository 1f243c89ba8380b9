use std::ops::{Add, Div, Mul, Sub};

use crate::geometry::geo_enums::ReflectAxis;

//See https://pages.mtu.edu/~shene/COURSES/cs3621/NOTES/geometry/geo-tran.html

#[derive(Clone, Debug, PartialEq)]
///2D affine transformation in homogeneous matrix form.
///
///Builder methods (`translate`, `rotate`, `scale`, ...) apply the new operation *after* the existing one.
pub struct Transformation {
    matrix: [[f64; 3]; 3],
}

impl Transformation {
    pub const fn identity() -> Self {
        Self {
            matrix: IDENTITY_MATRIX,
        }
    }

    pub fn from_translation((tx, ty): (f64, f64)) -> Self {
        Self {
            matrix: transl_m((tx, ty)),
        }
    }

    /// Rotation around the origin, `angle` in radians
    pub fn from_rotation(angle: f64) -> Self {
        Self {
            matrix: rot_m(angle),
        }
    }

    /// Per-axis scaling around the origin
    pub fn from_scale((sx, sy): (f64, f64)) -> Self {
        Self {
            matrix: scale_m((sx, sy)),
        }
    }

    /// Mirroring around the axis through the origin
    pub fn from_reflection(axis: ReflectAxis) -> Self {
        match axis {
            ReflectAxis::Horizontal => Self::from_scale((-1.0, 1.0)),
            ReflectAxis::Vertical => Self::from_scale((1.0, -1.0)),
        }
    }

    pub fn translate(mut self, (tx, ty): (f64, f64)) -> Self {
        self.matrix = dot_prod(&transl_m((tx, ty)), &self.matrix);
        self
    }

    pub fn rotate(mut self, angle: f64) -> Self {
        self.matrix = dot_prod(&rot_m(angle), &self.matrix);
        self
    }

    pub fn scale(mut self, (sx, sy): (f64, f64)) -> Self {
        self.matrix = dot_prod(&scale_m((sx, sy)), &self.matrix);
        self
    }

    /// Applies `other` after `self`.
    pub fn transform(mut self, other: &Self) -> Self {
        self.matrix = dot_prod(&other.matrix, &self.matrix);
        self
    }

    /// Returns the inverse transformation, or `None` if the transformation is singular (e.g. a zero scale).
    pub fn inverse(&self) -> Option<Self> {
        let m = &self.matrix;
        let det = det(m);
        match det == 0.0 || !det.is_finite() {
            true => None,
            false => Some(Self {
                matrix: inverse(m, det),
            }),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == IDENTITY_MATRIX
    }

    /// Applies the transformation to the coordinates `(x, y)`.
    #[inline(always)]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.matrix;
        let t_x = m[0][0] * x + m[0][1] * y + m[0][2];
        let t_y = m[1][0] * x + m[1][1] * y + m[1][2];
        (t_x, t_y)
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

const IDENTITY_MATRIX: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

fn rot_m(angle: f64) -> [[f64; 3]; 3] {
    let (sin, cos) = angle.sin_cos();
    [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]
}

fn transl_m((tx, ty): (f64, f64)) -> [[f64; 3]; 3] {
    [[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]]
}

fn scale_m((sx, sy): (f64, f64)) -> [[f64; 3]; 3] {
    [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]]
}

#[inline(always)]
fn dot_prod<T>(l: &[[T; 3]; 3], r: &[[T; 3]; 3]) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Copy,
{
    [
        [
            l[0][0] * r[0][0] + l[0][1] * r[1][0] + l[0][2] * r[2][0],
            l[0][0] * r[0][1] + l[0][1] * r[1][1] + l[0][2] * r[2][1],
            l[0][0] * r[0][2] + l[0][1] * r[1][2] + l[0][2] * r[2][2],
        ],
        [
            l[1][0] * r[0][0] + l[1][1] * r[1][0] + l[1][2] * r[2][0],
            l[1][0] * r[0][1] + l[1][1] * r[1][1] + l[1][2] * r[2][1],
            l[1][0] * r[0][2] + l[1][1] * r[1][2] + l[1][2] * r[2][2],
        ],
        [
            l[2][0] * r[0][0] + l[2][1] * r[1][0] + l[2][2] * r[2][0],
            l[2][0] * r[0][1] + l[2][1] * r[1][1] + l[2][2] * r[2][1],
            l[2][0] * r[0][2] + l[2][1] * r[1][2] + l[2][2] * r[2][2],
        ],
    ]
}

#[inline(always)]
fn det<T>(m: &[[T; 3]; 3]) -> T
where
    T: Add<Output = T> + Mul<Output = T> + Sub<Output = T> + Copy,
{
    m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
        - m[0][2] * m[1][1] * m[2][0]
        - m[0][1] * m[1][0] * m[2][2]
        - m[0][0] * m[1][2] * m[2][1]
}

#[inline(always)]
fn inverse<T>(m: &[[T; 3]; 3], det: T) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Sub<Output = T> + Div<Output = T> + Copy,
{
    [
        [
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
        ],
        [
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
        ],
        [
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
        ],
    ]
}
