use serde::{Deserialize, Serialize};

use crate::session::Mode;

/// External representation of a [`Session`](crate::session::Session).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSession {
    /// Subject that commands currently act on
    pub mode: Mode,
    /// Current vertices of the star polygon
    pub shape: ExtPolygon,
    /// Current position of the text label
    pub anchor: (f64, f64),
    /// Legal region for the polygon's vertices
    pub bounds: ExtRect,
    /// Distance covered per tick by a held direction key
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key_step: Option<i64>,
}

/// External representation of a [`Polygon`](crate::geometry::primitives::Polygon).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPolygon(pub Vec<(f64, f64)>);

/// External representation of the boundary [`Rect`](crate::geometry::primitives::Rect), by its four borders.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}
