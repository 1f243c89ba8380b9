use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Error, bail};
use serde::{Deserialize, Serialize};

/// Axis along which a reflection mirrors a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectAxis {
    /// Mirrors across the vertical line through the pivot, flipping x: `x' = 2·cx − x`
    Horizontal,
    /// Mirrors across the horizontal line through the pivot, flipping y: `y' = 2·cy − y`
    Vertical,
}

impl FromStr for ReflectAxis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "h" | "horizontal" => Ok(ReflectAxis::Horizontal),
            "y" | "v" | "vertical" => Ok(ReflectAxis::Vertical),
            other => bail!("unknown reflection axis: {other:?}"),
        }
    }
}

impl Display for ReflectAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReflectAxis::Horizontal => write!(f, "horizontal"),
            ReflectAxis::Vertical => write!(f, "vertical"),
        }
    }
}
