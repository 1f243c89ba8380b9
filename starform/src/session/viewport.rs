use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Rect};
use crate::geometry::star::StarParams;

/// Dimensions of the host window, split into a control panel and the drawing area.
///
/// The boundary rectangle and the initial star are derived from it once, at the start of a session.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Fraction of the width taken by the control panel
    #[serde(default = "default_panel_fraction")]
    pub panel_fraction: f64,
    /// Width of the separator between panel and drawing area
    #[serde(default = "default_separator_width")]
    pub separator_width: u32,
}

fn default_panel_fraction() -> f64 {
    0.25
}

fn default_separator_width() -> u32 {
    4
}

/// Number of star tips in a fresh session
pub const STAR_POINTS: usize = 5;

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            panel_fraction: default_panel_fraction(),
            separator_width: default_separator_width(),
        }
    }

    pub fn panel_width(&self) -> u32 {
        (self.panel_fraction * self.width as f64) as u32
    }

    pub fn embed_width(&self) -> u32 {
        ((1.0 - self.panel_fraction) * self.width as f64) as u32
    }

    /// The legal region for polygon vertices: from the left edge up to the separator, full height.
    pub fn bounds(&self) -> Result<Rect> {
        ensure!(
            (0.0..1.0).contains(&self.panel_fraction),
            "panel fraction must be in [0, 1), got {}",
            self.panel_fraction
        );
        let right = self.width as f64 - self.separator_width as f64 - self.panel_width() as f64;
        Rect::from_borders(0.0, right, self.height as f64, 0.0)
    }

    /// Star centered in the drawing area, sized relative to its width.
    /// The outer radius is truncated to whole units, the inner one is not.
    pub fn initial_star(&self) -> StarParams {
        let embed_width = self.embed_width();
        let inner_radius = embed_width as f64 / 50.0;
        StarParams {
            center: self.initial_anchor(),
            inner_radius,
            outer_radius: (2.5 * inner_radius).trunc(),
            n_points: STAR_POINTS,
        }
    }

    /// Starting position of both the star center and the text label
    pub fn initial_anchor(&self) -> Point {
        Point(
            (self.embed_width() / 2) as f64,
            (self.height / 2) as f64,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(1920, 1080)
    }
}
