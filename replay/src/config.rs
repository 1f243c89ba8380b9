use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use starform::io::svg::SvgDrawOptions;
use starform::session::{DEFAULT_KEY_STEP, Viewport};

/// Configuration for a replay run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReplayConfig {
    /// Host window the session is laid out in, unless the script brings its own
    pub viewport: Viewport,
    /// Distance covered per tick while a direction key is held
    pub key_step: i64,
    /// Target duration of a single tick
    pub tick_interval_ms: u64,
    /// Sleep out the remainder of every tick instead of replaying as fast as possible
    pub pace_ticks: bool,
    /// Write an SVG frame every `frame_interval` ticks. No intermediate frames if undefined
    pub frame_interval: Option<usize>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl ReplayConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.key_step > 0, "key step must be positive, got {}", self.key_step);
        ensure!(
            self.frame_interval != Some(0),
            "frame interval must be positive if defined"
        );
        self.viewport.bounds()?;
        Ok(())
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            key_step: DEFAULT_KEY_STEP,
            tick_interval_ms: 16,
            pace_ticks: false,
            frame_interval: None,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
