use serde::{Deserialize, Serialize};
use starform::session::{Key, Mode, TypedCommand, Viewport};

/// External representation of a scripted session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtScript {
    /// Overrides the viewport of the config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    /// Mode the session starts in
    #[serde(default)]
    pub mode: Mode,
    pub ticks: Vec<ExtTick>,
}

/// Input of a single tick, possibly repeated
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExtTick {
    /// Direction keys held during the tick
    #[serde(default)]
    pub held: Vec<Key>,
    /// Commands typed or triggered during the tick, applied after the held keys
    #[serde(default)]
    pub commands: Vec<TypedCommand>,
    /// Number of consecutive ticks with this input, 1 if undefined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<usize>,
}

impl ExtTick {
    pub fn n_repeats(&self) -> usize {
        self.repeat.unwrap_or(1)
    }
}

impl ExtScript {
    /// Total number of ticks the script expands to
    pub fn n_ticks(&self) -> usize {
        self.ticks.iter().map(ExtTick::n_repeats).sum()
    }
}
