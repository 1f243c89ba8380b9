use std::collections::HashSet;
use std::str::FromStr;

use anyhow::{Error, bail};
use serde::{Deserialize, Serialize};

use crate::session::command::Command;

/// Direction keys that move the current subject while held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];
}

impl FromStr for Key {
    type Err = Error;

    /// Parses key names as reported by windowing toolkits (`"Left"`, `"up"`, ...), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Key::Left),
            "right" => Ok(Key::Right),
            "up" => Ok(Key::Up),
            "down" => Ok(Key::Down),
            other => bail!("not a direction key: {other:?}"),
        }
    }
}

/// Tracks which direction keys are currently held.
///
/// Updated by key events between ticks, read exactly once per tick through [`KeyTracker::snapshot`].
#[derive(Clone, Debug, Default)]
pub struct KeyTracker {
    held: HashSet<Key>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
        }
    }
}

/// Immutable view of the held direction keys at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputSnapshot {
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a Key>) -> Self {
        keys.into_iter()
            .fold(InputSnapshot::default(), |mut snapshot, key| {
                match key {
                    Key::Left => snapshot.left = true,
                    Key::Right => snapshot.right = true,
                    Key::Up => snapshot.up = true,
                    Key::Down => snapshot.down = true,
                }
                snapshot
            })
    }

    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }

    /// Moves generated by the held keys, each `step` units, in the order left, right, up, down.
    /// Opposite keys held together each produce their own move.
    pub fn moves(&self, step: i64) -> impl Iterator<Item = Command> + use<> {
        let held = [self.left, self.right, self.up, self.down];
        Key::ALL
            .into_iter()
            .zip(held)
            .filter(|(_, held)| *held)
            .map(move |(key, _)| match key {
                Key::Left => Command::Move { dx: step.saturating_neg(), dy: 0 },
                Key::Right => Command::Move { dx: step, dy: 0 },
                Key::Up => Command::Move { dx: 0, dy: step },
                Key::Down => Command::Move { dx: 0, dy: step.saturating_neg() },
            })
    }
}
