use std::fmt::Display;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::engine::IgnoreReason;
use crate::geometry::geo_enums::ReflectAxis;
use crate::session::Mode;

const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };

/// A fully parsed command, ready to be applied to a [`Session`](crate::session::Session).
///
/// Vertical distances follow the user's convention: positive is *up*, regardless of the screen's y-axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Move { dx: i64, dy: i64 },
    Scale { sx: NotNan<f64>, sy: NotNan<f64> },
    Rotate { degrees: NotNan<f64> },
    Reflect(ReflectAxis),
    SetMode(Mode),
    ToggleMode,
}

/// The control a piece of command text was entered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    #[serde(alias = "move_h")]
    MoveHorizontal,
    #[serde(alias = "move_v")]
    MoveVertical,
    #[serde(alias = "scale_h")]
    ScaleHorizontal,
    #[serde(alias = "scale_v")]
    ScaleVertical,
    Rotate,
    /// Reflection with the axis given as text
    Reflect,
    /// Trigger, the text is not read
    ReflectHorizontal,
    /// Trigger, the text is not read
    ReflectVertical,
    /// Trigger, the text is not read
    ToggleMode,
}

/// Raw text typed into one of the controls, not yet parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedCommand {
    pub kind: CommandKind,
    #[serde(default)]
    pub value: String,
}

impl TypedCommand {
    pub fn new(kind: CommandKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn trigger(kind: CommandKind) -> Self {
        Self::new(kind, "")
    }

    pub fn parse(&self) -> Result<Command, IgnoreReason> {
        Command::parse(self.kind, &self.value)
    }
}

impl Command {
    /// Parses the text entered for a control of the given kind.
    ///
    /// Moves take an integer, scales and rotations a finite real (rotations in degrees).
    /// Surrounding whitespace is ignored.
    pub fn parse(kind: CommandKind, text: &str) -> Result<Command, IgnoreReason> {
        let text = text.trim();
        match kind {
            CommandKind::MoveHorizontal => Ok(Command::Move {
                dx: parse_int(text)?,
                dy: 0,
            }),
            CommandKind::MoveVertical => Ok(Command::Move {
                dx: 0,
                dy: parse_int(text)?,
            }),
            CommandKind::ScaleHorizontal => Ok(Command::Scale {
                sx: parse_real(text)?,
                sy: _1,
            }),
            CommandKind::ScaleVertical => Ok(Command::Scale {
                sx: _1,
                sy: parse_real(text)?,
            }),
            CommandKind::Rotate => Ok(Command::Rotate {
                degrees: parse_real(text)?,
            }),
            CommandKind::Reflect => text
                .parse::<ReflectAxis>()
                .map(Command::Reflect)
                .map_err(|_| IgnoreReason::InvalidAxis),
            CommandKind::ReflectHorizontal => Ok(Command::Reflect(ReflectAxis::Horizontal)),
            CommandKind::ReflectVertical => Ok(Command::Reflect(ReflectAxis::Vertical)),
            CommandKind::ToggleMode => Ok(Command::ToggleMode),
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Option<Command> {
        match (finite(sx), finite(sy)) {
            (Some(sx), Some(sy)) => Some(Command::Scale { sx, sy }),
            _ => None,
        }
    }

    pub fn rotate(degrees: f64) -> Option<Command> {
        finite(degrees).map(|degrees| Command::Rotate { degrees })
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Move { dx, dy } => write!(f, "move ({dx}, {dy})"),
            Command::Scale { sx, sy } => write!(f, "scale ({sx}, {sy})"),
            Command::Rotate { degrees } => write!(f, "rotate {degrees}°"),
            Command::Reflect(axis) => write!(f, "reflect {axis}"),
            Command::SetMode(mode) => write!(f, "set mode {mode:?}"),
            Command::ToggleMode => write!(f, "toggle mode"),
        }
    }
}

fn parse_int(text: &str) -> Result<i64, IgnoreReason> {
    text.parse::<i64>()
        .map_err(|_| IgnoreReason::MalformedInput)
}

fn parse_real(text: &str) -> Result<NotNan<f64>, IgnoreReason> {
    let value = text
        .parse::<f64>()
        .map_err(|_| IgnoreReason::MalformedInput)?;
    finite(value).ok_or(IgnoreReason::MalformedInput)
}

fn finite(value: f64) -> Option<NotNan<f64>> {
    match value.is_finite() {
        true => NotNan::new(value).ok(),
        false => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(CommandKind::MoveHorizontal, "15", Command::Move { dx: 15, dy: 0 }; "move horizontal")]
    #[test_case(CommandKind::MoveVertical, " -7 ", Command::Move { dx: 0, dy: -7 }; "move vertical with whitespace")]
    #[test_case(CommandKind::ReflectHorizontal, "ignored", Command::Reflect(ReflectAxis::Horizontal); "trigger ignores text")]
    #[test_case(CommandKind::Reflect, "y", Command::Reflect(ReflectAxis::Vertical); "named axis")]
    #[test_case(CommandKind::ToggleMode, "", Command::ToggleMode; "toggle")]
    fn parses(kind: CommandKind, text: &str, expected: Command) {
        assert_eq!(Command::parse(kind, text), Ok(expected));
    }

    #[test]
    fn parses_reals() {
        let Ok(Command::Scale { sx, sy }) = Command::parse(CommandKind::ScaleVertical, "0.5") else {
            panic!("expected a scale command");
        };
        assert_eq!((sx.into_inner(), sy.into_inner()), (1.0, 0.5));

        let Ok(Command::Rotate { degrees }) = Command::parse(CommandKind::Rotate, "-90") else {
            panic!("expected a rotate command");
        };
        assert_eq!(degrees.into_inner(), -90.0);
    }

    #[test_case(CommandKind::MoveHorizontal, "5.0"; "real for integer")]
    #[test_case(CommandKind::MoveVertical, "abc"; "letters")]
    #[test_case(CommandKind::MoveHorizontal, ""; "empty")]
    #[test_case(CommandKind::ScaleHorizontal, "nan"; "nan")]
    #[test_case(CommandKind::ScaleVertical, "inf"; "infinite")]
    #[test_case(CommandKind::Rotate, "1,5"; "comma decimal")]
    fn rejects_malformed(kind: CommandKind, text: &str) {
        assert_eq!(Command::parse(kind, text), Err(IgnoreReason::MalformedInput));
    }

    #[test]
    fn rejects_unknown_axis() {
        assert_eq!(
            Command::parse(CommandKind::Reflect, "z"),
            Err(IgnoreReason::InvalidAxis)
        );
    }
}
