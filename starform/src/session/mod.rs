mod command;
mod input;
mod viewport;

use anyhow::{Result, ensure};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::engine;
use crate::engine::{IgnoreReason, RejectReason, Status};
use crate::geometry::primitives::{Point, Polygon, Rect};
use crate::util::assertions;

#[doc(inline)]
pub use command::{Command, CommandKind, TypedCommand};
#[doc(inline)]
pub use input::{InputSnapshot, Key, KeyTracker};
#[doc(inline)]
pub use viewport::{STAR_POINTS, Viewport};

/// Default distance (in units) covered per tick while a direction key is held
pub const DEFAULT_KEY_STEP: i64 = 5;

/// Selects which subject incoming commands act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Commands transform the polygon
    #[default]
    Shape,
    /// Moves offset the text anchor, other commands have no effect
    Text,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Shape => Mode::Text,
            Mode::Text => Mode::Shape,
        }
    }
}

/// The subject selected by the current [`Mode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Subject<'a> {
    Shape(&'a Polygon),
    Text(&'a Point),
}

/// Mutable counterpart of [`Subject`].
#[derive(Debug)]
pub enum SubjectMut<'a> {
    Shape(&'a mut Polygon),
    Text(&'a mut Point),
}

/// Statuses of everything applied during a single tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    /// Statuses of the moves generated by held keys
    pub key_moves: Vec<Status>,
    /// Statuses of the typed commands, in submission order
    pub commands: Vec<Status>,
}

impl TickReport {
    pub fn statuses(&self) -> impl Iterator<Item = &Status> {
        self.key_moves.iter().chain(self.commands.iter())
    }
}

/// State of an editing session: the star polygon, the text anchor, the active mode and the boundary rectangle.
///
/// There is no history. Every applied operation replaces the current subject,
/// rejected and ignored operations leave the session exactly as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    shape: Polygon,
    anchor: Point,
    mode: Mode,
    bounds: Rect,
    key_step: i64,
    n_ticks: u64,
}

impl Session {
    pub fn new(shape: Polygon, anchor: Point, bounds: Rect) -> Self {
        Self {
            shape,
            anchor,
            mode: Mode::Shape,
            bounds,
            key_step: DEFAULT_KEY_STEP,
            n_ticks: 0,
        }
    }

    /// Fresh session for a host window: centered star, anchor at the same center, shape mode.
    pub fn from_viewport(viewport: &Viewport) -> Result<Self> {
        let bounds = viewport.bounds()?;
        let shape = viewport.initial_star().generate();
        debug!(
            "[SESSION] new session, bounds: {bounds:?}, star center: {:?}",
            viewport.initial_anchor()
        );
        Ok(Session::new(shape, viewport.initial_anchor(), bounds))
    }

    /// Sets the distance covered per tick by a held direction key, which must be positive.
    pub fn with_key_step(mut self, key_step: i64) -> Result<Self> {
        ensure!(key_step > 0, "key step must be positive, got {key_step}");
        self.key_step = key_step;
        Ok(self)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn key_step(&self) -> i64 {
        self.key_step
    }

    pub fn n_ticks(&self) -> u64 {
        self.n_ticks
    }

    pub fn subject(&self) -> Subject<'_> {
        match self.mode {
            Mode::Shape => Subject::Shape(&self.shape),
            Mode::Text => Subject::Text(&self.anchor),
        }
    }

    pub fn subject_mut(&mut self) -> SubjectMut<'_> {
        match self.mode {
            Mode::Shape => SubjectMut::Shape(&mut self.shape),
            Mode::Text => SubjectMut::Text(&mut self.anchor),
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Applies a parsed command to the subject selected by the current mode.
    pub fn apply(&mut self, command: Command) -> Status {
        let status = match command {
            Command::SetMode(mode) => {
                self.set_mode(mode);
                Status::Applied
            }
            Command::ToggleMode => {
                self.toggle_mode();
                Status::Applied
            }
            Command::Move { dx, dy } => self.move_subject(dx, dy),
            Command::Scale { sx, sy } => {
                self.transform_shape(|s| engine::scale(s, (sx.into_inner(), sy.into_inner())))
            }
            Command::Rotate { degrees } => {
                self.transform_shape(|s| engine::rotate(s, degrees.to_radians()))
            }
            Command::Reflect(axis) => self.transform_shape(|s| engine::reflect(s, axis)),
        };

        match status.is_applied() {
            true => trace!("[SESSION] {command}: {status}"),
            false => debug!("[SESSION] {command}: {status}"),
        }
        status
    }

    fn move_subject(&mut self, dx: i64, dy: i64) -> Status {
        let bounds = self.bounds;
        match self.subject_mut() {
            // screen y grows downward, user "up" is positive
            SubjectMut::Shape(shape) => {
                let (translated, status) =
                    engine::translate(shape, (dx as f64, -(dy as f64)), &bounds);
                *shape = translated;
                status
            }
            SubjectMut::Text(anchor) => {
                *anchor = Point(anchor.0 + dx as f64, anchor.1 - dy as f64);
                Status::Applied
            }
        }
    }

    /// Replaces the polygon by `op(polygon)`, unless a vertex of the result is no longer finite.
    fn transform_shape(&mut self, op: impl FnOnce(&Polygon) -> Polygon) -> Status {
        match self.subject_mut() {
            SubjectMut::Shape(shape) => {
                let candidate = op(shape);
                match assertions::all_vertices_finite(&candidate) {
                    true => {
                        *shape = candidate;
                        Status::Applied
                    }
                    false => Status::Rejected(RejectReason::Overflow),
                }
            }
            SubjectMut::Text(_) => Status::Ignored(IgnoreReason::NotInTextMode),
        }
    }

    /// Parses and applies the text entered for a control. Unparsable text is dropped without touching the state.
    pub fn submit(&mut self, typed: &TypedCommand) -> Status {
        match typed.parse() {
            Ok(command) => self.apply(command),
            Err(reason) => {
                debug!(
                    "[SESSION] {:?} with value {:?} dropped",
                    typed.kind, typed.value
                );
                Status::Ignored(reason)
            }
        }
    }

    /// Runs one tick: moves for the held keys first, then the typed commands in order.
    pub fn tick(&mut self, input: &InputSnapshot, typed: &[TypedCommand]) -> TickReport {
        let key_moves = input
            .moves(self.key_step)
            .map(|command| self.apply(command))
            .collect();
        let commands = typed.iter().map(|tc| self.submit(tc)).collect();

        let report = TickReport {
            tick: self.n_ticks,
            key_moves,
            commands,
        };
        self.n_ticks += 1;

        trace!("[SESSION] tick {} done: {:?}", report.tick, report);
        report
    }
}
