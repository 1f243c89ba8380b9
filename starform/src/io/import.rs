use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::geometry::primitives::{Point, Polygon, Rect};
use crate::io::ext_repr::ExtSession;
use crate::session::{DEFAULT_KEY_STEP, Session};

/// Restores a [`Session`] from its external representation.
pub fn import(ext: &ExtSession) -> Result<Session> {
    let bounds = {
        let r = &ext.bounds;
        Rect::from_borders(r.left, r.right, r.top, r.bottom).context("invalid session bounds")?
    };

    ensure!(
        ext.shape.0.len() >= 3,
        "session shape needs at least 3 vertices, got {}",
        ext.shape.0.len()
    );
    let shape = Polygon::new(ext.shape.0.iter().map(|&p| Point::from(p)).collect_vec())
        .context("invalid session shape")?;

    let anchor = Point::from(ext.anchor);
    ensure!(
        anchor.0.is_finite() && anchor.1.is_finite(),
        "session anchor is not finite: {anchor:?}"
    );

    Session::new(shape, anchor, bounds)
        .with_mode(ext.mode)
        .with_key_step(ext.key_step.unwrap_or(DEFAULT_KEY_STEP))
        .context("invalid session key step")
}
