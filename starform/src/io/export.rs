use itertools::Itertools;

use crate::geometry::primitives::Rect;
use crate::io::ext_repr::{ExtPolygon, ExtRect, ExtSession};
use crate::session::Session;

/// Exports the current state of a [`Session`] to its external representation.
pub fn export(session: &Session) -> ExtSession {
    ExtSession {
        mode: session.mode(),
        shape: ExtPolygon(session.shape().vertex_iter().map(|p| p.into()).collect_vec()),
        anchor: session.anchor().into(),
        bounds: export_rect(session.bounds()),
        key_step: Some(session.key_step()),
    }
}

fn export_rect(rect: &Rect) -> ExtRect {
    ExtRect {
        left: rect.left(),
        right: rect.right(),
        top: rect.top(),
        bottom: rect.bottom(),
    }
}
