/// External (serializable) representations of the session state
pub mod ext_repr;

/// Rendering of a session to SVG
pub mod svg;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
