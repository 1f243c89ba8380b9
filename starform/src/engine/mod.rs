mod boundary;
mod ops;
mod status;

#[doc(inline)]
pub use boundary::{first_out_of_bounds, in_bounds};
#[doc(inline)]
pub use ops::{reflect, reflect_named, rotate, scale, translate};
#[doc(inline)]
pub use status::{IgnoreReason, RejectReason, Status};
