//! Sketchware API entity shapes.
//!
//! Each struct is the field mapping for one wire shape: serde attributes
//! rename wire names, mark optional fields and attach the codecs from
//! [`crate::codec`].

mod project;
mod shared;
mod user;

pub use project::*;
pub use shared::*;
pub use user::*;
