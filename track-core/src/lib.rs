#![deny(rust_2018_idioms)]

//! Domain types and the pure projection from a raw vessel track to a renderable map state.

mod domain;
mod error;
mod ports;
mod projection;

pub use domain::*;
pub use error::*;
pub use ports::*;
pub use projection::project;
