mod map;
mod position;
mod vessel;

pub use map::*;
pub use position::*;
pub use vessel::*;
