//! Data types shared across the grid layers.

mod column;
mod geometry;
mod record;
mod selection;
mod value;

pub use column::*;
pub use geometry::*;
pub use record::*;
pub use selection::*;
pub use value::*;
