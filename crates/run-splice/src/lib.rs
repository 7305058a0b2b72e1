mod chars;
mod container;
mod editor;
mod error;
mod extract;
mod model;
mod ops;
mod resolve;
mod segment;
mod splice;

pub use crate::container::*;
pub use crate::editor::*;
pub use crate::error::*;
pub use crate::extract::*;
pub use crate::model::*;
pub use crate::ops::*;
pub use crate::resolve::*;
pub use crate::segment::*;
pub use crate::splice::*;
