//! Core value types.
//!
//! - [`Position`]: (row, col) cell coordinate
//! - [`Direction`]: one of the four cardinal moves, with its display glyph

mod direction;
mod position;

pub use direction::Direction;
pub use position::Position;
