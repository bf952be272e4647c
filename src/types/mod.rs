//! Core value types shared by every table record

pub mod color;
pub mod handle;
pub mod line_weight;
pub mod vector;

pub use color::Color;
pub use handle::{Handle, HandleAllocator};
pub use line_weight::LineWeight;
pub use vector::Vector2;
