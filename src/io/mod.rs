//! I/O module for writing DXF group-code text

pub mod dxf;

pub use dxf::{DxfTextWriter, WriterOptions};
