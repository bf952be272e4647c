//! # dxfwrite
//!
//! Table-record and handle encoding for ASCII DXF output.
//!
//! This library models the definition tables of a DXF drawing (line types,
//! viewports, layers, text styles) and writes them as group-code/value text
//! that strict, positional DXF readers accept.
//!
//! ## Features
//!
//! - Session-scoped handle allocation, written as lowercase hex
//! - LTYPE, VPORT, LAYER and STYLE table records
//! - Line type deduplication by dash pattern
//! - Dash pattern derivation from graphics-API strokes and transforms
//! - Optional AutoCAD-style layout and code page transcoding
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxfwrite::{DrawingSession, StrokeStyle};
//! use nalgebra::Affine2;
//!
//! let mut session = DrawingSession::with_standard_records(100.0)?;
//!
//! // Strokes with the same scaled pattern share one line type
//! let stroke = StrokeStyle::dashed(1.0, vec![2.0, 1.0]);
//! let name = session.line_type_for_stroke(&stroke, &Affine2::identity())?.name().to_string();
//!
//! print!("{}", session.emit_tables()?);
//! # Ok::<(), dxfwrite::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `DatabaseObject` - handle-owning base embedded in every record
//! - `DxfObject` - text-emission protocol
//! - `TableEntry` - named table records; `TableRecord` is the closed set
//! - `Table` - insertion-ordered, name-unique record storage
//! - `DrawingSession` - allocator, tables and configuration for one file
//!
//! Document assembly (HEADER, TABLE/ENDTAB framing, ENTITIES, EOF) is left
//! to the caller.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod database;
pub mod error;
pub mod io;
pub mod session;
pub mod stroke;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use database::{DatabaseObject, DxfObject};
pub use error::{DxfError, Result};
pub use types::{Color, Handle, HandleAllocator, LineWeight, Vector2};

// Re-export table types
pub use tables::{
    DashPattern, Layer, LayerFlags, LineType, NameGenerator, Table, TableEntry, TableRecord,
    TextGenerationFlags, TextStyle, VPort,
};

// Re-export session and stroke handling
pub use session::{DrawingSession, SessionConfiguration};
pub use stroke::{derive_dash_pattern, scale_factor, stroke_dash_pattern, StrokeStyle};

// Re-export I/O types
pub use io::dxf::{CodePage, DxfStreamWriter, DxfTextWriter, GroupCodeLayout, WriterOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
