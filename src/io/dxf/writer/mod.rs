//! DXF writer module

mod options;
mod stream_writer;
mod text_writer;

pub use options::{GroupCodeLayout, WriterOptions};
pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::{format_double, DxfTextWriter};
