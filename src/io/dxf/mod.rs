//! DXF (Drawing Exchange Format) text output

mod code_page;
mod writer;

pub use code_page::CodePage;
pub use writer::{
    format_double, DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter, GroupCodeLayout,
    WriterOptions,
};
