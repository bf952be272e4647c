//! ASCII DXF writer

use std::io::Write;

use super::options::{GroupCodeLayout, WriterOptions};
use super::stream_writer::DxfStreamWriter;
use crate::error::{DxfError, Result};
use crate::types::Handle;

/// Format a double the way DXF readers expect it
///
/// Integral values keep one decimal place (`50.0`). Everything else uses the
/// shortest decimal string that reads back to the same value. Exponent
/// notation is never produced.
pub fn format_double(value: f64) -> String {
    // -0.0 would otherwise print with a sign
    let value = if value == 0.0 { 0.0 } else { value };
    if value == value.trunc() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// ASCII DXF stream writer
pub struct DxfTextWriter<W: Write> {
    writer: W,
    options: WriterOptions,
}

impl<W: Write> DxfTextWriter<W> {
    /// Create a new ASCII DXF writer with default options
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, WriterOptions::default())
    }

    /// Create a new ASCII DXF writer with explicit options
    pub fn with_options(writer: W, options: WriterOptions) -> Self {
        Self { writer, options }
    }

    /// The options this writer was built with
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    fn write_code(&mut self, code: i32) -> Result<()> {
        match self.options.code_layout {
            GroupCodeLayout::Compact => writeln!(self.writer, "{}", code)?,
            GroupCodeLayout::RightAligned => writeln!(self.writer, "{:>3}", code)?,
        }
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DxfStreamWriter for DxfTextWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        // one value per line; a line break would shift every following pair
        if value.contains(|c: char| c == '\n' || c == '\r') {
            return Err(DxfError::Encoding(format!(
                "group {} value {:?} contains a line break",
                code, value
            )));
        }
        self.write_code(code)?;
        match self.options.code_page {
            Some(code_page) => {
                let bytes = code_page.encode(value)?;
                self.writer.write_all(&bytes)?;
                self.writer.write_all(b"\n")?;
            }
            None => writeln!(self.writer, "{}", value)?,
        }
        Ok(())
    }

    fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(DxfError::InvalidGeometry(format!(
                "group {} value {} is not finite",
                code, value
            )));
        }
        self.write_code(code)?;
        writeln!(self.writer, "{}", format_double(value))?;
        Ok(())
    }

    fn write_bool(&mut self, code: i32, value: bool) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", if value { 1 } else { 0 })?;
        Ok(())
    }

    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{:x}", handle)?;
        Ok(())
    }

    fn symbol_table_marker(&self) -> bool {
        self.options.symbol_table_marker
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
