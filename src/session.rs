//! Drawing session: handle allocation and table records for one output file
//!
//! A [`DrawingSession`] owns the handle allocator and one table per record
//! kind. Producers create records through it, so every record gets its
//! handle from the same counter and names stay unique within their table.
//! Handles are only unique within a session; run one session per file.

use std::io::Write;

use nalgebra::Affine2;
use tracing::{debug, warn};

use crate::database::DxfObject;
use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfStreamWriter, DxfTextWriter, WriterOptions};
use crate::stroke::{stroke_dash_pattern, StrokeStyle};
use crate::tables::{
    validate_name, DashPattern, Layer, LineType, NameGenerator, Table, TableEntry, TableRecord,
    TextStyle, VPort,
};
use crate::types::{Handle, HandleAllocator, Vector2};

/// Session settings
#[derive(Debug, Clone)]
pub struct SessionConfiguration {
    /// Prefix for generated line type names (`Linetype_0`, ...)
    pub line_type_prefix: String,
    /// Prefix for generated layer names
    pub layer_prefix: String,
    /// Prefix for generated text style names
    pub text_style_prefix: String,
    /// First handle to issue; raise it when merging with externally
    /// numbered objects. Clamped to [`HandleAllocator::MAX_SEED`].
    pub handle_seed: u64,
    /// Output options for [`DrawingSession::write_tables`]
    pub writer: WriterOptions,
}

impl Default for SessionConfiguration {
    fn default() -> Self {
        SessionConfiguration {
            line_type_prefix: "Linetype_".to_string(),
            layer_prefix: "Layer_".to_string(),
            text_style_prefix: "Style_".to_string(),
            handle_seed: HandleAllocator::FIRST,
            writer: WriterOptions::default(),
        }
    }
}

/// Handles and table records for one DXF output
#[derive(Debug)]
pub struct DrawingSession {
    handles: HandleAllocator,
    config: SessionConfiguration,
    /// VPORT table
    pub vports: Table<VPort>,
    /// LTYPE table
    pub line_types: Table<LineType>,
    /// LAYER table
    pub layers: Table<Layer>,
    /// STYLE table
    pub text_styles: Table<TextStyle>,
}

impl DrawingSession {
    /// Create an empty session with default settings
    pub fn new() -> Self {
        Self::with_configuration(SessionConfiguration::default())
    }

    /// Create an empty session
    pub fn with_configuration(config: SessionConfiguration) -> Self {
        DrawingSession {
            handles: HandleAllocator::starting_at(config.handle_seed),
            vports: Table::new(),
            line_types: Table::with_name_generator(NameGenerator::new(
                config.line_type_prefix.clone(),
            )),
            layers: Table::with_name_generator(NameGenerator::new(config.layer_prefix.clone())),
            text_styles: Table::with_name_generator(NameGenerator::new(
                config.text_style_prefix.clone(),
            )),
            config,
        }
    }

    /// Create a session holding the records every drawing needs:
    /// the `*Active` viewport, the `Continuous` line type, layer `0`
    /// and the `Standard` text style
    pub fn with_standard_records(view_scale: f64) -> Result<Self> {
        let mut session = Self::new();
        session.add_viewport("*Active", view_scale)?;
        let continuous = LineType::continuous(session.handles_mut());
        session.line_types.add(continuous)?;
        session.add_layer("0")?;
        let standard = TextStyle::standard(session.handles_mut());
        session.text_styles.add(standard)?;
        Ok(session)
    }

    /// Settings this session was created with
    pub fn configuration(&self) -> &SessionConfiguration {
        &self.config
    }

    /// The session's allocator, for constructing records directly
    pub fn handles_mut(&mut self) -> &mut HandleAllocator {
        &mut self.handles
    }

    /// Number of handles issued so far
    pub fn handle_count(&self) -> u64 {
        self.handles.current_count()
    }

    /// Next free handle, the value a document assembler writes as
    /// `$HANDSEED`
    pub fn handle_seed(&self) -> Handle {
        Handle::new(self.handles.next_value())
    }

    /// Line type for a stroke drawn under `transform`
    ///
    /// Derives the dash pattern, then reuses any registered line type with
    /// the same pattern regardless of its name. Otherwise a new line type
    /// with a generated name is registered. Continuous strokes resolve to
    /// the first continuous line type, creating one if needed.
    pub fn line_type_for_stroke(
        &mut self,
        stroke: &StrokeStyle,
        transform: &Affine2<f64>,
    ) -> Result<&LineType> {
        let pattern = stroke_dash_pattern(stroke, transform).map_err(|e| {
            warn!(error = %e, "stroke dash pattern rejected");
            e
        })?;
        self.intern_line_type(pattern)
    }

    /// Line type with `pattern`, registering one if none matches
    pub fn intern_line_type(&mut self, pattern: Option<DashPattern>) -> Result<&LineType> {
        let candidate = pattern.clone();
        let handles = &mut self.handles;
        let (line_type, is_new) = self.line_types.find_or_add(
            |lt| lt.matches_pattern(pattern.as_ref()),
            |name| LineType::new(handles, name, candidate),
        )?;

        let handle = line_type.handle();
        if is_new {
            debug!(handle = %handle, name = line_type.name(), "registered new line type");
        } else {
            debug!(handle = %handle, name = line_type.name(), "reusing line type with same pattern");
        }
        Ok(line_type)
    }

    /// Add a viewport centered at half its scale
    pub fn add_viewport(&mut self, name: impl Into<String>, view_scale: f64) -> Result<Handle> {
        let name = ensure_free(&self.vports, "VPORT", name.into())?;
        let vport = VPort::new(&mut self.handles, name, view_scale)?;
        self.vports.add(vport)
    }

    /// Add a viewport with an explicit center
    pub fn add_viewport_centered(
        &mut self,
        name: impl Into<String>,
        center: Vector2,
        view_scale: f64,
    ) -> Result<Handle> {
        let name = ensure_free(&self.vports, "VPORT", name.into())?;
        let vport = VPort::with_center(&mut self.handles, name, center, view_scale)?;
        self.vports.add(vport)
    }

    /// Add a layer with default settings
    pub fn add_layer(&mut self, name: impl Into<String>) -> Result<Handle> {
        let name = ensure_free(&self.layers, "LAYER", name.into())?;
        let layer = Layer::new(&mut self.handles, name);
        self.layers.add(layer)
    }

    /// Add a layer with a generated name
    pub fn add_unnamed_layer(&mut self) -> Result<Handle> {
        let name = self.layers.next_free_name();
        self.add_layer(name)
    }

    /// Add a text style using `font_file`
    pub fn add_text_style(
        &mut self,
        name: impl Into<String>,
        font_file: impl Into<String>,
    ) -> Result<Handle> {
        let name = ensure_free(&self.text_styles, "STYLE", name.into())?;
        let style = TextStyle::new(&mut self.handles, name, font_file);
        self.text_styles.add(style)
    }

    /// Add a text style with a generated name
    pub fn add_unnamed_text_style(&mut self, font_file: impl Into<String>) -> Result<Handle> {
        let name = self.text_styles.next_free_name();
        self.add_text_style(name, font_file)
    }

    /// Add a record built elsewhere with this session's allocator
    ///
    /// A line type whose dash pattern is already registered is rejected
    /// with [`DxfError::DuplicateDefinition`]; use
    /// [`DrawingSession::intern_line_type`] to reuse it instead.
    pub fn add_record(&mut self, record: TableRecord) -> Result<Handle> {
        match record {
            TableRecord::VPort(r) => self.vports.add(r),
            TableRecord::LineType(r) => self.line_types.add(r),
            TableRecord::Layer(r) => self.layers.add(r),
            TableRecord::TextStyle(r) => self.text_styles.add(r),
        }
    }

    /// Table name and record name of the record with `handle`, if any
    pub fn describe(&self, handle: Handle) -> Option<(&'static str, &str)> {
        fn lookup<T: TableEntry>(table: &Table<T>, handle: Handle) -> Option<(&'static str, &str)> {
            table.get_by_handle(handle).map(|r| (r.table_name(), r.name()))
        }
        lookup(&self.vports, handle)
            .or_else(|| lookup(&self.line_types, handle))
            .or_else(|| lookup(&self.layers, handle))
            .or_else(|| lookup(&self.text_styles, handle))
    }

    /// Write all records, table by table (VPORT, LTYPE, LAYER, STYLE)
    ///
    /// Only the records are written; TABLE/ENDTAB framing belongs to the
    /// document assembler.
    pub fn write_records<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.vports.write_dxf(writer)?;
        self.line_types.write_dxf(writer)?;
        self.layers.write_dxf(writer)?;
        self.text_styles.write_dxf(writer)?;
        Ok(())
    }

    /// Write all records to `out` with the configured writer options
    pub fn write_tables<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = DxfTextWriter::with_options(out, self.config.writer.clone());
        self.write_records(&mut writer)?;
        writer.flush()
    }

    /// All records as text, with default writer options
    pub fn emit_tables(&self) -> Result<String> {
        let mut writer = DxfTextWriter::new(Vec::new());
        self.write_records(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| DxfError::Encoding(e.to_string()))
    }
}

/// Reject a name before a record (and its handle) is created for it
fn ensure_free<T: TableEntry>(
    table: &Table<T>,
    table_name: &'static str,
    name: String,
) -> Result<String> {
    validate_name(table_name, &name)?;
    if table.contains(&name) {
        return Err(DxfError::DuplicateEntry {
            table: table_name,
            name,
        });
    }
    Ok(name)
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}
