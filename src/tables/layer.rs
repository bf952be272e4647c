//! Layer table entry

use bitflags::bitflags;

use super::TableEntry;
use crate::database::DatabaseObject;
use crate::error::Result;
use crate::io::dxf::DxfStreamWriter;
use crate::types::{Color, HandleAllocator, LineWeight};

bitflags! {
    /// Standard layer flags (group 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i16 {
        /// Layer is frozen
        const FROZEN = 1;
        /// Layer is frozen by default in new viewports
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        /// Layer is locked
        const LOCKED = 4;
    }
}

/// A layer table entry
#[derive(Debug, Clone)]
pub struct Layer {
    object: DatabaseObject,
    name: String,
    /// Layer flags
    pub flags: LayerFlags,
    /// Layer color
    pub color: Color,
    /// Name of the line type entities on this layer use by default
    pub line_type: String,
    /// Line weight
    pub line_weight: LineWeight,
    /// Is this layer plotted?
    pub is_plottable: bool,
    /// Layer is off (written as a negative color index)
    pub off: bool,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>) -> Self {
        Layer {
            object: DatabaseObject::new(handles),
            name: name.into(),
            flags: LayerFlags::empty(),
            color: Color::WHITE,
            line_type: "Continuous".to_string(),
            line_weight: LineWeight::Default,
            is_plottable: true,
            off: false,
        }
    }

    /// Create the standard "0" layer
    pub fn layer_0(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, "0")
    }

    /// Create a layer with a specific color
    pub fn with_color(handles: &mut HandleAllocator, name: impl Into<String>, color: Color) -> Self {
        Layer {
            color,
            ..Self::new(handles, name)
        }
    }

    /// Check if the layer is frozen
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    /// Check if the layer is locked against edits
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }

    /// Check if the layer is visible (not off and not frozen)
    pub fn is_visible(&self) -> bool {
        !self.off && !self.is_frozen()
    }
}

impl TableEntry for Layer {
    fn object(&self) -> &DatabaseObject {
        &self.object
    }

    fn table_name(&self) -> &'static str {
        "LAYER"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbLayerTableRecord"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_standard(&self) -> bool {
        self.name == "0"
    }

    fn write_fields<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_string(2, &self.name)?;
        writer.write_i16(70, self.flags.bits())?;

        let index = self.color.layer_index();
        writer.write_i16(62, if self.off { -index } else { index })?;
        if let Some(true_color) = self.color.true_color() {
            writer.write_i32(420, true_color)?;
        }

        writer.write_string(6, &self.line_type)?;
        writer.write_i16(370, self.line_weight.value())?;
        writer.write_bool(290, self.is_plottable)?;
        Ok(())
    }
}
