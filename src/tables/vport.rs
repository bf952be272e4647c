//! Viewport table entry

use super::TableEntry;
use crate::database::DatabaseObject;
use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{HandleAllocator, Vector2};

/// A viewport table entry
///
/// Every viewport written here covers the whole screen, so its screen
/// bounds are always the unit square. Only the view center and the view
/// scale (drawing units spanned) are configurable.
#[derive(Debug, Clone)]
pub struct VPort {
    object: DatabaseObject,
    name: String,
    view_center: Vector2,
    view_scale: f64,
}

impl VPort {
    /// Lower-left screen corner (groups 10/20)
    pub const LOWER_LEFT: Vector2 = Vector2::ZERO;
    /// Upper-right screen corner (groups 11/21)
    pub const UPPER_RIGHT: Vector2 = Vector2::ONE;

    /// Create a viewport centered at half its scale on both axes
    ///
    /// This places the drawing origin in the lower-left corner of the view.
    /// It is a fixed convenience policy; use [`VPort::with_center`] for any
    /// other framing.
    pub fn new(
        handles: &mut HandleAllocator,
        name: impl Into<String>,
        view_scale: f64,
    ) -> Result<Self> {
        let half = view_scale / 2.0;
        Self::with_center(handles, name, Vector2::new(half, half), view_scale)
    }

    /// Create a viewport with an explicit view center
    pub fn with_center(
        handles: &mut HandleAllocator,
        name: impl Into<String>,
        view_center: Vector2,
        view_scale: f64,
    ) -> Result<Self> {
        check_center(view_center)?;
        check_scale(view_scale)?;
        Ok(VPort {
            object: DatabaseObject::new(handles),
            name: name.into(),
            view_center,
            view_scale,
        })
    }

    /// Create the standard "*Active" viewport
    pub fn active(handles: &mut HandleAllocator, view_scale: f64) -> Result<Self> {
        Self::new(handles, "*Active", view_scale)
    }

    /// View center in drawing units
    pub fn view_center(&self) -> Vector2 {
        self.view_center
    }

    /// Drawing units spanned by the viewport
    pub fn view_scale(&self) -> f64 {
        self.view_scale
    }

    /// Replace the view center
    pub fn set_center(&mut self, center: Vector2) -> Result<()> {
        check_center(center)?;
        self.view_center = center;
        Ok(())
    }

    /// Replace the view scale; the center is left alone
    pub fn set_scale(&mut self, view_scale: f64) -> Result<()> {
        check_scale(view_scale)?;
        self.view_scale = view_scale;
        Ok(())
    }
}

fn check_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(DxfError::InvalidGeometry(format!(
            "viewport scale must be positive and finite, got {}",
            scale
        )));
    }
    Ok(())
}

fn check_center(center: Vector2) -> Result<()> {
    if !center.is_finite() {
        return Err(DxfError::InvalidGeometry(format!(
            "viewport center must be finite, got {}",
            center
        )));
    }
    Ok(())
}

impl TableEntry for VPort {
    fn object(&self) -> &DatabaseObject {
        &self.object
    }

    fn table_name(&self) -> &'static str {
        "VPORT"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbViewportTableRecord"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_standard(&self) -> bool {
        self.name == "*Active"
    }

    fn write_fields<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_string(2, &self.name)?;
        writer.write_point2d(10, Self::LOWER_LEFT)?;
        writer.write_point2d(11, Self::UPPER_RIGHT)?;
        writer.write_point2d(12, self.view_center)?;
        writer.write_double(40, self.view_scale)?;
        writer.write_i16(70, 0)?;
        Ok(())
    }
}
