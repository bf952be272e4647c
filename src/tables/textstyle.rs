//! Text style table entry

use bitflags::bitflags;

use super::TableEntry;
use crate::database::DatabaseObject;
use crate::error::{DxfError, Result};
use crate::io::dxf::DxfStreamWriter;
use crate::types::HandleAllocator;

bitflags! {
    /// Text generation flags (group 71)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextGenerationFlags: i16 {
        /// Text is backward (mirrored in X)
        const BACKWARD = 2;
        /// Text is upside down (mirrored in Y)
        const UPSIDE_DOWN = 4;
    }
}

/// A text style table entry
#[derive(Debug, Clone)]
pub struct TextStyle {
    object: DatabaseObject,
    name: String,
    /// Text generation flags
    pub generation: TextGenerationFlags,
    height: f64,
    width_factor: f64,
    oblique_angle: f64,
    /// Primary font file name
    pub font_file: String,
    /// Big font file name (for Asian languages)
    pub big_font_file: String,
}

impl TextStyle {
    /// Create a text style with variable height using the given font file
    pub fn new(
        handles: &mut HandleAllocator,
        name: impl Into<String>,
        font_file: impl Into<String>,
    ) -> Self {
        TextStyle {
            object: DatabaseObject::new(handles),
            name: name.into(),
            generation: TextGenerationFlags::empty(),
            height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            font_file: font_file.into(),
            big_font_file: String::new(),
        }
    }

    /// Create the standard "Standard" text style
    pub fn standard(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, "Standard", "txt")
    }

    /// Fixed text height; 0 means the height is given per text entity
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the fixed text height; must be finite and not negative
    pub fn set_height(&mut self, height: f64) -> Result<()> {
        if !height.is_finite() || height < 0.0 {
            return Err(DxfError::InvalidGeometry(format!(
                "text height must be finite and not negative, got {}",
                height
            )));
        }
        self.height = height;
        Ok(())
    }

    /// Horizontal scale applied to glyphs
    pub fn width_factor(&self) -> f64 {
        self.width_factor
    }

    /// Set the width factor; must be positive and finite
    pub fn set_width_factor(&mut self, width_factor: f64) -> Result<()> {
        if !width_factor.is_finite() || width_factor <= 0.0 {
            return Err(DxfError::InvalidGeometry(format!(
                "width factor must be positive and finite, got {}",
                width_factor
            )));
        }
        self.width_factor = width_factor;
        Ok(())
    }

    /// Oblique angle in degrees
    pub fn oblique_angle(&self) -> f64 {
        self.oblique_angle
    }

    /// Set the oblique angle in degrees
    pub fn set_oblique_angle(&mut self, degrees: f64) -> Result<()> {
        if !degrees.is_finite() {
            return Err(DxfError::InvalidGeometry(format!(
                "oblique angle must be finite, got {}",
                degrees
            )));
        }
        self.oblique_angle = degrees;
        Ok(())
    }
}

impl TableEntry for TextStyle {
    fn object(&self) -> &DatabaseObject {
        &self.object
    }

    fn table_name(&self) -> &'static str {
        "STYLE"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbTextStyleTableRecord"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_standard(&self) -> bool {
        self.name == "Standard"
    }

    fn write_fields<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_string(2, &self.name)?;
        writer.write_i16(70, 0)?;
        writer.write_double(40, self.height)?;
        writer.write_double(41, self.width_factor)?;
        writer.write_double(50, self.oblique_angle)?;
        writer.write_i16(71, self.generation.bits())?;
        writer.write_double(42, self.height)?; // Last height used
        writer.write_string(3, &self.font_file)?;
        writer.write_string(4, &self.big_font_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DxfObject;

    #[test]
    fn test_emit_standard() {
        let mut handles = HandleAllocator::new();
        let style = TextStyle::standard(&mut handles);
        assert_eq!(
            style.emit().unwrap(),
            "0\nSTYLE\n5\n1\n100\nAcDbTextStyleTableRecord\n2\nStandard\n70\n0\n\
             40\n0.0\n41\n1.0\n50\n0.0\n71\n0\n42\n0.0\n3\ntxt\n4\n\n"
        );
    }

    #[test]
    fn test_mirrored_fixed_height() {
        let mut handles = HandleAllocator::new();
        let mut style = TextStyle::new(&mut handles, "Labels", "arial.ttf");
        style.set_height(2.5).unwrap();
        style.generation = TextGenerationFlags::BACKWARD | TextGenerationFlags::UPSIDE_DOWN;

        let text = style.emit().unwrap();
        assert!(text.contains("40\n2.5\n"));
        assert!(text.contains("42\n2.5\n"));
        assert!(text.contains("71\n6\n"));
    }

    #[test]
    fn test_setters_validate() {
        let mut handles = HandleAllocator::new();
        let mut style = TextStyle::standard(&mut handles);
        assert!(style.set_height(-1.0).is_err());
        assert!(style.set_width_factor(0.0).is_err());
        assert!(style.set_oblique_angle(f64::NAN).is_err());
        style.set_width_factor(0.8).unwrap();
        style.set_oblique_angle(15.0).unwrap();
        assert_eq!(style.width_factor(), 0.8);
        assert_eq!(style.oblique_angle(), 15.0);
        assert_eq!(style.height(), 0.0);
    }
}
