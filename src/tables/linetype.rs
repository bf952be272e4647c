//! Line type table entry

use super::TableEntry;
use crate::database::DatabaseObject;
use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::HandleAllocator;

/// Alignment code written in group 72; ASCII 'A' is the only one DXF defines
pub const ALIGNMENT_CODE: i16 = b'A' as i16;

/// Largest element count group 73 can carry
pub const MAX_ELEMENTS: usize = i16::MAX as usize;

/// Signed dash lengths of a line type
///
/// Positive lengths draw, negative lengths skip. A pattern always has at
/// least one element and every element is finite and non-zero. The element
/// count fits group 73 and the total length is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern(Vec<f64>);

impl DashPattern {
    /// Validate and wrap a list of signed lengths
    pub fn new(lengths: Vec<f64>) -> Result<Self> {
        if lengths.is_empty() {
            return Err(DxfError::InvalidPattern(
                "dash pattern has no elements".to_string(),
            ));
        }
        if lengths.len() > MAX_ELEMENTS {
            return Err(DxfError::InvalidPattern(format!(
                "dash pattern has {} elements, at most {} can be written",
                lengths.len(),
                MAX_ELEMENTS
            )));
        }
        if let Some((index, length)) = lengths
            .iter()
            .enumerate()
            .find(|(_, l)| !l.is_finite() || **l == 0.0)
        {
            return Err(DxfError::InvalidPattern(format!(
                "element {} has length {}",
                index, length
            )));
        }
        let pattern = DashPattern(lengths);
        if !pattern.total_length().is_finite() {
            return Err(DxfError::InvalidPattern(
                "total pattern length overflows".to_string(),
            ));
        }
        Ok(pattern)
    }

    /// The signed lengths, in order
    pub fn elements(&self) -> &[f64] {
        &self.0
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of absolute element lengths
    pub fn total_length(&self) -> f64 {
        self.0.iter().map(|l| l.abs()).sum()
    }
}

/// A line type table entry
///
/// `LineType` intentionally has no `PartialEq`. Deduplication compares
/// dash patterns only, through [`LineType::same_pattern`].
#[derive(Debug, Clone)]
pub struct LineType {
    object: DatabaseObject,
    name: String,
    pattern: Option<DashPattern>,
}

impl LineType {
    /// Create a line type; `None` makes it continuous
    pub fn new(
        handles: &mut HandleAllocator,
        name: impl Into<String>,
        pattern: Option<DashPattern>,
    ) -> Self {
        LineType {
            object: DatabaseObject::new(handles),
            name: name.into(),
            pattern,
        }
    }

    /// Create a line type from raw signed lengths
    ///
    /// The lengths are validated before a handle is taken.
    pub fn with_dashes(
        handles: &mut HandleAllocator,
        name: impl Into<String>,
        lengths: Vec<f64>,
    ) -> Result<Self> {
        let pattern = DashPattern::new(lengths)?;
        Ok(Self::new(handles, name, Some(pattern)))
    }

    /// Create the standard "Continuous" line type
    pub fn continuous(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, "Continuous", None)
    }

    /// The dash pattern, if any
    pub fn pattern(&self) -> Option<&DashPattern> {
        self.pattern.as_ref()
    }

    /// Check if this is a continuous line type
    pub fn is_continuous(&self) -> bool {
        self.pattern.is_none()
    }

    /// Total pattern length, 0 for continuous line types
    pub fn pattern_length(&self) -> f64 {
        self.pattern.as_ref().map_or(0.0, DashPattern::total_length)
    }

    /// Pattern equality, ignoring names
    ///
    /// Two line types match when both are continuous or both have
    /// element-wise equal dash patterns.
    pub fn same_pattern(&self, other: &LineType) -> bool {
        self.matches_pattern(other.pattern.as_ref())
    }

    /// Compare against a candidate pattern before building a record
    pub fn matches_pattern(&self, pattern: Option<&DashPattern>) -> bool {
        self.pattern.as_ref() == pattern
    }
}

impl TableEntry for LineType {
    fn object(&self) -> &DatabaseObject {
        &self.object
    }

    fn table_name(&self) -> &'static str {
        "LTYPE"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbLinetypeTableRecord"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn is_standard(&self) -> bool {
        matches!(self.name.as_str(), "Continuous" | "ByLayer" | "ByBlock")
    }

    fn same_definition(&self, other: &Self) -> bool {
        self.same_pattern(other)
    }

    fn write_fields<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_string(2, &self.name)?;
        writer.write_i16(70, 0)?;
        writer.write_i16(72, ALIGNMENT_CODE)?;

        match &self.pattern {
            None => writer.write_i16(73, 0)?,
            Some(pattern) => {
                let count = i16::try_from(pattern.len()).map_err(|_| {
                    DxfError::InvalidPattern(format!("{} elements", pattern.len()))
                })?;
                writer.write_i16(73, count)?;
                writer.write_double(40, pattern.total_length())?;
                for &length in pattern.elements() {
                    writer.write_double(49, length)?;
                    // simple element, no embedded shape or text
                    writer.write_i16(74, 0)?;
                }
            }
        }

        writer.write_string(3, "")?;
        Ok(())
    }
}
