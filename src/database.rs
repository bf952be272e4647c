//! Database object base and the text-emission protocol
//!
//! Every record written into a DXF drawing embeds a [`DatabaseObject`],
//! which owns its handle. Records implement [`DxfObject`] to write their
//! group-code/value pairs; the handle block comes from
//! [`DatabaseObject::write_base`] and sits right after the record's `0`
//! marker line.

use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfStreamWriter, DxfTextWriter};
use crate::types::{Handle, HandleAllocator};

/// Shared base of every serializable record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseObject {
    handle: Handle,
}

impl DatabaseObject {
    /// Take the next handle from the session allocator
    pub fn new(handles: &mut HandleAllocator) -> Self {
        DatabaseObject {
            handle: handles.allocate(),
        }
    }

    /// The object's handle, fixed at construction
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Write the handle block (group 5)
    pub fn write_base<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_handle(5, self.handle)
    }

    /// The handle block as text: `5`, then the handle in lowercase hex
    pub fn emit_base(&self) -> String {
        format!("5\n{:x}\n", self.handle)
    }
}

/// Text-emission protocol implemented by every record
pub trait DxfObject {
    /// Handle of the embedded database object
    fn handle(&self) -> Handle;

    /// Write the complete group-code block for this object
    fn write_dxf<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()>;

    /// Render the group-code block with default writer options
    fn emit(&self) -> Result<String> {
        let mut writer = DxfTextWriter::new(Vec::new());
        self.write_dxf(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| DxfError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_allocates_once() {
        let mut handles = HandleAllocator::new();
        let a = DatabaseObject::new(&mut handles);
        let b = DatabaseObject::new(&mut handles);
        assert_eq!(a.handle(), Handle::new(1));
        assert_eq!(b.handle(), Handle::new(2));
        assert_eq!(handles.current_count(), 2);
    }

    #[test]
    fn test_emit_base() {
        let mut handles = HandleAllocator::starting_at(0x2a);
        let object = DatabaseObject::new(&mut handles);
        assert_eq!(object.emit_base(), "5\n2a\n");
    }

    #[test]
    fn test_write_base_matches_emit_base() {
        let mut handles = HandleAllocator::starting_at(0xbeef);
        let object = DatabaseObject::new(&mut handles);

        let mut writer = DxfTextWriter::new(Vec::new());
        object.write_base(&mut writer).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(text, object.emit_base());
    }
}
