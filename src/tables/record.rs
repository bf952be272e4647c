//! Closed set of table record kinds

use super::{Layer, LineType, TableEntry, TextStyle, VPort};
use crate::database::DatabaseObject;
use crate::error::Result;
use crate::io::dxf::DxfStreamWriter;

/// Any table record
///
/// Producers that deal in records of mixed kinds hand them around as a
/// `TableRecord`; matching on it is exhaustive over every kind this crate
/// writes.
#[derive(Debug, Clone)]
pub enum TableRecord {
    VPort(VPort),
    LineType(LineType),
    Layer(Layer),
    TextStyle(TextStyle),
}

macro_rules! each_record {
    ($record:expr, $inner:ident => $body:expr) => {
        match $record {
            TableRecord::VPort($inner) => $body,
            TableRecord::LineType($inner) => $body,
            TableRecord::Layer($inner) => $body,
            TableRecord::TextStyle($inner) => $body,
        }
    };
}

impl TableEntry for TableRecord {
    fn object(&self) -> &DatabaseObject {
        each_record!(self, r => r.object())
    }

    fn table_name(&self) -> &'static str {
        each_record!(self, r => r.table_name())
    }

    fn subclass_marker(&self) -> &'static str {
        each_record!(self, r => r.subclass_marker())
    }

    fn name(&self) -> &str {
        each_record!(self, r => r.name())
    }

    fn set_name(&mut self, name: String) {
        each_record!(self, r => r.set_name(name))
    }

    fn is_standard(&self) -> bool {
        each_record!(self, r => r.is_standard())
    }

    fn same_definition(&self, other: &Self) -> bool {
        match (self, other) {
            (TableRecord::VPort(a), TableRecord::VPort(b)) => a.same_definition(b),
            (TableRecord::LineType(a), TableRecord::LineType(b)) => a.same_definition(b),
            (TableRecord::Layer(a), TableRecord::Layer(b)) => a.same_definition(b),
            (TableRecord::TextStyle(a), TableRecord::TextStyle(b)) => a.same_definition(b),
            _ => false,
        }
    }

    fn write_fields<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        each_record!(self, r => r.write_fields(writer))
    }
}

impl From<VPort> for TableRecord {
    fn from(record: VPort) -> Self {
        TableRecord::VPort(record)
    }
}

impl From<LineType> for TableRecord {
    fn from(record: LineType) -> Self {
        TableRecord::LineType(record)
    }
}

impl From<Layer> for TableRecord {
    fn from(record: Layer) -> Self {
        TableRecord::Layer(record)
    }
}

impl From<TextStyle> for TableRecord {
    fn from(record: TextStyle) -> Self {
        TableRecord::TextStyle(record)
    }
}
