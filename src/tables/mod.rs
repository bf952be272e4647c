//! DXF table records and table management

use ahash::{AHashSet, RandomState};
use indexmap::IndexMap;
use tracing::trace;

use crate::database::{DatabaseObject, DxfObject};
use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter};
use crate::types::Handle;

pub mod layer;
pub mod linetype;
pub mod name_generator;
pub mod record;
pub mod textstyle;
pub mod vport;

pub use layer::{Layer, LayerFlags};
pub use linetype::{DashPattern, LineType};
pub use name_generator::NameGenerator;
pub use record::TableRecord;
pub use textstyle::{TextGenerationFlags, TextStyle};
pub use vport::VPort;

/// Base trait for all table entries
pub trait TableEntry {
    /// The embedded database object
    fn object(&self) -> &DatabaseObject;

    /// Table name written as the record marker (`LTYPE`, `VPORT`, ...)
    fn table_name(&self) -> &'static str;

    /// Record subclass marker (`AcDbLinetypeTableRecord`, ...)
    fn subclass_marker(&self) -> &'static str;

    /// Get the entry's name
    fn name(&self) -> &str;

    /// Set the entry's name
    ///
    /// The table owning the entry checks name uniqueness; see
    /// [`Table::rename`].
    fn set_name(&mut self, name: String);

    /// Check if this is a standard/default entry
    ///
    /// Standard entries are the ones readers expect to find (layer `0`,
    /// line type `Continuous`, ...); a [`Table`] refuses to remove them.
    fn is_standard(&self) -> bool {
        false
    }

    /// Whether `other` defines the same thing as this entry under any name
    ///
    /// A table holds distinct definitions only.
    fn same_definition(&self, _other: &Self) -> bool {
        false
    }

    /// Write the type-specific fields that follow the subclass marker
    fn write_fields<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()>;
}

/// Every table entry emits marker, handle, subclass marker, then its fields
impl<T: TableEntry> DxfObject for T {
    fn handle(&self) -> Handle {
        self.object().handle()
    }

    fn write_dxf<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_record_type(self.table_name())?;
        self.object().write_base(writer)?;
        if writer.symbol_table_marker() {
            writer.write_subclass("AcDbSymbolTableRecord")?;
        }
        writer.write_subclass(self.subclass_marker())?;
        self.write_fields(writer)
    }
}

/// Insertion-ordered table of named entries
///
/// Names are unique ignoring ASCII case, as DXF readers compare them.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<Handle, T, RandomState>,
    names: NameGenerator,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::with_name_generator(NameGenerator::default())
    }

    /// Create a table whose generated names use `generator`
    pub fn with_name_generator(generator: NameGenerator) -> Self {
        Table {
            entries: IndexMap::default(),
            names: generator,
        }
    }

    /// Add an entry to the table
    ///
    /// Rejects invalid names, names already present and entries that
    /// duplicate the definition of an existing one.
    pub fn add(&mut self, entry: T) -> Result<Handle> {
        self.check_insert(&entry)?;
        let handle = entry.handle();
        self.entries.insert(handle, entry);
        Ok(handle)
    }

    /// First entry matching `predicate`, or a new one built by `make`
    ///
    /// `make` receives the next free generated name. The flag is `true`
    /// when the entry was added.
    pub fn find_or_add<P, F>(&mut self, predicate: P, make: F) -> Result<(&T, bool)>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(String) -> T,
    {
        if let Some(index) = self.entries.values().position(|e| predicate(e)) {
            return Ok((&self.entries[index], false));
        }
        let name = self.next_free_name();
        let entry = make(name);
        self.check_insert(&entry)?;
        let (index, _) = self.entries.insert_full(entry.handle(), entry);
        Ok((&self.entries[index], true))
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .values()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    /// Get a mutable entry by name (case-insensitive)
    ///
    /// Renames made through the returned reference are checked when the
    /// table is written; prefer [`Table::rename`].
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries
            .values_mut()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    /// Get an entry by handle
    pub fn get_by_handle(&self, handle: Handle) -> Option<&T> {
        self.entries.get(&handle)
    }

    /// Rename an entry, keeping names unique
    ///
    /// Returns `false` when no entry is called `name`.
    pub fn rename(&mut self, name: &str, new_name: impl Into<String>) -> Result<bool> {
        let new_name = new_name.into();
        if let Some(entry) = self.get(name) {
            validate_name(entry.table_name(), &new_name)?;
        }
        let clash = self
            .get(&new_name)
            .is_some_and(|e| !e.name().eq_ignore_ascii_case(name));
        let Some(entry) = self.get_mut(name) else {
            return Ok(false);
        };
        if clash {
            return Err(DxfError::DuplicateEntry {
                table: entry.table_name(),
                name: new_name,
            });
        }
        entry.set_name(new_name);
        Ok(true)
    }

    /// Remove an entry by name (case-insensitive)
    ///
    /// Standard entries stay; removing one returns `None`.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let entry = self.get(name)?;
        if entry.is_standard() {
            trace!(name = entry.name(), "standard entry kept");
            return None;
        }
        let handle = entry.handle();
        self.entries.shift_remove(&handle)
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// First entry matching `predicate`
    pub fn find<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<&T> {
        self.entries.values().find(|e| predicate(e))
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Get all entry names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name())
    }

    /// Next generated name not already used in this table
    pub fn next_free_name(&mut self) -> String {
        loop {
            let name = self.names.next_name();
            if !self.contains(&name) {
                return name;
            }
            trace!(name = %name, "generated name already taken, skipping");
        }
    }

    /// Write every entry in insertion order
    ///
    /// Fails without writing anything if two entries share a name or a name
    /// was made invalid through [`Table::get_mut`].
    pub fn write_dxf<W: DxfStreamWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        self.check_unique_names()?;
        for entry in self.entries.values() {
            entry.write_dxf(writer)?;
        }
        Ok(())
    }

    /// All entries as text, with default writer options
    pub fn emit(&self) -> Result<String> {
        let mut writer = DxfTextWriter::new(Vec::new());
        self.write_dxf(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| DxfError::Encoding(e.to_string()))
    }

    fn check_insert(&self, entry: &T) -> Result<()> {
        validate_name(entry.table_name(), entry.name())?;
        if self.contains(entry.name()) {
            return Err(DxfError::DuplicateEntry {
                table: entry.table_name(),
                name: entry.name().to_string(),
            });
        }
        if let Some(existing) = self.find(|e| e.same_definition(entry)) {
            return Err(DxfError::DuplicateDefinition {
                table: entry.table_name(),
                name: entry.name().to_string(),
                existing: existing.name().to_string(),
            });
        }
        Ok(())
    }

    fn check_unique_names(&self) -> Result<()> {
        let mut seen = AHashSet::with_capacity(self.entries.len());
        for entry in self.entries.values() {
            validate_name(entry.table_name(), entry.name())?;
            if !seen.insert(entry.name().to_ascii_uppercase()) {
                return Err(DxfError::DuplicateEntry {
                    table: entry.table_name(),
                    name: entry.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Reject names that are empty or would break the line structure of the
/// output
pub fn validate_name(table: &'static str, name: &str) -> Result<()> {
    if name.is_empty() || name.contains(|c: char| c == '\n' || c == '\r') {
        return Err(DxfError::InvalidName {
            table,
            name: name.to_string(),
        });
    }
    Ok(())
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HandleAllocator;

    #[test]
    fn test_table_add_and_get() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        let handle = table.add(Layer::new(&mut handles, "Walls")).unwrap();

        assert_eq!(handle, Handle::new(1));
        assert!(table.contains("Walls"));
        assert!(table.contains("WALLS")); // Case-insensitive
        assert_eq!(table.get_by_handle(handle).map(|l| l.name()), Some("Walls"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_duplicate_entry() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        table.add(Layer::new(&mut handles, "Test")).unwrap();
        let result = table.add(Layer::new(&mut handles, "test"));
        assert!(matches!(result, Err(DxfError::DuplicateEntry { table: "LAYER", .. })));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_remove_keeps_order() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        for name in ["a", "b", "c"] {
            table.add(Layer::new(&mut handles, name)).unwrap();
        }
        assert!(table.remove("B").is_some());
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_rename() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        table.add(Layer::new(&mut handles, "a")).unwrap();
        table.add(Layer::new(&mut handles, "b")).unwrap();

        assert!(table.rename("a", "B").is_err());
        assert!(table.rename("a", "A").unwrap());
        assert!(table.rename("a", "renamed").unwrap());
        assert!(!table.rename("missing", "x").unwrap());
        assert!(table.contains("renamed"));
        assert!(!table.contains("a"));
    }

    #[test]
    fn test_add_rejects_same_dash_pattern() {
        let mut handles = HandleAllocator::new();
        let mut table: Table<LineType> = Table::new();
        let first = table
            .add(LineType::with_dashes(&mut handles, "Dashed", vec![3.0, -1.5]).unwrap())
            .unwrap();
        let result =
            table.add(LineType::with_dashes(&mut handles, "Other", vec![3.0, -1.5]).unwrap());

        match result {
            Err(DxfError::DuplicateDefinition { table, name, existing }) => {
                assert_eq!(table, "LTYPE");
                assert_eq!(name, "Other");
                assert_eq!(existing, "Dashed");
            }
            other => panic!("expected duplicate definition, got {:?}", other),
        }
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().next().map(|lt| lt.handle()), Some(first));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        for name in ["", "Walls\n0\nEOF", "Walls\r"] {
            let result = table.add(Layer::new(&mut handles, name));
            assert!(matches!(result, Err(DxfError::InvalidName { table: "LAYER", .. })));
        }
        assert!(table.is_empty());

        table.add(Layer::new(&mut handles, "Walls")).unwrap();
        assert!(matches!(
            table.rename("Walls", "Walls\n0\nEOF"),
            Err(DxfError::InvalidName { .. })
        ));
        assert!(table.rename("Walls", "").is_err());
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Walls"]);
    }

    #[test]
    fn test_find_or_add_validates_generated_name() {
        let mut handles = HandleAllocator::new();
        let mut table: Table<LineType> = Table::with_name_generator(NameGenerator::new("Bad\n"));
        let result =
            table.find_or_add(|lt| lt.is_continuous(), |name| LineType::new(&mut handles, name, None));
        assert!(matches!(result, Err(DxfError::InvalidName { .. })));
        assert!(table.is_empty());
    }

    #[test]
    fn test_write_rejects_name_broken_through_get_mut() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        table.add(Layer::new(&mut handles, "a")).unwrap();
        if let Some(layer) = table.get_mut("a") {
            layer.set_name("a\n0\nEOF".to_string());
        }
        assert!(matches!(table.emit(), Err(DxfError::InvalidName { .. })));
    }

    #[test]
    fn test_standard_entries_are_kept() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        table.add(Layer::layer_0(&mut handles)).unwrap();
        table.add(Layer::new(&mut handles, "Walls")).unwrap();

        assert!(table.remove("0").is_none());
        assert!(table.remove("walls").is_some());
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["0"]);
    }

    #[test]
    fn test_write_rejects_duplicates_from_get_mut() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        table.add(Layer::new(&mut handles, "a")).unwrap();
        table.add(Layer::new(&mut handles, "b")).unwrap();
        if let Some(layer) = table.get_mut("b") {
            layer.set_name("A".to_string());
        }
        assert!(matches!(table.emit(), Err(DxfError::DuplicateEntry { .. })));
    }

    #[test]
    fn test_next_free_name_skips_taken() {
        let mut handles = HandleAllocator::new();
        let mut table: Table<LineType> =
            Table::with_name_generator(NameGenerator::new("Linetype_"));
        table.add(LineType::new(&mut handles, "Linetype_0", None)).unwrap();
        assert_eq!(table.next_free_name(), "Linetype_1");
        assert_eq!(table.next_free_name(), "Linetype_2");
    }

    #[test]
    fn test_find_or_add() {
        let mut handles = HandleAllocator::new();
        let mut table: Table<LineType> =
            Table::with_name_generator(NameGenerator::new("Linetype_"));

        let (added, is_new) = table
            .find_or_add(|lt| lt.is_continuous(), |name| LineType::new(&mut handles, name, None))
            .unwrap();
        assert!(is_new);
        assert_eq!(added.name(), "Linetype_0");

        let (found, is_new) = table
            .find_or_add(|lt| lt.is_continuous(), |name| LineType::new(&mut handles, name, None))
            .unwrap();
        assert!(!is_new);
        assert_eq!(found.name(), "Linetype_0");
        assert_eq!(handles.current_count(), 1);
    }

    #[test]
    fn test_emit_concatenates_in_order() {
        let mut handles = HandleAllocator::new();
        let mut table = Table::new();
        let first = Layer::new(&mut handles, "first");
        let second = Layer::new(&mut handles, "second");
        let expected = format!("{}{}", first.emit().unwrap(), second.emit().unwrap());
        table.add(first).unwrap();
        table.add(second).unwrap();
        assert_eq!(table.emit().unwrap(), expected);
    }

    #[test]
    fn test_symbol_table_marker_option() {
        use crate::io::dxf::WriterOptions;

        let mut handles = HandleAllocator::new();
        let layer = Layer::new(&mut handles, "0");
        let options = WriterOptions {
            symbol_table_marker: true,
            ..Default::default()
        };
        let mut writer = DxfTextWriter::with_options(Vec::new(), options);
        layer.write_dxf(&mut writer).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert!(text.starts_with(
            "0\nLAYER\n5\n1\n100\nAcDbSymbolTableRecord\n100\nAcDbLayerTableRecord\n"
        ));
    }
}
