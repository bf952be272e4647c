//! Deterministic names for records the producer did not name

/// Issues `<prefix>0`, `<prefix>1`, ... in order
///
/// One generator belongs to one table, so identical producer call sequences
/// always yield identical names.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    prefix: String,
    next: u32,
}

impl NameGenerator {
    /// Create a generator whose first name is `<prefix>0`
    pub fn new(prefix: impl Into<String>) -> Self {
        NameGenerator {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// The next name in sequence
    pub fn next_name(&mut self) -> String {
        let name = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        name
    }

    /// Prefix shared by every generated name
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new("Entry_")
    }
}
