use super::table::ResourceEntry;

/// Position of an entry in a table file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryLocation {
    /// Path to the table (e.g., "./en.lproj/Localizable.strings").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl EntryLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// An entry's location together with its key and raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub location: EntryLocation,
    pub key: String,
    pub value: String,
}

impl EntryContext {
    pub fn new(location: EntryLocation, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn from_entry(file_path: &str, entry: &ResourceEntry) -> Self {
        Self::new(
            EntryLocation::new(file_path, entry.line()),
            entry.key.clone(),
            entry.value.clone(),
        )
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}
