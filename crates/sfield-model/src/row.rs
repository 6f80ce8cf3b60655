use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column holding the field type used to pick a record shape.
pub const TYPE_COLUMN: &str = "type";

/// Column holding the parent object API name.
pub const OBJECT_NAME_COLUMN: &str = "objectName";

/// One data line of a definition file, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based index among data rows (the header row is not counted).
    pub line_number: usize,
    values: BTreeMap<String, String>,
}

impl Row {
    pub fn new(line_number: usize) -> Self {
        Self {
            line_number,
            values: BTreeMap::new(),
        }
    }

    /// Builds a row from `(column, value)` pairs; later duplicates win.
    pub fn from_pairs<I, K, V>(line_number: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Row::new(line_number);
        for (column, value) in pairs {
            row.insert(column, value);
        }
        row
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Raw value of a column, `None` when the column is absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Declared field type, if the row has a `type` column.
    pub fn declared_type(&self) -> Option<&str> {
        self.get(TYPE_COLUMN)
    }

    pub fn object_name(&self) -> Option<&str> {
        self.get(OBJECT_NAME_COLUMN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_duplicate_columns_win() {
        let row = Row::from_pairs(3, [("label", "First"), ("label", "Second")]);
        assert_eq!(row.get("label"), Some("Second"));
        assert_eq!(row.len(), 1);
        assert_eq!(row.line_number, 3);
    }

    #[test]
    fn absent_and_empty_columns_differ() {
        let row = Row::from_pairs(1, [("description", "")]);
        assert_eq!(row.get("description"), Some(""));
        assert_eq!(row.get("inlineHelpText"), None);
        assert!(row.contains("description"));
    }
}
