//! Cell values and parsed records.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single untyped cell.
///
/// Cells are `Text` unless the parser was asked for dynamic typing, in which
/// case numeric-looking values become `Number`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty or missing cell.
    #[default]
    Empty,
    /// Raw text as it appeared in the file.
    Text(String),
    /// Numeric value (dynamic typing only).
    Number(f64),
}

impl CellValue {
    /// Builds a cell from raw text, treating an empty string as `Empty`.
    pub fn from_text(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }

    /// Builds a cell from raw text, converting finite numbers to `Number`.
    pub fn from_text_typed(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Text(value.to_string()),
        }
    }

    /// Returns true for `Empty`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(value) => serializer.serialize_f64(*value),
        }
    }
}

/// One data row: column name to cell value, in column order.
///
/// Writing the same column twice replaces the earlier value, which is how
/// duplicate header names collapse to the last occurrence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    cells: Vec<(String, CellValue)>,
}

impl RawRecord {
    /// Creates an empty record with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Sets a cell, replacing any earlier value for the same column.
    pub fn insert(&mut self, column: &str, value: CellValue) {
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column.to_string(), value)),
        }
    }

    /// Looks up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the record has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for RawRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_empty() {
        assert_eq!(CellValue::from_text(""), CellValue::Empty);
        assert_eq!(CellValue::from_text("x"), CellValue::Text("x".to_string()));
    }

    #[test]
    fn test_from_text_typed() {
        assert_eq!(CellValue::from_text_typed("42"), CellValue::Number(42.0));
        assert_eq!(CellValue::from_text_typed(" 1.5 "), CellValue::Number(1.5));
        assert_eq!(
            CellValue::from_text_typed("NaN"),
            CellValue::Text("NaN".to_string())
        );
        assert_eq!(CellValue::from_text_typed("  "), CellValue::Empty);
    }

    #[test]
    fn test_record_last_write_wins() {
        let mut record = RawRecord::default();
        record.insert("a", CellValue::from_text("1"));
        record.insert("b", CellValue::from_text("2"));
        record.insert("a", CellValue::from_text("3"));

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a"), Some(&CellValue::Text("3".to_string())));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_record_serializes_as_map() {
        let mut record = RawRecord::default();
        record.insert("name", CellValue::from_text("Ada"));
        record.insert("age", CellValue::Number(36.0));
        record.insert("city", CellValue::Empty);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Ada","age":36.0,"city":""}"#);
    }
}
