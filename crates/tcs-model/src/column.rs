//! Column schema discovered from a header row.

use serde::Serialize;

/// Ordered, duplicate-free list of column names.
///
/// Order is first-appearance order in the header row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ColumnSet {
    names: Vec<String>,
}

impl ColumnSet {
    /// Builds a column set from header names, collapsing duplicates.
    ///
    /// Returns the set together with every name that appeared more than once
    /// (each reported once, in the order its first repeat was seen).
    pub fn from_header<I, S>(header: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut duplicates: Vec<String> = Vec::new();
        for name in header {
            let name = name.into();
            if names.contains(&name) {
                if !duplicates.contains(&name) {
                    duplicates.push(name);
                }
            } else {
                names.push(name);
            }
        }
        (Self { names }, duplicates)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true if the column exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Position of a column, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterate over column names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Column names as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_preserves_order() {
        let (columns, duplicates) = ColumnSet::from_header(["name", "age", "city"]);
        assert_eq!(columns.as_slice(), &["name", "age", "city"]);
        assert!(duplicates.is_empty());
    }

    #[test]
    fn test_from_header_collapses_duplicates() {
        let (columns, duplicates) = ColumnSet::from_header(["a", "b", "a", "a"]);
        assert_eq!(columns.as_slice(), &["a", "b"]);
        assert_eq!(duplicates, vec!["a"]);
        assert_eq!(columns.position("b"), Some(1));
        assert!(!columns.contains("c"));
    }
}
