//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Maximum input size (50 MB default).
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Options controlling how an upload is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// First row holds column names. When false, columns are named `0`, `1`, ...
    pub has_header: bool,
    /// Field delimiter; auto-detected from the first line when unset.
    pub delimiter: Option<char>,
    /// Convert numeric-looking cells to numbers.
    pub dynamic_typing: bool,
    /// Reject inputs larger than this many bytes.
    pub max_file_size: u64,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: None,
            dynamic_typing: false,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl ParseOptions {
    /// Set the header flag.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set an explicit delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Enable or disable dynamic typing.
    #[must_use]
    pub fn with_dynamic_typing(mut self, enable: bool) -> Self {
        self.dynamic_typing = enable;
        self
    }

    /// Set the size limit.
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Configured delimiter as a byte, if any.
    pub(crate) fn delimiter_byte(&self) -> Result<Option<u8>> {
        match self.delimiter {
            None => Ok(None),
            Some(c) if c.is_ascii() => Ok(Some(c as u8)),
            Some(delimiter) => Err(IngestError::InvalidDelimiter { delimiter }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(options.has_header);
        assert!(options.delimiter.is_none());
        assert!(!options.dynamic_typing);
        assert_eq!(options.max_file_size, MAX_FILE_SIZE);
    }

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(ParseOptions::default().delimiter_byte().unwrap(), None);
        assert_eq!(
            ParseOptions::default()
                .with_delimiter(';')
                .delimiter_byte()
                .unwrap(),
            Some(b';')
        );
        assert!(matches!(
            ParseOptions::default().with_delimiter('§').delimiter_byte(),
            Err(IngestError::InvalidDelimiter { .. })
        ));
    }
}
