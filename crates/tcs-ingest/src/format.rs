//! Source format detection.
//!
//! The upload surface accepts `.csv` plus the two Excel MIME types, but only
//! delimited text is parsed. Binary workbooks are recognised by their magic
//! bytes and rejected; a file that merely claims to be a spreadsheet is still
//! read as text when it decodes as such.

use std::path::Path;

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

/// MIME types offered by the file picker.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "text/csv",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const COMPOUND_DOCUMENT_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// What the file selection surface told us about the upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceHint {
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

impl SourceHint {
    /// Hint carrying only a file name.
    pub fn named(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            mime_type: None,
        }
    }

    /// Hint derived from a filesystem path.
    pub fn from_path(path: &Path) -> Self {
        Self {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            mime_type: None,
        }
    }

    /// Attach a MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Name used in messages.
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("<upload>")
    }
}

/// Format the upload was declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredFormat {
    Csv,
    Xlsx,
    Xls,
    /// Nothing recognisable was declared; parsed as CSV.
    Unknown,
}

impl DeclaredFormat {
    /// Determine the declared format, MIME type first, then extension.
    pub fn from_hint(hint: &SourceHint) -> Self {
        if let Some(format) = hint.mime_type.as_deref().and_then(Self::from_mime) {
            return format;
        }
        hint.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        match essence.to_ascii_lowercase().as_str() {
            "text/csv" | "application/csv" => Some(Self::Csv),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(Self::Xlsx)
            }
            "application/vnd.ms-excel" => Some(Self::Xls),
            _ => None,
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }

    /// Returns true for the Excel declarations.
    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, Self::Xlsx | Self::Xls)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Xlsx => "XLSX",
            Self::Xls => "XLS",
            Self::Unknown => "unknown",
        }
    }
}

/// Recognise binary spreadsheet containers by their leading bytes.
pub fn sniff_binary_spreadsheet(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(ZIP_MAGIC) {
        Some("an XLSX workbook (zip container)")
    } else if bytes.starts_with(COMPOUND_DOCUMENT_MAGIC) {
        Some("a legacy XLS workbook")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_from_mime_wins() {
        let hint = SourceHint::named("data.csv").with_mime_type("application/vnd.ms-excel");
        assert_eq!(DeclaredFormat::from_hint(&hint), DeclaredFormat::Xls);
    }

    #[test]
    fn test_declared_from_extension() {
        assert_eq!(
            DeclaredFormat::from_hint(&SourceHint::named("Report.XLSX")),
            DeclaredFormat::Xlsx
        );
        assert_eq!(
            DeclaredFormat::from_hint(&SourceHint::named("data.csv")),
            DeclaredFormat::Csv
        );
        assert_eq!(
            DeclaredFormat::from_hint(&SourceHint::named("data.txt")),
            DeclaredFormat::Unknown
        );
        assert_eq!(
            DeclaredFormat::from_hint(&SourceHint::default()),
            DeclaredFormat::Unknown
        );
    }

    #[test]
    fn test_mime_parameters_ignored() {
        let hint = SourceHint::default().with_mime_type("text/csv; charset=utf-8");
        assert_eq!(DeclaredFormat::from_hint(&hint), DeclaredFormat::Csv);
    }

    #[test]
    fn test_sniff_binary() {
        assert!(sniff_binary_spreadsheet(b"PK\x03\x04rest").is_some());
        assert!(sniff_binary_spreadsheet(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0]).is_some());
        assert!(sniff_binary_spreadsheet(b"a,b,c\n").is_none());
    }

    #[test]
    fn test_accepted_lists_cover_declarations() {
        for mime in ACCEPTED_MIME_TYPES {
            let hint = SourceHint::default().with_mime_type(*mime);
            assert_ne!(DeclaredFormat::from_hint(&hint), DeclaredFormat::Unknown);
        }
        for ext in ACCEPTED_EXTENSIONS {
            let hint = SourceHint::named(format!("file.{ext}"));
            assert_ne!(DeclaredFormat::from_hint(&hint), DeclaredFormat::Unknown);
        }
    }
}
