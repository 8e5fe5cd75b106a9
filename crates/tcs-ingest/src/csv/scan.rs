//! Byte-level checks run before handing text to the CSV reader.
//!
//! The `csv` crate is lenient about an unterminated quote and reads to the
//! end of input, which would silently swallow the rest of the file into one
//! cell. These scans catch that and pick a delimiter when none is configured.

use crate::error::{IngestError, Result};

/// Delimiters considered by auto-detection, in tie-break order.
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

const UTF8_BOM: &str = "\u{feff}";

/// Decodes the buffer as UTF-8, stripping a BOM.
///
/// Returns the text and the number of BOM bytes removed so that reported
/// offsets refer to the original buffer.
pub fn decode_utf8(bytes: &[u8]) -> Result<(&str, u64)> {
    // Check for UTF-16 BOM (not supported)
    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 BE",
            });
        }
    }

    let text = std::str::from_utf8(bytes).map_err(|e| {
        let byte = e.valid_up_to();
        IngestError::InvalidUtf8 {
            row: line_of(&bytes[..byte]),
            byte: byte as u64,
        }
    })?;

    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => Ok((rest, UTF8_BOM.len() as u64)),
        None => Ok((text, 0)),
    }
}

/// 1-based line number of the position just after `prefix`.
fn line_of(prefix: &[u8]) -> u64 {
    prefix.iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

/// Picks the most frequent candidate delimiter on the first line, ignoring
/// quoted content. Falls back to comma.
pub fn detect_delimiter(text: &str) -> u8 {
    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;

    for b in text.bytes() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b'\n' | b'\r' if !in_quotes => break,
            _ if !in_quotes => {
                if let Some(idx) = CANDIDATE_DELIMITERS.iter().position(|&d| d == b) {
                    counts[idx] += 1;
                }
            }
            _ => {}
        }
    }

    let best = (1..counts.len()).fold(0, |best, idx| {
        if counts[idx] > counts[best] { idx } else { best }
    });
    CANDIDATE_DELIMITERS[best]
}

/// Fails if a quoted field is still open at end of input.
///
/// A quote only opens a quoted field at the start of a field, and `""`
/// inside a quoted field is an escaped quote, matching the reader's rules.
pub fn check_quotes(text: &str, delimiter: u8) -> Result<()> {
    let bytes = text.as_bytes();
    let mut at_field_start = true;
    let mut in_quotes = false;
    let mut row: u64 = 1;
    let mut opened_at: (u64, u64) = (1, 0);
    let mut idx = 0;

    while idx < bytes.len() {
        let b = bytes[idx];
        if in_quotes {
            match b {
                b'"' if bytes.get(idx + 1) == Some(&b'"') => idx += 1,
                b'"' => in_quotes = false,
                b'\n' => row += 1,
                _ => {}
            }
        } else {
            match b {
                b'"' if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                    opened_at = (row, idx as u64);
                }
                b'\n' => {
                    row += 1;
                    at_field_start = true;
                }
                b'\r' => at_field_start = true,
                _ if b == delimiter => at_field_start = true,
                _ => at_field_start = false,
            }
        }
        idx += 1;
    }

    if in_quotes {
        let (row, byte) = opened_at;
        return Err(IngestError::UnterminatedQuote { row, byte });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_bom() {
        let (text, bom) = decode_utf8("\u{feff}a,b\n".as_bytes()).unwrap();
        assert_eq!(text, "a,b\n");
        assert_eq!(bom, 3);
    }

    #[test]
    fn test_decode_rejects_utf16() {
        let result = decode_utf8(&[0xFF, 0xFE, b'a', 0]);
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE"
            })
        ));
    }

    #[test]
    fn test_decode_reports_invalid_utf8_position() {
        let result = decode_utf8(b"a,b\n1,\xff\n");
        assert!(matches!(
            result,
            Err(IngestError::InvalidUtf8 { row: 2, byte: 6 })
        ));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), b',');
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), b';');
        assert_eq!(detect_delimiter("a\tb\n"), b'\t');
        assert_eq!(detect_delimiter("\"x;y\",b,c\n"), b',');
        assert_eq!(detect_delimiter("single"), b',');
        assert_eq!(detect_delimiter(""), b',');
    }

    #[test]
    fn test_check_quotes_balanced() {
        assert!(check_quotes("a,b\n\"x, y\",2\n", b',').is_ok());
        assert!(check_quotes("a\n\"he said \"\"hi\"\"\"\n", b',').is_ok());
        assert!(check_quotes("a\n\"multi\nline\"\n", b',').is_ok());
        // A quote inside an unquoted field is literal
        assert!(check_quotes("a,b\n5\"10,x\n", b',').is_ok());
    }

    #[test]
    fn test_check_quotes_unterminated() {
        let result = check_quotes("a,b\n1,2\n3,\"open\n4,5\n", b',');
        assert!(matches!(
            result,
            Err(IngestError::UnterminatedQuote { row: 3, byte: 10 })
        ));
    }
}
