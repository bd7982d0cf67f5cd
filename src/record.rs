//! Record types for the two catalog tables.
//!
//! Fields are positional: an Object row carries its unique identifier in
//! field 0, a Source row carries its object foreign key in field 3. Records
//! keep the raw line alongside the parsed key so output preserves the row
//! exactly as read.

use crate::catalog::{CatalogError, Result};
use memchr::memchr_iter;

/// Comma-field index of the object identifier in an Object row.
pub const OBJECT_ID_FIELD: usize = 0;

/// Comma-field index of the object foreign key in a Source row.
pub const SOURCE_OBJECT_REF_FIELD: usize = 3;

/// Return the `index`-th comma-delimited field of `line`, if present.
///
/// Uses memchr for delimiter scanning, avoiding a per-line field vector.
#[inline]
pub fn field_at(line: &str, index: usize) -> Option<&str> {
    let mut start = 0;
    let mut field = 0;
    for pos in memchr_iter(b',', line.as_bytes()) {
        if field == index {
            return Some(&line[start..pos]);
        }
        start = pos + 1;
        field += 1;
    }
    if field == index {
        Some(&line[start..])
    } else {
        None
    }
}

/// Number of comma-delimited fields in `line`.
#[inline]
pub fn field_count(line: &str) -> usize {
    memchr_iter(b',', line.as_bytes()).count() + 1
}

/// A row from the Object table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    /// Unique object identifier (field 0).
    pub id: String,
    /// The raw line as read from the catalog.
    pub line: String,
}

impl ObjectRecord {
    /// Parse an Object row. `line_number` is 1-based, used for error reporting.
    pub fn parse(line_number: usize, line: &str) -> Result<Self> {
        let id = field_at(line, OBJECT_ID_FIELD).unwrap_or("");
        if id.trim().is_empty() {
            return Err(CatalogError::Parse {
                line: line_number,
                message: "object row has an empty identifier field".to_string(),
            });
        }
        Ok(Self {
            id: id.to_string(),
            line: line.to_string(),
        })
    }
}

/// A row from the Source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    /// Foreign key referencing an object identifier (field 3).
    pub object_ref: String,
    /// The raw line as read from the catalog.
    pub line: String,
}

impl SourceRecord {
    /// Parse a Source row. Rows with fewer than 4 comma fields are rejected
    /// with a descriptive error rather than an index panic.
    pub fn parse(line_number: usize, line: &str) -> Result<Self> {
        let object_ref = field_at(line, SOURCE_OBJECT_REF_FIELD).ok_or_else(|| {
            CatalogError::Parse {
                line: line_number,
                message: format!(
                    "source row needs at least {} comma-delimited fields, got {}",
                    SOURCE_OBJECT_REF_FIELD + 1,
                    field_count(line)
                ),
            }
        })?;
        Ok(Self {
            object_ref: object_ref.to_string(),
            line: line.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_at() {
        let line = "a,b,c,d";
        assert_eq!(field_at(line, 0), Some("a"));
        assert_eq!(field_at(line, 3), Some("d"));
        assert_eq!(field_at(line, 4), None);
    }

    #[test]
    fn test_field_at_empty_fields() {
        assert_eq!(field_at(",,x", 0), Some(""));
        assert_eq!(field_at(",,x", 1), Some(""));
        assert_eq!(field_at(",,x", 2), Some("x"));
        assert_eq!(field_at("", 0), Some(""));
    }

    #[test]
    fn test_field_count() {
        assert_eq!(field_count("a"), 1);
        assert_eq!(field_count("a,b,c"), 3);
        assert_eq!(field_count(""), 1);
    }

    #[test]
    fn test_parse_object() {
        let rec = ObjectRecord::parse(1, "8405,12.5,-3.2").unwrap();
        assert_eq!(rec.id, "8405");
        assert_eq!(rec.line, "8405,12.5,-3.2");
    }

    #[test]
    fn test_parse_object_empty_id() {
        let err = ObjectRecord::parse(7, ",12.5,-3.2").unwrap_err();
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_parse_source() {
        let rec = SourceRecord::parse(1, "s1,0.1,0.2,8405,extra").unwrap();
        assert_eq!(rec.object_ref, "8405");
    }

    #[test]
    fn test_parse_source_too_few_fields() {
        let err = SourceRecord::parse(42, "s1,0.1,0.2").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 42"));
        assert!(msg.contains("got 3"));
    }
}
