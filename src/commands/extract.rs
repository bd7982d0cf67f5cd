//! Extract command implementation.
//!
//! Pulls a referentially consistent sample out of an Object/Source catalog
//! pair: the first `object_limit` object rows, plus every source row (within
//! `source_limit`) whose foreign key references one of those objects.

use crate::catalog::{self, LineReader, Result};
use crate::index::ObjectIdIndex;
use crate::record::{ObjectRecord, SourceRecord};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Default cap on object rows read from the Object catalog.
pub const DEFAULT_OBJECT_LIMIT: usize = 1000;

/// Default cap on source rows read from the Source catalog.
pub const DEFAULT_SOURCE_LIMIT: usize = 100_000;

/// Output file name for the extracted object rows.
pub const OBJECT_OUTPUT: &str = "Object.txt";

/// Output file name for the extracted source rows.
pub const SOURCE_OUTPUT: &str = "Source.txt";

/// Statistics from an extract run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractStats {
    pub objects_read: usize,
    pub sources_read: usize,
    pub sources_kept: usize,
}

impl fmt::Display for ExtractStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "objects={} sources={} kept={}",
            self.objects_read, self.sources_read, self.sources_kept
        )
    }
}

/// Extract command configuration.
#[derive(Debug, Clone)]
pub struct ExtractCommand {
    /// Maximum number of object rows to read.
    pub object_limit: usize,
    /// Maximum number of source rows to read.
    pub source_limit: usize,
}

impl Default for ExtractCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractCommand {
    pub fn new() -> Self {
        Self {
            object_limit: DEFAULT_OBJECT_LIMIT,
            source_limit: DEFAULT_SOURCE_LIMIT,
        }
    }

    /// Set the object row cap.
    pub fn with_object_limit(mut self, limit: usize) -> Self {
        self.object_limit = limit;
        self
    }

    /// Set the source row cap.
    pub fn with_source_limit(mut self, limit: usize) -> Self {
        self.source_limit = limit;
        self
    }

    /// Load and parse up to `object_limit` object rows.
    pub fn load_objects<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ObjectRecord>> {
        let reader = LineReader::from_path(path)?;
        self.read_objects(reader)
    }

    /// Parse object rows from any readable source, honoring the cap.
    pub fn read_objects<R: Read>(&self, mut reader: LineReader<R>) -> Result<Vec<ObjectRecord>> {
        let mut objects = Vec::new();
        while objects.len() < self.object_limit {
            match reader.read_line()? {
                Some(line) => objects.push(ObjectRecord::parse(reader.line_number(), &line)?),
                None => break,
            }
        }
        Ok(objects)
    }

    /// Load and parse up to `source_limit` source rows.
    pub fn load_sources<P: AsRef<Path>>(&self, path: P) -> Result<Vec<SourceRecord>> {
        let reader = LineReader::from_path(path)?;
        self.read_sources(reader)
    }

    /// Parse source rows from any readable source, honoring the cap.
    pub fn read_sources<R: Read>(&self, mut reader: LineReader<R>) -> Result<Vec<SourceRecord>> {
        let mut sources = Vec::new();
        while sources.len() < self.source_limit {
            match reader.read_line()? {
                Some(line) => sources.push(SourceRecord::parse(reader.line_number(), &line)?),
                None => break,
            }
        }
        Ok(sources)
    }

    /// Keep only the source rows whose foreign key is in the index.
    ///
    /// Source-file order is preserved.
    pub fn filter_sources(
        &self,
        sources: Vec<SourceRecord>,
        index: &ObjectIdIndex,
    ) -> Vec<SourceRecord> {
        sources
            .into_iter()
            .filter(|s| index.contains(&s.object_ref))
            .collect()
    }

    /// Run the full extraction pipeline.
    ///
    /// Reads both catalogs, filters the sources, and writes `Object.txt` and
    /// `Source.txt` into `out_dir`. Any read, parse, or write failure aborts
    /// the run.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        object_path: P,
        source_path: Q,
        out_dir: &Path,
    ) -> Result<ExtractStats> {
        let objects = self.load_objects(object_path)?;
        let index = ObjectIdIndex::from_objects(&objects);
        let sources = self.load_sources(source_path)?;

        let sources_read = sources.len();
        let kept = self.filter_sources(sources, &index);

        let stats = ExtractStats {
            objects_read: objects.len(),
            sources_read,
            sources_kept: kept.len(),
        };

        let object_lines: Vec<&str> = objects.iter().map(|o| o.line.as_str()).collect();
        let source_lines: Vec<&str> = kept.iter().map(|s| s.line.as_str()).collect();

        catalog::write_lines_to_path(out_dir.join(OBJECT_OUTPUT), &object_lines)?;
        catalog::write_lines_to_path(out_dir.join(SOURCE_OUTPUT), &source_lines)?;

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LineReader;

    fn parse_sources(content: &str) -> Vec<SourceRecord> {
        ExtractCommand::new()
            .read_sources(LineReader::new(content.as_bytes()))
            .unwrap()
    }

    #[test]
    fn test_filter_keeps_matching_subsequence() {
        let cmd = ExtractCommand::new();
        let index = ObjectIdIndex::from_ids(["A", "B", "C"].map(String::from));
        let sources = parse_sources("x,y,z,A\nx,y,z,D\nx,y,z,B\n");

        let kept = cmd.filter_sources(sources, &index);
        let lines: Vec<&str> = kept.iter().map(|s| s.line.as_str()).collect();

        assert_eq!(lines, vec!["x,y,z,A", "x,y,z,B"]);
    }

    #[test]
    fn test_filter_order_of_identifiers_is_irrelevant() {
        let cmd = ExtractCommand::new();
        let sources = "x,y,z,A\nx,y,z,D\nx,y,z,B\n";

        let forward = ObjectIdIndex::from_ids(["A", "B"].map(String::from));
        let backward = ObjectIdIndex::from_ids(["B", "A"].map(String::from));

        let kept_forward = cmd.filter_sources(parse_sources(sources), &forward);
        let kept_backward = cmd.filter_sources(parse_sources(sources), &backward);

        assert_eq!(kept_forward, kept_backward);
        assert_eq!(kept_forward.len(), 2);
    }

    #[test]
    fn test_filter_empty_index_keeps_nothing() {
        let cmd = ExtractCommand::new();
        let sources = parse_sources("x,y,z,A\n");

        let kept = cmd.filter_sources(sources, &ObjectIdIndex::new());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_object_cap() {
        let cmd = ExtractCommand::new().with_object_limit(2);
        let reader = LineReader::new("1,a\n2,b\n3,c\n".as_bytes());

        let objects = cmd.read_objects(reader).unwrap();
        let ids: Vec<&str> = objects.iter().map(|o| o.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_source_cap() {
        let cmd = ExtractCommand::new().with_source_limit(1);
        let reader = LineReader::new("a,b,c,1\na,b,c,2\n".as_bytes());

        let sources = cmd.read_sources(reader).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].object_ref, "1");
    }

    #[test]
    fn test_malformed_source_row_is_an_error() {
        let cmd = ExtractCommand::new();
        let reader = LineReader::new("a,b,c,1\na,b,c\n".as_bytes());

        let err = cmd.read_sources(reader).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_stats_display() {
        let stats = ExtractStats {
            objects_read: 10,
            sources_read: 100,
            sources_kept: 42,
        };
        assert_eq!(stats.to_string(), "objects=10 sources=100 kept=42");
    }
}
