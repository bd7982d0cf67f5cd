//! Check command implementation.
//!
//! Referential integrity report for an Object/Source catalog pair: counts
//! how many source rows reference an object that is actually present. Reads
//! with the same caps as extract but writes nothing.

use crate::catalog::Result;
use crate::commands::ExtractCommand;
use crate::index::ObjectIdIndex;
use std::fmt;
use std::path::Path;

/// Result of a referential integrity check.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckReport {
    pub objects: usize,
    pub sources: usize,
    pub matched: usize,
    pub orphans: usize,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "objects={} sources={} matched={} orphans={}",
            self.objects, self.sources, self.matched, self.orphans
        )
    }
}

/// Check command configuration.
#[derive(Debug, Clone)]
pub struct CheckCommand {
    /// Maximum number of object rows to read.
    pub object_limit: usize,
    /// Maximum number of source rows to read.
    pub source_limit: usize,
}

impl Default for CheckCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckCommand {
    pub fn new() -> Self {
        let defaults = ExtractCommand::new();
        Self {
            object_limit: defaults.object_limit,
            source_limit: defaults.source_limit,
        }
    }

    /// Run the check against an Object/Source catalog pair.
    ///
    /// Orphan source rows are reported, not treated as errors; malformed
    /// rows still abort with a parse error.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        object_path: P,
        source_path: Q,
    ) -> Result<CheckReport> {
        let loader = ExtractCommand::new()
            .with_object_limit(self.object_limit)
            .with_source_limit(self.source_limit);

        let objects = loader.load_objects(object_path)?;
        let index = ObjectIdIndex::from_objects(&objects);
        let sources = loader.load_sources(source_path)?;

        let matched = sources
            .iter()
            .filter(|s| index.contains(&s.object_ref))
            .count();

        Ok(CheckReport {
            objects: objects.len(),
            sources: sources.len(),
            matched,
            orphans: sources.len() - matched,
        })
    }
}
