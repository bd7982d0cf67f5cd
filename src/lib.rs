//! catskim: referentially consistent catalog sample extraction.
//!
//! Astronomical survey pipelines dump their Object table (one row per
//! celestial object) and Source table (one row per detection) as plain
//! comma-separated text. catskim cuts a small, consistent sample out of such
//! a pair: a capped prefix of the Object table plus every Source row whose
//! object foreign key points at one of those objects.
//!
//! # Example
//!
//! ```rust,no_run
//! use catskim::commands::ExtractCommand;
//! use std::path::Path;
//!
//! let cmd = ExtractCommand::new().with_object_limit(1000);
//! let stats = cmd.run("Object.csv", "Source.csv", Path::new(".")).unwrap();
//! eprintln!("{}", stats);
//! ```

pub mod catalog;
pub mod commands;
pub mod index;
pub mod record;

// Re-export commonly used types
pub use catalog::{read_lines, write_lines, CatalogError, LineReader};
pub use index::ObjectIdIndex;
pub use record::{ObjectRecord, SourceRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{read_lines, write_lines, CatalogError, LineReader};
    pub use crate::commands::{CheckCommand, ExtractCommand};
    pub use crate::index::ObjectIdIndex;
    pub use crate::record::{ObjectRecord, SourceRecord};
}
