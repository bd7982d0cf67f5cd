//! Command implementations for catskim.

pub mod check;
pub mod extract;

pub use check::{CheckCommand, CheckReport};
pub use extract::{
    ExtractCommand, ExtractStats, DEFAULT_OBJECT_LIMIT, DEFAULT_SOURCE_LIMIT, OBJECT_OUTPUT,
    SOURCE_OUTPUT,
};
