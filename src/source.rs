//! Where raw records come from and where report lines go.
//!
//! The loader and services only see these traits, so the flat-file formats
//! can be swapped for in-memory fixtures in tests.

mod in_memory;
mod json_file;
mod text_file;

pub use in_memory::{InMemorySink, InMemorySource};
pub use json_file::JsonFileSource;
pub use text_file::{TextFileSink, TextFileSource};

use std::path::Path;

use crate::error::Result;

/// A trait for reading raw records from a storage backend.
pub trait RecordSource {
    type Record;

    /// Every raw record, in source order.
    fn read(&self) -> Result<Vec<Self::Record>>;

    /// Human-readable origin used in log lines.
    fn describe(&self) -> String;
}

/// A trait for writing report lines to a destination.
pub trait RecordSink {
    /// Replace the contents of `destination` with `lines`.
    fn write(&self, destination: &Path, lines: &[String]) -> Result<()>;
}
