use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{RecordSink, RecordSource};
use crate::error::Result;

/// In-memory record source for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource<T> {
    records: Vec<T>,
}

impl<T> InMemorySource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: Clone> RecordSource for InMemorySource<T> {
    type Record = T;

    fn read(&self) -> Result<Vec<T>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} records>", self.records.len())
    }
}

/// In-memory sink for testing; keeps the last lines written per destination.
#[derive(Debug, Default)]
pub struct InMemorySink {
    written: RefCell<HashMap<PathBuf, Vec<String>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written(&self, destination: &Path) -> Option<Vec<String>> {
        self.written.borrow().get(destination).cloned()
    }
}

impl RecordSink for InMemorySink {
    fn write(&self, destination: &Path, lines: &[String]) -> Result<()> {
        self.written
            .borrow_mut()
            .insert(destination.to_path_buf(), lines.to_vec());
        Ok(())
    }
}
