use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use super::RecordSource;
use crate::error::{Result, TallyError};

/// Reads the array stored under `key` in a JSON object file.
///
/// ```json
/// { "cars": [ { "model": "AUDI", "price": 200, ... } ] }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    key: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    type Record = Value;

    fn read(&self) -> Result<Vec<Value>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| TallyError::io(&self.path, e))?;
        let document: Value = serde_json::from_str(&content).map_err(|source| TallyError::Json {
            path: self.path.clone(),
            source,
        })?;

        match document.get(&self.key) {
            Some(Value::Array(records)) => Ok(records.clone()),
            Some(_) => Err(TallyError::malformed(format!(
                "key {} in file {} does not hold a list",
                self.key,
                self.path.display()
            ))),
            None => Err(TallyError::MissingKey {
                key: self.key.clone(),
                path: self.path.clone(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("{} [{}]", self.path.display(), self.key)
    }
}
