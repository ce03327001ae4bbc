//! Field-level validation of raw records.
//!
//! Validators are pure: they never fail, they only collect violations per
//! field. Whether a rejected record aborts a load or is skipped is decided by
//! the [`crate::loader`], not here.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, TallyError};

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    TypeMismatch,
    OutOfRange,
    PatternMismatch,
    UnknownEnumValue,
    FormatMismatch,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing field"),
            Self::TypeMismatch => write!(f, "type mismatch"),
            Self::OutOfRange => write!(f, "out of range"),
            Self::PatternMismatch => write!(f, "pattern mismatch"),
            Self::UnknownEnumValue => write!(f, "unknown value"),
            Self::FormatMismatch => write!(f, "format mismatch"),
        }
    }
}

/// A single human-readable complaint about one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

/// Field name -> violations, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<Violation>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, kind: ViolationKind, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(Violation {
            kind,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[Violation]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Messages recorded for `field`, in the order they were added.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.get(field)
            .map(|v| v.iter().map(|x| x.message.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Violation])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .iter()
            .map(|(field, violations)| {
                let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
                format!("{}: [{}]", field, messages.join("; "))
            })
            .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

/// Outcome of validating one raw record.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub is_valid: bool,
    pub errors: ValidationErrors,
}

impl From<ValidationErrors> for ValidationResult {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// A regex that has to match a whole value, not just part of it.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    pattern: String,
    regex: Regex,
}

impl FieldPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .map_err(|e| TallyError::Config(format!("invalid pattern '{}': {}", pattern, e)))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The pattern as configured, without the added anchors.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

/// A rule set for one kind of raw record.
pub trait Validator<R: ?Sized> {
    /// Check every rule and collect all violations. Never fails.
    fn validate(&self, record: &R) -> ValidationResult;
}
