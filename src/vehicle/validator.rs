//! Field rules for raw vehicle records.

use serde_json::{Map, Value};

use super::Color;
use crate::error::Result;
use crate::validation::{
    FieldPattern, ValidationErrors, ValidationResult, Validator, ViolationKind,
};

/// Uppercase letters and whitespace only, at least one character.
pub const DEFAULT_UPPERCASE_PATTERN: &str = r"^[A-Z\s]+$";

const UNKNOWN_MODEL: &str = "<unknown>";

/// Validates JSON vehicle records.
///
/// Every field is checked independently so one pass reports all problems
/// with a record, not only the first.
#[derive(Debug, Clone)]
pub struct VehicleValidator {
    model_pattern: FieldPattern,
    component_pattern: FieldPattern,
}

impl Default for VehicleValidator {
    fn default() -> Self {
        let pattern = FieldPattern::new(DEFAULT_UPPERCASE_PATTERN).expect("default pattern compiles");
        Self {
            model_pattern: pattern.clone(),
            component_pattern: pattern,
        }
    }
}

impl VehicleValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom patterns for the model name and for each component.
    pub fn with_patterns(model_pattern: &str, component_pattern: &str) -> Result<Self> {
        Ok(Self {
            model_pattern: FieldPattern::new(model_pattern)?,
            component_pattern: FieldPattern::new(component_pattern)?,
        })
    }

    fn check_model(&self, data: &Map<String, Value>, errors: &mut ValidationErrors) {
        match data.get("model") {
            None => errors.add("model", ViolationKind::MissingField, "not found"),
            Some(Value::String(model)) => {
                if !self.model_pattern.is_match(model) {
                    errors.add(
                        "model",
                        ViolationKind::PatternMismatch,
                        format!(
                            "{} does not match regex: {}",
                            model,
                            self.model_pattern.as_str()
                        ),
                    );
                }
            }
            Some(other) => errors.add(
                "model",
                ViolationKind::TypeMismatch,
                format!("model is not a string: {}", other),
            ),
        }
    }

    fn check_color(&self, data: &Map<String, Value>, model: &str, errors: &mut ValidationErrors) {
        match data.get("color") {
            None => errors.add(
                "color",
                ViolationKind::MissingField,
                format!("not found for model: {}", model),
            ),
            Some(Value::String(name)) => {
                if name.parse::<Color>().is_err() {
                    errors.add(
                        "color",
                        ViolationKind::UnknownEnumValue,
                        format!("not found color: {} for model: {}", name, model),
                    );
                }
            }
            Some(other) => errors.add(
                "color",
                ViolationKind::TypeMismatch,
                format!("color for model {} is not a string: {}", model, other),
            ),
        }
    }

    fn check_components(
        &self,
        data: &Map<String, Value>,
        model: &str,
        errors: &mut ValidationErrors,
    ) {
        let components = match data.get("components") {
            None => {
                errors.add(
                    "components",
                    ViolationKind::MissingField,
                    format!("not found for model: {}", model),
                );
                return;
            }
            Some(Value::Array(items)) => items,
            Some(other) => {
                errors.add(
                    "components",
                    ViolationKind::TypeMismatch,
                    format!("components for model {} is not a list: {}", model, other),
                );
                return;
            }
        };

        if components.iter().any(|c| !c.is_string()) {
            errors.add(
                "components",
                ViolationKind::TypeMismatch,
                format!("Invalid components for model {}: every component must be a string", model),
            );
            return;
        }

        let rejected: Vec<&str> = components
            .iter()
            .filter_map(Value::as_str)
            .filter(|c| !self.component_pattern.is_match(c))
            .collect();
        if !rejected.is_empty() {
            errors.add(
                "components",
                ViolationKind::PatternMismatch,
                format!(
                    "Invalid components for model {}: {:?} does not match regex: {}",
                    model,
                    rejected,
                    self.component_pattern.as_str()
                ),
            );
        }
    }
}

/// Present, integral and strictly positive.
fn check_positive_integer(
    data: &Map<String, Value>,
    field: &str,
    model: &str,
    errors: &mut ValidationErrors,
) {
    let Some(value) = data.get(field) else {
        errors.add(
            field,
            ViolationKind::MissingField,
            format!("not found for model: {}", model),
        );
        return;
    };

    match value.as_i64() {
        Some(n) if n <= 0 => errors.add(
            field,
            ViolationKind::OutOfRange,
            format!("{} for model {} must be greater than 0", field, model),
        ),
        Some(_) => {}
        // Integers above i64::MAX are still positive integers
        None if value.is_u64() => {}
        None => errors.add(
            field,
            ViolationKind::TypeMismatch,
            format!("{} for model {} is not a number: \"{}\"", field, model, value),
        ),
    }
}

impl Validator<Value> for VehicleValidator {
    fn validate(&self, record: &Value) -> ValidationResult {
        let mut errors = ValidationErrors::default();

        let Some(data) = record.as_object() else {
            errors.add(
                "record",
                ViolationKind::TypeMismatch,
                "vehicle record is not a JSON object",
            );
            return errors.into();
        };

        let model = data
            .get("model")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_MODEL);

        self.check_model(data, &mut errors);
        check_positive_integer(data, "price", model, &mut errors);
        self.check_color(data, model, &mut errors);
        check_positive_integer(data, "mileage", model, &mut errors);
        self.check_components(data, model, &mut errors);

        errors.into()
    }
}
