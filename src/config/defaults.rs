//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::event::{DEFAULT_DATE_FORMAT, DEFAULT_DELIMITER, DEFAULT_EVENT_NAME_PATTERN};
use crate::vehicle::DEFAULT_UPPERCASE_PATTERN;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_true, bool, true);
default_fn!(default_vehicles_key, String, "cars".to_string());
default_fn!(default_uppercase_pattern, String, DEFAULT_UPPERCASE_PATTERN.to_string());
default_fn!(default_date_format, String, DEFAULT_DATE_FORMAT.to_string());
default_fn!(default_delimiter, String, DEFAULT_DELIMITER.to_string());
default_fn!(default_event_name_pattern, String, DEFAULT_EVENT_NAME_PATTERN.to_string());
default_fn!(default_events_output, PathBuf, PathBuf::from("sorted_events.txt"));
default_fn!(default_log_level, String, "info".to_string());

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Vehicle listing input and validation rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VehiclesConfig {
    /// JSON file read when no file is given on the command line
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Key of the record array inside the JSON object (default: cars)
    #[serde(default = "default_vehicles_key")]
    pub key: String,
    /// Abort on the first invalid record (default: true)
    #[serde(default = "default_true")]
    pub stop_on_first_error: bool,
    #[serde(default = "default_uppercase_pattern")]
    pub model_pattern: String,
    #[serde(default = "default_uppercase_pattern")]
    pub component_pattern: String,
}

impl Default for VehiclesConfig {
    fn default() -> Self {
        Self {
            file: None,
            key: default_vehicles_key(),
            stop_on_first_error: default_true(),
            model_pattern: default_uppercase_pattern(),
            component_pattern: default_uppercase_pattern(),
        }
    }
}

/// Event file input, output and validation rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventsConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Where the date-sorted events are written (default: sorted_events.txt)
    #[serde(default = "default_events_output")]
    pub output: PathBuf,
    /// strftime pattern for the date column (default: %d-%m-%Y)
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Accept events dated before now (default: false)
    #[serde(default)]
    pub allow_past_dates: bool,
    #[serde(default = "default_event_name_pattern")]
    pub name_pattern: String,
    #[serde(default = "default_true")]
    pub stop_on_first_error: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            file: None,
            output: default_events_output(),
            date_format: default_date_format(),
            delimiter: default_delimiter(),
            allow_past_dates: false,
            name_pattern: default_event_name_pattern(),
            stop_on_first_error: default_true(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level used when RUST_LOG is unset (default: info)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
