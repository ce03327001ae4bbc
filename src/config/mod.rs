//! Configuration management for tally.
//!
//! The project config lives in `.tally/config.md`: a Markdown file whose
//! YAML frontmatter holds the settings. Every setting has a default, so the
//! file is optional.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Result, TallyError};

pub mod defaults;
pub mod validation;

pub use defaults::*;


/// Project config location, relative to the working directory.
pub const CONFIG_PATH: &str = ".tally/config.md";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub vehicles: VehiclesConfig,
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load `.tally/config.md` if present, defaults otherwise.
    pub fn load() -> Result<Self> {
        Self::load_or_default(Path::new(CONFIG_PATH))
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TallyError::io(path, e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let frontmatter = split_frontmatter(content).ok_or_else(|| {
            TallyError::Config("Failed to extract frontmatter from config".to_string())
        })?;

        let config: Config = serde_yaml::from_str(frontmatter)
            .map_err(|e| TallyError::Config(format!("Failed to parse config frontmatter: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}

/// The YAML between the leading `---` fences, if any.
fn split_frontmatter(content: &str) -> Option<&str> {
    let rest = content.trim().strip_prefix("---")?;
    let end = rest.find("---")?;
    Some(&rest[..end])
}
