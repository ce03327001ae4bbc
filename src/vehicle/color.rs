//! Closed set of vehicle colors.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Green,
    Black,
    White,
    Red,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Green, Color::Black, Color::White, Color::Red];

    /// Enumerated name as it appears in input files (`GREEN`, `BLACK`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Color::Green => "GREEN",
            Color::Black => "BLACK",
            Color::White => "WHITE",
            Color::Red => "RED",
        }
    }

    /// Human-facing label (`Green`, `Black`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Color::Green => "Green",
            Color::Black => "Black",
            Color::White => "White",
            Color::Red => "Red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive lookup by enumerated name.
impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GREEN" => Ok(Color::Green),
            "BLACK" => Ok(Color::Black),
            "WHITE" => Ok(Color::White),
            "RED" => Ok(Color::Red),
            _ => Err(format!("not found color: {}", s)),
        }
    }
}
