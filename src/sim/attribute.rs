//! Named map fields editable by name
//!
//! The presentation layer addresses fields by the short labels it shows next
//! to its text boxes (`a`, `x0`, `step_size`, ...). This module is the static
//! name table for those labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::map::MapError;

/// A named, numerically editable map field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    A,
    B,
    C,
    D,
    X0,
    Y0,
    XMin,
    XMax,
    YMin,
    YMax,
    StepSize,
}

impl Attribute {
    /// Constants and origin, present on every map
    pub const MAIN: [Attribute; 6] = [
        Attribute::A,
        Attribute::B,
        Attribute::C,
        Attribute::D,
        Attribute::X0,
        Attribute::Y0,
    ];

    /// Seed-range bounds, present only on multi-point maps
    pub const RANGE: [Attribute; 5] = [
        Attribute::XMin,
        Attribute::XMax,
        Attribute::YMin,
        Attribute::YMax,
        Attribute::StepSize,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::A => "a",
            Attribute::B => "b",
            Attribute::C => "c",
            Attribute::D => "d",
            Attribute::X0 => "x0",
            Attribute::Y0 => "y0",
            Attribute::XMin => "xmin",
            Attribute::XMax => "xmax",
            Attribute::YMin => "ymin",
            Attribute::YMax => "ymax",
            Attribute::StepSize => "step_size",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::MAIN
            .iter()
            .chain(Self::RANGE.iter())
            .copied()
            .find(|attr| attr.name() == name)
    }

    /// Whether this attribute lives in the seed range
    pub fn is_range(&self) -> bool {
        Self::RANGE.contains(self)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| MapError::UnknownAttribute(s.to_string()))
    }
}
