//! Run settings
//!
//! Loaded from a JSON file by the native binary; every field is optional and
//! falls back to the interactive defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalogue::default_map;
use crate::consts::{DEFAULT_ITER_N, MULTI_POINT_ITER_DIVISOR};
use crate::sim::{ChaoticMap, MapError, Simulator};

/// Errors raised while loading settings or building a simulator from them
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown map '{0}'")]
    UnknownMap(String),
    #[error(transparent)]
    Attribute(#[from] MapError),
}

/// What to simulate and for how long
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalogue name of the map to simulate
    pub map: String,
    /// Iterations for a single-origin run
    pub iter_n: usize,
    /// Multi-point maps run `iter_n / multi_point_divisor` steps per seed
    pub multi_point_divisor: usize,
    /// Attribute overrides applied on top of the catalogue defaults, by name
    pub overrides: BTreeMap<String, f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map: "TinkerBell Map".to_string(),
            iter_n: DEFAULT_ITER_N,
            multi_point_divisor: MULTI_POINT_ITER_DIVISOR,
            overrides: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Settings for a named map with default iteration counts
    pub fn for_map(name: &str) -> Self {
        Self {
            map: name.to_string(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Catalogue map with overrides applied (trajectory reseeded)
    pub fn build_map(&self) -> Result<ChaoticMap, SettingsError> {
        let mut map =
            default_map(&self.map).ok_or_else(|| SettingsError::UnknownMap(self.map.clone()))?;
        for (name, value) in &self.overrides {
            map.set_attribute(name, *value)?;
        }
        Ok(map)
    }

    pub fn build_simulator(&self) -> Result<Simulator, SettingsError> {
        let map = self.build_map()?;
        Ok(Simulator::new(map, self.iter_n).with_multi_point_divisor(self.multi_point_divisor))
    }
}
