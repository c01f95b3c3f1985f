//! Default map catalogue
//!
//! Static table from the names a presentation layer lists in its map picker
//! to constructors seeded with each variant's default constants.

use std::f64::consts::TAU;

use crate::sim::{ChaoticMap, MapKind, SeedRange};

/// Display name and default constructor for every map variant
pub const DEFAULT_MAPS: [(&str, fn() -> ChaoticMap); 7] = [
    ("TinkerBell Map", default_tinkerbell),
    ("Ikeda Map", default_ikeda),
    ("Clifford Attractor", default_clifford),
    ("Bogdanov Map", default_bogdanov),
    ("Gingerbread Map", default_gingerbread),
    ("Standard Map", default_standard),
    ("Gumowski-Mira Attractor", default_gumowski_mira),
];

fn default_tinkerbell() -> ChaoticMap {
    ChaoticMap::tinkerbell(0.9, -0.6013, 2.0, 0.5)
}

fn default_ikeda() -> ChaoticMap {
    ChaoticMap::ikeda(0.918)
}

fn default_clifford() -> ChaoticMap {
    ChaoticMap::clifford(-1.4, 1.6, 1.0, 0.7)
}

fn default_bogdanov() -> ChaoticMap {
    ChaoticMap::bogdanov(0.0, 1.2, 0.0).with_seed_range(SeedRange::new(-1.0, 1.0, -1.0, 1.0, 0.1))
}

fn default_gingerbread() -> ChaoticMap {
    ChaoticMap::gingerbread()
}

fn default_standard() -> ChaoticMap {
    ChaoticMap::standard(1.5).with_seed_range(SeedRange::new(0.0, TAU, 0.0, TAU, 0.3))
}

fn default_gumowski_mira() -> ChaoticMap {
    ChaoticMap::gumowski_mira(-0.496, 1.0)
}

/// Build the default map registered under `name`
pub fn default_map(name: &str) -> Option<ChaoticMap> {
    DEFAULT_MAPS
        .iter()
        .find(|(map_name, _)| *map_name == name)
        .map(|(_, ctor)| ctor())
}

/// Catalogue names in picker order
pub fn map_names() -> impl Iterator<Item = &'static str> {
    DEFAULT_MAPS.iter().map(|(name, _)| *name)
}

impl MapKind {
    /// Catalogue name for this variant
    pub fn display_name(&self) -> &'static str {
        match self {
            MapKind::Tinkerbell => "TinkerBell Map",
            MapKind::Bogdanov => "Bogdanov Map",
            MapKind::Ikeda => "Ikeda Map",
            MapKind::Gingerbread => "Gingerbread Map",
            MapKind::Standard => "Standard Map",
            MapKind::Clifford => "Clifford Attractor",
            MapKind::GumowskiMira => "Gumowski-Mira Attractor",
        }
    }

    /// Default map for this variant
    pub fn default_map(&self) -> ChaoticMap {
        // Every variant is registered under its display name
        default_map(self.display_name()).unwrap_or_else(default_tinkerbell)
    }
}
