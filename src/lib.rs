//! Chaotic Maps - discrete-time 2D iterated map simulator
//!
//! Core modules:
//! - `sim`: Deterministic map core (transition rules, trajectories, simulator)
//! - `catalogue`: Named default maps for a presentation layer
//! - `settings`: Serde-backed run configuration

pub mod catalogue;
pub mod settings;
pub mod sim;

pub use catalogue::{DEFAULT_MAPS, default_map, map_names};
pub use settings::{Settings, SettingsError};
pub use sim::{Attribute, ChaoticMap, Constants, MapError, MapKind, SeedRange, Simulator};

/// Simulation configuration constants
pub mod consts {
    /// Iteration count used by the interactive shell for one redraw
    pub const DEFAULT_ITER_N: usize = 50_000;
    /// Multi-point maps run `iter_n / MULTI_POINT_ITER_DIVISOR` steps per seed
    pub const MULTI_POINT_ITER_DIVISOR: usize = 100;
    /// Upper bound on points reserved up front; longer runs grow on demand
    pub const MAX_RESERVED_POINTS: usize = 1 << 22;
}

/// Reduce `x` modulo 2π into `[0, 2π)` (floor modulo, sign follows the divisor)
#[inline]
pub fn wrap_tau(x: f64) -> f64 {
    x.rem_euclid(std::f64::consts::TAU)
}
