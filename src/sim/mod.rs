//! Deterministic map core
//!
//! Everything here is pure iteration over plain data:
//! - Transition rules are closed-form functions of `(x, y)` and four constants
//! - A map owns its trajectory; changing any parameter truncates it to the seed
//! - No rendering, platform or I/O dependencies

pub mod attribute;
pub mod kind;
pub mod map;
pub mod range;
pub mod simulator;

pub use attribute::Attribute;
pub use kind::{Constants, MapKind, gumowski_mira_f};
pub use map::{ChaoticMap, MapError};
pub use range::SeedRange;
pub use simulator::Simulator;
