//! A parameterised chaotic map and its accumulated trajectory

use std::f64::consts::PI;

use glam::DVec2;
use thiserror::Error;

use super::attribute::Attribute;
use super::kind::{Constants, MapKind};
use super::range::SeedRange;
use crate::consts::MAX_RESERVED_POINTS;

/// Errors raised by map mutation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),
    #[error("attribute '{0}' requires a multi-point map with a seed range")]
    NoSeedRange(Attribute),
    #[error("trajectory index {index} out of bounds (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// One instance of a chaotic system.
///
/// Invariant: `xs.len() == ys.len() >= 1`, and `xs[0], ys[0]` is the seed the
/// trajectory was last reset to. Any parameter change truncates the
/// trajectory back to that single seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaoticMap {
    kind: MapKind,
    constants: Constants,
    origin: DVec2,
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Present iff the map is simulated from a grid of seeds
    seed_range: Option<SeedRange>,
}

impl ChaoticMap {
    pub fn new(kind: MapKind, origin: DVec2, constants: Constants) -> Self {
        Self {
            kind,
            constants,
            origin,
            xs: vec![origin.x],
            ys: vec![origin.y],
            seed_range: None,
        }
    }

    pub fn tinkerbell(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(
            MapKind::Tinkerbell,
            DVec2::new(0.1, 0.1),
            Constants::new(a, b, c, d),
        )
    }

    pub fn bogdanov(a: f64, b: f64, c: f64) -> Self {
        Self::new(
            MapKind::Bogdanov,
            DVec2::new(0.1, 0.1),
            Constants::new(a, b, c, 0.0),
        )
    }

    pub fn ikeda(a: f64) -> Self {
        Self::new(
            MapKind::Ikeda,
            DVec2::new(2.0, 2.0),
            Constants::new(a, 0.0, 0.0, 0.0),
        )
    }

    pub fn gingerbread() -> Self {
        Self::new(
            MapKind::Gingerbread,
            DVec2::new(-0.1, 0.0),
            Constants::default(),
        )
    }

    pub fn standard(a: f64) -> Self {
        Self::new(
            MapKind::Standard,
            DVec2::new(PI, PI),
            Constants::new(a, 0.0, 0.0, 0.0),
        )
    }

    pub fn clifford(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(MapKind::Clifford, DVec2::ZERO, Constants::new(a, b, c, d))
    }

    pub fn gumowski_mira(a: f64, b: f64) -> Self {
        Self::new(
            MapKind::GumowskiMira,
            DVec2::new(0.5, 0.5),
            Constants::new(a, b, 0.0, 0.0),
        )
    }

    /// Reseed at `(x0, y0)`
    pub fn with_origin(mut self, x0: f64, y0: f64) -> Self {
        self.reset_origin(x0, y0);
        self
    }

    /// Mark as multi-point with the given default seed grid
    pub fn with_seed_range(mut self, range: SeedRange) -> Self {
        self.seed_range = Some(range);
        self
    }

    pub fn kind(&self) -> MapKind {
        self.kind
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn seed_range(&self) -> Option<&SeedRange> {
        self.seed_range.as_ref()
    }

    /// Whether this map is only meaningful as an ensemble of short runs
    pub fn is_multi_point_sim(&self) -> bool {
        self.seed_range.is_some()
    }

    /// Apply this map's transition rule once; no side effects
    #[inline]
    pub fn step(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.kind.step(&self.constants, DVec2::new(x, y));
        (p.x, p.y)
    }

    /// Step from trajectory point `index` and append the result
    pub fn advance(&mut self, index: usize) -> Result<(), MapError> {
        let len = self.len();
        if index >= len {
            return Err(MapError::IndexOutOfBounds { index, len });
        }
        let (x, y) = self.step(self.xs[index], self.ys[index]);
        self.xs.push(x);
        self.ys.push(y);
        Ok(())
    }

    /// Step from the last trajectory point `n` times
    pub fn advance_n(&mut self, n: usize) {
        let reserve = n.min(MAX_RESERVED_POINTS);
        self.xs.reserve(reserve);
        self.ys.reserve(reserve);
        let mut x = self.xs[self.xs.len() - 1];
        let mut y = self.ys[self.ys.len() - 1];
        for _ in 0..n {
            (x, y) = self.step(x, y);
            self.xs.push(x);
            self.ys.push(y);
        }
    }

    /// Discard the trajectory and reseed it at `(x0, y0)`. Constants are kept.
    pub fn reset_origin(&mut self, x0: f64, y0: f64) {
        self.origin = DVec2::new(x0, y0);
        self.xs.clear();
        self.ys.clear();
        self.xs.push(x0);
        self.ys.push(y0);
    }

    /// Reseed at the current origin
    pub fn reset(&mut self) {
        self.reset_origin(self.origin.x, self.origin.y);
    }

    /// Accumulated `(xs, ys)`, same length, starting at the seed
    pub fn points(&self) -> (&[f64], &[f64]) {
        (&self.xs, &self.ys)
    }

    /// Number of trajectory points (always at least one)
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; a trajectory holds at least its seed
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn get(&self, attr: Attribute) -> Option<f64> {
        match attr {
            Attribute::A => Some(self.constants.a),
            Attribute::B => Some(self.constants.b),
            Attribute::C => Some(self.constants.c),
            Attribute::D => Some(self.constants.d),
            Attribute::X0 => Some(self.origin.x),
            Attribute::Y0 => Some(self.origin.y),
            _ => self.seed_range.as_ref().and_then(|r| r.get(attr)),
        }
    }

    /// Current value of the field called `name`, or `None` if this map has
    /// no such field (range bounds exist only on multi-point maps).
    pub fn get_attribute(&self, name: &str) -> Option<f64> {
        Attribute::from_name(name).and_then(|attr| self.get(attr))
    }

    /// Update `attr`, then reseed the trajectory at the (possibly new) origin.
    ///
    /// On success the trajectory is always exactly one point long, so no
    /// caller can observe points computed under two different parameter
    /// values. On error nothing changes.
    pub fn set(&mut self, attr: Attribute, value: f64) -> Result<(), MapError> {
        match attr {
            Attribute::A => self.constants.a = value,
            Attribute::B => self.constants.b = value,
            Attribute::C => self.constants.c = value,
            Attribute::D => self.constants.d = value,
            Attribute::X0 => self.origin.x = value,
            Attribute::Y0 => self.origin.y = value,
            _ => {
                let range = self
                    .seed_range
                    .as_mut()
                    .ok_or(MapError::NoSeedRange(attr))?;
                range.set(attr, value);
            }
        }
        self.reset();
        Ok(())
    }

    /// Update the field called `name`; see [`ChaoticMap::set`]
    pub fn set_attribute(&mut self, name: &str, value: f64) -> Result<(), MapError> {
        let attr: Attribute = name.parse()?;
        self.set(attr, value)
    }

    /// Every field this map recognises, in editor order
    pub fn get_attributes(&self) -> Vec<(Attribute, f64)> {
        Attribute::MAIN
            .iter()
            .chain(Attribute::RANGE.iter())
            .filter_map(|&attr| self.get(attr).map(|v| (attr, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tinkerbell() -> ChaoticMap {
        ChaoticMap::tinkerbell(0.9, -0.6013, 2.0, 0.5)
    }

    #[test]
    fn test_new_map_is_seeded() {
        let map = tinkerbell();
        let (xs, ys) = map.points();
        assert_eq!(xs, &[0.1]);
        assert_eq!(ys, &[0.1]);
        assert!(!map.is_multi_point_sim());
    }

    #[test]
    fn test_advance_appends_step() {
        let mut map = tinkerbell();
        map.advance(0).unwrap();
        let (xs, ys) = map.points();
        assert_eq!(xs.len(), 2);
        assert!((xs[1] - 0.02987).abs() < 1e-12);
        assert!((ys[1] - 0.27).abs() < 1e-12);
    }

    #[test]
    fn test_advance_custom_origin() {
        let mut map = tinkerbell().with_origin(-0.72, -0.64);
        map.advance(0).unwrap();
        let (xs, ys) = map.points();
        let (x, y) = map.step(-0.72, -0.64);
        assert_eq!(xs[1], x);
        assert_eq!(ys[1], y);
    }

    #[test]
    fn test_advance_out_of_bounds() {
        let mut map = tinkerbell();
        let err = map.advance(1).unwrap_err();
        assert_eq!(err, MapError::IndexOutOfBounds { index: 1, len: 1 });
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_advance_n_matches_advance() {
        let mut a = ChaoticMap::clifford(-1.4, 1.6, 1.0, 0.7);
        let mut b = a.clone();
        for i in 0..50 {
            a.advance(i).unwrap();
        }
        b.advance_n(50);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_reset_origin() {
        let mut map = tinkerbell();
        map.advance_n(10);
        map.reset_origin(1.0, 1.0);
        let (xs, ys) = map.points();
        assert_eq!(xs, &[1.0]);
        assert_eq!(ys, &[1.0]);
        assert_eq!(map.constants().a, 0.9);
    }

    #[test]
    fn test_get_attribute() {
        let map = tinkerbell();
        assert_eq!(map.get_attribute("a"), Some(0.9));
        assert_eq!(map.get_attribute("b"), Some(-0.6013));
        assert_eq!(map.get_attribute("x0"), Some(0.1));
        assert_eq!(map.get_attribute("xmin"), None);
        assert_eq!(map.get_attribute("nope"), None);
    }

    #[test]
    fn test_set_attribute_invalidates_trajectory() {
        let mut map = tinkerbell();
        map.advance_n(100);
        map.set_attribute("a", 0.8).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_attribute("a"), Some(0.8));
        assert_eq!(map.points(), (&[0.1][..], &[0.1][..]));
    }

    #[test]
    fn test_set_origin_attribute_reseeds() {
        let mut map = tinkerbell();
        map.advance_n(5);
        map.set_attribute("y0", -0.5).unwrap();
        assert_eq!(map.points(), (&[0.1][..], &[-0.5][..]));
        assert_eq!(map.origin(), DVec2::new(0.1, -0.5));
    }

    #[test]
    fn test_set_range_on_single_point_map() {
        let mut map = tinkerbell();
        map.advance_n(5);
        let err = map.set_attribute("xmin", -1.0).unwrap_err();
        assert_eq!(err, MapError::NoSeedRange(Attribute::XMin));
        // Rejected updates leave the trajectory alone
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_set_unknown_attribute() {
        let mut map = tinkerbell();
        let err = map.set_attribute("e", 1.0).unwrap_err();
        assert_eq!(err, MapError::UnknownAttribute("e".to_string()));
    }

    #[test]
    fn test_range_attributes_on_multi_point_map() {
        let mut map =
            ChaoticMap::standard(1.5).with_seed_range(SeedRange::new(0.0, 1.0, 0.0, 1.0, 0.5));
        assert!(map.is_multi_point_sim());
        assert_eq!(map.get_attribute("step_size"), Some(0.5));
        map.advance_n(3);
        map.set_attribute("step_size", 0.25).unwrap();
        assert_eq!(map.get_attribute("step_size"), Some(0.25));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_attributes() {
        let map = tinkerbell();
        let attrs = map.get_attributes();
        assert_eq!(attrs.len(), 6);
        assert_eq!(attrs[0], (Attribute::A, 0.9));
        assert_eq!(attrs[5], (Attribute::Y0, 0.1));

        let map =
            ChaoticMap::standard(1.5).with_seed_range(SeedRange::new(0.0, 1.0, 0.0, 1.0, 0.5));
        let attrs = map.get_attributes();
        assert_eq!(attrs.len(), 11);
        assert_eq!(attrs[10], (Attribute::StepSize, 0.5));
    }
}
