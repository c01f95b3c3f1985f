//! Map variants and their transition rules
//!
//! Every variant shares the same four generic constants `a, b, c, d`; a
//! variant that needs fewer simply ignores the rest.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::wrap_tau;

/// The generic constants carried by every map
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Constants {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Constants {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

/// Which closed-form transition a map applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapKind {
    Tinkerbell,
    Bogdanov,
    Ikeda,
    Gingerbread,
    Standard,
    Clifford,
    GumowskiMira,
}

impl MapKind {
    /// All variants, in catalogue order
    pub const ALL: [MapKind; 7] = [
        MapKind::Tinkerbell,
        MapKind::Ikeda,
        MapKind::Clifford,
        MapKind::Bogdanov,
        MapKind::Gingerbread,
        MapKind::Standard,
        MapKind::GumowskiMira,
    ];

    /// Apply one iteration of this map to `p`.
    ///
    /// Pure and deterministic. Unstable parameter choices may yield NaN or
    /// infinite coordinates; those are returned as-is.
    pub fn step(self, k: &Constants, p: DVec2) -> DVec2 {
        let (x, y) = (p.x, p.y);
        match self {
            MapKind::Tinkerbell => DVec2::new(
                x * x - y * y + k.a * x + k.b * y,
                2.0 * x * y + k.c * x + k.d * y,
            ),
            MapKind::Bogdanov => {
                // x_new depends on y_new
                let y_new = y * (1.0 + k.a + k.c * x) + k.b * x * (x - 1.0);
                DVec2::new(x + y_new, y_new)
            }
            MapKind::Ikeda => {
                let t = 0.4 - 6.0 / (1.0 + x * x + y * y);
                let (sin_t, cos_t) = t.sin_cos();
                DVec2::new(
                    1.0 + k.a * (x * cos_t - y * sin_t),
                    k.a * (x * sin_t + y * cos_t),
                )
            }
            MapKind::Gingerbread => DVec2::new(1.0 - y + x.abs(), x),
            MapKind::Standard => {
                // The reduced x feeds both the sine and x_new
                let x = wrap_tau(x);
                let y_new = y + k.a * x.sin();
                DVec2::new(x + y_new, y_new)
            }
            MapKind::Clifford => DVec2::new(
                (k.a * y).sin() + k.c * (k.a * x).cos(),
                (k.b * x).sin() + k.d * (k.b * y).cos(),
            ),
            MapKind::GumowskiMira => {
                let x_new = k.b * y + gumowski_mira_f(k.a, x);
                DVec2::new(x_new, gumowski_mira_f(k.a, x_new) - x)
            }
        }
    }
}

/// Gumowski-Mira shaping function `f(v) = a*v + 2(1-a)v^2 / (1+v^2)^2`
#[inline]
pub fn gumowski_mira_f(a: f64, v: f64) -> f64 {
    let v2 = v * v;
    let denom = 1.0 + v2;
    a * v + 2.0 * (1.0 - a) * v2 / (denom * denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn step(kind: MapKind, k: Constants, x: f64, y: f64) -> DVec2 {
        kind.step(&k, DVec2::new(x, y))
    }

    #[test]
    fn test_tinkerbell_step() {
        let k = Constants::new(0.9, -0.6013, 2.0, 0.5);
        let p = step(MapKind::Tinkerbell, k, 0.1, 0.1);
        assert!((p.x - 0.02987).abs() < EPS, "got {}", p.x);
        assert!((p.y - 0.27).abs() < EPS, "got {}", p.y);

        let p = step(MapKind::Tinkerbell, k, -0.72, -0.64);
        let x_expected = 0.72 * 0.72 - 0.64 * 0.64 + 0.9 * -0.72 + -0.6013 * -0.64;
        let y_expected = 2.0 * -0.72 * -0.64 + 2.0 * -0.72 + 0.5 * -0.64;
        assert!((p.x - x_expected).abs() < EPS);
        assert!((p.y - y_expected).abs() < EPS);
    }

    #[test]
    fn test_bogdanov_step_uses_new_y() {
        let k = Constants::new(0.1, 1.2, 0.3, 0.0);
        let p = step(MapKind::Bogdanov, k, 0.5, 0.2);
        // y_new = 0.2 * (1 + 0.1 + 0.3*0.5) + 1.2 * 0.5 * (0.5 - 1) = 0.25 - 0.3
        let y_new = 0.2 * 1.25 + 1.2 * 0.5 * -0.5;
        assert!((p.y - y_new).abs() < EPS);
        assert!((p.x - (0.5 + y_new)).abs() < EPS);
    }

    #[test]
    fn test_ikeda_step() {
        let k = Constants::new(0.918, 0.0, 0.0, 0.0);
        let p = step(MapKind::Ikeda, k, 1.0, 1.0);
        let t: f64 = 0.4 - 6.0 / 3.0;
        assert!((p.x - (1.0 + 0.918 * (t.cos() - t.sin()))).abs() < EPS);
        assert!((p.y - 0.918 * (t.sin() + t.cos())).abs() < EPS);
    }

    #[test]
    fn test_gingerbread_step() {
        let p = step(MapKind::Gingerbread, Constants::default(), 0.5, 0.5);
        assert!((p.x - 1.0).abs() < EPS);
        assert!((p.y - 0.5).abs() < EPS);

        // |x| matters for negative x
        let p = step(MapKind::Gingerbread, Constants::default(), -0.5, 0.5);
        assert!((p.x - 1.0).abs() < EPS);
        assert!((p.y + 0.5).abs() < EPS);
    }

    #[test]
    fn test_standard_step() {
        let k = Constants::new(1.5, 0.0, 0.0, 0.0);
        let p = step(MapKind::Standard, k, 1.0, 1.0);
        let y_new = 1.0 + 1.5 * 1.0f64.sin();
        assert!((p.y - y_new).abs() < EPS);
        assert!((p.x - (1.0 + y_new)).abs() < EPS);
        assert!((p.y - 2.2622).abs() < 1e-4);
        assert!((p.x - 3.2622).abs() < 1e-4);
    }

    #[test]
    fn test_standard_step_reduces_x_first() {
        let k = Constants::new(1.5, 0.0, 0.0, 0.0);
        let x = 1.0 + std::f64::consts::TAU;
        let p = step(MapKind::Standard, k, x, 1.0);
        let y_new = 1.0 + 1.5 * 1.0f64.sin();
        // x_new uses the reduced x, not the original
        assert!((p.x - (1.0 + y_new)).abs() < 1e-9);
        assert!((p.y - y_new).abs() < 1e-9);
    }

    #[test]
    fn test_clifford_step() {
        let k = Constants::new(-1.4, 1.6, 1.0, 0.7);
        let p = step(MapKind::Clifford, k, 0.0, 0.0);
        // sin(0) + c*cos(0), sin(0) + d*cos(0)
        assert!((p.x - 1.0).abs() < EPS);
        assert!((p.y - 0.7).abs() < EPS);
    }

    #[test]
    fn test_gumowski_mira_step() {
        let k = Constants::new(-0.496, 1.0, 0.0, 0.0);
        let p = step(MapKind::GumowskiMira, k, 0.5, 0.5);
        let x_new = 1.0 * 0.5 + gumowski_mira_f(-0.496, 0.5);
        assert!((p.x - x_new).abs() < EPS);
        assert!((p.y - (gumowski_mira_f(-0.496, x_new) - 0.5)).abs() < EPS);
    }

    #[test]
    fn test_gumowski_mira_f() {
        assert_eq!(gumowski_mira_f(0.3, 0.0), 0.0);
        // f(1) = a + 2(1-a)/4
        let a = 0.3;
        assert!((gumowski_mira_f(a, 1.0) - (a + 0.5 * (1.0 - a))).abs() < EPS);
    }

    #[test]
    fn test_step_determinism() {
        let k = Constants::new(-1.4, 1.6, 1.0, 0.7);
        for kind in MapKind::ALL {
            let a = step(kind, k, 0.3, -0.2);
            let b = step(kind, k, 0.3, -0.2);
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn test_blow_up_passes_through() {
        let k = Constants::new(0.9, -0.6013, 2.0, 0.5);
        let p = step(MapKind::Tinkerbell, k, f64::INFINITY, 0.0);
        assert!(!p.x.is_finite());
    }
}
