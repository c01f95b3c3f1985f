//! Rectangular grid of seed points for multi-point simulation

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// Seed grid bounds: `x` in `[xmin, xmax)`, `y` in `[ymin, ymax)`, spaced by `step_size`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedRange {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub step_size: f64,
}

impl SeedRange {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, step_size: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
            step_size,
        }
    }

    pub fn get(&self, attr: Attribute) -> Option<f64> {
        match attr {
            Attribute::XMin => Some(self.xmin),
            Attribute::XMax => Some(self.xmax),
            Attribute::YMin => Some(self.ymin),
            Attribute::YMax => Some(self.ymax),
            Attribute::StepSize => Some(self.step_size),
            _ => None,
        }
    }

    /// Update one bound; `attr` must be a range attribute
    pub fn set(&mut self, attr: Attribute, value: f64) {
        debug_assert!(attr.is_range(), "'{}' is not a seed range attribute", attr);
        match attr {
            Attribute::XMin => self.xmin = value,
            Attribute::XMax => self.xmax = value,
            Attribute::YMin => self.ymin = value,
            Attribute::YMax => self.ymax = value,
            Attribute::StepSize => self.step_size = value,
            _ => {}
        }
    }

    /// Number of seeds along x
    pub fn x_count(&self) -> usize {
        axis_len(self.xmin, self.xmax, self.step_size)
    }

    /// Number of seeds along y
    pub fn y_count(&self) -> usize {
        axis_len(self.ymin, self.ymax, self.step_size)
    }

    /// Total number of seed points, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.x_count().saturating_mul(self.y_count())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seed points, x-major (outer loop over x, inner loop over y)
    pub fn seeds(&self) -> impl Iterator<Item = DVec2> + '_ {
        let ny = self.y_count();
        (0..self.x_count()).flat_map(move |i| {
            let x = self.xmin + i as f64 * self.step_size;
            (0..ny).map(move |j| DVec2::new(x, self.ymin + j as f64 * self.step_size))
        })
    }
}

/// Half-open axis sample count, `ceil((end - start) / step)`; zero when degenerate
fn axis_len(start: f64, end: f64, step: f64) -> usize {
    if !(step > 0.0) || !(end > start) {
        return 0;
    }
    let n = ((end - start) / step).ceil();
    if n.is_finite() { n as usize } else { 0 }
}
