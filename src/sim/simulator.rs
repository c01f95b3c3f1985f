//! Driver that iterates the active map
//!
//! Single-attractor maps get one long trajectory from their seed. Multi-point
//! maps get many short trajectories, one per grid seed, concatenated in
//! visitation order.

use super::map::ChaoticMap;
use super::range::SeedRange;
use crate::consts::{MAX_RESERVED_POINTS, MULTI_POINT_ITER_DIVISOR};

/// Runs the active map for `iter_n` iterations
#[derive(Debug, Clone)]
pub struct Simulator {
    map: ChaoticMap,
    iter_n: usize,
    multi_point_divisor: usize,
}

impl Simulator {
    pub fn new(map: ChaoticMap, iter_n: usize) -> Self {
        Self {
            map,
            iter_n,
            multi_point_divisor: MULTI_POINT_ITER_DIVISOR,
        }
    }

    /// Override how much multi-point runs shorten each trajectory
    pub fn with_multi_point_divisor(mut self, divisor: usize) -> Self {
        self.multi_point_divisor = divisor;
        self
    }

    pub fn map(&self) -> &ChaoticMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut ChaoticMap {
        &mut self.map
    }

    pub fn into_map(self) -> ChaoticMap {
        self.map
    }

    pub fn iter_n(&self) -> usize {
        self.iter_n
    }

    /// Iterations per seed used by multi-point runs
    pub fn multi_point_iter_n(&self) -> usize {
        self.iter_n / self.multi_point_divisor.max(1)
    }

    /// Swap in a new active map, returning the previous one
    pub fn change_chaotic_map(&mut self, map: ChaoticMap) -> ChaoticMap {
        log::info!("Switching map {:?} -> {:?}", self.map.kind(), map.kind());
        std::mem::replace(&mut self.map, map)
    }

    pub fn change_iter_n(&mut self, iter_n: usize) {
        self.iter_n = iter_n;
    }

    /// Produce the picture for the active map.
    ///
    /// Multi-point maps run their default seed grid with the shortened
    /// iteration count; other maps are reseeded at their origin and run once.
    pub fn simulate(&mut self) -> (Vec<f64>, Vec<f64>) {
        if let Some(range) = self.map.seed_range().copied() {
            let iter_n = self.multi_point_iter_n();
            self.run_grid(&range, iter_n)
        } else {
            self.map.reset();
            let (xs, ys) = self.simulate_single();
            (xs.to_vec(), ys.to_vec())
        }
    }

    /// Advance the map `iter_n` times from its trajectory tail.
    ///
    /// On a freshly seeded map the result holds `iter_n + 1` points.
    pub fn simulate_single(&mut self) -> (&[f64], &[f64]) {
        let origin = self.map.origin();
        log::debug!(
            "Simulating {:?} from ({}, {}) for {} iterations",
            self.map.kind(),
            origin.x,
            origin.y,
            self.iter_n
        );
        self.map.advance_n(self.iter_n);
        self.map.points()
    }

    /// Run one single-origin simulation per grid seed in
    /// `[x0, x1) x [y0, y1)` and concatenate the results, x-major.
    ///
    /// Empty output when `step <= 0` or either axis range is empty. The map
    /// is left reseeded at its configured origin.
    pub fn simulate_in_range(
        &mut self,
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        step: f64,
    ) -> (Vec<f64>, Vec<f64>) {
        let range = SeedRange::new(x0, x1, y0, y1, step);
        self.run_grid(&range, self.iter_n)
    }

    fn run_grid(&mut self, range: &SeedRange, iter_n: usize) -> (Vec<f64>, Vec<f64>) {
        let seeds = range.len();
        if seeds == 0 {
            log::warn!("Empty seed range {:?}, nothing to simulate", range);
            return (Vec::new(), Vec::new());
        }
        log::debug!(
            "Simulating {:?} over {} seeds for {} iterations each",
            self.map.kind(),
            seeds,
            iter_n
        );

        let origin = self.map.origin();
        let capacity = grid_capacity(seeds, iter_n);
        let mut xs = Vec::with_capacity(capacity);
        let mut ys = Vec::with_capacity(capacity);

        for seed in range.seeds() {
            self.map.reset_origin(seed.x, seed.y);
            self.map.advance_n(iter_n);
            let (sx, sy) = self.map.points();
            xs.extend_from_slice(sx);
            ys.extend_from_slice(sy);
        }

        self.map.reset_origin(origin.x, origin.y);
        (xs, ys)
    }
}

/// Points to reserve for a grid run, capped at [`MAX_RESERVED_POINTS`]
fn grid_capacity(seeds: usize, iter_n: usize) -> usize {
    seeds
        .saturating_mul(iter_n.saturating_add(1))
        .min(MAX_RESERVED_POINTS)
}
