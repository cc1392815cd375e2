//! Tick driver: owns the field, the delta buffer and the worker pool.
//!
//! Core invariant: each tick reads only the field as it stood at the end of
//! the previous tick. The rule accumulates into `delta`, and only once it is
//! complete is `delta` folded back into the field.

use log::{debug, trace};

use super::field::{active_cells, total_mass, Lattice};
use super::stepping::{apply_delta, compute_delta, RuleMode};
use crate::error::LatticeResult;
use crate::sink::Sink;

/// Steps a [`Lattice`] and feeds each generation to a set of sinks.
pub struct TickDriver {
    lattice: Lattice,

    /// Scratch buffer for the rule phase; same length as `lattice.cells`.
    delta: Vec<i32>,

    mode: RuleMode,

    /// Rayon thread pool for the apply phase (1 thread unless configured).
    thread_pool: rayon::ThreadPool,
}

impl TickDriver {
    /// Wrap a lattice. `num_threads == 0` means one thread.
    pub fn new(lattice: Lattice, mode: RuleMode, num_threads: usize) -> LatticeResult<Self> {
        let num_threads = num_threads.max(1);
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;
        let delta = vec![0; lattice.cells.len()];

        Ok(TickDriver {
            lattice,
            delta,
            mode,
            thread_pool,
        })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Delta accumulated by the most recent tick.
    pub fn delta(&self) -> &[i32] {
        &self.delta
    }

    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    /// Extract the inner lattice.
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    /// Phase bit the next tick will use.
    pub fn phase(&self) -> bool {
        self.lattice.generation & 1 == 1
    }

    /// Advance one generation using the phase implied by the generation counter.
    pub fn tick(&mut self) {
        let odd = self.phase();
        self.tick_with_phase(odd);
    }

    /// Advance one generation with an explicit phase bit.
    pub fn tick_with_phase(&mut self, odd: bool) {
        self.delta.fill(0);
        compute_delta(&self.lattice, &mut self.delta, odd, self.mode);

        let lattice = &mut self.lattice;
        let delta = &self.delta;
        self.thread_pool.install(|| apply_delta(lattice, delta));

        self.lattice.generation += 1;

        debug_assert!(
            (0..self.lattice.cells.len())
                .filter(|&i| self.lattice.geometry.is_boundary(i))
                .all(|i| self.lattice.cells[i] == 0),
            "boundary cell written"
        );
        trace!(
            "generation {} (odd = {}): mass {}, active {}",
            self.lattice.generation,
            odd,
            total_mass(&self.lattice),
            active_cells(&self.lattice),
        );
    }

    /// Run `ticks` generations, calling every sink after each one.
    ///
    /// Sinks see frame indices starting at 0. The first sink error aborts the run.
    pub fn run(&mut self, ticks: u64, sinks: &mut [&mut dyn Sink]) -> LatticeResult<()> {
        for sink in sinks.iter_mut() {
            sink.begin(&self.lattice)?;
        }

        for frame in 0..ticks {
            self.tick();
            for sink in sinks.iter_mut() {
                sink.observe(&self.lattice, frame)?;
            }
        }

        debug!(
            "finished {} ticks: mass {}, active {}",
            ticks,
            total_mass(&self.lattice),
            active_cells(&self.lattice),
        );
        Ok(())
    }
}
