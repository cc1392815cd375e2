//! Expansion/contraction update rule and delta applier.
//!
//! Every interior cell is classified into a band by its current value and may
//! "emit": pay `-sign * N` to itself and `+sign` to the three axis neighbours
//! on one side. All reads come from the field, all writes go to the delta
//! buffer, so the visiting order does not matter.

use rayon::prelude::*;

use super::field::Lattice;

/// Value interval that selects a cell's behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// `v <= -2N`
    StrongContract,
    /// `-2N < v <= -N`
    WeakContract,
    /// `-N < v < N`
    Quiet,
    /// `N <= v < 2N`
    WeakExpand,
    /// `v >= 2N`
    StrongExpand,
}

impl Band {
    #[inline]
    pub fn of(value: i32, coupling: i32) -> Band {
        let n = coupling;
        if value >= 2 * n {
            Band::StrongExpand
        } else if value <= -2 * n {
            Band::StrongContract
        } else if value >= n {
            Band::WeakExpand
        } else if value <= -n {
            Band::WeakContract
        } else {
            Band::Quiet
        }
    }
}

/// How the two weak bands behave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RuleMode {
    /// Weak bands always expand forward and contract backward, whatever the phase.
    #[default]
    Faithful,
    /// Weak bands swap which side expands on odd and even phases.
    Intended,
}

/// Side of the source cell an emission targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Emission pairs `(direction, sign)` for a cell in `band` at the given phase.
fn emissions(band: Band, odd: bool, mode: RuleMode) -> &'static [(Direction, i32)] {
    use Direction::{Backward, Forward};

    const EXPAND_BOTH: &[(Direction, i32)] = &[(Forward, 1), (Backward, 1)];
    const CONTRACT_BOTH: &[(Direction, i32)] = &[(Forward, -1), (Backward, -1)];
    const EXPAND_FORWARD: &[(Direction, i32)] = &[(Forward, 1), (Backward, -1)];
    const EXPAND_BACKWARD: &[(Direction, i32)] = &[(Forward, -1), (Backward, 1)];

    match (band, mode) {
        (Band::Quiet, _) => &[],
        (Band::StrongExpand, _) => EXPAND_BOTH,
        (Band::StrongContract, _) => CONTRACT_BOTH,
        (Band::WeakExpand | Band::WeakContract, RuleMode::Faithful) => EXPAND_FORWARD,
        (Band::WeakExpand, RuleMode::Intended) if odd => EXPAND_FORWARD,
        (Band::WeakExpand, RuleMode::Intended) => EXPAND_BACKWARD,
        (Band::WeakContract, RuleMode::Intended) if odd => EXPAND_BACKWARD,
        (Band::WeakContract, RuleMode::Intended) => EXPAND_FORWARD,
    }
}

/// Emit from interior cell `i` toward `direction` with the given `sign`.
///
/// Neighbours on the boundary are skipped; the source still pays its full share.
#[inline]
pub fn emit(lattice: &Lattice, delta: &mut [i32], i: usize, direction: Direction, sign: i32) {
    let g = lattice.geometry;
    delta[i] -= sign * lattice.coupling;
    for s in g.strides() {
        let j = match direction {
            Direction::Forward => i + s,
            Direction::Backward => i - s,
        };
        if !g.is_boundary(j) {
            delta[j] += sign;
        }
    }
}

/// Accumulate one tick's emissions into `delta`.
///
/// `delta` must be zeroed by the caller and have the same length as the field.
pub fn compute_delta(lattice: &Lattice, delta: &mut [i32], odd: bool, mode: RuleMode) {
    debug_assert_eq!(delta.len(), lattice.cells.len());
    let g = lattice.geometry;

    for (i, &value) in lattice.cells.iter().enumerate() {
        // Interior cells have every axis neighbour in range, so emit never
        // indexes outside the buffer.
        if g.is_boundary(i) {
            continue;
        }
        let band = Band::of(value, lattice.coupling);
        for &(direction, sign) in emissions(band, odd, mode) {
            emit(lattice, delta, i, direction, sign);
        }
    }
}

/// Add `delta` into the field, skipping boundary cells.
pub fn apply_delta(lattice: &mut Lattice, delta: &[i32]) {
    let g = lattice.geometry;
    lattice
        .cells
        .par_iter_mut()
        .zip(delta.par_iter())
        .enumerate()
        .for_each(|(i, (cell, &d))| {
            if !g.is_boundary(i) {
                *cell += d;
            }
        });
}
