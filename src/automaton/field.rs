//! Dense signed-integer field over a cubic lattice.
//!
//! The outer shell of the lattice is pinned to zero: writes there are refused
//! and the stepping code never emits into it.

use super::grid::Geometry;
use crate::error::{LatticeError, LatticeResult};

/// Default coupling magnitude `N`.
pub const DEFAULT_COUPLING: i32 = 3;

/// Default value placed at the center cell.
pub const DEFAULT_SEED: i32 = 1024;

/// A 3D field of i32 values.
pub struct Lattice {
    pub geometry: Geometry,
    /// Coupling magnitude `N`; also sets the band thresholds `N` and `2N`.
    pub coupling: i32,
    pub cells: Vec<i32>,
    pub generation: u64,
}

/// Initialize an all-zero lattice of side `width`.
pub fn create_lattice(width: usize, coupling: i32) -> LatticeResult<Lattice> {
    if coupling <= 0 {
        return Err(LatticeError::InvalidCoupling(coupling));
    }
    let geometry = Geometry::new(width)?;
    Ok(Lattice {
        geometry,
        coupling,
        cells: vec![0; geometry.len()],
        generation: 0,
    })
}

/// Set a cell value.
///
/// Returns `false` without writing if the coordinate is outside the lattice or
/// on its boundary.
pub fn lattice_set(lattice: &mut Lattice, x: usize, y: usize, z: usize, value: i32) -> bool {
    let g = lattice.geometry;
    if !g.in_bounds(x, y, z) {
        return false;
    }
    let idx = g.index_of(x, y, z);
    if g.is_boundary(idx) {
        return false;
    }
    lattice.cells[idx] = value;
    true
}

/// Get a cell value. Out-of-bounds reads return 0.
pub fn lattice_get(lattice: &Lattice, x: usize, y: usize, z: usize) -> i32 {
    let g = lattice.geometry;
    if g.in_bounds(x, y, z) {
        lattice.cells[g.index_of(x, y, z)]
    } else {
        0
    }
}

/// Place a single impulse at the geometric center.
pub fn seed_center(lattice: &mut Lattice, value: i32) {
    let center = lattice.geometry.center();
    lattice.cells[center] = value;
}

/// Sum of every cell.
pub fn total_mass(lattice: &Lattice) -> i64 {
    lattice.cells.iter().map(|&v| v as i64).sum()
}

/// Number of cells whose magnitude is at least `N`, i.e. cells that will emit.
pub fn active_cells(lattice: &Lattice) -> usize {
    let n = lattice.coupling;
    lattice.cells.iter().filter(|v| v.abs() >= n).count()
}
