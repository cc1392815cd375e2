//! Core automaton logic and lattice operations.
//!
//! This module contains the lattice geometry and field, the expansion/
//! contraction rule, and the tick driver that steps it. The sinks in `sink/`
//! read the field between ticks.

pub mod driver;
pub mod field;
pub mod grid;
pub mod region;
pub mod stepping;

pub use driver::TickDriver;
pub use field::{
    active_cells, create_lattice, lattice_get, lattice_set, seed_center, total_mass, Lattice,
    DEFAULT_COUPLING, DEFAULT_SEED,
};
pub use grid::Geometry;
pub use region::{extract_region, mid_plane};
pub use stepping::{apply_delta, compute_delta, emit, Band, Direction, RuleMode};
