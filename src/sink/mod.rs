//! Read-only consumers of the lattice, invoked by the driver after each tick.

pub mod ascii;
pub mod point_cloud;

pub use ascii::AsciiSink;
pub use point_cloud::PointCloudSink;

use crate::automaton::Lattice;
use crate::error::LatticeResult;

/// A consumer of lattice frames.
pub trait Sink {
    /// Called once before the first tick, with the seeded lattice.
    fn begin(&mut self, _lattice: &Lattice) -> LatticeResult<()> {
        Ok(())
    }

    /// Called after every tick with the 0-based frame index.
    fn observe(&mut self, lattice: &Lattice, frame: u64) -> LatticeResult<()>;
}
