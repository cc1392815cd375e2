//! Lattice Automaton - 3D expansion/contraction automaton
//!
//! A dense cubic field of signed integers is stepped by a neighbour-coupled
//! rule: cells above a threshold pay a share of their value to their axis
//! neighbours, with a phase bit alternating every tick. After each tick the
//! field is handed to sinks that print an ASCII cross-section or export a
//! point cloud.
//!
//! ```no_run
//! use lattice_automaton::automaton::{create_lattice, seed_center, RuleMode, TickDriver};
//! use lattice_automaton::sink::{AsciiSink, Sink};
//!
//! let mut lattice = create_lattice(20, 3)?;
//! seed_center(&mut lattice, 1024);
//! let mut driver = TickDriver::new(lattice, RuleMode::Faithful, 1)?;
//! let mut ascii = AsciiSink::new(std::io::stdout(), ' ');
//! driver.run(32, &mut [&mut ascii as &mut dyn Sink])?;
//! # Ok::<(), lattice_automaton::LatticeError>(())
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod sink;


pub use config::Config;
pub use error::{LatticeError, LatticeResult};
