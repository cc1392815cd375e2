//! Error types shared by the automaton and its sinks.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type returned by fallible lattice routines.
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Error encountered while building or running a lattice.
#[derive(Error, Debug)]
pub enum LatticeError {
    #[error("lattice width {0} is below the minimum of 4")]
    WidthTooSmall(usize),
    #[error("lattice width {0} is too large to index")]
    WidthTooLarge(usize),
    #[error("coupling magnitude must be positive, got {0}")]
    InvalidCoupling(i32),
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write frame to output stream")]
    Stream(#[from] io::Error),
    #[error("failed to build worker thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl LatticeError {
    /// Wraps an I/O error with the file it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LatticeError::Io {
            path: path.into(),
            source,
        }
    }
}
