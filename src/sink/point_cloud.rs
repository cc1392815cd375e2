//! Point-cloud export as line-oriented `v` records.
//!
//! `pos0.obj` holds one position per cell, written once. Each frame then
//! writes `clr<frame>.obj` with one RGB triple per cell, in the same flat-index
//! order, so a viewer can zip the two streams.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::trace;

use super::Sink;
use crate::automaton::Lattice;
use crate::error::{LatticeError, LatticeResult};

/// Name of the static position file.
pub const POSITION_FILE: &str = "pos0.obj";

/// RGB per band, indexed by [`color_index`].
const COLOR_TABLE: [[f32; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
];

/// Color band of a value: 0 quiet, 1 strong negative, 2 weak negative,
/// 3 weak positive, 4 strong positive.
///
/// The positive bands split at `> 2N`, unlike the rule's `>= 2N`.
#[inline]
pub fn color_index(value: i32, coupling: i32) -> usize {
    let n = coupling;
    if value <= -2 * n {
        1
    } else if value <= -n {
        2
    } else if value < n {
        0
    } else if value <= 2 * n {
        3
    } else {
        4
    }
}

#[inline]
pub fn color_of(value: i32, coupling: i32) -> [f32; 3] {
    COLOR_TABLE[color_index(value, coupling)]
}

pub fn position_path(dir: &Path) -> PathBuf {
    dir.join(POSITION_FILE)
}

pub fn color_path(dir: &Path, frame: u64) -> PathBuf {
    dir.join(format!("clr{}.obj", frame))
}

/// Write `records` to `path` as `v a b c` lines, then flush and close.
fn write_vertices<I>(path: &Path, records: I) -> LatticeResult<()>
where
    I: IntoIterator<Item = [f32; 3]>,
{
    let file = File::create(path).map_err(|e| LatticeError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for [a, b, c] in records {
        writeln!(writer, "v {:.6} {:.6} {:.6}", a, b, c)
            .map_err(|e| LatticeError::io(path, e))?;
    }
    writer.flush().map_err(|e| LatticeError::io(path, e))?;
    trace!("wrote {}", path.display());
    Ok(())
}

/// Write cell positions scaled into `[-1, 1]³`.
pub fn write_positions(dir: &Path, lattice: &Lattice) -> LatticeResult<PathBuf> {
    let g = lattice.geometry;
    let scale = 2.0 / g.width() as f32;
    let path = position_path(dir);
    write_vertices(
        &path,
        (0..g.len()).map(|i| g.coords_of(i).map(|c| c as f32 * scale - 1.0)),
    )?;
    Ok(path)
}

/// Write per-cell colors for one frame.
pub fn write_colors(dir: &Path, lattice: &Lattice, frame: u64) -> LatticeResult<PathBuf> {
    let n = lattice.coupling;
    let path = color_path(dir, frame);
    write_vertices(&path, lattice.cells.iter().map(|&v| color_of(v, n)))?;
    Ok(path)
}

/// Writes `pos0.obj` on `begin` and `clr<frame>.obj` after every tick.
pub struct PointCloudSink {
    dir: PathBuf,
}

impl PointCloudSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        PointCloudSink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Sink for PointCloudSink {
    fn begin(&mut self, lattice: &Lattice) -> LatticeResult<()> {
        write_positions(&self.dir, lattice)?;
        Ok(())
    }

    fn observe(&mut self, lattice: &Lattice, frame: u64) -> LatticeResult<()> {
        write_colors(&self.dir, lattice, frame)?;
        Ok(())
    }
}
