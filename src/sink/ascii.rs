//! ASCII rendering of the `y = W/2` cross-section.

use std::io::Write;

use super::Sink;
use crate::automaton::{mid_plane, Lattice};
use crate::error::LatticeResult;

/// Glyph for a cell value, by magnitude.
#[inline]
pub fn glyph(value: i32, coupling: i32, blank: char) -> char {
    let v = value.abs();
    if v < coupling {
        blank
    } else if v < 2 * coupling {
        '.'
    } else {
        '*'
    }
}

/// Render one frame: a `==` header then `W` rows of `W` glyphs.
///
/// Rows run along `z`, columns along `x`. Every glyph is followed by a space.
pub fn render_frame(lattice: &Lattice, blank: char) -> String {
    let w = lattice.geometry.width();
    let plane = mid_plane(lattice);

    let mut out = String::with_capacity((w + 1) * (2 * w + 1));
    out.push_str(&"==".repeat(w));
    out.push('\n');
    for row in plane.chunks(w) {
        for &v in row {
            out.push(glyph(v, lattice.coupling, blank));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Writes a rendered frame to `out` after every tick.
pub struct AsciiSink<W: Write> {
    out: W,
    blank: char,
}

impl<W: Write> AsciiSink<W> {
    pub fn new(out: W, blank: char) -> Self {
        AsciiSink { out, blank }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for AsciiSink<W> {
    fn observe(&mut self, lattice: &Lattice, _frame: u64) -> LatticeResult<()> {
        self.out.write_all(render_frame(lattice, self.blank).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
