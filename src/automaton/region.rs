//! Region extraction for cross-section rendering.

use super::field::Lattice;

/// Extract a box of cells `[min, max)` into a flat buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// Bounds are clamped to the lattice.
///
/// # Returns
/// Number of cells written, or 0 if the region is empty or `out_buf` is too small.
pub fn extract_region(
    lattice: &Lattice,
    out_buf: &mut [i32],
    min: [usize; 3],
    max: [usize; 3],
) -> usize {
    let g = lattice.geometry;
    let w = g.width();

    // Clamp coordinates to lattice bounds
    let min = min.map(|c| c.min(w));
    let max = max.map(|c| c.min(w));

    // Check for empty region
    if (0..3).any(|k| min[k] >= max[k]) {
        return 0;
    }

    let total_size = (max[0] - min[0]) * (max[1] - min[1]) * (max[2] - min[2]);
    if out_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for z in min[2]..max[2] {
        for y in min[1]..max[1] {
            let row = g.index_of(min[0], y, z);
            let len = max[0] - min[0];
            out_buf[offset..offset + len].copy_from_slice(&lattice.cells[row..row + len]);
            offset += len;
        }
    }

    offset
}

/// The `y = W/2` plane as a `W * W` buffer indexed `z * W + x`.
pub fn mid_plane(lattice: &Lattice) -> Vec<i32> {
    let w = lattice.geometry.width();
    let mid = w / 2;
    let mut plane = vec![0; w * w];
    extract_region(lattice, &mut plane, [0, mid, 0], [w, mid + 1, w]);
    plane
}
