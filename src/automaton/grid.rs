//! Lattice geometry: flat indexing, strides and the boundary predicate.

use crate::error::{LatticeError, LatticeResult};

/// Number of lattice axes.
pub const DIMS: usize = 3;

/// Smallest side length that still has an interior cell.
pub const MIN_WIDTH: usize = 4;

/// Shape of a cubic lattice of side `width`.
///
/// Cells are addressed by a single flat index `i = x + W*y + W²*z`, so the
/// step along axis `k` is `W^k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    width: usize,
    strides: [usize; DIMS],
    len: usize,
}

impl Geometry {
    /// Build the geometry for side length `width`.
    pub fn new(width: usize) -> LatticeResult<Self> {
        if width < MIN_WIDTH {
            return Err(LatticeError::WidthTooSmall(width));
        }
        let plane = width
            .checked_mul(width)
            .ok_or(LatticeError::WidthTooLarge(width))?;
        let len = plane
            .checked_mul(width)
            .ok_or(LatticeError::WidthTooLarge(width))?;
        Ok(Geometry {
            width,
            strides: [1, width, plane],
            len,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Axis strides `[1, W, W²]`.
    #[inline]
    pub fn strides(&self) -> [usize; DIMS] {
        self.strides
    }

    /// Total cell count, `W³`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Calculate the flat index for a 3D coordinate.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.strides[1] + z * self.strides[2]
    }

    /// Decode a flat index into `[x, y, z]`.
    #[inline]
    pub fn coords_of(&self, i: usize) -> [usize; DIMS] {
        self.strides.map(|s| (i / s) % self.width)
    }

    /// Check if coordinates are within the lattice.
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.width && y < self.width && z < self.width
    }

    /// True if any axis coordinate of `i` sits on the outer shell (`0` or `W-1`).
    #[inline]
    pub fn is_boundary(&self, i: usize) -> bool {
        self.strides.iter().any(|&s| {
            let c = (i / s) % self.width;
            c == 0 || c >= self.width - 1
        })
    }

    /// Flat index of `(W/2, W/2, W/2)`.
    #[inline]
    pub fn center(&self) -> usize {
        let mid = self.width / 2;
        self.index_of(mid, mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_narrow_width() {
        assert!(matches!(Geometry::new(3), Err(LatticeError::WidthTooSmall(3))));
        assert!(matches!(Geometry::new(0), Err(LatticeError::WidthTooSmall(0))));
        assert!(Geometry::new(4).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_width() {
        assert!(matches!(
            Geometry::new(usize::MAX / 2),
            Err(LatticeError::WidthTooLarge(_))
        ));
    }

    #[test]
    fn test_strides_and_len() {
        let g = Geometry::new(20).unwrap();
        assert_eq!(g.strides(), [1, 20, 400]);
        assert_eq!(g.len(), 8000);

        let g = Geometry::new(48).unwrap();
        assert_eq!(g.len(), 110_592);
    }

    #[test]
    fn test_index_of() {
        let g = Geometry::new(4).unwrap();

        // First cell
        assert_eq!(g.index_of(0, 0, 0), 0);
        // Last cell
        assert_eq!(g.index_of(3, 3, 3), 63);
        // Various cells
        assert_eq!(g.index_of(1, 0, 0), 1);
        assert_eq!(g.index_of(0, 1, 0), 4);
        assert_eq!(g.index_of(0, 0, 1), 16);
    }

    #[test]
    fn test_coords_of_inverts_index_of() {
        let g = Geometry::new(7).unwrap();
        for i in 0..g.len() {
            let [x, y, z] = g.coords_of(i);
            assert_eq!(g.index_of(x, y, z), i);
        }
    }

    #[test]
    fn test_in_bounds() {
        let g = Geometry::new(4).unwrap();
        assert!(g.in_bounds(0, 0, 0));
        assert!(g.in_bounds(3, 3, 3));
        assert!(!g.in_bounds(4, 0, 0));
        assert!(!g.in_bounds(0, 4, 0));
        assert!(!g.in_bounds(0, 0, 4));
    }

    #[test]
    fn test_boundary_shell() {
        let g = Geometry::new(4).unwrap();

        // Only the 2x2x2 core of a 4-wide lattice is interior
        let interior: Vec<usize> = (0..g.len()).filter(|&i| !g.is_boundary(i)).collect();
        assert_eq!(interior.len(), 8);
        for i in interior {
            let [x, y, z] = g.coords_of(i);
            assert!((1..=2).contains(&x));
            assert!((1..=2).contains(&y));
            assert!((1..=2).contains(&z));
        }

        assert!(g.is_boundary(g.index_of(0, 2, 2)));
        assert!(g.is_boundary(g.index_of(2, 3, 2)));
        assert!(g.is_boundary(g.index_of(2, 2, 3)));
    }

    #[test]
    fn test_center() {
        let g = Geometry::new(20).unwrap();
        assert_eq!(g.center(), 10 + 20 * 10 + 400 * 10);
        assert!(!g.is_boundary(g.center()));

        let g = Geometry::new(4).unwrap();
        assert_eq!(g.coords_of(g.center()), [2, 2, 2]);
        assert!(!g.is_boundary(g.center()));
    }
}
