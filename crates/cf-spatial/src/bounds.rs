//! Inclusive axis-aligned regions in grid space.

use crate::voxel::VoxelCoord;

/// An inclusive box of voxels spanned by two corners.
///
/// The corners may be given in any order; [`GridBounds::new`] sorts them per
/// axis. A box built from a single coordinate contains exactly that cell.
///
/// # Example
///
/// ```
/// use cf_spatial::{GridBounds, VoxelCoord};
///
/// let swept = GridBounds::new(VoxelCoord::new(1, 1, 1), VoxelCoord::new(0, 1, 0));
/// assert_eq!(swept.min, VoxelCoord::new(0, 1, 0));
/// assert_eq!(swept.max, VoxelCoord::new(1, 1, 1));
/// assert_eq!(swept.iter().count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Minimum corner (inclusive).
    pub min: VoxelCoord,
    /// Maximum corner (inclusive).
    pub max: VoxelCoord,
}

impl GridBounds {
    /// Creates the box spanned by `a` and `b`, both inclusive.
    #[must_use]
    pub fn new(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates a box containing a single cell.
    #[must_use]
    pub const fn from_point(coord: VoxelCoord) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Number of cells along each axis, `(x, y, z)`. Never zero.
    ///
    /// Saturates at `u32::MAX` for a box spanning the whole `i32` range.
    #[must_use]
    pub const fn size(&self) -> (u32, u32, u32) {
        (
            self.max.x.abs_diff(self.min.x).saturating_add(1),
            self.max.y.abs_diff(self.min.y).saturating_add(1),
            self.max.z.abs_diff(self.min.z).saturating_add(1),
        )
    }

    /// Total number of cells in the box.
    ///
    /// Saturates at `u64::MAX`, which only boxes spanning nearly the whole
    /// `i32` range on every axis reach. [`GridBounds::iter`] counts exactly.
    ///
    /// ```
    /// use cf_spatial::{GridBounds, VoxelCoord};
    ///
    /// let b = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(1, 1, 1));
    /// assert_eq!(b.volume(), 8);
    /// ```
    #[must_use]
    pub fn volume(&self) -> u64 {
        let (w, h, d) = self.size();
        u64::from(w)
            .saturating_mul(u64::from(h))
            .saturating_mul(u64::from(d))
    }

    /// Checks whether `coord` lies inside the box.
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Grows the box so that it contains `coord`.
    pub fn expand_to_include(&mut self, coord: VoxelCoord) {
        *self = Self::new(
            VoxelCoord::new(
                self.min.x.min(coord.x),
                self.min.y.min(coord.y),
                self.min.z.min(coord.z),
            ),
            VoxelCoord::new(
                self.max.x.max(coord.x),
                self.max.y.max(coord.y),
                self.max.z.max(coord.z),
            ),
        );
    }

    /// Lazily enumerates every cell in the box.
    ///
    /// X varies fastest, then Y, then Z. Each call starts a fresh pass, so a
    /// box can be walked any number of times.
    ///
    /// The iterator knows its exact length. [`ExactSizeIterator::len`] panics
    /// when that length does not fit in `usize`; use
    /// [`Iterator::size_hint`] for boxes that may be that large.
    ///
    /// ```
    /// use cf_spatial::{GridBounds, VoxelCoord};
    ///
    /// let cell = VoxelCoord::new(2, 2, 2);
    /// let single = GridBounds::new(cell, cell);
    /// assert_eq!(single.iter().collect::<Vec<_>>(), vec![cell]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> GridBoundsIter {
        GridBoundsIter {
            bounds: *self,
            current: Some(self.min),
            remaining: self.cell_count(),
        }
    }

    // Exact; the largest possible box holds 2^96 cells.
    fn cell_count(&self) -> u128 {
        let axis = |lo: i32, hi: i32| u128::from(hi.abs_diff(lo)) + 1;
        axis(self.min.x, self.max.x)
            * axis(self.min.y, self.max.y)
            * axis(self.min.z, self.max.z)
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::from_point(VoxelCoord::origin())
    }
}

impl IntoIterator for GridBounds {
    type Item = VoxelCoord;
    type IntoIter = GridBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &GridBounds {
    type Item = VoxelCoord;
    type IntoIter = GridBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`GridBounds`].
#[derive(Debug, Clone)]
pub struct GridBoundsIter {
    bounds: GridBounds,
    current: Option<VoxelCoord>,
    remaining: u128,
}

impl GridBoundsIter {
    // Compares before incrementing so a box touching i32::MAX terminates.
    const fn successor(&self, c: VoxelCoord) -> Option<VoxelCoord> {
        let GridBounds { min, max } = self.bounds;
        if c.x < max.x {
            Some(VoxelCoord::new(c.x + 1, c.y, c.z))
        } else if c.y < max.y {
            Some(VoxelCoord::new(min.x, c.y + 1, c.z))
        } else if c.z < max.z {
            Some(VoxelCoord::new(min.x, min.y, c.z + 1))
        } else {
            None
        }
    }
}

impl Iterator for GridBoundsIter {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.successor(current);
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Exact while the remaining count fits in `usize`. Past that the upper
/// bound of `size_hint` is `None` and `len` panics.
impl ExactSizeIterator for GridBoundsIter {}

impl std::iter::FusedIterator for GridBoundsIter {}
