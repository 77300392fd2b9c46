//! Agent footprints: the cells an agent's body occupies.
//!
//! A footprint is a set of offsets relative to the agent's reference cell
//! (the cell its feet are in). It always contains the zero offset.
//!
//! # Example
//!
//! ```
//! use route_movement::{Footprint, FootprintProvider};
//! use cf_spatial::VoxelCoord;
//!
//! // A humanoid two cells tall
//! let body = Footprint::column(2);
//! assert_eq!(
//!     body.occupied_offsets(),
//!     &[VoxelCoord::new(0, 0, 0), VoxelCoord::new(0, 1, 0)]
//! );
//! ```

use std::sync::Arc;

use cf_spatial::{GridBounds, VoxelCoord};

use crate::error::MovementError;

/// Largest number of voxels a footprint may span along any axis.
pub const MAX_FOOTPRINT_EXTENT: u32 = 64;

/// Supplies the body shape a movement rule sweeps.
///
/// The returned offsets must stay the same for the duration of a check.
pub trait FootprintProvider {
    /// Every offset the body occupies, relative to its reference cell.
    fn occupied_offsets(&self) -> &[VoxelCoord];
}

impl<F: FootprintProvider + ?Sized> FootprintProvider for &F {
    fn occupied_offsets(&self) -> &[VoxelCoord] {
        (**self).occupied_offsets()
    }
}

impl<F: FootprintProvider + ?Sized> FootprintProvider for Arc<F> {
    fn occupied_offsets(&self) -> &[VoxelCoord] {
        (**self).occupied_offsets()
    }
}

/// An immutable, sorted set of occupied offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<VoxelCoord>", into = "Vec<VoxelCoord>")
)]
pub struct Footprint {
    offsets: Vec<VoxelCoord>,
}

impl Footprint {
    /// Builds a footprint from arbitrary offsets.
    ///
    /// Duplicates are dropped and the zero offset is always added.
    ///
    /// ```
    /// use route_movement::Footprint;
    /// use cf_spatial::VoxelCoord;
    ///
    /// let fp = Footprint::new([VoxelCoord::new(1, 0, 0), VoxelCoord::new(1, 0, 0)]);
    /// assert_eq!(fp.len(), 2);
    /// assert!(fp.contains(VoxelCoord::origin()));
    /// ```
    #[must_use]
    pub fn new(offsets: impl IntoIterator<Item = VoxelCoord>) -> Self {
        let mut offsets: Vec<VoxelCoord> = offsets.into_iter().collect();
        offsets.push(VoxelCoord::origin());
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets }
    }

    /// A one-cell body.
    #[must_use]
    pub fn single() -> Self {
        Self {
            offsets: vec![VoxelCoord::origin()],
        }
    }

    /// A vertical stack of `height` cells starting at the reference cell.
    ///
    /// A height of zero yields the one-cell body.
    #[must_use]
    pub fn column(height: u32) -> Self {
        let top = i32::try_from(height.clamp(1, MAX_FOOTPRINT_EXTENT)).unwrap_or(1) - 1;
        Self::new((0..=top).map(|y| VoxelCoord::new(0, y, 0)))
    }

    /// Every cell of `bounds`, taken as offsets.
    ///
    /// # Errors
    ///
    /// Returns [`MovementError::FootprintTooLarge`] if `bounds` spans more than
    /// [`MAX_FOOTPRINT_EXTENT`] cells along any axis.
    ///
    /// ```
    /// use route_movement::Footprint;
    /// use cf_spatial::{GridBounds, VoxelCoord};
    ///
    /// // 2x3x2 box; the origin is one of its cells
    /// let bounds = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(1, 2, 1));
    /// let fp = Footprint::from_bounds(bounds)?;
    /// assert_eq!(fp.len(), 12);
    /// # Ok::<(), route_movement::MovementError>(())
    /// ```
    pub fn from_bounds(bounds: GridBounds) -> Result<Self, MovementError> {
        let (x, y, z) = bounds.size();
        for (axis, extent) in [("x", x), ("y", y), ("z", z)] {
            if extent > MAX_FOOTPRINT_EXTENT {
                return Err(MovementError::FootprintTooLarge {
                    axis,
                    extent: u64::from(extent),
                    max: MAX_FOOTPRINT_EXTENT,
                });
            }
        }
        Ok(Self::new(bounds))
    }

    /// Number of distinct offsets, including the origin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`: a footprint holds at least the origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns `true` if `offset` is part of the body.
    #[must_use]
    pub fn contains(&self, offset: VoxelCoord) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Smallest box containing every offset.
    #[must_use]
    pub fn bounds(&self) -> GridBounds {
        let mut bounds = GridBounds::from_point(VoxelCoord::origin());
        for &offset in &self.offsets {
            bounds.expand_to_include(offset);
        }
        bounds
    }

    /// Iterates over the offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.offsets.iter().copied()
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::single()
    }
}

impl FootprintProvider for Footprint {
    fn occupied_offsets(&self) -> &[VoxelCoord] {
        &self.offsets
    }
}

impl From<Vec<VoxelCoord>> for Footprint {
    fn from(offsets: Vec<VoxelCoord>) -> Self {
        Self::new(offsets)
    }
}

impl From<Footprint> for Vec<VoxelCoord> {
    fn from(footprint: Footprint) -> Self {
        footprint.offsets
    }
}

impl FromIterator<VoxelCoord> for Footprint {
    fn from_iter<I: IntoIterator<Item = VoxelCoord>>(iter: I) -> Self {
        Self::new(iter)
    }
}
