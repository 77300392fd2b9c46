//! Integer voxel coordinates.

/// A discrete 3D cell coordinate.
///
/// `i32` components allow negative indices, so the grid can extend in every
/// direction from its origin. The vertical axis is Y: [`VoxelCoord::DOWN`]
/// is `(0, -1, 0)`.
///
/// Arithmetic through the `Add`/`Sub`/`Neg` operators wraps on overflow, so
/// every operation on a coordinate is total.
///
/// # Example
///
/// ```
/// use cf_spatial::VoxelCoord;
///
/// let feet = VoxelCoord::new(3, 1, -2);
/// assert_eq!(feet.below(), VoxelCoord::new(3, 0, -2));
/// assert_eq!(feet + VoxelCoord::UP, feet.above());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (vertical axis).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl VoxelCoord {
    /// Unit offset pointing one cell down.
    pub const DOWN: Self = Self::new(0, -1, 0);

    /// Unit offset pointing one cell up.
    pub const UP: Self = Self::new(0, 1, 0);

    /// Creates a new voxel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate `(0, 0, 0)`.
    ///
    /// ```
    /// use cf_spatial::VoxelCoord;
    ///
    /// assert_eq!(VoxelCoord::origin(), VoxelCoord::default());
    /// ```
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns `true` if this is the zero offset.
    #[must_use]
    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }

    /// The cell directly beneath this one.
    ///
    /// ```
    /// use cf_spatial::VoxelCoord;
    ///
    /// assert_eq!(VoxelCoord::new(0, 0, 0).below(), VoxelCoord::new(0, -1, 0));
    /// ```
    #[must_use]
    pub const fn below(self) -> Self {
        Self::new(self.x, self.y.wrapping_sub(1), self.z)
    }

    /// The cell directly above this one.
    #[must_use]
    pub const fn above(self) -> Self {
        Self::new(self.x, self.y.wrapping_add(1), self.z)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the 6 face-adjacent neighbors.
    ///
    /// ```
    /// use cf_spatial::VoxelCoord;
    ///
    /// let neighbors = VoxelCoord::origin().face_neighbors();
    /// assert!(neighbors.contains(&VoxelCoord::UP));
    /// assert!(neighbors.contains(&VoxelCoord::DOWN));
    /// ```
    #[must_use]
    pub const fn face_neighbors(self) -> [Self; 6] {
        [
            Self::new(self.x.wrapping_add(1), self.y, self.z),
            Self::new(self.x.wrapping_sub(1), self.y, self.z),
            Self::new(self.x, self.y.wrapping_add(1), self.z),
            Self::new(self.x, self.y.wrapping_sub(1), self.z),
            Self::new(self.x, self.y, self.z.wrapping_add(1)),
            Self::new(self.x, self.y, self.z.wrapping_sub(1)),
        ]
    }

    /// Returns all 26 cells at Chebyshev distance 1 (Moore neighborhood).
    ///
    /// Ordered with X varying fastest, then Y, then Z.
    #[must_use]
    pub fn all_neighbors(self) -> [Self; 26] {
        let mut result = [Self::origin(); 26];
        let mut idx = 0;

        for dz in -1i32..=1 {
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    result[idx] = self + Self::new(dx, dy, dz);
                    idx += 1;
                }
            }
        }

        result
    }

    /// Chebyshev distance: the largest per-axis difference.
    ///
    /// Computed with `abs_diff`, so it is exact for every pair of `i32`
    /// coordinates.
    ///
    /// ```
    /// use cf_spatial::VoxelCoord;
    ///
    /// let a = VoxelCoord::new(0, 0, 0);
    /// assert_eq!(a.chebyshev_distance(VoxelCoord::new(1, -1, 1)), 1);
    /// assert_eq!(a.chebyshev_distance(VoxelCoord::new(0, 2, 0)), 2);
    /// ```
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        let m = if dx > dy { dx } else { dy };
        if m > dz { m } else { dz }
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for VoxelCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<VoxelCoord> for [i32; 3] {
    fn from(coord: VoxelCoord) -> Self {
        coord.as_array()
    }
}

impl std::ops::Add for VoxelCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

impl std::ops::Sub for VoxelCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}

impl std::ops::Neg for VoxelCoord {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(
            self.x.wrapping_neg(),
            self.y.wrapping_neg(),
            self.z.wrapping_neg(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_offsets() {
        let c = VoxelCoord::new(4, 7, -1);
        assert_eq!(c.below(), VoxelCoord::new(4, 6, -1));
        assert_eq!(c.above(), VoxelCoord::new(4, 8, -1));
        assert_eq!(c + VoxelCoord::DOWN, c.below());
        assert_eq!(c - VoxelCoord::UP, c.below());
        assert_eq!(-VoxelCoord::UP, VoxelCoord::DOWN);
    }

    #[test]
    fn test_is_origin() {
        assert!(VoxelCoord::origin().is_origin());
        assert!(!VoxelCoord::UP.is_origin());
    }

    #[test]
    fn test_below_wraps_at_min() {
        let c = VoxelCoord::new(0, i32::MIN, 0);
        assert_eq!(c.below().y, i32::MAX);
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let a = VoxelCoord::new(1, -2, 3);
        let b = VoxelCoord::new(-7, 5, 11);
        assert_eq!(a + b - b, a);
        assert_eq!(a + b, VoxelCoord::new(-6, 3, 14));
    }

    #[test]
    fn test_add_wraps() {
        let a = VoxelCoord::new(i32::MAX, 0, 0);
        assert_eq!((a + VoxelCoord::new(1, 0, 0)).x, i32::MIN);
    }

    #[test]
    fn test_face_neighbors() {
        let c = VoxelCoord::new(5, 5, 5);
        let n = c.face_neighbors();
        assert!(n.iter().all(|&v| c.chebyshev_distance(v) == 1));
        assert!(n.contains(&VoxelCoord::new(5, 4, 5)));
        assert!(n.contains(&VoxelCoord::new(5, 5, 6)));
    }

    #[test]
    fn test_all_neighbors_unique_and_adjacent() {
        let c = VoxelCoord::new(-3, 0, 9);
        let n = c.all_neighbors();
        let unique: std::collections::HashSet<_> = n.iter().copied().collect();
        assert_eq!(unique.len(), 26);
        assert!(!unique.contains(&c));
        assert!(n.iter().all(|&v| c.chebyshev_distance(v) == 1));
    }

    #[test]
    fn test_chebyshev_extremes() {
        let a = VoxelCoord::new(i32::MIN, 0, 0);
        let b = VoxelCoord::new(i32::MAX, 0, 0);
        assert_eq!(a.chebyshev_distance(b), u32::MAX);
    }

    #[test]
    fn test_conversions() {
        let c: VoxelCoord = (1, 2, 3).into();
        assert_eq!(c, VoxelCoord::from([1, 2, 3]));
        let arr: [i32; 3] = c.into();
        assert_eq!(arr, [1, 2, 3]);
    }
}
