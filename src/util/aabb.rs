use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// This class is responsible for alot of indexing operations,
/// where we map between a linear buffer and coordinates.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Create AABB covering `[0, size - 1]` in each dimension.
    pub fn from_exclusive_bounds(sizes: &Coord<DIMENSION>) -> Self {
        let min = Coord::zero();
        let max = sizes.add_scalar(-1);
        AABB {
            bounds: Bounds::from_columns(&[min, max]),
        }
    }

    /// Moving min to the origin, returns the exclusie size in each direction
    /// i.e. [0, 9]  would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        for d in 0..DIMENSION {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Check whether a contained coordinate lies on the outer layer,
    /// i.e. touches min or max in at least one dimension.
    pub fn on_edge(&self, coord: &Coord<DIMENSION>) -> bool {
        debug_assert!(self.contains(coord));
        for d in 0..DIMENSION {
            if coord[d] == self.bounds[(d, 0)] || coord[d] == self.bounds[(d, 1)]
            {
                return true;
            }
        }
        false
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn buffer_size_test() {
        {
            let a = AABB::new(matrix![0, 5]);
            assert_eq!(a.buffer_size(), 6);
        }

        {
            let dimensions = AABB::new(matrix![0, 5; 0, 7; 0, 9]);
            assert_eq!(dimensions.buffer_size(), 6 * 8 * 10);
        }

        {
            let dimensions = AABB::new(matrix![1, 6; 1, 8; 1, 10]);
            assert_eq!(dimensions.buffer_size(), 6 * 8 * 10);
        }
    }

    #[test]
    fn from_exclusive_bounds_test() {
        let a = AABB::from_exclusive_bounds(&vector![41, 3]);
        assert_eq!(a, AABB::new(matrix![0, 40; 0, 2]));
        assert_eq!(a.exclusive_bounds(), vector![41, 3]);
    }

    #[test]
    fn coord_to_linear_in_box_test() {
        let bb = AABB::new(matrix![0, 9; 0, 9; 0, 9]);
        let lin_1 = bb.coord_to_linear(&vector![5, 5, 5]);
        let lin_2 = coord_to_linear(&vector![5, 5, 5], &vector![10, 10, 10]);
        assert_eq!(lin_1, lin_2);
    }

    #[test]
    fn linear_to_coord_test() {
        {
            let bb = AABB::new(matrix![2, 8]);
            let c_1 = bb.linear_to_coord(5);
            assert_eq!(c_1, vector![7]);
        }

        {
            let a = AABB::new(matrix![1, 9]);
            assert_eq!(a.linear_to_coord(0), vector![1]);
        }
    }

    #[test]
    fn in_box_comp_test() {
        {
            let bound = AABB::new(matrix![0, 9]);
            let c = vector![8];
            let li = bound.coord_to_linear(&c);
            assert_eq!(c, bound.linear_to_coord(li));
        }

        {
            let bound = AABB::new(matrix![0, 9; 0, 9]);
            let c = vector![9, 8];
            let li = bound.coord_to_linear(&c);
            assert_eq!(c, bound.linear_to_coord(li));
        }
    }

    #[test]
    fn on_edge_test() {
        let bound = AABB::new(matrix![0, 2; 0, 2]);
        let edges = (0..bound.buffer_size())
            .map(|i| bound.linear_to_coord(i))
            .filter(|c| bound.on_edge(c))
            .count();
        assert_eq!(edges, 8);
        assert!(!bound.on_edge(&vector![1, 1]));
        assert!(bound.on_edge(&vector![0, 1]));
        assert!(bound.on_edge(&vector![2, 2]));
    }

    #[test]
    fn contains_test() {
        let bound = AABB::from_exclusive_bounds(&vector![3, 4]);
        assert!(bound.contains(&vector![0, 0]));
        assert!(bound.contains(&vector![2, 3]));
        assert!(!bound.contains(&vector![3, 0]));
        assert!(!bound.contains(&vector![0, 4]));
        assert!(!bound.contains(&vector![-1, 2]));
    }
}
