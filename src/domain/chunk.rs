use crate::util::*;

/// Mutable window onto a contiguous run of a grid buffer,
/// handed out to one rayon task at a time.
pub struct DomainChunk<'a> {
    offset: usize,
    aabb: &'a AABB<2>,
    buffer: &'a mut [f64],
}

impl<'a> DomainChunk<'a> {
    pub fn new(offset: usize, aabb: &'a AABB<2>, buffer: &'a mut [f64]) -> Self {
        DomainChunk {
            offset,
            aabb,
            buffer,
        }
    }

    /// Linear index of the first value in the chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord<2>, &mut f64)> + '_ {
        let offset = self.offset;
        let aabb = self.aabb;
        self.buffer
            .iter_mut()
            .enumerate()
            .map(move |(i, v): (usize, &mut f64)| {
                let coord = aabb.linear_to_coord(offset + i);
                (coord, v)
            })
    }
}
