//! Vertex bitmask for adjacency and home-base lookups

use super::{Vertex, NUM_VERTICES};

/// Set of vertices packed into a single word (23 vertices fit in a u32)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexSet {
    bits: u32,
}

impl VertexSet {
    /// Create empty set
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Copy of this set with `v` added (usable in const context)
    #[must_use]
    pub const fn with(self, v: Vertex) -> Self {
        Self { bits: self.bits | 1u32 << v.0 }
    }

    /// Build a set from a list of vertices (usable in const context)
    pub const fn from_vertices(vertices: &[Vertex]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < vertices.len() {
            set = set.with(vertices[i]);
            i += 1;
        }
        set
    }

    #[inline]
    pub fn insert(&mut self, v: Vertex) {
        self.bits |= 1u32 << v.to_index();
    }

    #[inline]
    pub fn remove(&mut self, v: Vertex) {
        self.bits &= !(1u32 << v.to_index());
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        (self.bits >> v.to_index()) & 1 == 1
    }

    /// Count members (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate members in canonical vertex order
    pub fn iter(&self) -> VertexSetIter {
        VertexSetIter { bits: self.bits }
    }
}

/// Iterator over the members of a [`VertexSet`], lowest index first
pub struct VertexSetIter {
    bits: u32,
}

impl Iterator for VertexSetIter {
    type Item = Vertex;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        debug_assert!(idx < NUM_VERTICES);
        Some(Vertex::from_index(idx))
    }
}

impl FromIterator<Vertex> for VertexSet {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        let mut set = VertexSet::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = VertexSet::new();
        assert!(set.is_empty());

        set.insert(Vertex::C12);
        set.insert(Vertex::A1);
        assert!(set.contains(Vertex::C12));
        assert!(set.contains(Vertex::A1));
        assert!(!set.contains(Vertex::B1));
        assert_eq!(set.count(), 2);

        set.remove(Vertex::C12);
        assert!(!set.contains(Vertex::C12));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_iter_canonical_order() {
        let set: VertexSet = [Vertex::D4, Vertex::A1, Vertex::C3].into_iter().collect();
        let members: Vec<Vertex> = set.iter().collect();
        assert_eq!(members, vec![Vertex::A1, Vertex::C3, Vertex::D4]);
    }

    #[test]
    fn test_const_construction() {
        const SET: VertexSet = VertexSet::from_vertices(&[Vertex::D1, Vertex::D2]);
        assert!(SET.contains(Vertex::D1));
        assert!(SET.contains(Vertex::D2));
        assert_eq!(SET.count(), 2);
    }
}
