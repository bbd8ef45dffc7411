//! Fixed adjacency between faces.
//!
//! Every face has four neighbors. Turning a face carries one strip of facelets
//! from each neighbor to the next, so the only geometry the engine needs is,
//! for each face, its neighbors in clockwise order and which edge of each
//! neighbor touches it.

use crate::face::Face;

/// An edge of a face grid as it is stored, i.e. viewed from outside the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// The neighbors of each face in clockwise order as seen from outside that
/// face, paired with the edge of the neighbor that borders it. Indexed by
/// `Face as usize`.
const ADJACENT: [[(Face, Edge); 4]; 6] = {
    use Edge::*;
    use Face::*;

    let mut table = [[(U, Top); 4]; 6];
    table[U as usize] = [(B, Top), (R, Top), (F, Top), (L, Top)];
    table[D as usize] = [(F, Bottom), (R, Bottom), (B, Bottom), (L, Bottom)];
    table[F as usize] = [(U, Bottom), (R, Left), (D, Top), (L, Right)];
    table[B as usize] = [(U, Top), (L, Left), (D, Bottom), (R, Right)];
    table[L as usize] = [(U, Left), (F, Left), (D, Left), (B, Right)];
    table[R as usize] = [(U, Right), (B, Left), (D, Right), (F, Right)];
    table
};

pub fn neighbors(face: Face) -> [(Face, Edge); 4] {
    ADJACENT[face as usize]
}

impl Edge {
    /// The grid position of the `index`th facelet of the strip `layer` rows or
    /// columns in from this edge, on a face of `size`.
    ///
    /// Strips are walked counter-clockwise around their own face, which is
    /// clockwise around the face being turned. Walking every neighbor's strip
    /// this way lines them up so that a quarter turn moves index `i` of one
    /// strip onto index `i` of the next.
    pub fn strip_position(self, layer: usize, index: usize, size: usize) -> (usize, usize) {
        let last = size - 1;
        match self {
            Edge::Top => (layer, last - index),
            Edge::Bottom => (last - layer, index),
            Edge::Left => (index, layer),
            Edge::Right => (last - index, last - layer),
        }
    }
}
