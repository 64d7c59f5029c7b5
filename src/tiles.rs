//! Canonical tile mapping
//!
//! Every edge code the tiler can produce is equivalent, up to rotation and
//! horizontal mirroring, to one of a small set of prototype tiles. This
//! module builds the table mapping each code to its prototype plus the
//! transform that reproduces it, so the placement step only needs art for
//! the prototypes.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::IslandError;
use crate::grid::Grid;

/// Edge code of the all-sea tile.
pub const SEA_TILE: u16 = 0;
/// Edge code of the fully-interior land tile.
pub const INTERIOR_TILE: u16 = 0xFFF;

/// The prototype edge codes, one per distinct tile shape before rotation
/// and mirror variants. Grouped by corner configuration: single corner,
/// two adjacent corners, diagonal corners, three corners.
pub const PROTOTYPES: [u16; 12] = [
    321, 323, 451, // one corner
    839, 847, 975, // two adjacent corners
    1385, 1387, 1535, // diagonal corners
    1903, 1919, 2047, // three corners
];

/// One cell of the final layout: the prototype tile to place, whether to
/// mirror it horizontally, and how many 90-degree clockwise rotations to
/// apply (mirror first, then rotate).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub base_tile: u16,
    pub flip: bool,
    pub rotation: u8,
}

impl TileDescriptor {
    /// A tile that is its own canonical form.
    pub fn plain(base_tile: u16) -> Self {
        Self {
            base_tile,
            flip: false,
            rotation: 0,
        }
    }
}

/// Rotate an edge code 90 degrees clockwise.
///
/// Each half-edge and corner bit moves to the position of its clockwise
/// neighbor; four applications return the original code.
pub fn rotate_cw(code: u16) -> u16 {
    // Side bits under a quarter turn: top (0,1) -> right (2,3),
    // right -> bottom (4,5), bottom -> left (6,7), left -> top, with the
    // half order following the turn.
    const SIDE_MAP: [u16; 8] = [2, 3, 5, 4, 6, 7, 1, 0];
    let mut out = 0u16;
    for bit in 0..8 {
        if code & (1 << bit) != 0 {
            out |= 1 << SIDE_MAP[bit as usize];
        }
    }
    for bit in 8..12u16 {
        if code & (1 << bit) != 0 {
            out |= 1 << (8 + ((bit - 8 + 1) & 3));
        }
    }
    out
}

/// Mirror an edge code across its vertical axis.
///
/// Left and right sides trade places, the halves of the top and bottom
/// sides swap, and the corners mirror; two applications return the
/// original code.
pub fn flip_horiz(code: u16) -> u16 {
    const BIT_MAP: [u16; 12] = [1, 0, 6, 7, 5, 4, 2, 3, 9, 8, 11, 10];
    let mut out = 0u16;
    for bit in 0..12 {
        if code & (1 << bit) != 0 {
            out |= 1 << BIT_MAP[bit as usize];
        }
    }
    out
}

/// Immutable mapping from edge codes to canonical tile descriptors.
///
/// Built once from the fixed prototype list and shared read-only after
/// that; nothing mutates it, so concurrent generation calls can borrow the
/// same table freely.
pub struct TileMapping {
    table: HashMap<u16, TileDescriptor>,
}

impl TileMapping {
    /// Build the full mapping: the sea and interior tiles map to
    /// themselves, and every prototype registers its eight transform
    /// variants (4 rotations, mirrored and not).
    ///
    /// Symmetric prototypes revisit codes within their own orbit; the first
    /// registration wins. A collision between two different prototypes is
    /// reported as an error instead of being silently dropped.
    pub fn build() -> Result<Self, IslandError> {
        let mut table = HashMap::new();
        table.insert(SEA_TILE, TileDescriptor::plain(SEA_TILE));
        table.insert(INTERIOR_TILE, TileDescriptor::plain(INTERIOR_TILE));

        for &proto in &PROTOTYPES {
            for flip in [false, true] {
                let mut code = if flip { flip_horiz(proto) } else { proto };
                for rotation in 0..4u8 {
                    match table.entry(code) {
                        Entry::Vacant(slot) => {
                            slot.insert(TileDescriptor {
                                base_tile: proto,
                                flip,
                                rotation,
                            });
                        }
                        Entry::Occupied(slot) => {
                            let existing = slot.get().base_tile;
                            if existing != proto {
                                return Err(IslandError::PrototypeCollision {
                                    code,
                                    existing,
                                    new: proto,
                                });
                            }
                        }
                    }
                    code = rotate_cw(code);
                }
            }
        }

        Ok(Self { table })
    }

    /// Canonical descriptor for an edge code.
    pub fn lookup(&self, code: u16) -> Result<TileDescriptor, IslandError> {
        self.table
            .get(&code)
            .copied()
            .ok_or(IslandError::UnmappedEdgeCode { code })
    }

    pub fn contains(&self, code: u16) -> bool {
        self.table.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Map a whole edge-code grid to tile descriptors.
    pub fn apply(&self, codes: &Grid<u16>) -> Result<Grid<TileDescriptor>, IslandError> {
        let mut tiles = Grid::new(codes.width, codes.height);
        for (x, y, &code) in codes.iter() {
            tiles.set(x, y, self.lookup(code)?);
        }
        Ok(tiles)
    }
}
