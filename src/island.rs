//! Island layout production
//!
//! Orchestrates the pipeline: blob growth, edge-code derivation, canonical
//! tile lookup. Pure computation over in-memory grids; the caller owns
//! placement and rendering of the resulting descriptors.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::blob::{grow_blob, LAND};
use crate::edges::compute_edge_codes;
use crate::error::IslandError;
use crate::grid::Grid;
use crate::seeds::IslandSeeds;
use crate::tiles::{TileDescriptor, TileMapping};

/// A generated island with its intermediate stages kept for inspection.
pub struct Island {
    pub seeds: IslandSeeds,
    /// Land mask, `width x height`, 0 = sea, 1 = land.
    pub land: Grid<u8>,
    /// Edge codes, `(width+1) x (height+1)`.
    pub edge_codes: Grid<u16>,
    /// Final tile descriptors, same size as `edge_codes`.
    pub tiles: Grid<TileDescriptor>,
}

impl Island {
    pub fn land_cell_count(&self) -> usize {
        self.land.iter().filter(|(_, _, &v)| v == LAND).count()
    }
}

/// Generate a full island, returning every pipeline stage.
///
/// `land_mass` saturates at `width * height`. `roundedness` is threaded
/// through to the blob grower, where it is currently inert. Deterministic
/// for fixed `seeds`; the tile mapping is read-only and can be shared
/// across any number of concurrent calls.
pub fn generate_island(
    width: usize,
    height: usize,
    land_mass: usize,
    roundedness: f32,
    seeds: IslandSeeds,
    mapping: &TileMapping,
) -> Result<Island, IslandError> {
    if width == 0 || height == 0 {
        return Err(IslandError::InvalidDimensions { width, height });
    }

    let mut blob_rng = ChaCha8Rng::seed_from_u64(seeds.blob);
    let land = grow_blob(width, height, land_mass, roundedness, &mut blob_rng);

    let mut edge_rng = ChaCha8Rng::seed_from_u64(seeds.edges);
    let edge_codes = compute_edge_codes(&land, &mut edge_rng);

    let tiles = mapping.apply(&edge_codes)?;

    Ok(Island {
        seeds,
        land,
        edge_codes,
        tiles,
    })
}

/// Generate just the tile-descriptor grid, `(width+1) x (height+1)`.
pub fn generate(
    width: usize,
    height: usize,
    land_mass: usize,
    roundedness: f32,
    seeds: IslandSeeds,
    mapping: &TileMapping,
) -> Result<Grid<TileDescriptor>, IslandError> {
    Ok(generate_island(width, height, land_mass, roundedness, seeds, mapping)?.tiles)
}

/// Convenience wrapper deriving stage seeds from a single master seed.
pub fn generate_with_seed(
    width: usize,
    height: usize,
    land_mass: usize,
    roundedness: f32,
    master_seed: u64,
    mapping: &TileMapping,
) -> Result<Grid<TileDescriptor>, IslandError> {
    generate(
        width,
        height,
        land_mass,
        roundedness,
        IslandSeeds::from_master(master_seed),
        mapping,
    )
}
