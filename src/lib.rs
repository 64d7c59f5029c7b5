//! Procedural island tile generation
//!
//! Grows a random connected blob of land, derives per-intersection edge
//! codes describing corner and half-edge land adjacency, and maps each code
//! to a canonical prototype tile plus the mirror/rotation that reproduces
//! it. The output is a grid of tile descriptors for an external placement
//! step; no engine types appear here.

pub mod ascii;
pub mod blob;
pub mod edges;
pub mod error;
pub mod export;
pub mod grid;
pub mod island;
pub mod seeds;
pub mod tiles;

pub use error::IslandError;
pub use grid::Grid;
pub use island::{generate, generate_island, generate_with_seed, Island};
pub use seeds::IslandSeeds;
pub use tiles::{TileDescriptor, TileMapping};
