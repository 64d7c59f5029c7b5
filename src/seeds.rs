//! Seed management for island generation
//!
//! Provides separate seeds for each random stage, allowing fine-grained
//! control over which aspects of generation to vary or keep constant.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for the random stages of the island pipeline.
///
/// Each stage gets its own seed, derived from a master seed by default.
/// Individual seeds can be overridden for experimentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IslandSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Blob growth (frontier cell selection order)
    pub blob: u64,
    /// Edge tiling (half-edge expansion tie-breaks)
    pub edges: u64,
}

impl IslandSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            blob: derive_seed(master, "blob"),
            edges: derive_seed(master, "edges"),
        }
    }

    /// Create with explicit seeds for each stage.
    pub fn explicit(blob: u64, edges: u64) -> Self {
        // Use blob as the "master" for display purposes
        Self {
            master: blob,
            blob,
            edges,
        }
    }
}

impl Default for IslandSeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

/// Derive a sub-seed from a master seed and a stage name.
/// Uses hashing to ensure different stages get different but deterministic seeds.
fn derive_seed(master: u64, stage: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}

/// Display format for seeds (useful for sharing island configurations)
impl std::fmt::Display for IslandSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "IslandSeeds {{ master: {}, blob: {}, edges: {} }}",
            self.master, self.blob, self.edges,
        )
    }
}
