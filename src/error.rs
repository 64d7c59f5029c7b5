//! Error types for island generation.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IslandError {
    /// Requested grid dimensions are unusable. Checked before any allocation.
    #[error("invalid island dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// The edge tiler produced a code with no entry in the canonical tile
    /// table. This is an internal invariant violation, not a recoverable
    /// condition; the offending code is carried for diagnosis.
    #[error("edge code {code:#05x} ({code}) has no canonical tile mapping")]
    UnmappedEdgeCode { code: u16 },

    /// Two distinct prototype tiles produced the same transformed code while
    /// building the canonical table. The reference data never collides; if
    /// this fires the prototype list is corrupt.
    #[error("prototype collision at code {code}: {existing} already registered, {new} rejected")]
    PrototypeCollision { code: u16, existing: u16, new: u16 },
}
