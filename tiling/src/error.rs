use thiserror::Error;

///
/// Errors that can occur while setting up a tiling
///
/// These all describe bad input (an invalid topology table, tile or grid size). Problems detected while stitching a
/// populated grid indicate a defect in the topology or the populator rather than bad input, so they panic instead of
/// being reported here.
///
#[derive(Clone, PartialEq, Debug, Error)]
pub enum TilingError {
    /// A grid must have at least one cell in each direction
    #[error("grid must have at least one cell in each direction (requested {width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    /// A topology must have a non-zero, even number of slots
    #[error("cells must have a non-zero, even number of slots (found {0})")]
    BadSlotCount(usize),

    /// A slot ID was referenced that is not declared by the topology
    #[error("slot {0} is not declared by the edge point mapping")]
    SlotOutOfRange(usize),

    /// A slot was not declared as the mirror of any other slot
    #[error("slot {0} has no mirror slot")]
    UnpairedSlot(usize),

    /// A slot was declared as the mirror of more than one other slot
    #[error("slot {0} is mirrored more than once")]
    SlotPairedTwice(usize),

    /// Two mirrored slots are not on opposite sides, or do not cover the same part of their edge
    #[error("slots {0} and {1} cannot mirror each other")]
    MismatchedMirror(usize, usize),

    /// The range of positions a slot can occupy along its edge is not within 0..=1
    #[error("slot {0} has an invalid position range")]
    BadSlotRange(usize),

    /// A tile does not pair up every slot in the cell exactly once
    #[error("tile {0} is not a perfect matching over the cell's slots")]
    NotAPerfectMatching(usize),

    /// A tile set must contain at least one tile
    #[error("tile set has no tiles")]
    EmptyTileSet,

    /// The number of values supplied for a lattice does not match its size
    #[error("lattice needs {expected} values but {actual} were supplied")]
    WrongValueCount { expected: usize, actual: usize },

    /// A scalar lattice does not have the number of vertices required by the grid it's populating
    #[error("lattice has {actual:?} vertices but the grid needs {expected:?}")]
    LatticeSizeMismatch { expected: (usize, usize), actual: (usize, usize) },
}
