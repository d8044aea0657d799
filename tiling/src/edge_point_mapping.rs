use crate::direction::*;
use crate::error::*;

use once_cell::sync::{Lazy};

static FOUR_SLOT: Lazy<EdgePointMapping> = Lazy::new(|| {
    use self::Direction::*;

    EdgePointMapping::from_valid_parts(vec![
            SlotDescriptor::new(North,  (0.0, 1.0)),
            SlotDescriptor::new(East,   (0.0, 1.0)),
            SlotDescriptor::new(South,  (0.0, 1.0)),
            SlotDescriptor::new(West,   (0.0, 1.0)),
        ],
        vec![(0, 2), (1, 3)])
});

static SIX_SLOT: Lazy<EdgePointMapping> = Lazy::new(|| {
    use self::Direction::*;

    EdgePointMapping::from_valid_parts(vec![
            SlotDescriptor::new(North,  (0.0, 0.5)),
            SlotDescriptor::new(North,  (0.5, 1.0)),
            SlotDescriptor::new(East,   (0.0, 1.0)),
            SlotDescriptor::new(South,  (0.5, 1.0)),
            SlotDescriptor::new(South,  (0.0, 0.5)),
            SlotDescriptor::new(West,   (0.0, 1.0)),
        ],
        vec![(0, 4), (1, 3), (2, 5)])
});

///
/// Describes where a slot is found on the boundary of a cell
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SlotDescriptor {
    /// The side of the cell that the slot is on
    pub direction: Direction,

    /// The part of the edge that the crossing point for this slot can be found in (as a pair of `t` values)
    pub t_range: (f64, f64),
}

///
/// A pair of slots that are the same point seen from the two cells either side of an edge
///
/// The first slot is always the one on the north or west side of its cell (ie, the one that belongs to the southern
/// or eastern cell of the two sharing the edge)
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct EndpointPair(pub EdgeSlot, pub EdgeSlot);

///
/// Describes the slots around the edge of a cell, and how the slots in one cell correspond to the slots in its neighbours
///
/// Slots are numbered clockwise around the cell, starting at the western end of the northern edge. The `t` position
/// along an edge increases from west to east for the north and south edges and from north to south for the east and
/// west edges, so a slot and its mirror always agree about where a given `t` value lies.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EdgePointMapping {
    /// The slots around the cell, indexed by slot ID
    slots: Vec<SlotDescriptor>,

    /// The pairs of slots that cross the horizontal (north and south) edges
    horizontal: Vec<EndpointPair>,

    /// The pairs of slots that cross the vertical (east and west) edges
    vertical: Vec<EndpointPair>,

    /// The mirror of every slot, indexed by slot ID
    mirrors: Vec<usize>,

    /// For every slot, the index of its pair in the horizontal or vertical list
    pair_index: Vec<usize>,
}

impl SlotDescriptor {
    ///
    /// Creates a slot descriptor
    ///
    #[inline]
    pub fn new(direction: Direction, t_range: (f64, f64)) -> SlotDescriptor {
        SlotDescriptor { direction, t_range }
    }
}

impl EndpointPair {
    ///
    /// If the specified slot is part of this pair, returns the other slot
    ///
    #[inline]
    pub fn other(&self, slot: EdgeSlot) -> Option<EdgeSlot> {
        if self.0 == slot {
            Some(self.1)
        } else if self.1 == slot {
            Some(self.0)
        } else {
            None
        }
    }
}

impl EdgePointMapping {
    ///
    /// Creates a new edge point mapping from a list of slots and the pairs of slot IDs that mirror each other across a shared edge
    ///
    /// Every slot must be in exactly one pair, and the two slots in a pair must be on opposite sides of the cell and cover the
    /// same range of their edge. Slots on the same side of the cell must not have overlapping ranges.
    ///
    pub fn new(slots: Vec<SlotDescriptor>, pairs: Vec<(usize, usize)>) -> Result<EdgePointMapping, TilingError> {
        let num_slots = slots.len();

        if num_slots == 0 || num_slots % 2 != 0 {
            return Err(TilingError::BadSlotCount(num_slots));
        }

        // Ranges must lie along the edge and must not overlap other slots on the same side
        for (slot_id, slot) in slots.iter().enumerate() {
            let (min, max) = slot.t_range;
            if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
                return Err(TilingError::BadSlotRange(slot_id));
            }

            let overlaps = slots.iter()
                .enumerate()
                .filter(|(other_id, other)| *other_id != slot_id && other.direction == slot.direction)
                .any(|(_, other)| min < other.t_range.1 && other.t_range.0 < max);
            if overlaps {
                return Err(TilingError::BadSlotRange(slot_id));
            }
        }

        // Every slot must be mirrored exactly once by a slot on the opposite side of the cell
        let mut paired = vec![false; num_slots];

        for (a, b) in pairs.iter().copied() {
            if a >= num_slots { return Err(TilingError::SlotOutOfRange(a)); }
            if b >= num_slots { return Err(TilingError::SlotOutOfRange(b)); }

            if paired[a] { return Err(TilingError::SlotPairedTwice(a)); }
            paired[a] = true;
            if paired[b] { return Err(TilingError::SlotPairedTwice(b)); }
            paired[b] = true;

            if slots[a].direction.opposite() != slots[b].direction || slots[a].t_range != slots[b].t_range {
                return Err(TilingError::MismatchedMirror(a, b));
            }
        }

        if let Some(unpaired) = paired.iter().position(|is_paired| !is_paired) {
            return Err(TilingError::UnpairedSlot(unpaired));
        }

        Ok(Self::from_valid_parts(slots, pairs))
    }

    ///
    /// Builds the lookup tables for a set of slots and pairs that are already known to be valid
    ///
    fn from_valid_parts(slots: Vec<SlotDescriptor>, pairs: Vec<(usize, usize)>) -> EdgePointMapping {
        let mut horizontal  = vec![];
        let mut vertical    = vec![];
        let mut mirrors     = vec![0; slots.len()];
        let mut pair_index  = vec![0; slots.len()];

        for (a, b) in pairs {
            // Order so the north or west slot is first
            let (a, b) = match slots[a].direction {
                Direction::North | Direction::West => (a, b),
                Direction::South | Direction::East => (b, a),
            };

            mirrors[a] = b;
            mirrors[b] = a;

            let pair = EndpointPair(EdgeSlot::new(slots[a].direction, a), EdgeSlot::new(slots[b].direction, b));
            let list = if slots[a].direction.is_horizontal() { &mut horizontal } else { &mut vertical };

            pair_index[a] = list.len();
            pair_index[b] = list.len();
            list.push(pair);
        }

        EdgePointMapping { slots, horizontal, vertical, mirrors, pair_index }
    }

    ///
    /// The mapping for cells with one slot in the middle of each side (N=0, E=1, S=2, W=3)
    ///
    pub fn four_slot() -> EdgePointMapping {
        FOUR_SLOT.clone()
    }

    ///
    /// The mapping for cells with two slots on the north and south sides and one on the east and west sides
    ///
    /// Numbered clockwise: 0 and 1 are on the north side (west half, east half), 2 is east, 3 and 4 are on the south side
    /// (east half, west half) and 5 is west.
    ///
    pub fn six_slot() -> EdgePointMapping {
        SIX_SLOT.clone()
    }

    ///
    /// The number of slots around the edge of each cell
    ///
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    ///
    /// The pairs of slots that meet across horizontal edges (ie, north slots and their southern mirrors)
    ///
    #[inline]
    pub fn get_horizontal(&self) -> &[EndpointPair] {
        &self.horizontal
    }

    ///
    /// The pairs of slots that meet across vertical edges (ie, west slots and their eastern mirrors)
    ///
    #[inline]
    pub fn get_vertical(&self) -> &[EndpointPair] {
        &self.vertical
    }

    ///
    /// Finds the side of the cell that a slot ID is on
    ///
    #[inline]
    pub fn get_direction(&self, slot: usize) -> Option<EdgeSlot> {
        self.slots.get(slot).map(|descriptor| EdgeSlot::new(descriptor.direction, slot))
    }

    ///
    /// Returns the slot in the neighbouring cell that meets the specified slot
    ///
    /// Applying this twice always returns the original slot.
    ///
    #[inline]
    pub fn other(&self, slot: EdgeSlot) -> Option<EdgeSlot> {
        if self.slots.get(slot.slot)?.direction != slot.direction {
            return None;
        }

        let mirror = self.mirrors[slot.slot];
        Some(EdgeSlot::new(self.slots[mirror].direction, mirror))
    }

    ///
    /// Returns the slots on a particular side of a cell, in slot order
    ///
    pub fn endpoints_from<'a>(&'a self, direction: Direction) -> impl 'a + Iterator<Item=EdgeSlot> {
        self.slots.iter()
            .enumerate()
            .filter(move |(_, descriptor)| descriptor.direction == direction)
            .map(move |(slot_id, _)| EdgeSlot::new(direction, slot_id))
    }

    ///
    /// Returns every slot, in slot order
    ///
    pub fn slots<'a>(&'a self) -> impl 'a + Iterator<Item=EdgeSlot> {
        self.slots.iter()
            .enumerate()
            .map(|(slot_id, descriptor)| EdgeSlot::new(descriptor.direction, slot_id))
    }

    ///
    /// The part of its edge that a slot's crossing point can lie on
    ///
    #[inline]
    pub fn t_range(&self, slot: usize) -> Option<(f64, f64)> {
        self.slots.get(slot).map(|descriptor| descriptor.t_range)
    }

    ///
    /// The index of the pair a slot is a part of, in either `get_horizontal()` or `get_vertical()` depending on its direction
    ///
    #[inline]
    pub fn pair_index(&self, slot: usize) -> Option<usize> {
        self.pair_index.get(slot).copied()
    }
}
