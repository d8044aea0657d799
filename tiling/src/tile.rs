use crate::edge_point_mapping::*;
use crate::error::*;

use once_cell::sync::{Lazy};

static FOUR_SLOT_TILES: Lazy<TileSet> = Lazy::new(|| TileSet::non_crossing(EdgePointMapping::four_slot()));
static FOUR_SLOT_CROSSING_TILES: Lazy<TileSet> = Lazy::new(|| {
    let mut tiles = TileSet::four_slot();
    tiles.tiles.push(Tile::new(vec![(0, 2), (1, 3)]));
    tiles
});
static SIX_SLOT_TILES: Lazy<TileSet> = Lazy::new(|| TileSet::non_crossing(EdgePointMapping::six_slot()));

///
/// A tile is one way of wiring up the slots around a cell: every slot is paired with exactly one other slot
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Tile {
    pairs: Vec<(usize, usize)>,
}

///
/// A catalog of tiles that can be chosen between for each cell, along with the slot topology they use
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TileSet {
    tiles:      Vec<Tile>,
    mapping:    EdgePointMapping,
}

impl Tile {
    ///
    /// Creates a tile from a list of pairs of slot IDs
    ///
    #[inline]
    pub fn new(pairs: Vec<(usize, usize)>) -> Tile {
        Tile { pairs }
    }

    ///
    /// The pairs of slots joined by this tile
    ///
    #[inline]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    ///
    /// True if this tile joins every slot in a cell with `slot_count` slots exactly once
    ///
    pub fn is_perfect_matching(&self, slot_count: usize) -> bool {
        let mut used = vec![false; slot_count];

        for (a, b) in self.pairs.iter().copied() {
            if a == b || a >= slot_count || b >= slot_count || used[a] || used[b] {
                return false;
            }

            used[a] = true;
            used[b] = true;
        }

        used.into_iter().all(|is_used| is_used)
    }

    ///
    /// True if any two of the pairs in this tile cross each other
    ///
    /// Slots are numbered clockwise around the cell, so two pairs cross when exactly one end of one pair lies between
    /// the ends of the other.
    ///
    pub fn is_crossing(&self) -> bool {
        let ordered = self.pairs.iter()
            .map(|(a, b)| if a < b { (*a, *b) } else { (*b, *a) })
            .collect::<Vec<_>>();

        ordered.iter().enumerate().any(|(idx, (a1, b1))| {
            ordered[(idx+1)..].iter().any(|(a2, b2)| {
                let a2_inside = a1 < a2 && a2 < b1;
                let b2_inside = a1 < b2 && b2 < b1;

                a2_inside != b2_inside
            })
        })
    }
}

impl TileSet {
    ///
    /// Creates a new tile set, checking that every tile is valid for the mapping
    ///
    pub fn new(tiles: Vec<Tile>, mapping: EdgePointMapping) -> Result<TileSet, TilingError> {
        if tiles.is_empty() {
            return Err(TilingError::EmptyTileSet);
        }

        if let Some(bad_tile) = tiles.iter().position(|tile| !tile.is_perfect_matching(mapping.slot_count())) {
            return Err(TilingError::NotAPerfectMatching(bad_tile));
        }

        Ok(TileSet { tiles, mapping })
    }

    ///
    /// Creates a tile set containing every way of wiring up the slots of a mapping where no two curves cross
    ///
    /// There are a Catalan number of these: 2 for a cell with 4 slots, 5 for a cell with 6 slots.
    ///
    pub fn non_crossing(mapping: EdgePointMapping) -> TileSet {
        let slots = (0..mapping.slot_count()).collect::<Vec<_>>();
        let tiles = non_crossing_matchings(&slots).into_iter().map(Tile::new).collect();

        TileSet { tiles, mapping }
    }

    ///
    /// Creates a tile set containing every way of wiring up the slots of a mapping, including the ones with crossings
    ///
    pub fn all_matchings(mapping: EdgePointMapping) -> TileSet {
        let slots = (0..mapping.slot_count()).collect::<Vec<_>>();
        let tiles = all_matchings(&slots).into_iter().map(Tile::new).collect();

        TileSet { tiles, mapping }
    }

    ///
    /// The two non-crossing tiles for cells with one slot per side (tile 0 joins north to east and south to west)
    ///
    pub fn four_slot() -> TileSet {
        FOUR_SLOT_TILES.clone()
    }

    ///
    /// The two non-crossing tiles for cells with one slot per side, plus a tile where the curves go straight through
    ///
    pub fn four_slot_with_crossing() -> TileSet {
        FOUR_SLOT_CROSSING_TILES.clone()
    }

    ///
    /// The five non-crossing tiles for the six-slot mapping
    ///
    pub fn six_slot() -> TileSet {
        SIX_SLOT_TILES.clone()
    }

    /// The number of tiles in this set
    #[inline] pub fn len(&self) -> usize { self.tiles.len() }

    /// True if this set has no tiles (only possible for sets generated from an empty mapping)
    #[inline] pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

    /// The tiles in this set
    #[inline] pub fn tiles(&self) -> &[Tile] { &self.tiles }

    /// Retrieves a tile by index
    #[inline] pub fn tile(&self, idx: usize) -> Option<&Tile> { self.tiles.get(idx) }

    /// The slot topology used by the tiles in this set
    #[inline] pub fn edge_point_mapping(&self) -> &EdgePointMapping { &self.mapping }

    ///
    /// Chooses a tile for a field value that's nominally in the range `0..1`
    ///
    /// Values outside of that range are clamped: in particular a value of exactly 1.0 will choose the last tile.
    ///
    pub fn select_tile(&self, value: f64) -> usize {
        let count   = self.tiles.len();
        let scaled  = (value * count as f64).floor();

        if !(0.0..=1.0).contains(&value) {
            log::warn!("Field value {} is outside of the range 0..1 and will be clamped", value);
        }

        if count == 0 {
            0
        } else if scaled >= count as f64 {
            count - 1
        } else if scaled > 0.0 {
            scaled as usize
        } else {
            0
        }
    }
}

///
/// Enumerates the non-crossing perfect matchings of a list of slots arranged around a circle
///
fn non_crossing_matchings(slots: &[usize]) -> Vec<Vec<(usize, usize)>> {
    if slots.is_empty() {
        return vec![vec![]];
    }

    // The first slot is matched with a slot that leaves an even number of slots on either side
    let first       = slots[0];
    let mut result  = vec![];

    for partner_idx in (1..slots.len()).step_by(2) {
        let inside  = non_crossing_matchings(&slots[1..partner_idx]);
        let outside = non_crossing_matchings(&slots[(partner_idx+1)..]);

        for inner in inside.iter() {
            for outer in outside.iter() {
                let mut matching = vec![(first, slots[partner_idx])];
                matching.extend(inner.iter().copied());
                matching.extend(outer.iter().copied());

                result.push(matching);
            }
        }
    }

    result
}

///
/// Enumerates every perfect matching of a list of slots
///
fn all_matchings(slots: &[usize]) -> Vec<Vec<(usize, usize)>> {
    if slots.len() < 2 {
        return vec![vec![]];
    }

    let first       = slots[0];
    let mut result  = vec![];

    for partner_idx in 1..slots.len() {
        let remaining = slots[1..].iter()
            .enumerate()
            .filter(|(idx, _)| idx+1 != partner_idx)
            .map(|(_, slot)| *slot)
            .collect::<Vec<_>>();

        for rest in all_matchings(&remaining) {
            let mut matching = vec![(first, slots[partner_idx])];
            matching.extend(rest);

            result.push(matching);
        }
    }

    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn catalan_counts() {
        assert!(non_crossing_matchings(&[0, 1, 2, 3]).len() == 2);
        assert!(non_crossing_matchings(&[0, 1, 2, 3, 4, 5]).len() == 5);
        assert!(non_crossing_matchings(&[0, 1, 2, 3, 4, 5, 6, 7]).len() == 14);
    }

    #[test]
    fn all_matching_counts() {
        assert!(all_matchings(&[0, 1, 2, 3]).len() == 3);
        assert!(all_matchings(&[0, 1, 2, 3, 4, 5]).len() == 15);
    }

    #[test]
    fn non_crossing_matchings_do_not_cross() {
        for matching in non_crossing_matchings(&[0, 1, 2, 3, 4, 5]) {
            assert!(!Tile::new(matching.clone()).is_crossing(), "{:?}", matching);
        }
    }
}
