use crate::direction::*;

///
/// One end of a curve fragment: the slot it's attached to, and how far along the edge the slot's crossing point is
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CurveEnd {
    /// The slot this end is attached to
    pub slot: EdgeSlot,

    /// Position along the edge, 0..=1 (west to east for the north and south edges, north to south for east and west)
    pub t: f64,
}

///
/// A fragment of a larger curve, joining two slots on the edges of a single cell
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Curve {
    ends:       [CurveEnd; 2],
    visited:    bool,
}

impl CurveEnd {
    ///
    /// Creates a new curve end (t values are clamped to the range 0..=1)
    ///
    #[inline]
    pub fn new(slot: EdgeSlot, t: f64) -> CurveEnd {
        let t = if t.is_nan() { 0.5 } else { t.max(0.0).min(1.0) };

        CurveEnd { slot, t }
    }

    /// The side of the cell this end is on
    #[inline] pub fn direction(&self) -> Direction { self.slot.direction }
}

impl Curve {
    ///
    /// Creates a new, unvisited, curve fragment
    ///
    #[inline]
    pub fn new(from: CurveEnd, to: CurveEnd) -> Curve {
        Curve {
            ends:       [from, to],
            visited:    false,
        }
    }

    /// The two ends of this curve, in the order they were declared
    #[inline] pub fn ends(&self) -> &[CurveEnd; 2] { &self.ends }

    /// True if this curve has been added to the output of a traversal
    #[inline] pub fn is_visited(&self) -> bool { self.visited }

    /// Marks this curve as being part of an output curve
    #[inline] pub (crate) fn mark_visited(&mut self) { self.visited = true; }

    ///
    /// True if one of the ends of this curve is attached to the specified slot
    ///
    #[inline]
    pub fn has_endpoint(&self, slot: EdgeSlot) -> bool {
        self.ends[0].slot == slot || self.ends[1].slot == slot
    }

    ///
    /// Returns the end of this curve attached to the specified slot
    ///
    #[inline]
    pub fn end_at(&self, slot: EdgeSlot) -> Option<CurveEnd> {
        self.ends.iter().find(|end| end.slot == slot).copied()
    }

    ///
    /// Given the slot at one end of this curve, returns the other end
    ///
    /// Returns `None` if the slot is not one of the ends of this curve.
    ///
    #[inline]
    pub fn get_other_end(&self, slot: EdgeSlot) -> Option<CurveEnd> {
        if self.ends[0].slot == slot {
            Some(self.ends[1])
        } else if self.ends[1].slot == slot {
            Some(self.ends[0])
        } else {
            None
        }
    }
}
