use crate::curve::*;
use crate::direction::*;

use flo_curves::geo::*;

use smallvec::*;

///
/// A single cell in a grid, and the curve fragments that pass through it
///
/// Cells don't refer back to their grid: use `Grid::cell_in_direction()` to find a cell's neighbours.
///
#[derive(Clone, Debug)]
pub struct Cell {
    /// Grid coordinates of this cell
    x: usize,
    y: usize,

    /// Bounding box of this cell
    min: Coord2,
    max: Coord2,

    /// The fragments that cross this cell
    curves: SmallVec<[Curve; 4]>,
}

impl Cell {
    ///
    /// Creates a new cell with no curves
    ///
    pub fn new(x: usize, y: usize, bounds: Bounds<Coord2>) -> Cell {
        Cell {
            x:      x,
            y:      y,
            min:    bounds.min(),
            max:    bounds.max(),
            curves: smallvec![],
        }
    }

    /// The position of this cell in the grid
    #[inline] pub fn coordinates(&self) -> (usize, usize) { (self.x, self.y) }

    /// The bounding box of this cell
    #[inline] pub fn bounds(&self) -> Bounds<Coord2> { Bounds::from_min_max(self.min, self.max) }

    /// The width of this cell
    #[inline] pub fn width(&self) -> f64 { self.max.x() - self.min.x() }

    /// The height of this cell
    #[inline] pub fn height(&self) -> f64 { self.max.y() - self.min.y() }

    /// The curve fragments in this cell
    #[inline] pub fn curves(&self) -> &[Curve] { &self.curves }

    /// Mutable access to the fragments, used while stitching
    #[inline] pub (crate) fn curves_mut(&mut self) -> &mut [Curve] { &mut self.curves }

    ///
    /// Adds a new curve fragment to this cell
    ///
    #[inline]
    pub fn add_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    ///
    /// True once every fragment in this cell has been visited
    ///
    #[inline]
    pub fn is_done(&self) -> bool {
        self.curves.iter().all(|curve| curve.is_visited())
    }

    ///
    /// Returns the point at the specified proportions across (u) and down (v) this cell
    ///
    /// The corners are reproduced exactly, so points on an edge shared with a neighbouring cell match up.
    ///
    #[inline]
    pub fn at(&self, u: f64, v: f64) -> Coord2 {
        Coord2(self.min.x() * (1.0 - u) + self.max.x() * u, self.min.y() * (1.0 - v) + self.max.y() * v)
    }

    ///
    /// Returns the point at position `t` along one of the edges of this cell
    ///
    /// North and south edges run from west to east, east and west edges run from north to south.
    ///
    #[inline]
    pub fn at_edge(&self, direction: Direction, t: f64) -> Coord2 {
        let (u, v) = edge_uv(direction, t);
        self.at(u, v)
    }

    ///
    /// Finds the index of the fragment attached to a slot
    ///
    pub fn curve_index_at(&self, slot: EdgeSlot) -> Option<usize> {
        self.curves.iter().position(|curve| curve.has_endpoint(slot))
    }

    ///
    /// Finds the index of the fragment attached to a slot, if it has not been visited yet
    ///
    pub fn unvisited_curve_at(&self, slot: EdgeSlot) -> Option<usize> {
        self.curves.iter().position(|curve| !curve.is_visited() && curve.has_endpoint(slot))
    }
}

///
/// The position of a point along an edge in the unit square covered by a cell
///
#[inline]
pub fn edge_uv(direction: Direction, t: f64) -> (f64, f64) {
    match direction {
        Direction::North    => (t, 0.0),
        Direction::South    => (t, 1.0),
        Direction::East     => (1.0, t),
        Direction::West     => (0.0, t),
    }
}
