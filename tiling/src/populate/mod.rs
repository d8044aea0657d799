//!
//! # Populators
//!
//! A populator fills in the curve fragments for every cell in a grid while it is being constructed. Every populator
//! uses a single `EdgePointMapping` for the whole grid, which the grid then uses to follow fragments from one cell
//! into the next.
//!

mod tile_populator;
mod marching_squares;

pub use self::tile_populator::*;
pub use self::marching_squares::*;

use crate::cell::*;
use crate::error::*;
use crate::grid_layout::*;
use crate::edge_point_mapping::*;

///
/// Fills in the curve fragments for the cells of a grid
///
pub trait CellPopulator {
    ///
    /// The slot topology used by the fragments generated by this populator
    ///
    fn edge_point_mapping(&self) -> &EdgePointMapping;

    ///
    /// Adds the fragments to every cell in a grid
    ///
    /// The cells are in row-major order and initially empty. The fragments in a cell must match up with the fragments in
    /// its neighbours: if a fragment ends at a slot then the neighbouring cell must have a fragment ending at the mirrored
    /// slot, at the same `t` value.
    ///
    fn populate_cells(&self, layout: &GridLayout, cells: &mut [Cell]) -> Result<(), TilingError>;
}
