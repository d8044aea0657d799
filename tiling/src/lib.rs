//!
//! # flo_tiling
//!
//! `flo_tiling` generates continuous vector curves from a grid of square cells. Every cell holds a set of
//! 'fragments': short curves that join two points on the edges of the cell. The grid stitches these fragments
//! together into maximal curves, classifies the shape of every fragment and turns it into path geometry
//! (lines, quadratic and cubic bezier curves and circular arcs).
//!
//! The same engine supports two generative techniques:
//!
//! * Truchet tiling, where every cell picks one 'tile' (a wiring of the slots around its edges) from a
//!   `TileSet`, using a `FieldSource` to make the choice. See `TilePopulator`.
//! * Marching squares, where a scalar field is sampled on a lattice and the cells are wired up wherever the
//!   field crosses a threshold. See `MarchingSquares` and `marching_squares_grid()`.
//!
//! ```
//! # use flo_tiling::*;
//! # use flo_tiling::curves::geo::*;
//! let bounds      = Bounds::from_min_max(Coord2(0.0, 0.0), Coord2(100.0, 100.0));
//! let populator   = TilePopulator::new(TileSet::four_slot(), ConstantField(0.25), ConstantField(0.5));
//! let mut grid    = Grid::new(bounds, 4, 4, CurveMapper::Circular, &populator).unwrap();
//!
//! let paths       = grid.generate_curves();
//! assert!(grid.is_done());
//! assert!(!paths.is_empty());
//! ```
//!
//! The paths that are generated here can be converted to `flo_curves` bezier paths with
//! `TilePath::to_bezier_path()` for rendering with `flo_canvas` or `flo_draw`.
//!
//! # Features
//!
//! * `random` - provides `RandomField`, a deterministic pseudo-random field source (on by default)
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod cell;
mod curve;
mod error;
mod grid;
mod mapper;
mod classify;
mod direction;
mod tile;
mod tile_path;
mod grid_layout;
mod field_source;
mod edge_point_mapping;
mod populate;

pub use self::cell::*;
pub use self::curve::*;
pub use self::error::*;
pub use self::grid::*;
pub use self::mapper::*;
pub use self::classify::*;
pub use self::direction::*;
pub use self::tile::*;
pub use self::tile_path::*;
pub use self::grid_layout::*;
pub use self::field_source::*;
pub use self::edge_point_mapping::*;
pub use self::populate::*;

pub use flo_curves as curves;
pub use flo_curves::geo::{Coordinate, Coordinate2D, Coord2};
