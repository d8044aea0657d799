use super::*;
use crate::grid::*;
use crate::curve::*;
use crate::mapper::*;
use crate::direction::*;
use crate::field_source::*;

use flo_curves::geo::*;

use itertools::*;
use smallvec::*;

///
/// Scalar values sampled at the vertices of a grid
///
#[derive(Clone, PartialEq, Debug)]
pub struct ScalarLattice {
    /// Number of vertices across the lattice (one more than the number of columns of cells)
    width:  usize,

    /// Number of vertices down the lattice (one more than the number of rows of cells)
    height: usize,

    /// Values in row-major order
    values: Vec<f64>,
}

///
/// Populates a grid with iso-contours of a sampled scalar field
///
/// Fragments are generated wherever the value crosses the threshold between two neighbouring vertices, so the curves
/// generated from the grid outline the regions where the field is above the threshold. Where the two diagonals of a
/// cell disagree (a 'saddle'), both possible pairings around the lit corners are generated without checking the value
/// at the center of the cell.
///
#[derive(Clone, PartialEq, Debug)]
pub struct MarchingSquares {
    lattice:    ScalarLattice,
    threshold:  f64,
    mapping:    EdgePointMapping,
}

impl ScalarLattice {
    ///
    /// Samples a field at every vertex of a grid layout (in the canonical coordinate space)
    ///
    pub fn sample<TField: FieldSource>(field: &TField, layout: &GridLayout) -> ScalarLattice {
        let width   = layout.width() + 1;
        let height  = layout.height() + 1;

        let values  = iproduct!(0..height, 0..width)
            .map(|(row, column)| field.get_value(layout.to_canonical(layout.vertex(column, row))))
            .collect();

        ScalarLattice { width, height, values }
    }

    ///
    /// Creates a lattice from a list of values in row-major order
    ///
    pub fn from_values(width: usize, height: usize, values: Vec<f64>) -> Result<ScalarLattice, TilingError> {
        if width < 2 || height < 2 {
            return Err(TilingError::EmptyGrid { width: width.saturating_sub(1), height: height.saturating_sub(1) });
        }

        if values.len() != width * height {
            return Err(TilingError::WrongValueCount { expected: width * height, actual: values.len() });
        }

        Ok(ScalarLattice { width, height, values })
    }

    /// The number of vertices across the lattice
    #[inline] pub fn width(&self) -> usize { self.width }

    /// The number of vertices down the lattice
    #[inline] pub fn height(&self) -> usize { self.height }

    ///
    /// The value at a vertex
    ///
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }
}

///
/// Finds the position between two samples where a threshold is crossed, assuming the value changes linearly between them
///
/// The result is clamped to 0..=1. If both samples are the same, the crossing is placed half way between them.
///
#[inline]
pub fn inverse_lerp(a: f64, b: f64, threshold: f64) -> f64 {
    if a == b {
        0.5
    } else {
        ((threshold - a) / (b - a)).max(0.0).min(1.0)
    }
}

impl MarchingSquares {
    ///
    /// Creates a marching squares populator for a lattice of values
    ///
    pub fn new(lattice: ScalarLattice, threshold: f64) -> MarchingSquares {
        MarchingSquares {
            lattice:    lattice,
            threshold:  threshold,
            mapping:    EdgePointMapping::four_slot(),
        }
    }

    /// The lattice that fragments are generated from
    #[inline] pub fn lattice(&self) -> &ScalarLattice { &self.lattice }

    /// The value that contours are generated at
    #[inline] pub fn threshold(&self) -> f64 { self.threshold }

    ///
    /// The slot on each side of a cell (this uses the four-slot mapping)
    ///
    #[inline]
    fn slot(direction: Direction) -> EdgeSlot {
        match direction {
            Direction::North    => EdgeSlot::new(Direction::North, 0),
            Direction::East     => EdgeSlot::new(Direction::East, 1),
            Direction::South    => EdgeSlot::new(Direction::South, 2),
            Direction::West     => EdgeSlot::new(Direction::West, 3),
        }
    }

    ///
    /// Generates the fragments for the cell whose north-west corner is at the specified lattice vertex
    ///
    pub fn cell_fragments(&self, x: usize, y: usize) -> SmallVec<[Curve; 2]> {
        use self::Direction::*;

        let threshold   = self.threshold;
        let north_west  = self.lattice.value(x, y);
        let north_east  = self.lattice.value(x+1, y);
        let south_east  = self.lattice.value(x+1, y+1);
        let south_west  = self.lattice.value(x, y+1);

        // t values increase west to east and north to south
        let edge_t = |direction: Direction| {
            match direction {
                North   => inverse_lerp(north_west, north_east, threshold),
                South   => inverse_lerp(south_west, south_east, threshold),
                West    => inverse_lerp(north_west, south_west, threshold),
                East    => inverse_lerp(north_east, south_east, threshold),
            }
        };
        let fragment = |from: Direction, to: Direction| {
            Curve::new(CurveEnd::new(Self::slot(from), edge_t(from)), CurveEnd::new(Self::slot(to), edge_t(to)))
        };

        let config = (north_west > threshold, north_east > threshold, south_east > threshold, south_west > threshold);

        match config {
            // Uniform
            (false, false, false, false) |
            (true, true, true, true)        => smallvec![],

            // One corner differs from the others
            (true, false, false, false) |
            (false, true, true, true)       => smallvec![fragment(North, West)],
            (false, true, false, false) |
            (true, false, true, true)       => smallvec![fragment(North, East)],
            (false, false, true, false) |
            (true, true, false, true)       => smallvec![fragment(East, South)],
            (false, false, false, true) |
            (true, true, true, false)       => smallvec![fragment(South, West)],

            // Split down the middle
            (true, true, false, false) |
            (false, false, true, true)      => smallvec![fragment(West, East)],
            (false, true, true, false) |
            (true, false, false, true)      => smallvec![fragment(North, South)],

            // Saddles
            (true, false, true, false)      => smallvec![fragment(North, West), fragment(East, South)],
            (false, true, false, true)      => smallvec![fragment(North, East), fragment(South, West)],
        }
    }
}

impl CellPopulator for MarchingSquares {
    fn edge_point_mapping(&self) -> &EdgePointMapping {
        &self.mapping
    }

    fn populate_cells(&self, layout: &GridLayout, cells: &mut [Cell]) -> Result<(), TilingError> {
        let expected = (layout.width() + 1, layout.height() + 1);
        let actual   = (self.lattice.width(), self.lattice.height());

        if expected != actual {
            return Err(TilingError::LatticeSizeMismatch { expected, actual });
        }

        for cell in cells.iter_mut() {
            let (x, y) = cell.coordinates();

            for fragment in self.cell_fragments(x, y) {
                cell.add_curve(fragment);
            }
        }

        Ok(())
    }
}

///
/// Generates a grid of iso-contours at a threshold value for a field sampled on an `nx` by `nx` grid
///
/// The field is sampled in the canonical (-1, -1) to (1, 1) coordinate space, and the fragments are rendered as straight
/// lines so the output is an exact polygonal contour of the sampled values.
///
pub fn marching_squares_grid<TField: FieldSource>(field: &TField, bounds: Bounds<Coord2>, nx: usize, threshold: f64) -> Result<Grid, TilingError> {
    let layout      = GridLayout::new(bounds.clone(), nx, nx)?;
    let lattice     = ScalarLattice::sample(field, &layout);
    let populator   = MarchingSquares::new(lattice, threshold);

    Grid::new(bounds, nx, nx, CurveMapper::StraightLines, &populator)
}
