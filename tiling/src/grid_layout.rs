use crate::error::*;

use flo_curves::geo::*;

///
/// Describes how a bounding box is divided up into a grid of cells
///
/// Populators use the layout to find where cells are, and to map points into the canonical coordinate space used
/// for sampling field sources (where the whole grid covers the region (-1, -1) to (1, 1)).
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GridLayout {
    min:    Coord2,
    max:    Coord2,
    width:  usize,
    height: usize,
}

impl GridLayout {
    ///
    /// Creates a layout that divides a bounding box into `width` columns and `height` rows
    ///
    pub fn new(bounds: Bounds<Coord2>, width: usize, height: usize) -> Result<GridLayout, TilingError> {
        if width == 0 || height == 0 {
            return Err(TilingError::EmptyGrid { width, height });
        }

        Ok(GridLayout {
            min:    bounds.min(),
            max:    bounds.max(),
            width:  width,
            height: height,
        })
    }

    /// The number of columns in the grid
    #[inline] pub fn width(&self) -> usize { self.width }

    /// The number of rows in the grid
    #[inline] pub fn height(&self) -> usize { self.height }

    /// The bounds of the whole grid
    #[inline] pub fn bounds(&self) -> Bounds<Coord2> { Bounds::from_min_max(self.min, self.max) }

    ///
    /// The index of a cell in a row-major list of cells
    ///
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    ///
    /// The x coordinate of a vertical grid line (`0..=width`)
    ///
    #[inline]
    pub fn column_x(&self, column: usize) -> f64 {
        let ratio = (column as f64) / (self.width as f64);
        self.min.x() + (self.max.x() - self.min.x()) * ratio
    }

    ///
    /// The y coordinate of a horizontal grid line (`0..=height`)
    ///
    #[inline]
    pub fn row_y(&self, row: usize) -> f64 {
        let ratio = (row as f64) / (self.height as f64);
        self.min.y() + (self.max.y() - self.min.y()) * ratio
    }

    ///
    /// The position of the lattice vertex where a vertical and a horizontal grid line meet
    ///
    #[inline]
    pub fn vertex(&self, column: usize, row: usize) -> Coord2 {
        Coord2(self.column_x(column), self.row_y(row))
    }

    ///
    /// The bounding box of the cell at the specified grid coordinates
    ///
    /// Neighbouring cells are calculated from the same grid lines, so their shared edges are identical.
    ///
    pub fn cell_bounds(&self, x: usize, y: usize) -> Bounds<Coord2> {
        Bounds::from_min_max(self.vertex(x, y), self.vertex(x+1, y+1))
    }

    ///
    /// The center of the cell at the specified grid coordinates
    ///
    pub fn cell_center(&self, x: usize, y: usize) -> Coord2 {
        let min = self.vertex(x, y);
        let max = self.vertex(x+1, y+1);

        (min + max) * 0.5
    }

    ///
    /// Maps a point within the grid to the canonical (-1, -1) to (1, 1) space
    ///
    pub fn to_canonical(&self, point: Coord2) -> Coord2 {
        fn canonical(pos: f64, min: f64, max: f64) -> f64 {
            if max == min {
                0.0
            } else {
                ((pos - min) / (max - min)) * 2.0 - 1.0
            }
        }

        Coord2(canonical(point.x(), self.min.x(), self.max.x()), canonical(point.y(), self.min.y(), self.max.y()))
    }
}
