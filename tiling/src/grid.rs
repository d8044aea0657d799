use crate::cell::*;
use crate::error::*;
use crate::mapper::*;
use crate::classify::*;
use crate::direction::*;
use crate::populate::*;
use crate::tile_path::*;
use crate::grid_layout::*;
use crate::edge_point_mapping::*;

use flo_curves::geo::*;

use itertools::*;
use smallvec::*;

///
/// A grid of cells, and the curve fragments that cross them
///
/// The grid owns all of its cells: cells don't refer to each other, so moving from one cell to its neighbour is done by
/// looking up the neighbour's coordinates here. Once populated, the only thing that changes is the 'visited' flag on
/// each fragment, which is set as `generate_curves()` stitches the fragments together.
///
pub struct Grid {
    /// Where the cells are
    layout: GridLayout,

    /// The cells in this grid, in row-major order
    cells: Vec<Cell>,

    /// How the slots in one cell connect to the slots of its neighbours
    mapping: EdgePointMapping,

    /// Generates the path segments for each fragment
    mapper: Box<dyn CurveMapping>,
}

impl Grid {
    ///
    /// Creates a grid dividing a bounding box into `width` by `height` cells, and fills it in with fragments using a populator
    ///
    pub fn new<TMapper, TPopulator>(bounds: Bounds<Coord2>, width: usize, height: usize, mapper: TMapper, populator: &TPopulator) -> Result<Grid, TilingError>
    where
        TMapper:        'static + CurveMapping,
        TPopulator:     CellPopulator,
    {
        let layout      = GridLayout::new(bounds, width, height)?;
        let mut cells   = iproduct!(0..height, 0..width)
            .map(|(y, x)| Cell::new(x, y, layout.cell_bounds(x, y)))
            .collect::<Vec<_>>();

        populator.populate_cells(&layout, &mut cells)?;

        let grid = Grid {
            layout:     layout,
            cells:      cells,
            mapping:    populator.edge_point_mapping().clone(),
            mapper:     Box::new(mapper),
        };

        log::debug!("Created {}x{} grid with {} fragments", width, height, grid.fragment_count());

        Ok(grid)
    }

    /// The number of columns in this grid
    #[inline] pub fn width(&self) -> usize { self.layout.width() }

    /// The number of rows in this grid
    #[inline] pub fn height(&self) -> usize { self.layout.height() }

    /// The positions of the cells in this grid
    #[inline] pub fn layout(&self) -> &GridLayout { &self.layout }

    /// The slot topology used by this grid
    #[inline] pub fn edge_point_mapping(&self) -> &EdgePointMapping { &self.mapping }

    /// The cells in this grid, in row-major order
    #[inline] pub fn cells(&self) -> &[Cell] { &self.cells }

    ///
    /// Retrieves the cell at the specified coordinates
    ///
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width() && y < self.height() {
            Some(&self.cells[self.layout.index(x, y)])
        } else {
            None
        }
    }

    ///
    /// The coordinates of the neighbour of a cell in a particular direction (or None if the cell is at the edge of the grid)
    ///
    pub fn neighbour(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy)    = direction.offset();
        let nx          = (x as isize) + dx;
        let ny          = (y as isize) + dy;

        if nx < 0 || ny < 0 || nx >= self.width() as isize || ny >= self.height() as isize {
            None
        } else {
            Some((nx as usize, ny as usize))
        }
    }

    ///
    /// Retrieves the neighbouring cell in a particular direction
    ///
    pub fn cell_in_direction(&self, x: usize, y: usize, direction: Direction) -> Option<&Cell> {
        self.neighbour(x, y, direction)
            .and_then(|(nx, ny)| self.cell(nx, ny))
    }

    ///
    /// The total number of fragments in all of the cells
    ///
    pub fn fragment_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.curves().len()).sum()
    }

    ///
    /// True once every fragment in the grid has been visited
    ///
    pub fn is_done(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_done())
    }

    ///
    /// Follows the fragments starting at a slot of a cell to generate a single path
    ///
    /// The path continues until it reaches the edge of the grid or returns to where it started. If there's no unvisited
    /// fragment at the starting slot, this returns an empty path.
    ///
    /// This panics if the fragments in the grid do not join up (a fragment ends at a slot that has no matching fragment in
    /// the neighbouring cell, or a fragment is reached a second time), as this indicates that the topology or the populator
    /// is broken.
    ///
    pub fn generate_curve(&mut self, x: usize, y: usize, slot: EdgeSlot) -> TilePath {
        let start_cell = match self.cell(x, y) {
            Some(_) => self.layout.index(x, y),
            None    => { return TilePath::default(); }
        };
        let start_curve = match self.cells[start_cell].unvisited_curve_at(slot) {
            Some(curve_idx) => curve_idx,
            None            => { return TilePath::default(); }
        };

        let start_t     = self.cells[start_cell].curves()[start_curve].end_at(slot).map(|end| end.t).unwrap_or(0.5);
        let mut path    = TilePath::new(self.cells[start_cell].at_edge(slot.direction, start_t));

        let (mut x, mut y)  = (x, y);
        let mut entry       = slot;

        loop {
            // Find the fragment attached to the slot we're entering through
            let cell_idx    = self.layout.index(x, y);
            let cell        = &mut self.cells[cell_idx];
            let curve_idx   = match cell.curve_index_at(entry) {
                Some(curve_idx) => curve_idx,
                None            => panic!("Cell ({}, {}) has no fragment at slot {:?} to continue a curve", x, y, entry),
            };

            let curve = &mut cell.curves_mut()[curve_idx];
            if curve.is_visited() {
                if cell_idx == start_cell && curve_idx == start_curve {
                    // Back where we started
                    path.close();
                    break;
                }

                panic!("Fragment {} in cell ({}, {}) was reached a second time via slot {:?}", curve_idx, x, y, entry);
            }

            curve.mark_visited();

            let (from, to) = match (curve.end_at(entry), curve.get_other_end(entry)) {
                (Some(from), Some(to))  => (from, to),
                _                       => panic!("Fragment {} in cell ({}, {}) does not end at slot {:?}", curve_idx, x, y, entry),
            };

            // Generate the segments for this fragment
            let geometry = FragmentGeometry::new(&self.cells[cell_idx], from, to);
            for segment in self.mapper.map_curve(&geometry, classify_curve(&from, &to)) {
                path.push(segment);
            }

            // Move into the next cell (or stop at the edge of the grid)
            match self.neighbour(x, y, to.direction()) {
                None            => { break; }
                Some((nx, ny))  => {
                    entry = match self.mapping.other(to.slot) {
                        Some(mirror)    => mirror,
                        None            => panic!("Slot {:?} has no mirror slot", to.slot),
                    };

                    x = nx;
                    y = ny;
                }
            }
        }

        log::trace!("Generated {} curve with {} segments starting at {:?}", if path.is_closed() { "closed" } else { "open" }, path.len(), path.start_point());

        path
    }

    ///
    /// Stitches all of the fragments in the grid together into paths
    ///
    /// Curves that reach the edges of the grid are generated first, by working clockwise around the perimeter. The cells are
    /// then swept in row-major order to find any closed loops that never reach the edge. Every fragment ends up in exactly
    /// one of the returned paths.
    ///
    pub fn generate_curves(&mut self) -> Vec<TilePath> {
        let width           = self.width();
        let height          = self.height();
        let mut curves      = vec![];

        // Phase 1: follow the curves that start at the perimeter
        let perimeter = (0..width).map(|x| (x, 0, Direction::North))
            .chain((0..height).map(|y| (width-1, y, Direction::East)))
            .chain((0..width).rev().map(|x| (x, height-1, Direction::South)))
            .chain((0..height).rev().map(|y| (0, y, Direction::West)));

        for (x, y, direction) in perimeter {
            self.seed_curves(x, y, direction, &mut curves);
        }

        let num_open = curves.len();

        // Phase 2: anything left over is a closed loop inside the grid
        for (y, x, direction) in iproduct!(0..height, 0..width, Direction::ALL.iter().copied()) {
            self.seed_curves(x, y, direction, &mut curves);
        }

        log::debug!("Generated {} curves ({} reaching the edge of the grid, {} closed)", curves.len(), num_open, curves.len() - num_open);

        curves
    }

    ///
    /// Generates the curves for every slot on one side of a cell, adding the non-empty ones to a list
    ///
    fn seed_curves(&mut self, x: usize, y: usize, direction: Direction, curves: &mut Vec<TilePath>) {
        let slots = self.mapping.endpoints_from(direction).collect::<SmallVec<[EdgeSlot; 4]>>();

        for slot in slots {
            let path = self.generate_curve(x, y, slot);

            if !path.is_empty() {
                curves.push(path);
            }
        }
    }

    ///
    /// Generates the curves for this grid, discarding the grid afterwards
    ///
    pub fn into_curves(mut self) -> Vec<TilePath> {
        self.generate_curves()
    }
}
