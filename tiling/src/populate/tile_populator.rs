use super::*;
use crate::tile::*;
use crate::curve::*;
use crate::direction::*;
use crate::field_source::*;

use flo_curves::geo::*;

use itertools::*;

///
/// Populates a grid by choosing a tile for every cell (ie, generates a Truchet tiling)
///
/// One field source is used to choose the tile for each cell, and another is used to choose where the curves cross the
/// edges between cells. Both are sampled in the canonical (-1, -1) to (1, 1) coordinate space: the tile source at the
/// center of each cell and the crossing source at the middle of the part of the edge each slot covers.
///
pub struct TilePopulator<TTileSource, TCrossingSource> {
    tile_set:           TileSet,
    tile_source:        TTileSource,
    crossing_source:    TCrossingSource,
}

///
/// The positions where curves cross the edges between cells, shared by the cells on either side of each edge
///
#[derive(Clone, PartialEq, Debug)]
pub struct EdgeCrossings {
    width:          usize,
    num_horizontal: usize,
    num_vertical:   usize,

    /// t values for the horizontal pairs, indexed by `(row * width + column) * num_horizontal + pair` (rows `0..=height`)
    horizontal:     Vec<f64>,

    /// t values for the vertical pairs, indexed by `(row * (width+1) + column) * num_vertical + pair` (columns `0..=width`)
    vertical:       Vec<f64>,
}

impl<TTileSource, TCrossingSource> TilePopulator<TTileSource, TCrossingSource>
where
    TTileSource:        FieldSource,
    TCrossingSource:    FieldSource,
{
    ///
    /// Creates a new tile populator
    ///
    pub fn new(tile_set: TileSet, tile_source: TTileSource, crossing_source: TCrossingSource) -> Self {
        TilePopulator { tile_set, tile_source, crossing_source }
    }

    /// The tiles that this will choose from
    #[inline] pub fn tile_set(&self) -> &TileSet { &self.tile_set }

    ///
    /// Chooses the tile for the cell at the specified coordinates
    ///
    pub fn select_tile(&self, layout: &GridLayout, x: usize, y: usize) -> usize {
        let center = layout.to_canonical(layout.cell_center(x, y));
        self.tile_set.select_tile(self.tile_source.get_value(center))
    }

    ///
    /// Samples the crossing source to find the t value for a slot in a pair, given the start and end of the part of the grid line it's on
    ///
    fn crossing_t(&self, layout: &GridLayout, pair: &EndpointPair, line_start: Coord2, line_end: Coord2) -> f64 {
        let (min_t, max_t)  = self.tile_set.edge_point_mapping().t_range(pair.0.slot).unwrap_or((0.0, 1.0));
        let sample_t        = (min_t + max_t) * 0.5;
        let sample_point    = line_start + (line_end - line_start) * sample_t;

        let value           = self.crossing_source.get_value(layout.to_canonical(sample_point));
        let value           = if value.is_nan() { 0.5 } else { value.max(0.0).min(1.0) };

        min_t + (max_t - min_t) * value
    }

    ///
    /// Generates the crossing points for every edge in a grid
    ///
    pub fn edge_crossings(&self, layout: &GridLayout) -> EdgeCrossings {
        let mapping         = self.tile_set.edge_point_mapping();
        let width           = layout.width();
        let height          = layout.height();

        // Horizontal grid lines: rows 0..=height, each divided into width edges
        let horizontal = iproduct!(0..=height, 0..width, mapping.get_horizontal().iter())
            .map(|(row, column, pair)| {
                self.crossing_t(layout, pair, layout.vertex(column, row), layout.vertex(column+1, row))
            })
            .collect();

        // Vertical grid lines: columns 0..=width, each divided into height edges
        let vertical = iproduct!(0..height, 0..=width, mapping.get_vertical().iter())
            .map(|(row, column, pair)| {
                self.crossing_t(layout, pair, layout.vertex(column, row), layout.vertex(column, row+1))
            })
            .collect();

        EdgeCrossings {
            width:          width,
            num_horizontal: mapping.get_horizontal().len(),
            num_vertical:   mapping.get_vertical().len(),
            horizontal:     horizontal,
            vertical:       vertical,
        }
    }
}

impl EdgeCrossings {
    ///
    /// Returns the t value for a slot in a particular cell
    ///
    pub fn t_for_slot(&self, mapping: &EdgePointMapping, x: usize, y: usize, slot: EdgeSlot) -> Option<f64> {
        let pair = mapping.pair_index(slot.slot)?;

        match slot.direction {
            Direction::North    => self.horizontal.get((y * self.width + x) * self.num_horizontal + pair).copied(),
            Direction::South    => self.horizontal.get(((y+1) * self.width + x) * self.num_horizontal + pair).copied(),
            Direction::West     => self.vertical.get((y * (self.width+1) + x) * self.num_vertical + pair).copied(),
            Direction::East     => self.vertical.get((y * (self.width+1) + x + 1) * self.num_vertical + pair).copied(),
        }
    }
}

impl<TTileSource, TCrossingSource> CellPopulator for TilePopulator<TTileSource, TCrossingSource>
where
    TTileSource:        FieldSource,
    TCrossingSource:    FieldSource,
{
    fn edge_point_mapping(&self) -> &EdgePointMapping {
        self.tile_set.edge_point_mapping()
    }

    fn populate_cells(&self, layout: &GridLayout, cells: &mut [Cell]) -> Result<(), TilingError> {
        if self.tile_set.is_empty() {
            return Err(TilingError::EmptyTileSet);
        }

        let mapping     = self.tile_set.edge_point_mapping();
        let crossings   = self.edge_crossings(layout);

        for cell in cells.iter_mut() {
            let (x, y)      = cell.coordinates();
            let tile_idx    = self.select_tile(layout, x, y);
            let tile        = match self.tile_set.tile(tile_idx) { Some(tile) => tile, None => continue };

            for (a, b) in tile.pairs().iter().copied() {
                let slot_a  = mapping.get_direction(a).ok_or(TilingError::SlotOutOfRange(a))?;
                let slot_b  = mapping.get_direction(b).ok_or(TilingError::SlotOutOfRange(b))?;
                let t_a     = crossings.t_for_slot(mapping, x, y, slot_a).ok_or(TilingError::SlotOutOfRange(a))?;
                let t_b     = crossings.t_for_slot(mapping, x, y, slot_b).ok_or(TilingError::SlotOutOfRange(b))?;

                cell.add_curve(Curve::new(CurveEnd::new(slot_a, t_a), CurveEnd::new(slot_b, t_b)));
            }
        }

        log::debug!("Populated {} cells from {} tiles", cells.len(), self.tile_set.len());

        Ok(())
    }
}
