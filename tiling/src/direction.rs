///
/// The four sides of a cell
///
/// Cells use a y-down coordinate system: `North` is the side with the smallest y coordinate, and row 0 of a grid
/// is its northernmost row.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

///
/// Identifies a numbered attachment point on one side of a cell
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct EdgeSlot {
    /// The side of the cell this slot is on
    pub direction: Direction,

    /// The slot number, unique across all the sides of a cell
    pub slot: usize,
}

impl Direction {
    /// The four directions, in clockwise order starting at north
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    ///
    /// Returns the direction on the opposite side of a cell
    ///
    #[inline]
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North    => Direction::South,
            Direction::East     => Direction::West,
            Direction::South    => Direction::North,
            Direction::West     => Direction::East,
        }
    }

    ///
    /// True if an edge in this direction is horizontal (ie, the north or south edge of a cell)
    ///
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        match self {
            Direction::North | Direction::South => true,
            Direction::East  | Direction::West  => false,
        }
    }

    ///
    /// The grid offset to the neighbouring cell in this direction
    ///
    #[inline]
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North    => (0, -1),
            Direction::East     => (1, 0),
            Direction::South    => (0, 1),
            Direction::West     => (-1, 0),
        }
    }
}

impl EdgeSlot {
    ///
    /// Creates a new edge slot
    ///
    #[inline]
    pub fn new(direction: Direction, slot: usize) -> EdgeSlot {
        EdgeSlot { direction, slot }
    }
}
