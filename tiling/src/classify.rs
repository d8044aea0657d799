use crate::cell::*;
use crate::curve::*;
use crate::direction::*;

///
/// The family of shapes that a curve fragment belongs to
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MetaType {
    /// Joins opposite edges of a cell
    Straight,

    /// Joins adjacent edges of a cell, turning around the corner they share
    QuarterCircle,

    /// Leaves a cell through the same edge that it entered it
    Loopback,
}

///
/// The direction a straight fragment travels in
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum StraightOrientation {
    NorthSouth,
    SouthNorth,
    EastWest,
    WestEast,
}

///
/// The edges joined by a quarter-circle fragment, in the order they're travelled (eg, `NorthEast` enters from the north
/// edge and leaves through the east edge)
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum QuarterOrientation {
    NorthEast,
    EastNorth,
    EastSouth,
    SouthEast,
    SouthWest,
    WestSouth,
    WestNorth,
    NorthWest,
}

///
/// The edge a loopback fragment starts and ends on, and whether `t` increases or decreases along it
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct LoopbackOrientation {
    pub side:       Direction,
    pub ascending:  bool,
}

///
/// The result of classifying a curve fragment
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CurveType {
    Straight(StraightOrientation),

    QuarterCircle { orientation: QuarterOrientation, crosses_diagonal: bool },

    Loopback(LoopbackOrientation),
}

impl StraightOrientation {
    /// The edge this fragment enters through
    pub fn from_direction(&self) -> Direction {
        match self {
            StraightOrientation::NorthSouth => Direction::North,
            StraightOrientation::SouthNorth => Direction::South,
            StraightOrientation::EastWest   => Direction::East,
            StraightOrientation::WestEast   => Direction::West,
        }
    }

    /// The edge this fragment leaves through
    pub fn to_direction(&self) -> Direction {
        self.from_direction().opposite()
    }
}

impl QuarterOrientation {
    ///
    /// The edge this fragment enters through
    ///
    pub fn from_direction(&self) -> Direction {
        use self::QuarterOrientation::*;

        match self {
            NorthEast | NorthWest   => Direction::North,
            EastNorth | EastSouth   => Direction::East,
            SouthEast | SouthWest   => Direction::South,
            WestSouth | WestNorth   => Direction::West,
        }
    }

    ///
    /// The edge this fragment leaves through
    ///
    pub fn to_direction(&self) -> Direction {
        use self::QuarterOrientation::*;

        match self {
            EastNorth | WestNorth   => Direction::North,
            NorthEast | SouthEast   => Direction::East,
            EastSouth | WestSouth   => Direction::South,
            SouthWest | NorthWest   => Direction::West,
        }
    }

    ///
    /// True if this fragment travels around its corner in the same order as the sides of the cell (north, east, south, west)
    ///
    pub fn is_clockwise(&self) -> bool {
        use self::QuarterOrientation::*;

        match self {
            NorthEast | EastSouth | SouthWest | WestNorth => true,
            EastNorth | SouthEast | WestSouth | NorthWest => false,
        }
    }

    ///
    /// The corner shared by the two edges of this fragment, as a position in the unit square covered by the cell
    ///
    pub fn corner_uv(&self) -> (f64, f64) {
        use self::QuarterOrientation::*;

        match self {
            NorthEast | EastNorth   => (1.0, 0.0),
            EastSouth | SouthEast   => (1.0, 1.0),
            SouthWest | WestSouth   => (0.0, 1.0),
            WestNorth | NorthWest   => (0.0, 0.0),
        }
    }

    ///
    /// Decides if a fragment with this orientation crosses the diagonal of the cell
    ///
    /// If `a` and `b` are the distances of the two ends from the shared corner, this is `a + b > 1`: ie, the rectangle
    /// formed by the corner and the two ends reaches past the diagonal joining the two neighbouring corners. Written in
    /// terms of `t` this is `t_n + t_w > 1` around the north-west corner, `t_s + t_e < 1` around the south-east corner,
    /// `(1 - t_n) + t_e > 1` around the north-east corner and `t_s + (1 - t_w) > 1` around the south-west corner.
    ///
    pub fn crosses_diagonal(&self, from_t: f64, to_t: f64) -> bool {
        let corner          = self.corner_uv();
        let from            = edge_uv(self.from_direction(), from_t);
        let to              = edge_uv(self.to_direction(), to_t);

        let distance        = |(u, v): (f64, f64)| (u - corner.0).abs() + (v - corner.1).abs();

        distance(from) + distance(to) > 1.0
    }
}

impl LoopbackOrientation {
    /// The unit-square depth (along the axis perpendicular to the side) where the control points of a loopback are placed
    pub fn control_depth(&self) -> f64 {
        match self.side {
            Direction::North | Direction::West => 0.3,
            Direction::South | Direction::East => 0.7,
        }
    }
}

impl CurveType {
    ///
    /// The family of shapes this curve type belongs to
    ///
    pub fn meta_type(&self) -> MetaType {
        match self {
            CurveType::Straight(_)          => MetaType::Straight,
            CurveType::QuarterCircle { .. } => MetaType::QuarterCircle,
            CurveType::Loopback(_)          => MetaType::Loopback,
        }
    }
}

///
/// Works out the shape of a fragment that enters a cell at `from` and leaves at `to`
///
pub fn classify_curve(from: &CurveEnd, to: &CurveEnd) -> CurveType {
    use self::Direction::*;

    let quarter = |orientation: QuarterOrientation| {
        CurveType::QuarterCircle { orientation, crosses_diagonal: orientation.crosses_diagonal(from.t, to.t) }
    };

    match (from.direction(), to.direction()) {
        (North, South)  => CurveType::Straight(StraightOrientation::NorthSouth),
        (South, North)  => CurveType::Straight(StraightOrientation::SouthNorth),
        (East, West)    => CurveType::Straight(StraightOrientation::EastWest),
        (West, East)    => CurveType::Straight(StraightOrientation::WestEast),

        (North, East)   => quarter(QuarterOrientation::NorthEast),
        (East, North)   => quarter(QuarterOrientation::EastNorth),
        (East, South)   => quarter(QuarterOrientation::EastSouth),
        (South, East)   => quarter(QuarterOrientation::SouthEast),
        (South, West)   => quarter(QuarterOrientation::SouthWest),
        (West, South)   => quarter(QuarterOrientation::WestSouth),
        (West, North)   => quarter(QuarterOrientation::WestNorth),
        (North, West)   => quarter(QuarterOrientation::NorthWest),

        (North, North)  |
        (East, East)    |
        (South, South)  |
        (West, West)    => CurveType::Loopback(LoopbackOrientation { side: from.direction(), ascending: from.t <= to.t }),
    }
}
