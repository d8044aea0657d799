use crate::cell::*;
use crate::curve::*;
use crate::classify::*;
use crate::tile_path::*;

use flo_curves::geo::*;

use smallvec::*;

use std::f64::consts::{FRAC_PI_2};

/// Ratio used to approximate a quarter circle with a cubic bezier curve
pub const CIRCLE_RATIO: f64 = 0.55;

/// t values closer together than this are considered equal when deciding if a straight fragment is a line
const STRAIGHT_EPSILON: f64 = 1e-9;

///
/// The geometry of a fragment being converted into path segments
///
#[derive(Clone, Copy, Debug)]
pub struct FragmentGeometry<'a> {
    cell:   &'a Cell,
    from:   CurveEnd,
    to:     CurveEnd,
}

///
/// Converts classified curve fragments into path segments
///
/// There is one function for each `MetaType`: the path is already at the point where the fragment starts, so the
/// segments that are returned should finish at `geometry.to_point()`.
///
pub trait CurveMapping {
    /// Generates the segments for a fragment that joins opposite sides of a cell
    fn straight(&self, geometry: &FragmentGeometry, orientation: StraightOrientation) -> SmallVec<[PathSegment; 3]>;

    /// Generates the segments for a fragment that turns around a corner of a cell
    fn quarter_circle(&self, geometry: &FragmentGeometry, orientation: QuarterOrientation, crosses_diagonal: bool) -> SmallVec<[PathSegment; 3]>;

    /// Generates the segments for a fragment that leaves through the same side it entered through
    fn loopback(&self, geometry: &FragmentGeometry, orientation: LoopbackOrientation) -> SmallVec<[PathSegment; 3]>;

    ///
    /// Generates the segments for a classified fragment
    ///
    fn map_curve(&self, geometry: &FragmentGeometry, curve_type: CurveType) -> SmallVec<[PathSegment; 3]> {
        match curve_type {
            CurveType::Straight(orientation)                            => self.straight(geometry, orientation),
            CurveType::QuarterCircle { orientation, crosses_diagonal }  => self.quarter_circle(geometry, orientation, crosses_diagonal),
            CurveType::Loopback(orientation)                            => self.loopback(geometry, orientation),
        }
    }
}

///
/// The built-in ways of generating geometry for fragments
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CurveMapper {
    /// Corners are drawn using the corner of the cell as a control point
    Blocky,

    /// Corners are drawn as approximations of circular arcs
    Circular,

    /// Corners are drawn as true circular arcs around the corner of the cell, with a radius of half the cell size
    CircleArc,

    /// Corners are always drawn as cubic curves pulled into the corner of the cell, and straight fragments always curve
    Curly,

    /// Every fragment is a straight line between its end points (exact polygonal output, used for contours)
    StraightLines,
}

impl<'a> FragmentGeometry<'a> {
    ///
    /// Describes a fragment that crosses a cell from one end to another
    ///
    pub fn new(cell: &'a Cell, from: CurveEnd, to: CurveEnd) -> FragmentGeometry<'a> {
        FragmentGeometry { cell, from, to }
    }

    /// The cell this fragment is in
    #[inline] pub fn cell(&self) -> &'a Cell { self.cell }

    /// The end where the fragment enters the cell
    #[inline] pub fn from(&self) -> CurveEnd { self.from }

    /// The end where the fragment leaves the cell
    #[inline] pub fn to(&self) -> CurveEnd { self.to }

    /// The point where the fragment enters the cell
    #[inline] pub fn from_point(&self) -> Coord2 { self.cell.at_edge(self.from.direction(), self.from.t) }

    /// The point where the fragment leaves the cell
    #[inline] pub fn to_point(&self) -> Coord2 { self.cell.at_edge(self.to.direction(), self.to.t) }

    /// A point at a position in the unit square covered by the cell
    #[inline] pub fn at(&self, u: f64, v: f64) -> Coord2 { self.cell.at(u, v) }

    /// The corner of the cell that a quarter-circle fragment turns around
    #[inline]
    pub fn corner(&self, orientation: QuarterOrientation) -> Coord2 {
        let (u, v) = orientation.corner_uv();
        self.cell.at(u, v)
    }
}

///
/// The segments for a straight fragment shared by most of the mappers
///
/// Fragments where both ends are at the same position are straight lines. Otherwise the curve bends over at the midline
/// of the cell to meet the offset end.
///
pub fn straight_segments(geometry: &FragmentGeometry, orientation: StraightOrientation) -> SmallVec<[PathSegment; 3]> {
    let from    = geometry.from();
    let to      = geometry.to();

    if (from.t - to.t).abs() <= STRAIGHT_EPSILON {
        smallvec![PathSegment::Line(geometry.to_point())]
    } else {
        straight_cubic(geometry, orientation)
    }
}

///
/// A straight fragment as a cubic curve with control points on the midline of the cell
///
pub fn straight_cubic(geometry: &FragmentGeometry, orientation: StraightOrientation) -> SmallVec<[PathSegment; 3]> {
    let from    = geometry.from();
    let to      = geometry.to();

    let (cp1, cp2) = if orientation.from_direction().is_horizontal() {
        (geometry.at(from.t, 0.5), geometry.at(to.t, 0.5))
    } else {
        (geometry.at(0.5, from.t), geometry.at(0.5, to.t))
    };

    smallvec![PathSegment::CubicBezier((cp1, cp2), geometry.to_point())]
}

///
/// The segments for a loopback fragment shared by most of the mappers
///
/// This bulges into the cell with control points at a fixed depth from the edge.
///
pub fn loopback_segments(geometry: &FragmentGeometry, orientation: LoopbackOrientation) -> SmallVec<[PathSegment; 3]> {
    let from    = geometry.from();
    let to      = geometry.to();
    let depth   = orientation.control_depth();

    let (cp1, cp2) = if orientation.side.is_horizontal() {
        (geometry.at(from.t, depth), geometry.at(to.t, depth))
    } else {
        (geometry.at(depth, from.t), geometry.at(depth, to.t))
    };

    smallvec![PathSegment::CubicBezier((cp1, cp2), geometry.to_point())]
}

///
/// A quarter circle as a true circular arc centered on the corner of the cell
///
/// If the ends of the fragment are not on the arc (when they're not in the middle of their edges), lines join them to
/// the ends of the arc.
///
fn circle_arc_segments(geometry: &FragmentGeometry, orientation: QuarterOrientation) -> SmallVec<[PathSegment; 3]> {
    let cell        = geometry.cell();
    let center      = geometry.corner(orientation);
    let radius      = cell.width().min(cell.height()) * 0.5;
    let tolerance   = radius * 1e-9;

    // The arc starts pointing at the middle of the edge the fragment enters through
    let (mid_u, mid_v)  = edge_uv(orientation.from_direction(), 0.5);
    let mid_point       = geometry.at(mid_u, mid_v);
    let start_angle     = (mid_point.y() - center.y()).atan2(mid_point.x() - center.x());

    // Turning clockwise around the cell turns counter-clockwise around the corner
    let clockwise       = !orientation.is_clockwise();
    let end_angle       = if clockwise { start_angle + FRAC_PI_2 } else { start_angle - FRAC_PI_2 };

    let arc_start       = center + Coord2(start_angle.cos(), start_angle.sin()) * radius;
    let arc_end         = center + Coord2(end_angle.cos(), end_angle.sin()) * radius;
    let to_point        = geometry.to_point();

    let mut segments = smallvec![];

    if !geometry.from_point().is_near_to(&arc_start, tolerance) {
        segments.push(PathSegment::Line(arc_start));
    }

    segments.push(PathSegment::Arc {
        center:         center,
        radius:         radius,
        start_angle:    start_angle,
        end_angle:      end_angle,
        clockwise:      clockwise,
        end:            arc_end,
    });

    if !to_point.is_near_to(&arc_end, tolerance) {
        segments.push(PathSegment::Line(to_point));
    }

    segments
}

impl CurveMapping for CurveMapper {
    fn straight(&self, geometry: &FragmentGeometry, orientation: StraightOrientation) -> SmallVec<[PathSegment; 3]> {
        match self {
            CurveMapper::Blocky     |
            CurveMapper::Circular   |
            CurveMapper::CircleArc  => straight_segments(geometry, orientation),
            CurveMapper::Curly      => straight_cubic(geometry, orientation),

            CurveMapper::StraightLines => smallvec![PathSegment::Line(geometry.to_point())],
        }
    }

    fn quarter_circle(&self, geometry: &FragmentGeometry, orientation: QuarterOrientation, crosses_diagonal: bool) -> SmallVec<[PathSegment; 3]> {
        let corner  = geometry.corner(orientation);
        let to      = geometry.to_point();

        match self {
            CurveMapper::Blocky => {
                if crosses_diagonal {
                    smallvec![PathSegment::CubicBezier((corner, corner), to)]
                } else {
                    smallvec![PathSegment::QuadraticBezier(corner, to)]
                }
            }

            CurveMapper::Circular => {
                let from = geometry.from_point();

                if crosses_diagonal {
                    // Each end gets a control point pulled towards the corner along its own tangent
                    let cp1 = from + (corner - from) * CIRCLE_RATIO;
                    let cp2 = to + (corner - to) * CIRCLE_RATIO;

                    smallvec![PathSegment::CubicBezier((cp1, cp2), to)]
                } else {
                    let mid = (from + to) * 0.5;
                    let cp  = mid + (corner - mid) * CIRCLE_RATIO;

                    smallvec![PathSegment::QuadraticBezier(cp, to)]
                }
            }

            CurveMapper::CircleArc      => circle_arc_segments(geometry, orientation),
            CurveMapper::Curly          => smallvec![PathSegment::CubicBezier((corner, corner), to)],
            CurveMapper::StraightLines  => smallvec![PathSegment::Line(to)],
        }
    }

    fn loopback(&self, geometry: &FragmentGeometry, orientation: LoopbackOrientation) -> SmallVec<[PathSegment; 3]> {
        match self {
            CurveMapper::Blocky     |
            CurveMapper::Circular   |
            CurveMapper::CircleArc  |
            CurveMapper::Curly      => loopback_segments(geometry, orientation),

            CurveMapper::StraightLines => smallvec![PathSegment::Line(geometry.to_point())],
        }
    }
}
