use flo_curves::geo::*;
use flo_curves::bezier::path::*;

///
/// A single segment of a path generated from a grid of tiles
///
/// Every segment starts at the end of the previous segment (or at the start of the path)
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(into = "SegmentData", from = "SegmentData")]
pub enum PathSegment {
    /// Line to point
    Line(Coord2),

    /// Quadratic bezier curve (control point, end point)
    QuadraticBezier(Coord2, Coord2),

    /// Cubic bezier curve to point
    CubicBezier((Coord2, Coord2), Coord2),

    /// Circular arc to a point
    ///
    /// Angles are in radians, measured from the +x axis towards the +y axis. A clockwise arc moves towards increasing
    /// angles (which appears clockwise in the y-down coordinates used by cells).
    Arc { center: Coord2, radius: f64, start_angle: f64, end_angle: f64, clockwise: bool, end: Coord2 },
}

///
/// A path generated by stitching together the fragments in a grid
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(into = "PathData", from = "PathData")]
pub struct TilePath {
    start:      Coord2,
    segments:   Vec<PathSegment>,
    closed:     bool,
}

/// Serialized form of a path segment
#[derive(Clone, Serialize, Deserialize)]
enum SegmentData {
    Line((f64, f64)),
    QuadraticBezier((f64, f64), (f64, f64)),
    CubicBezier(((f64, f64), (f64, f64)), (f64, f64)),
    Arc { center: (f64, f64), radius: f64, start_angle: f64, end_angle: f64, clockwise: bool, end: (f64, f64) },
}

/// Serialized form of a tile path
#[derive(Clone, Serialize, Deserialize)]
struct PathData {
    start:      (f64, f64),
    segments:   Vec<PathSegment>,
    closed:     bool,
}

impl PathSegment {
    ///
    /// The point where this segment finishes
    ///
    #[inline]
    pub fn end_point(&self) -> Coord2 {
        match self {
            PathSegment::Line(end)                  => *end,
            PathSegment::QuadraticBezier(_, end)    => *end,
            PathSegment::CubicBezier(_, end)        => *end,
            PathSegment::Arc { end, .. }            => *end,
        }
    }
}

impl TilePath {
    ///
    /// Creates a new path with no segments
    ///
    pub fn new(start: Coord2) -> TilePath {
        TilePath {
            start:      start,
            segments:   vec![],
            closed:     false,
        }
    }

    /// The point where this path begins
    #[inline] pub fn start_point(&self) -> Coord2 { self.start }

    /// The segments making up this path
    #[inline] pub fn segments(&self) -> &[PathSegment] { &self.segments }

    /// The number of segments in this path
    #[inline] pub fn len(&self) -> usize { self.segments.len() }

    /// True if this path has no segments
    #[inline] pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// True if this path finishes at its starting point (a loop that never reached the edge of the grid)
    #[inline] pub fn is_closed(&self) -> bool { self.closed }

    /// Marks this path as a closed loop
    #[inline] pub (crate) fn close(&mut self) { self.closed = true; }

    ///
    /// The point where this path finishes
    ///
    pub fn end_point(&self) -> Coord2 {
        self.segments.last()
            .map(|segment| segment.end_point())
            .unwrap_or(self.start)
    }

    ///
    /// Adds a segment to the end of this path
    ///
    #[inline]
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    ///
    /// If this path is made up only of lines, returns the list of points visited by the path
    ///
    pub fn to_polyline(&self) -> Option<Vec<Coord2>> {
        let mut points = vec![self.start];

        for segment in self.segments.iter() {
            match segment {
                PathSegment::Line(end)  => points.push(*end),
                _                       => return None,
            }
        }

        Some(points)
    }

    ///
    /// Converts this path to a bezier path
    ///
    /// Lines and quadratic curves are raised to cubic curves, and arcs are approximated with cubic curves.
    ///
    pub fn to_bezier_path<TPath>(&self) -> TPath
    where
        TPath: BezierPathFactory<Point=Coord2>,
    {
        let mut builder     = BezierPathBuilder::<TPath>::start(self.start);
        let mut last_point  = self.start;

        for segment in self.segments.iter() {
            builder = match segment {
                PathSegment::Line(end)                          => builder.line_to(*end),
                PathSegment::CubicBezier((cp1, cp2), end)       => builder.curve_to((*cp1, *cp2), *end),

                PathSegment::QuadraticBezier(cp, end)           => {
                    // Degree elevation: the cubic control points are 2/3 of the way from each end to the quadratic control point
                    let cp1 = last_point + (*cp - last_point) * (2.0/3.0);
                    let cp2 = *end + (*cp - *end) * (2.0/3.0);

                    builder.curve_to((cp1, cp2), *end)
                }

                PathSegment::Arc { center, radius, start_angle, end_angle, end, .. } => {
                    let (cp1, cp2)  = arc_control_points(*center, *radius, *start_angle, *end_angle);

                    builder.curve_to((cp1, cp2), *end)
                }
            };

            last_point = segment.end_point();
        }

        builder.build()
    }
}

impl Default for TilePath {
    fn default() -> TilePath {
        TilePath::new(Coord2(0.0, 0.0))
    }
}

impl From<PathSegment> for SegmentData {
    fn from(segment: PathSegment) -> SegmentData {
        match segment {
            PathSegment::Line(end)                          => SegmentData::Line((end.0, end.1)),
            PathSegment::QuadraticBezier(cp, end)           => SegmentData::QuadraticBezier((cp.0, cp.1), (end.0, end.1)),
            PathSegment::CubicBezier((cp1, cp2), end)       => SegmentData::CubicBezier(((cp1.0, cp1.1), (cp2.0, cp2.1)), (end.0, end.1)),
            PathSegment::Arc { center, radius, start_angle, end_angle, clockwise, end } => SegmentData::Arc {
                center:         (center.0, center.1),
                radius:         radius,
                start_angle:    start_angle,
                end_angle:      end_angle,
                clockwise:      clockwise,
                end:            (end.0, end.1),
            },
        }
    }
}

impl From<SegmentData> for PathSegment {
    fn from(data: SegmentData) -> PathSegment {
        match data {
            SegmentData::Line((x, y))                                   => PathSegment::Line(Coord2(x, y)),
            SegmentData::QuadraticBezier((cpx, cpy), (x, y))            => PathSegment::QuadraticBezier(Coord2(cpx, cpy), Coord2(x, y)),
            SegmentData::CubicBezier(((cp1x, cp1y), (cp2x, cp2y)), (x, y)) => PathSegment::CubicBezier((Coord2(cp1x, cp1y), Coord2(cp2x, cp2y)), Coord2(x, y)),
            SegmentData::Arc { center, radius, start_angle, end_angle, clockwise, end } => PathSegment::Arc {
                center:         Coord2(center.0, center.1),
                radius:         radius,
                start_angle:    start_angle,
                end_angle:      end_angle,
                clockwise:      clockwise,
                end:            Coord2(end.0, end.1),
            },
        }
    }
}

impl From<TilePath> for PathData {
    fn from(path: TilePath) -> PathData {
        PathData {
            start:      (path.start.0, path.start.1),
            segments:   path.segments,
            closed:     path.closed,
        }
    }
}

impl From<PathData> for TilePath {
    fn from(data: PathData) -> TilePath {
        TilePath {
            start:      Coord2(data.start.0, data.start.1),
            segments:   data.segments,
            closed:     data.closed,
        }
    }
}

///
/// Finds the control points of a cubic bezier curve approximating an arc of a circle
///
/// Angles are measured from the x axis towards the y axis, and the sweep should be no more than a quarter turn
/// for a close approximation.
///
fn arc_control_points(center: Coord2, radius: f64, start_angle: f64, end_angle: f64) -> (Coord2, Coord2) {
    // Tangent length for a sweep of theta is 4/3 tan(theta/4) (negative for arcs that run backwards)
    let k       = (4.0/3.0) * ((end_angle - start_angle) / 4.0).tan() * radius;

    let start   = center + Coord2(start_angle.cos(), start_angle.sin()) * radius;
    let end     = center + Coord2(end_angle.cos(), end_angle.sin()) * radius;

    let cp1     = start + Coord2(-start_angle.sin(), start_angle.cos()) * k;
    let cp2     = end - Coord2(-end_angle.sin(), end_angle.cos()) * k;

    (cp1, cp2)
}
