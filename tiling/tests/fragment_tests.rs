use flo_tiling::*;
use flo_curves::geo::*;
use flo_curves::bezier::path::{SimpleBezierPath};

use std::f64::consts::{PI, FRAC_PI_2};

fn square_cell() -> Cell {
    Cell::new(0, 0, Bounds::from_min_max(Coord2(0.0, 0.0), Coord2(10.0, 10.0)))
}

fn end(direction: Direction, t: f64) -> CurveEnd {
    let slot = match direction {
        Direction::North    => 0,
        Direction::East     => 1,
        Direction::South    => 2,
        Direction::West     => 3,
    };

    CurveEnd::new(EdgeSlot::new(direction, slot), t)
}

#[test]
pub fn edge_points_run_west_east_and_north_south() {
    let cell = Cell::new(2, 3, Bounds::from_min_max(Coord2(20.0, 30.0), Coord2(30.0, 40.0)));

    assert!(cell.coordinates() == (2, 3));
    assert!(cell.at_edge(Direction::North, 0.0) == Coord2(20.0, 30.0));
    assert!(cell.at_edge(Direction::North, 1.0) == Coord2(30.0, 30.0));
    assert!(cell.at_edge(Direction::South, 0.25) == Coord2(22.5, 40.0));
    assert!(cell.at_edge(Direction::East, 0.5) == Coord2(30.0, 35.0));
    assert!(cell.at_edge(Direction::West, 1.0) == Coord2(20.0, 40.0));
}

#[test]
pub fn shared_edges_match_exactly() {
    let layout  = GridLayout::new(Bounds::from_min_max(Coord2(-3.7, 1.1), Coord2(8.3, 9.9)), 7, 5).unwrap();

    for y in 0..5 {
        for x in 0..6 {
            let west = Cell::new(x, y, layout.cell_bounds(x, y));
            let east = Cell::new(x+1, y, layout.cell_bounds(x+1, y));

            for t in [0.0, 0.1, 0.33, 0.5, 0.9, 1.0] {
                assert!(west.at_edge(Direction::East, t) == east.at_edge(Direction::West, t));
            }
        }
    }
}

#[test]
pub fn curve_end_clamps_t() {
    assert!(end(Direction::North, 1.5).t == 1.0);
    assert!(end(Direction::North, -0.5).t == 0.0);
    assert!(end(Direction::North, f64::NAN).t == 0.5);
}

#[test]
pub fn curve_other_end() {
    let curve = Curve::new(end(Direction::North, 0.3), end(Direction::East, 0.6));

    assert!(curve.has_endpoint(EdgeSlot::new(Direction::North, 0)));
    assert!(!curve.has_endpoint(EdgeSlot::new(Direction::South, 2)));
    assert!(curve.get_other_end(EdgeSlot::new(Direction::North, 0)) == Some(end(Direction::East, 0.6)));
    assert!(curve.get_other_end(EdgeSlot::new(Direction::East, 1)) == Some(end(Direction::North, 0.3)));
    assert!(curve.get_other_end(EdgeSlot::new(Direction::West, 3)).is_none());
    assert!(!curve.is_visited());

    let mut cell = square_cell();
    cell.add_curve(Curve::new(end(Direction::South, 0.5), end(Direction::West, 0.5)));
    cell.add_curve(curve);

    assert!(cell.curve_index_at(EdgeSlot::new(Direction::East, 1)) == Some(1));
    assert!(cell.unvisited_curve_at(EdgeSlot::new(Direction::West, 3)) == Some(0));
    assert!(!cell.is_done());
}

#[test]
pub fn classify_every_pair_of_directions() {
    for from in Direction::ALL.iter().copied() {
        for to in Direction::ALL.iter().copied() {
            let curve_type = classify_curve(&end(from, 0.25), &end(to, 0.75));

            let expected = if from == to {
                MetaType::Loopback
            } else if from == to.opposite() {
                MetaType::Straight
            } else {
                MetaType::QuarterCircle
            };

            assert!(curve_type.meta_type() == expected, "{:?} {:?} {:?}", from, to, curve_type);
        }
    }
}

#[test]
pub fn classify_orientations() {
    assert!(classify_curve(&end(Direction::North, 0.5), &end(Direction::South, 0.5)) == CurveType::Straight(StraightOrientation::NorthSouth));
    assert!(classify_curve(&end(Direction::East, 0.5), &end(Direction::West, 0.5)) == CurveType::Straight(StraightOrientation::EastWest));

    assert!(classify_curve(&end(Direction::North, 0.5), &end(Direction::East, 0.5))
        == CurveType::QuarterCircle { orientation: QuarterOrientation::NorthEast, crosses_diagonal: false });
    assert!(classify_curve(&end(Direction::West, 0.5), &end(Direction::South, 0.5))
        == CurveType::QuarterCircle { orientation: QuarterOrientation::WestSouth, crosses_diagonal: false });

    assert!(classify_curve(&end(Direction::South, 0.8), &end(Direction::South, 0.2))
        == CurveType::Loopback(LoopbackOrientation { side: Direction::South, ascending: false }));
}

#[test]
pub fn quarter_circles_crossing_diagonal() {
    // Around the north-west corner, the ends are t_n and t_w from the corner
    assert!(!QuarterOrientation::NorthWest.crosses_diagonal(0.4, 0.4));
    assert!(QuarterOrientation::NorthWest.crosses_diagonal(0.6, 0.6));

    // Around the north-east corner, the north end is (1 - t_n) from the corner
    assert!(!QuarterOrientation::NorthEast.crosses_diagonal(0.8, 0.1));
    assert!(QuarterOrientation::NorthEast.crosses_diagonal(0.2, 0.9));

    // Around the south-east corner, both ends are (1 - t) from the corner
    assert!(!QuarterOrientation::SouthEast.crosses_diagonal(0.9, 0.9));
    assert!(QuarterOrientation::EastSouth.crosses_diagonal(0.1, 0.1));

    // Reversing a fragment doesn't change whether it crosses
    assert!(QuarterOrientation::WestSouth.crosses_diagonal(0.1, 0.8) == QuarterOrientation::SouthWest.crosses_diagonal(0.8, 0.1));
}

#[test]
pub fn quarter_orientations() {
    assert!(QuarterOrientation::NorthEast.is_clockwise());
    assert!(!QuarterOrientation::EastNorth.is_clockwise());
    assert!(QuarterOrientation::WestNorth.is_clockwise());

    assert!(QuarterOrientation::SouthWest.corner_uv() == (0.0, 1.0));
    assert!(QuarterOrientation::EastSouth.from_direction() == Direction::East);
    assert!(QuarterOrientation::EastSouth.to_direction() == Direction::South);

    assert!(LoopbackOrientation { side: Direction::West, ascending: true }.control_depth() == 0.3);
    assert!(LoopbackOrientation { side: Direction::East, ascending: true }.control_depth() == 0.7);
}

fn map(mapper: CurveMapper, from: CurveEnd, to: CurveEnd) -> Vec<PathSegment> {
    let cell        = square_cell();
    let geometry    = FragmentGeometry::new(&cell, from, to);

    mapper.map_curve(&geometry, classify_curve(&from, &to)).into_iter().collect()
}

fn assert_segments_near(actual: &[PathSegment], expected: &[PathSegment]) {
    assert!(actual.len() == expected.len(), "{:?} != {:?}", actual, expected);

    for (a, b) in actual.iter().zip(expected.iter()) {
        let near = match (a, b) {
            (PathSegment::Line(p1), PathSegment::Line(p2))                                          => p1.is_near_to(p2, 1e-9),
            (PathSegment::QuadraticBezier(cp1, p1), PathSegment::QuadraticBezier(cp2, p2))          => cp1.is_near_to(cp2, 1e-9) && p1.is_near_to(p2, 1e-9),
            (PathSegment::CubicBezier((a1, a2), p1), PathSegment::CubicBezier((b1, b2), p2))        => a1.is_near_to(b1, 1e-9) && a2.is_near_to(b2, 1e-9) && p1.is_near_to(p2, 1e-9),
            _                                                                                       => false,
        };

        assert!(near, "{:?} != {:?}", actual, expected);
    }
}

#[test]
pub fn blocky_corners() {
    let segments = map(CurveMapper::Blocky, end(Direction::North, 0.5), end(Direction::East, 0.5));
    assert_segments_near(&segments, &[PathSegment::QuadraticBezier(Coord2(10.0, 0.0), Coord2(10.0, 5.0))]);

    let segments = map(CurveMapper::Blocky, end(Direction::North, 0.2), end(Direction::East, 0.9));
    assert_segments_near(&segments, &[PathSegment::CubicBezier((Coord2(10.0, 0.0), Coord2(10.0, 0.0)), Coord2(10.0, 9.0))]);
}

#[test]
pub fn circular_corner() {
    let segments = map(CurveMapper::Circular, end(Direction::North, 0.5), end(Direction::East, 0.5));
    assert!(segments.len() == 1);

    match segments[0] {
        PathSegment::QuadraticBezier(cp, end) => {
            assert!(cp.is_near_to(&Coord2(8.875, 1.125), 1e-9));
            assert!(end.is_near_to(&Coord2(10.0, 5.0), 1e-9));
        }

        _ => panic!("Expected a quadratic curve, got {:?}", segments),
    }

    // Crossing the diagonal pulls both control points in towards the corner
    let segments = map(CurveMapper::Circular, end(Direction::North, 0.2), end(Direction::East, 0.9));
    match segments[0] {
        PathSegment::CubicBezier((cp1, cp2), end) => {
            assert!(cp1.is_near_to(&Coord2(2.0 + 8.0 * CIRCLE_RATIO, 0.0), 1e-9));
            assert!(cp2.is_near_to(&Coord2(10.0, 9.0 - 9.0 * CIRCLE_RATIO), 1e-9));
            assert!(end.is_near_to(&Coord2(10.0, 9.0), 1e-9));
        }

        _ => panic!("Expected a cubic curve, got {:?}", segments),
    }
}

#[test]
pub fn circle_arc_corner() {
    let segments = map(CurveMapper::CircleArc, end(Direction::North, 0.5), end(Direction::East, 0.5));
    assert!(segments.len() == 1, "{:?}", segments);

    match segments[0] {
        PathSegment::Arc { center, radius, start_angle, end_angle, clockwise, end } => {
            assert!(center == Coord2(10.0, 0.0));
            assert!((radius - 5.0).abs() < 1e-9);
            assert!((start_angle - PI).abs() < 1e-9);
            assert!((end_angle - FRAC_PI_2).abs() < 1e-9);
            assert!(!clockwise);
            assert!(end.is_near_to(&Coord2(10.0, 5.0), 1e-9));
        }

        _ => panic!("Expected an arc, got {:?}", segments),
    }

    // Ends away from the middle of the edge are joined to the arc with lines
    let segments = map(CurveMapper::CircleArc, end(Direction::North, 0.2), end(Direction::East, 0.5));
    assert!(segments.len() == 2, "{:?}", segments);
    assert!(matches!(segments[0], PathSegment::Line(_)));
    assert!(segments[0].end_point().is_near_to(&Coord2(5.0, 0.0), 1e-9));

    let segments = map(CurveMapper::CircleArc, end(Direction::West, 0.1), end(Direction::South, 0.9));
    assert!(segments.len() == 3, "{:?}", segments);
    assert!(segments[2].end_point().is_near_to(&Coord2(9.0, 10.0), 1e-9));
}

#[test]
pub fn circle_arc_corner_as_bezier() {
    let from        = end(Direction::North, 0.5);
    let mut path    = TilePath::new(square_cell().at_edge(from.direction(), from.t));
    map(CurveMapper::CircleArc, from, end(Direction::East, 0.5)).into_iter().for_each(|segment| path.push(segment));

    let (start, curves) = path.to_bezier_path::<SimpleBezierPath>();
    assert!(start == Coord2(5.0, 0.0));
    assert!(curves.len() == 1, "{:?}", curves);

    // The arc leaves the north edge heading south and arrives at the east edge heading east
    let k               = 5.0 * (4.0/3.0) * (PI/8.0).tan();
    let (cp1, cp2, end) = curves[0];
    assert!(cp1.is_near_to(&Coord2(5.0, k), 1e-9), "{:?}", curves);
    assert!(cp2.is_near_to(&Coord2(10.0 - k, 5.0), 1e-9), "{:?}", curves);
    assert!(end.is_near_to(&Coord2(10.0, 5.0), 1e-9));
}

#[test]
pub fn circle_arc_control_points_stay_in_cell() {
    let corners = [
        (Direction::North, Direction::East), (Direction::East, Direction::South),
        (Direction::South, Direction::West), (Direction::West, Direction::North),
    ];

    for (a, b) in corners.iter().flat_map(|(a, b)| vec![(*a, *b), (*b, *a)]) {
        for t in [0.2, 0.5, 0.8] {
            let from        = end(a, t);
            let mut path    = TilePath::new(square_cell().at_edge(a, t));
            map(CurveMapper::CircleArc, from, end(b, 0.5)).into_iter().for_each(|segment| path.push(segment));

            let (_, curves) = path.to_bezier_path::<SimpleBezierPath>();

            for (cp1, cp2, end) in curves {
                for point in [cp1, cp2, end] {
                    assert!(point.x() >= -1e-9 && point.x() <= 10.0 + 1e-9, "{:?} {:?} {:?}", a, b, point);
                    assert!(point.y() >= -1e-9 && point.y() <= 10.0 + 1e-9, "{:?} {:?} {:?}", a, b, point);
                }
            }
        }
    }
}

#[test]
pub fn straight_fragments() {
    // Aligned ends make a line
    let segments = map(CurveMapper::Circular, end(Direction::North, 0.5), end(Direction::South, 0.5));
    assert_segments_near(&segments, &[PathSegment::Line(Coord2(5.0, 10.0))]);

    // Offset ends bend over at the midline
    let segments = map(CurveMapper::Blocky, end(Direction::North, 0.3), end(Direction::South, 0.6));
    assert_segments_near(&segments, &[PathSegment::CubicBezier((Coord2(3.0, 5.0), Coord2(6.0, 5.0)), Coord2(6.0, 10.0))]);

    let segments = map(CurveMapper::Blocky, end(Direction::West, 0.3), end(Direction::East, 0.6));
    assert_segments_near(&segments, &[PathSegment::CubicBezier((Coord2(5.0, 3.0), Coord2(5.0, 6.0)), Coord2(10.0, 6.0))]);

    // Curly always uses a curve
    let segments = map(CurveMapper::Curly, end(Direction::North, 0.5), end(Direction::South, 0.5));
    assert_segments_near(&segments, &[PathSegment::CubicBezier((Coord2(5.0, 5.0), Coord2(5.0, 5.0)), Coord2(5.0, 10.0))]);
}

#[test]
pub fn loopback_fragment() {
    let segments = map(CurveMapper::Circular, end(Direction::North, 0.2), end(Direction::North, 0.8));
    assert_segments_near(&segments, &[PathSegment::CubicBezier((Coord2(2.0, 3.0), Coord2(8.0, 3.0)), Coord2(8.0, 0.0))]);

    let segments = map(CurveMapper::Curly, end(Direction::East, 0.8), end(Direction::East, 0.2));
    assert_segments_near(&segments, &[PathSegment::CubicBezier((Coord2(7.0, 8.0), Coord2(7.0, 2.0)), Coord2(10.0, 2.0))]);
}

#[test]
pub fn straight_lines_mapper() {
    let pairs = vec![
        (end(Direction::North, 0.2), end(Direction::East, 0.9)),
        (end(Direction::North, 0.2), end(Direction::South, 0.9)),
        (end(Direction::West, 0.2), end(Direction::West, 0.9)),
    ];

    for (from, to) in pairs {
        let cell        = square_cell();
        let expected    = cell.at_edge(to.direction(), to.t);

        assert_segments_near(&map(CurveMapper::StraightLines, from, to), &[PathSegment::Line(expected)]);
    }
}
