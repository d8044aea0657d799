use flo_tiling::*;
use flo_curves::geo::*;
use flo_curves::bezier::path::{SimpleBezierPath};

use std::f64::consts::{FRAC_PI_2};

#[test]
pub fn polyline_from_lines() {
    let mut path = TilePath::new(Coord2(0.0, 0.0));
    path.push(PathSegment::Line(Coord2(1.0, 0.0)));
    path.push(PathSegment::Line(Coord2(1.0, 1.0)));

    assert!(path.len() == 2);
    assert!(path.end_point() == Coord2(1.0, 1.0));
    assert!(path.to_polyline() == Some(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0)]));

    // Curves can't be turned into a polyline
    path.push(PathSegment::QuadraticBezier(Coord2(2.0, 1.0), Coord2(2.0, 2.0)));
    assert!(path.to_polyline().is_none());
}

#[test]
pub fn empty_path() {
    let path = TilePath::new(Coord2(3.0, 4.0));

    assert!(path.is_empty());
    assert!(!path.is_closed());
    assert!(path.end_point() == Coord2(3.0, 4.0));
    assert!(path.to_polyline() == Some(vec![Coord2(3.0, 4.0)]));
}

#[test]
pub fn convert_to_bezier_path() {
    let mut path = TilePath::new(Coord2(0.0, 0.0));
    path.push(PathSegment::Line(Coord2(3.0, 0.0)));
    path.push(PathSegment::QuadraticBezier(Coord2(6.0, 0.0), Coord2(6.0, 3.0)));
    path.push(PathSegment::CubicBezier((Coord2(6.0, 4.0), Coord2(5.0, 5.0)), Coord2(4.0, 5.0)));
    path.push(PathSegment::Arc { center: Coord2(4.0, 7.0), radius: 2.0, start_angle: -FRAC_PI_2, end_angle: -FRAC_PI_2 - FRAC_PI_2, clockwise: false, end: Coord2(2.0, 7.0) });

    let (start, curves) = path.to_bezier_path::<SimpleBezierPath>();

    assert!(start == Coord2(0.0, 0.0));
    assert!(curves.len() == 4);

    // Lines become curves with control points on the line
    let (cp1, cp2, end) = curves[0];
    assert!(end == Coord2(3.0, 0.0));
    assert!(cp1.y().abs() < 1e-9 && cp2.y().abs() < 1e-9);

    // Quadratic curves are raised to cubics
    let (cp1, cp2, end) = curves[1];
    assert!(cp1.is_near_to(&Coord2(5.0, 0.0), 1e-9));
    assert!(cp2.is_near_to(&Coord2(6.0, 1.0), 1e-9));
    assert!(end == Coord2(6.0, 3.0));

    // Cubics are unchanged
    assert!(curves[2] == (Coord2(6.0, 4.0), Coord2(5.0, 5.0), Coord2(4.0, 5.0)));

    // Arcs are approximated, with the control points pulling towards the corner at (2, 5)
    let (cp1, cp2, end) = curves[3];
    assert!(end == Coord2(2.0, 7.0));
    assert!((cp1.y() - 5.0).abs() < 1e-3 && cp1.x() < 4.0 && cp1.x() > 2.0);
    assert!((cp2.x() - 2.0).abs() < 1e-3 && cp2.y() > 5.0 && cp2.y() < 7.0);
}

#[test]
pub fn serialize_path() {
    let mut path = TilePath::new(Coord2(0.5, 1.0));
    path.push(PathSegment::Line(Coord2(1.5, 1.0)));
    path.push(PathSegment::QuadraticBezier(Coord2(2.0, 1.0), Coord2(2.0, 1.5)));
    path.push(PathSegment::CubicBezier((Coord2(2.0, 2.0), Coord2(1.0, 2.0)), Coord2(0.5, 2.0)));
    path.push(PathSegment::Arc { center: Coord2(0.5, 1.5), radius: 0.5, start_angle: 0.5, end_angle: 2.0, clockwise: true, end: Coord2(0.5, 1.0) });

    let json        = serde_json::to_string(&path).unwrap();
    let round_trip  = serde_json::from_str::<TilePath>(&json).unwrap();

    assert!(round_trip == path);
}

#[test]
pub fn serialize_tile_set() {
    let tile_set    = TileSet::six_slot();
    let json        = serde_json::to_string(&tile_set).unwrap();
    let round_trip  = serde_json::from_str::<TileSet>(&json).unwrap();

    assert!(round_trip == tile_set);
    assert!(serde_json::from_str::<CurveMapper>(&serde_json::to_string(&CurveMapper::CircleArc).unwrap()).unwrap() == CurveMapper::CircleArc);
}
