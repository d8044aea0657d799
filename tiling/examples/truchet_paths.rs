use flo_tiling::*;
use flo_tiling::curves::geo::*;
use flo_tiling::curves::bezier::path::{SimpleBezierPath};

///
/// Generates a random Truchet pattern and a contour, and prints some statistics about the paths that were generated
///
pub fn main() {
    let bounds = Bounds::from_min_max(Coord2(0.0, 0.0), Coord2(1000.0, 1000.0));

    // Truchet tiles using the six-slot tile set
    let populator   = TilePopulator::new(TileSet::six_slot(), RandomField::new(1), RandomField::new(2));
    let mut grid    = Grid::new(bounds, 20, 20, CurveMapper::Circular, &populator).unwrap();
    let fragments   = grid.fragment_count();
    let truchet     = grid.generate_curves();

    let num_closed  = truchet.iter().filter(|path| path.is_closed()).count();
    let longest     = truchet.iter().map(|path| path.len()).max().unwrap_or(0);

    println!("Truchet: {} fragments stitched into {} paths ({} closed, longest has {} segments)", fragments, truchet.len(), num_closed, longest);

    // Convert to bezier paths, as would be done to render them
    let bezier_paths = truchet.iter()
        .map(|path| path.to_bezier_path::<SimpleBezierPath>())
        .collect::<Vec<_>>();
    let num_curves = bezier_paths.iter().map(|(_, curves)| curves.len()).sum::<usize>();

    println!("         {} bezier curves", num_curves);

    // Contour of a ring using marching squares
    let ring        = |point: Coord2| {
        let radius = point.magnitude();
        (radius - 0.6).abs()
    };
    let mut grid    = marching_squares_grid(&ring, bounds, 40, 0.15).unwrap();
    let contours    = grid.generate_curves();

    println!("Contour: {} paths from {} fragments", contours.len(), grid.fragment_count());

    if let Some(contour) = contours.first() {
        let json = serde_json::to_string_pretty(contour).unwrap();
        println!("First contour ({} segments):\n{}", contour.len(), json);
    }
}
