use flo_curves::geo::*;

#[cfg(feature = "random")] use rand::prelude::*;
#[cfg(feature = "random")] use rand::rngs::{StdRng};

///
/// A source of scalar values across a 2D space
///
/// Populators sample field sources in a canonical coordinate space, where the grid being populated covers the
/// region from (-1, -1) to (1, 1). Tile populators expect values in the range `0..1`.
///
pub trait FieldSource {
    ///
    /// Returns the value of the field at the specified point
    ///
    fn get_value(&self, point: Coord2) -> f64;
}

///
/// A field that has the same value everywhere
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ConstantField(pub f64);

///
/// A field with a pseudo-random value in the range `0..1` at every point
///
/// The value at a point depends only on the seed and the point, so the same field will always produce the same results.
///
#[cfg(feature = "random")]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RandomField {
    seed: u64,
}

impl<TFn> FieldSource for TFn
where
    TFn: Fn(Coord2) -> f64,
{
    #[inline]
    fn get_value(&self, point: Coord2) -> f64 {
        (self)(point)
    }
}

impl FieldSource for ConstantField {
    #[inline]
    fn get_value(&self, _point: Coord2) -> f64 {
        self.0
    }
}

#[cfg(feature = "random")]
impl RandomField {
    ///
    /// Creates a random field from a seed value
    ///
    pub fn new(seed: u64) -> RandomField {
        RandomField { seed }
    }
}

#[cfg(feature = "random")]
impl FieldSource for RandomField {
    fn get_value(&self, point: Coord2) -> f64 {
        // Mix the point into the seed (StdRng's seeding spreads the bits out further)
        let x       = point.x().to_bits();
        let y       = point.y().to_bits();
        let seed    = self.seed ^ x.rotate_left(21) ^ y.wrapping_mul(0x9e37_79b9_7f4a_7c15);

        StdRng::seed_from_u64(seed).gen::<f64>()
    }
}
