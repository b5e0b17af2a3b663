use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

/// A helper trait to define valid integer types that can back a [Fraction][crate::Fraction]
pub trait FractionBase: Integer + Signed + Clone + ToPrimitive {}
impl<T: Integer + Signed + Clone + ToPrimitive> FractionBase for T {}

/// Real value of an integer, used when comparing against floats.
/// Integers too large for an `f64` map to NaN, which compares unequal to everything.
#[inline]
pub(crate) fn real<T: ToPrimitive>(t: &T) -> f64 {
    t.to_f64().unwrap_or(f64::NAN)
}
