//! Mixed operations between fractions and concrete integer or float types.
//!
//! These can't be written as blanket impls over `T` because `T` would
//! overlap with `f64`, so they are stamped out per integer type.

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Sub};

use crate::fraction::Fraction;
use crate::number::Number;
use crate::operand::Operand;
use crate::traits::real;

#[cfg(feature = "num-bigint")]
use num_bigint::BigInt;

macro_rules! impl_primitive_interop {
    ($($t:ty),*) => { $(
        impl From<$t> for Operand<$t> {
            #[inline]
            fn from(t: $t) -> Self {
                Operand::Integer(t)
            }
        }
        impl From<f64> for Operand<$t> {
            #[inline]
            fn from(t: f64) -> Self {
                Operand::Float(t)
            }
        }
        impl From<f32> for Operand<$t> {
            #[inline]
            fn from(t: f32) -> Self {
                Operand::Float(f64::from(t))
            }
        }

        // reflected arithmetic, integer on the left
        impl Add<Fraction<$t>> for $t {
            type Output = Number<$t>;
            #[inline]
            fn add(self, rhs: Fraction<$t>) -> Number<$t> {
                rhs + self
            }
        }
        impl Sub<Fraction<$t>> for $t {
            type Output = Number<$t>;
            #[inline]
            fn sub(self, rhs: Fraction<$t>) -> Number<$t> {
                -rhs + self
            }
        }
        impl Mul<Fraction<$t>> for $t {
            type Output = Number<$t>;
            #[inline]
            fn mul(self, rhs: Fraction<$t>) -> Number<$t> {
                rhs * self
            }
        }
        impl Div<Fraction<$t>> for $t {
            type Output = Number<$t>;
            #[inline]
            fn div(self, rhs: Fraction<$t>) -> Number<$t> {
                rhs.recip() * self
            }
        }
        impl Add<Number<$t>> for $t {
            type Output = Number<$t>;
            #[inline]
            fn add(self, rhs: Number<$t>) -> Number<$t> {
                Number::Integer(self) + rhs
            }
        }
        impl Sub<Number<$t>> for $t {
            type Output = Number<$t>;
            #[inline]
            fn sub(self, rhs: Number<$t>) -> Number<$t> {
                Number::Integer(self) - rhs
            }
        }
        impl Mul<Number<$t>> for $t {
            type Output = Number<$t>;
            #[inline]
            fn mul(self, rhs: Number<$t>) -> Number<$t> {
                Number::Integer(self) * rhs
            }
        }
        impl Div<Number<$t>> for $t {
            type Output = Number<$t>;
            #[inline]
            fn div(self, rhs: Number<$t>) -> Number<$t> {
                Number::Integer(self) / rhs
            }
        }

        // Fraction comparisons by real value
        impl PartialEq<$t> for Fraction<$t> {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.to_real() == real(other)
            }
        }
        impl PartialOrd<$t> for Fraction<$t> {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.to_real().partial_cmp(&real(other))
            }
        }
        impl PartialEq<Fraction<$t>> for $t {
            #[inline]
            fn eq(&self, other: &Fraction<$t>) -> bool {
                real(self) == other.to_real()
            }
        }
        impl PartialOrd<Fraction<$t>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Fraction<$t>) -> Option<Ordering> {
                real(self).partial_cmp(&other.to_real())
            }
        }
        impl PartialEq<f64> for Fraction<$t> {
            #[inline]
            fn eq(&self, other: &f64) -> bool {
                self.to_real() == *other
            }
        }
        impl PartialOrd<f64> for Fraction<$t> {
            #[inline]
            fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
                self.to_real().partial_cmp(other)
            }
        }
        impl PartialEq<Fraction<$t>> for f64 {
            #[inline]
            fn eq(&self, other: &Fraction<$t>) -> bool {
                *self == other.to_real()
            }
        }
        impl PartialOrd<Fraction<$t>> for f64 {
            #[inline]
            fn partial_cmp(&self, other: &Fraction<$t>) -> Option<Ordering> {
                self.partial_cmp(&other.to_real())
            }
        }

        // exact, consistent with Number vs Number; a live fraction is never whole
        impl PartialEq<$t> for Number<$t> {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                matches!(self, Number::Integer(t) if t == other)
            }
        }
        impl PartialOrd<$t> for Number<$t> {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                match self {
                    Number::Integer(t) => t.partial_cmp(other),
                    Number::Fraction(f) => Some(f.cmp_integer(other)),
                }
            }
        }
        impl PartialEq<Number<$t>> for $t {
            #[inline]
            fn eq(&self, other: &Number<$t>) -> bool {
                other == self
            }
        }
        impl PartialOrd<Number<$t>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Number<$t>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
        impl PartialEq<f64> for Number<$t> {
            #[inline]
            fn eq(&self, other: &f64) -> bool {
                self.to_real() == *other
            }
        }
        impl PartialOrd<f64> for Number<$t> {
            #[inline]
            fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
                self.to_real().partial_cmp(other)
            }
        }
        impl PartialEq<Number<$t>> for f64 {
            #[inline]
            fn eq(&self, other: &Number<$t>) -> bool {
                *self == other.to_real()
            }
        }
        impl PartialOrd<Number<$t>> for f64 {
            #[inline]
            fn partial_cmp(&self, other: &Number<$t>) -> Option<Ordering> {
                self.partial_cmp(&other.to_real())
            }
        }
    )* };
}

impl_primitive_interop!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "num-bigint")]
impl_primitive_interop!(BigInt);
