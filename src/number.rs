use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, ToPrimitive, Zero};
use std::fmt;

use crate::error::FractionError;
use crate::fraction::Fraction;
use crate::operand::Operand;
use crate::traits::{real, FractionBase};

/// The result of building or operating on fractions.
///
/// A whole value is always represented as [Number::Integer], so a
/// [Number::Fraction] never has a denominator of one.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Copy)]
pub enum Number<T> {
    Integer(T),
    Fraction(Fraction<T>),
}

impl<T> Number<T> {
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    pub fn is_fraction(&self) -> bool {
        matches!(self, Number::Fraction(_))
    }

    #[inline]
    pub fn as_integer(&self) -> Option<&T> {
        match self {
            Number::Integer(t) => Some(t),
            Number::Fraction(_) => None,
        }
    }

    #[inline]
    pub fn into_fraction(self) -> Option<Fraction<T>> {
        match self {
            Number::Integer(_) => None,
            Number::Fraction(f) => Some(f),
        }
    }
}

impl<T: FractionBase> Number<T> {
    /// Create a number from a rational, collapsing whole values
    #[inline]
    pub fn from_ratio(r: Ratio<T>) -> Result<Self, FractionError> {
        let (numer, denom) = r.into();
        Fraction::new(numer, denom)
    }

    #[inline]
    pub fn to_real(&self) -> f64 {
        match self {
            Number::Integer(t) => real(t),
            Number::Fraction(f) => f.to_real(),
        }
    }

    /// Returns the multiplicative inverse, failing for zero
    pub fn recip(self) -> Result<Self, FractionError> {
        match self {
            Number::Integer(t) => Fraction::new(T::one(), t),
            Number::Fraction(f) => Ok(f.recip()),
        }
    }

    pub fn checked_add<O: Into<Operand<T>>>(self, rhs: O) -> Result<Self, FractionError> {
        let rhs = rhs.into().into_number()?;
        Ok(self.add_number(rhs))
    }

    pub fn checked_sub<O: Into<Operand<T>>>(self, rhs: O) -> Result<Self, FractionError> {
        let rhs = rhs.into().into_number()?;
        Ok(self.add_number(-rhs))
    }

    pub fn checked_mul<O: Into<Operand<T>>>(self, rhs: O) -> Result<Self, FractionError> {
        let rhs = rhs.into().into_number()?;
        Ok(self.mul_number(rhs))
    }

    pub fn checked_div<O: Into<Operand<T>>>(self, rhs: O) -> Result<Self, FractionError> {
        let rhs = rhs.into().into_number()?;
        self.div_number(rhs)
    }

    pub(crate) fn add_number(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(a + b),
            (Number::Integer(a), Number::Fraction(f)) | (Number::Fraction(f), Number::Integer(a)) => {
                f.add_integer(a)
            }
            (Number::Fraction(a), Number::Fraction(b)) => a.add_fraction(b),
        }
    }

    pub(crate) fn mul_number(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(a * b),
            (Number::Integer(a), Number::Fraction(f)) | (Number::Fraction(f), Number::Integer(a)) => {
                f.mul_integer(a)
            }
            (Number::Fraction(a), Number::Fraction(b)) => a.mul_fraction(b),
        }
    }

    pub(crate) fn div_number(self, rhs: Self) -> Result<Self, FractionError> {
        match (self, rhs) {
            // integer division stays exact
            (Number::Integer(a), Number::Integer(b)) => Fraction::new(a, b),
            (Number::Integer(a), Number::Fraction(f)) => Ok(f.recip().mul_number(Number::Integer(a))),
            (Number::Fraction(f), Number::Integer(b)) => f.div_integer(b),
            (Number::Fraction(a), Number::Fraction(b)) => Ok(a.div_fraction(b)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Number<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(t) => write!(f, "{}", t),
            Number::Fraction(frac) => write!(f, "{}", frac),
        }
    }
}

impl<T> From<T> for Number<T> {
    #[inline]
    fn from(t: T) -> Self {
        Number::Integer(t)
    }
}

impl<T> From<Fraction<T>> for Number<T> {
    #[inline]
    fn from(f: Fraction<T>) -> Self {
        Number::Fraction(f)
    }
}

impl<T: Clone + Integer> From<Number<T>> for Ratio<T> {
    #[inline]
    fn from(n: Number<T>) -> Self {
        match n {
            Number::Integer(t) => Ratio::from_integer(t),
            Number::Fraction(f) => f.into(),
        }
    }
}

macro_rules! arith_impl {
    (impl $imp:ident, $method:ident, $number:ident) => {
        impl<T: FractionBase> $imp<Number<T>> for Number<T> {
            type Output = Number<T>;
            #[inline]
            fn $method(self, rhs: Number<T>) -> Number<T> {
                self.$number(rhs)
            }
        }
        impl<T: FractionBase> $imp<Fraction<T>> for Number<T> {
            type Output = Number<T>;
            #[inline]
            fn $method(self, rhs: Fraction<T>) -> Number<T> {
                self.$number(Number::Fraction(rhs))
            }
        }
        impl<T: FractionBase> $imp<T> for Number<T> {
            type Output = Number<T>;
            #[inline]
            fn $method(self, rhs: T) -> Number<T> {
                self.$number(Number::Integer(rhs))
            }
        }
    };
}

arith_impl!(impl Add, add, add_number);
arith_impl!(impl Mul, mul, mul_number);

impl<T: FractionBase> Sub<Number<T>> for Number<T> {
    type Output = Number<T>;
    #[inline]
    fn sub(self, rhs: Number<T>) -> Number<T> {
        self.add_number(-rhs)
    }
}

impl<T: FractionBase> Sub<Fraction<T>> for Number<T> {
    type Output = Number<T>;
    #[inline]
    fn sub(self, rhs: Fraction<T>) -> Number<T> {
        self.add_number(Number::Fraction(-rhs))
    }
}

impl<T: FractionBase> Sub<T> for Number<T> {
    type Output = Number<T>;
    #[inline]
    fn sub(self, rhs: T) -> Number<T> {
        self.add_number(Number::Integer(-rhs))
    }
}

impl<T: FractionBase> Div<Number<T>> for Number<T> {
    type Output = Number<T>;
    #[inline]
    fn div(self, rhs: Number<T>) -> Number<T> {
        match self.div_number(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FractionBase> Div<Fraction<T>> for Number<T> {
    type Output = Number<T>;
    #[inline]
    fn div(self, rhs: Fraction<T>) -> Number<T> {
        self / Number::Fraction(rhs)
    }
}

impl<T: FractionBase> Div<T> for Number<T> {
    type Output = Number<T>;
    #[inline]
    fn div(self, rhs: T) -> Number<T> {
        self / Number::Integer(rhs)
    }
}

impl<T: FractionBase> Neg for Number<T> {
    type Output = Number<T>;
    #[inline]
    fn neg(self) -> Number<T> {
        match self {
            Number::Integer(t) => Number::Integer(-t),
            Number::Fraction(f) => Number::Fraction(-f),
        }
    }
}

impl<T: FractionBase> Zero for Number<T> {
    #[inline]
    fn zero() -> Self {
        Number::Integer(T::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        matches!(self, Number::Integer(t) if t.is_zero())
    }
}

impl<T: FractionBase> One for Number<T> {
    #[inline]
    fn one() -> Self {
        Number::Integer(T::one())
    }
    #[inline]
    fn is_one(&self) -> bool {
        matches!(self, Number::Integer(t) if t.is_one())
    }
}

impl<T: FractionBase> PartialOrd for Number<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: FractionBase> Ord for Number<T> {
    /// Exact in every combination, an integer is scaled by the fraction's denominator
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(b),
            (Number::Fraction(a), Number::Fraction(b)) => a.cmp(b),
            (Number::Fraction(f), Number::Integer(n)) => f.cmp_integer(n),
            (Number::Integer(n), Number::Fraction(f)) => f.cmp_integer(n).reverse(),
        }
    }
}

impl<T: PartialEq> PartialEq<Fraction<T>> for Number<T> {
    #[inline]
    fn eq(&self, other: &Fraction<T>) -> bool {
        matches!(self, Number::Fraction(f) if f == other)
    }
}

impl<T: PartialEq> PartialEq<Number<T>> for Fraction<T> {
    #[inline]
    fn eq(&self, other: &Number<T>) -> bool {
        other == self
    }
}

impl<T: FractionBase> ToPrimitive for Number<T> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(t) => t.to_i64(),
            Number::Fraction(f) => f.to_i64(),
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        match self {
            Number::Integer(t) => t.to_u64(),
            Number::Fraction(f) => f.to_u64(),
        }
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        match self {
            Number::Integer(t) => t.to_f64(),
            Number::Fraction(f) => f.to_f64(),
        }
    }
}
