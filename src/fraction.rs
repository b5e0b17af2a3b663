use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_rational::Ratio;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;

use crate::error::FractionError;
use crate::number::Number;
use crate::operand::Operand;
use crate::traits::{real, FractionBase};

/// A rational number `numer / denom` kept in lowest terms.
///
/// A live `Fraction` is never a whole number: every constructor and every
/// arithmetic operation returns a [Number], which collapses whole values into
/// [Number::Integer]. The sign is carried by the numerator alone.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Copy)]
pub struct Fraction<T> {
    numer: T,
    denom: T, // positive, and never one
}

impl<T> Fraction<T> {
    #[inline]
    pub(crate) const fn new_raw(numer: T, denom: T) -> Self {
        Fraction { numer, denom }
    }

    #[inline]
    pub fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &T {
        &self.denom
    }

    /// Returns `(numer, denom)`
    #[inline]
    pub fn into_raw(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

/// Create a fraction from two operands of any kind.
///
/// Both operands must be integers, otherwise an error of kind
/// [Type][crate::FractionErrorKind::Type] is returned. Whole values
/// collapse to [Number::Integer].
pub fn make_fraction<T, N, D>(numer: N, denom: D) -> Result<Number<T>, FractionError>
where
    T: FractionBase,
    N: Into<Operand<T>>,
    D: Into<Operand<T>>,
{
    let numer = numer.into().into_integer()?;
    let denom = denom.into().into_integer()?;
    Fraction::new(numer, denom)
}

impl<T: FractionBase> Fraction<T> {
    /// Create a reduced fraction, or the integer it equals.
    ///
    /// Fails with [DivisionByZero][crate::FractionErrorKind::DivisionByZero]
    /// if `denom` is zero.
    pub fn new(numer: T, denom: T) -> Result<Number<T>, FractionError> {
        if denom.is_zero() {
            return Err(FractionError::division_by_zero());
        }
        if numer.is_zero() {
            return Ok(Number::Integer(T::zero()));
        }
        Ok(Self::collapse(numer, denom))
    }

    /// Reduce `numer / denom` and collapse whole values. `denom` must be non-zero.
    pub(crate) fn collapse(numer: T, denom: T) -> Number<T> {
        debug_assert!(!denom.is_zero());

        // keep denom positive
        let (numer, denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        // gcd is non-negative, so dividing preserves the sign of denom
        let g = numer.gcd(&denom);
        let numer = numer / g.clone();
        let denom = denom / g;

        if denom.is_one() {
            tracing::trace!("whole fraction collapsed to an integer");
            Number::Integer(numer)
        } else {
            Number::Fraction(Fraction::new_raw(numer, denom))
        }
    }

    /// Real value of the fraction as a float
    #[inline]
    pub fn to_real(&self) -> f64 {
        real(&self.numer) / real(&self.denom)
    }

    /// Returns the multiplicative inverse `denom / numer`
    #[inline]
    pub fn recip(self) -> Number<T> {
        // numer is never zero for a live fraction
        Self::collapse(self.denom, self.numer)
    }

    pub(crate) fn add_fraction(self, rhs: Fraction<T>) -> Number<T> {
        let (lhs_n, rhs_n) = scaled_numers(&self, &rhs);
        Self::collapse(lhs_n + rhs_n, self.denom * rhs.denom)
    }

    pub(crate) fn add_integer(self, rhs: T) -> Number<T> {
        let numer = self.numer + rhs * self.denom.clone();
        Self::collapse(numer, self.denom)
    }

    pub(crate) fn mul_fraction(self, rhs: Fraction<T>) -> Number<T> {
        Self::collapse(self.numer * rhs.numer, self.denom * rhs.denom)
    }

    pub(crate) fn mul_integer(self, rhs: T) -> Number<T> {
        Self::collapse(self.numer * rhs, self.denom)
    }

    pub(crate) fn div_fraction(self, rhs: Fraction<T>) -> Number<T> {
        Number::Fraction(self).mul_number(rhs.recip())
    }

    /// Scales the denominator, fails if `rhs` is zero
    pub(crate) fn div_integer(self, rhs: T) -> Result<Number<T>, FractionError> {
        Fraction::new(self.numer, self.denom * rhs)
    }

    /// Exact comparison against an integer, `numer` vs `rhs * denom`
    pub(crate) fn cmp_integer(&self, rhs: &T) -> Ordering {
        self.numer.cmp(&(rhs.clone() * self.denom.clone()))
    }

    /// `self + rhs` for a Fraction or integer operand
    #[inline]
    pub fn checked_add<O: Into<Operand<T>>>(self, rhs: O) -> Result<Number<T>, FractionError> {
        Number::Fraction(self).checked_add(rhs)
    }

    /// `self - rhs` for a Fraction or integer operand
    #[inline]
    pub fn checked_sub<O: Into<Operand<T>>>(self, rhs: O) -> Result<Number<T>, FractionError> {
        Number::Fraction(self).checked_sub(rhs)
    }

    /// `self * rhs` for a Fraction or integer operand
    #[inline]
    pub fn checked_mul<O: Into<Operand<T>>>(self, rhs: O) -> Result<Number<T>, FractionError> {
        Number::Fraction(self).checked_mul(rhs)
    }

    /// `self / rhs` for a Fraction or integer operand
    #[inline]
    pub fn checked_div<O: Into<Operand<T>>>(self, rhs: O) -> Result<Number<T>, FractionError> {
        Number::Fraction(self).checked_div(rhs)
    }

    /// `lhs - self`, computed as `-self + lhs`
    pub fn checked_rsub<O: Into<Operand<T>>>(self, lhs: O) -> Result<Number<T>, FractionError> {
        let lhs = lhs.into().into_number()?;
        Ok(Number::Fraction(-self).add_number(lhs))
    }

    /// `lhs / self`, computed as `recip(self) * lhs`
    pub fn checked_rdiv<O: Into<Operand<T>>>(self, lhs: O) -> Result<Number<T>, FractionError> {
        let lhs = lhs.into().into_number()?;
        Ok(self.recip().mul_number(lhs))
    }
}

// numerators of both fractions scaled to the common denominator lhs.denom * rhs.denom
#[inline]
fn scaled_numers<T: FractionBase>(lhs: &Fraction<T>, rhs: &Fraction<T>) -> (T, T) {
    (
        lhs.numer.clone() * rhs.denom.clone(),
        rhs.numer.clone() * lhs.denom.clone(),
    )
}

impl<T: fmt::Display> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numer, self.denom)
    }
}

macro_rules! arith_impl {
    (impl $imp:ident, $method:ident, $frac:ident, $int:ident) => {
        impl<T: FractionBase> $imp<Fraction<T>> for Fraction<T> {
            type Output = Number<T>;
            #[inline]
            fn $method(self, rhs: Fraction<T>) -> Number<T> {
                self.$frac(rhs)
            }
        }
        impl<T: FractionBase> $imp<T> for Fraction<T> {
            type Output = Number<T>;
            #[inline]
            fn $method(self, rhs: T) -> Number<T> {
                self.$int(rhs)
            }
        }
        impl<T: FractionBase> $imp<Number<T>> for Fraction<T> {
            type Output = Number<T>;
            #[inline]
            fn $method(self, rhs: Number<T>) -> Number<T> {
                Number::Fraction(self).$method(rhs)
            }
        }
    };
}

arith_impl!(impl Add, add, add_fraction, add_integer);
arith_impl!(impl Mul, mul, mul_fraction, mul_integer);

impl<T: FractionBase> Sub<Fraction<T>> for Fraction<T> {
    type Output = Number<T>;
    #[inline]
    fn sub(self, rhs: Fraction<T>) -> Number<T> {
        self.add_fraction(-rhs)
    }
}

impl<T: FractionBase> Sub<T> for Fraction<T> {
    type Output = Number<T>;
    #[inline]
    fn sub(self, rhs: T) -> Number<T> {
        self.add_integer(-rhs)
    }
}

impl<T: FractionBase> Sub<Number<T>> for Fraction<T> {
    type Output = Number<T>;
    #[inline]
    fn sub(self, rhs: Number<T>) -> Number<T> {
        Number::Fraction(self) - rhs
    }
}

impl<T: FractionBase> Div<Fraction<T>> for Fraction<T> {
    type Output = Number<T>;
    #[inline]
    fn div(self, rhs: Fraction<T>) -> Number<T> {
        self.div_fraction(rhs)
    }
}

impl<T: FractionBase> Div<T> for Fraction<T> {
    type Output = Number<T>;
    #[inline]
    fn div(self, rhs: T) -> Number<T> {
        match self.div_integer(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FractionBase> Div<Number<T>> for Fraction<T> {
    type Output = Number<T>;
    #[inline]
    fn div(self, rhs: Number<T>) -> Number<T> {
        Number::Fraction(self) / rhs
    }
}

impl<T: FractionBase> Neg for Fraction<T> {
    type Output = Fraction<T>;
    #[inline]
    fn neg(self) -> Fraction<T> {
        // same as multiplying by -1, which can never produce a whole number
        Fraction::new_raw(-self.numer, self.denom)
    }
}

impl<T: FractionBase> Ord for Fraction<T> {
    /// Denominators are positive, so cross multiplication keeps the ordering
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = scaled_numers(self, other);
        lhs.cmp(&rhs)
    }
}

impl<T: FractionBase> PartialOrd for Fraction<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: FractionBase> ToPrimitive for Fraction<T> {
    /// Truncates towards zero
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        (self.numer.clone() / self.denom.clone()).to_i64()
    }

    /// Truncates towards zero
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        (self.numer.clone() / self.denom.clone()).to_u64()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }
}

impl<T> From<Fraction<T>> for Ratio<T> {
    #[inline]
    fn from(f: Fraction<T>) -> Self {
        Ratio::new_raw(f.numer, f.denom)
    }
}
