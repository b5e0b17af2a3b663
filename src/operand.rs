use crate::error::FractionError;
use crate::fraction::Fraction;
use crate::number::Number;

/// Any value that may be handed to a fraction operation.
///
/// Constructors accept only integers, arithmetic accepts integers and
/// fractions. Floats are only meaningful in comparisons and are rejected
/// everywhere else with an error of kind [Type][crate::FractionErrorKind::Type].
#[derive(PartialEq, Clone, Debug, Copy)]
pub enum Operand<T> {
    Integer(T),
    Float(f64),
    Fraction(Fraction<T>),
}

impl<T> Operand<T> {
    #[inline]
    fn kind_name(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
            Operand::Fraction(_) => "fraction",
        }
    }

    /// Type gate of the constructors
    pub(crate) fn into_integer(self) -> Result<T, FractionError> {
        match self {
            Operand::Integer(t) => Ok(t),
            other => {
                tracing::debug!(operand = other.kind_name(), "constructor operand rejected");
                Err(FractionError::constructor_type())
            }
        }
    }

    /// Type gate of the arithmetic operations
    pub(crate) fn into_number(self) -> Result<Number<T>, FractionError> {
        match self {
            Operand::Integer(t) => Ok(Number::Integer(t)),
            Operand::Fraction(f) => Ok(Number::Fraction(f)),
            other => {
                tracing::debug!(operand = other.kind_name(), "arithmetic operand rejected");
                Err(FractionError::arithmetic_type())
            }
        }
    }
}

impl<T> From<Fraction<T>> for Operand<T> {
    #[inline]
    fn from(f: Fraction<T>) -> Self {
        Operand::Fraction(f)
    }
}

impl<T> From<Number<T>> for Operand<T> {
    #[inline]
    fn from(n: Number<T>) -> Self {
        match n {
            Number::Integer(t) => Operand::Integer(t),
            Number::Fraction(f) => Operand::Fraction(f),
        }
    }
}
