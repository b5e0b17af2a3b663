use std::fmt;

/// Error raised by fraction construction and checked arithmetic
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FractionError {
    kind: FractionErrorKind,
    context: ErrorContext,
}

/// The two failure modes of a fraction operation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FractionErrorKind {
    /// An operand was not of an accepted kind
    Type,
    /// A zero denominator or divisor
    DivisionByZero,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum ErrorContext {
    Constructor,
    Arithmetic,
}

impl FractionError {
    #[inline]
    pub(crate) const fn constructor_type() -> Self {
        FractionError { kind: FractionErrorKind::Type, context: ErrorContext::Constructor }
    }

    #[inline]
    pub(crate) const fn arithmetic_type() -> Self {
        FractionError { kind: FractionErrorKind::Type, context: ErrorContext::Arithmetic }
    }

    #[inline]
    pub(crate) const fn division_by_zero() -> Self {
        FractionError { kind: FractionErrorKind::DivisionByZero, context: ErrorContext::Arithmetic }
    }

    /// Returns which of the two failure modes occurred
    #[inline]
    pub fn kind(&self) -> FractionErrorKind {
        self.kind
    }
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.context) {
            (FractionErrorKind::Type, ErrorContext::Constructor) => {
                write!(f, "fraction constructor arguments must both be integers")
            }
            (FractionErrorKind::Type, ErrorContext::Arithmetic) => {
                write!(f, "must pass Fraction or integer")
            }
            (FractionErrorKind::DivisionByZero, _) => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for FractionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_test() {
        assert_eq!(
            FractionError::constructor_type().to_string(),
            "fraction constructor arguments must both be integers"
        );
        assert_eq!(FractionError::arithmetic_type().to_string(), "must pass Fraction or integer");
        assert_eq!(FractionError::division_by_zero().to_string(), "division by zero");
    }

    #[test]
    fn error_kind_test() {
        assert_eq!(FractionError::constructor_type().kind(), FractionErrorKind::Type);
        assert_eq!(FractionError::arithmetic_type().kind(), FractionErrorKind::Type);
        assert_eq!(FractionError::division_by_zero().kind(), FractionErrorKind::DivisionByZero);
        assert_ne!(FractionError::constructor_type(), FractionError::arithmetic_type());
    }
}
