use num_collapse::{make_fraction, Fraction, FractionErrorKind, Number};
use num_integer::Integer;
use proptest::prelude::*;

/// Keeps products of two operands far away from overflow
fn arb_int() -> impl Strategy<Value = i64> {
    -10_000i64..=10_000
}

fn arb_nonzero() -> impl Strategy<Value = i64> {
    arb_int().prop_filter("non-zero", |x| *x != 0)
}

/// Fractions that did not collapse to an integer
fn arb_fraction() -> impl Strategy<Value = Fraction<i64>> {
    (arb_int(), arb_nonzero()).prop_filter_map("whole value", |(n, d)| {
        Fraction::new(n, d).ok().and_then(Number::into_fraction)
    })
}

fn assert_canonical(number: &Number<i64>) {
    if let Number::Fraction(f) = number {
        assert!(*f.denom() > 1, "denominator of {} not above one", f);
        assert_eq!(f.numer().gcd(f.denom()), 1, "{} not reduced", f);
    }
}

proptest! {
    #[test]
    fn zero_numerator_collapses(d in arb_nonzero()) {
        prop_assert_eq!(make_fraction::<i64, _, _>(0i64, d).unwrap(), Number::Integer(0));
    }

    #[test]
    fn equal_parts_collapse(n in arb_nonzero()) {
        prop_assert_eq!(make_fraction::<i64, _, _>(n, n).unwrap(), Number::Integer(1));
        prop_assert_eq!(make_fraction::<i64, _, _>(-n, n).unwrap(), Number::Integer(-1));
    }

    #[test]
    fn zero_denominator_fails(n in arb_int()) {
        let err = make_fraction::<i64, _, _>(n, 0i64).unwrap_err();
        prop_assert_eq!(err.kind(), FractionErrorKind::DivisionByZero);
    }

    #[test]
    fn float_operands_fail(n in arb_int(), x in -1e6f64..1e6) {
        prop_assert_eq!(make_fraction::<i64, _, _>(x, n).unwrap_err().kind(), FractionErrorKind::Type);
        prop_assert_eq!(make_fraction::<i64, _, _>(n, x).unwrap_err().kind(), FractionErrorKind::Type);
    }

    #[test]
    fn every_sign_combination_is_canonical(n in arb_nonzero(), d in arb_nonzero()) {
        let expected = (n as f64) / (d as f64);
        for (numer, denom) in [(n, d), (-n, d), (n, -d), (-n, -d)] {
            let number = Fraction::new(numer, denom).unwrap();
            assert_canonical(&number);
            let sign = if (numer < 0) == (denom < 0) { 1.0 } else { -1.0 };
            prop_assert_eq!(number.to_real(), sign * expected.abs());
        }
        prop_assert_eq!(Fraction::new(n, -d).unwrap(), Fraction::new(-n, d).unwrap());
        prop_assert_eq!(Fraction::new(-n, -d).unwrap(), Fraction::new(n, d).unwrap());
    }

    #[test]
    fn whole_values_collapse(n in arb_int(), d in arb_nonzero()) {
        let number = Fraction::new(n * d, d).unwrap();
        prop_assert_eq!(number, Number::Integer(n));
    }

    #[test]
    fn addition_commutes(x in arb_fraction(), y in arb_fraction()) {
        prop_assert_eq!(x + y, y + x);
        assert_canonical(&(x + y));
    }

    #[test]
    fn multiplication_commutes(x in arb_fraction(), y in arb_fraction()) {
        prop_assert_eq!(x * y, y * x);
        assert_canonical(&(x * y));
    }

    #[test]
    fn addition_associates(x in arb_fraction(), y in arb_fraction(), z in arb_fraction()) {
        prop_assert_eq!((x + y) + z, x + (y + z));
    }

    #[test]
    fn additive_inverse(x in arb_fraction()) {
        prop_assert_eq!(x + (-x), Number::Integer(0));
        prop_assert_eq!(x - x, Number::Integer(0));
    }

    #[test]
    fn multiplicative_identities(x in arb_fraction()) {
        prop_assert_eq!(x * 0i64, Number::Integer(0));
        prop_assert_eq!(x * 1i64, Number::Fraction(x));
        prop_assert_eq!(x / x, Number::Integer(1));
        prop_assert_eq!(x * x.recip(), Number::Integer(1));
    }

    #[test]
    fn integer_division_by_zero_fails(x in arb_fraction()) {
        prop_assert_eq!(x.checked_div(0i64).unwrap_err().kind(), FractionErrorKind::DivisionByZero);
    }

    #[test]
    fn subtraction_is_negated_addition(x in arb_fraction(), y in arb_fraction(), n in arb_int()) {
        prop_assert_eq!(x - y, x + (-y));
        prop_assert_eq!(x - n, x + (-n));
        prop_assert_eq!(n - x, (-x) + n);
    }

    #[test]
    fn reflected_division(x in arb_fraction(), n in arb_int()) {
        prop_assert_eq!(n / x, x.recip() * n);
        prop_assert_eq!(x.checked_rdiv(n).unwrap(), n / x);
    }

    #[test]
    fn ordering_matches_real_value(x in arb_fraction(), y in arb_fraction()) {
        prop_assert_eq!(x < y, x.to_real() < y.to_real());
        prop_assert_eq!(x == y, x.numer() == y.numer() && x.denom() == y.denom());
    }

    #[test]
    fn display_format(x in arb_fraction()) {
        prop_assert_eq!(x.to_string(), format!("{} / {}", x.numer(), x.denom()));
    }
}

#[test]
fn worked_examples() {
    let a = make_fraction::<i64, _, _>(3i64, 5i64).unwrap();
    let b = make_fraction::<i64, _, _>(2i64, 7i64).unwrap();

    let sum = (a + b).into_fraction().unwrap();
    assert_eq!((*sum.numer(), *sum.denom()), (31, 35));

    let quotient = (a / b).into_fraction().unwrap();
    assert_eq!((*quotient.numer(), *quotient.denom()), (21, 10));

    let half = make_fraction::<i64, _, _>(1i64, 2i64).unwrap();
    let three_halves = make_fraction::<i64, _, _>(3i64, 2i64).unwrap();
    assert_eq!(half + three_halves + half, make_fraction::<i64, _, _>(5i64, 2i64).unwrap());

    assert!(make_fraction::<i64, _, _>(3i64, 5i64).unwrap() == 0.6);
    assert!(make_fraction::<i64, _, _>(999i64, 1000i64).unwrap() == 0.999);
    assert!(make_fraction::<i64, _, _>(1i64, 6i64).unwrap() < make_fraction::<i64, _, _>(3i64, 7i64).unwrap());
    assert!(make_fraction::<i64, _, _>(3i64, 7i64).unwrap() < 1i64);
    assert!(1i64 > make_fraction::<i64, _, _>(3i64, 7i64).unwrap());
}
