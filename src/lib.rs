//! Reduced fractions whose whole-number values collapse to plain integers.
//!
//! ```
//! use num_collapse::{make_fraction, Number};
//!
//! let a = make_fraction::<i64, _, _>(3, 5).unwrap();
//! let b = make_fraction::<i64, _, _>(2, 7).unwrap();
//! assert_eq!((a + b).to_string(), "31 / 35");
//! assert_eq!(make_fraction::<i64, _, _>(4, -2).unwrap(), Number::Integer(-2));
//! ```

mod error;
mod fraction;
mod interop;
mod number;
mod operand;
pub mod traits;

pub use error::{FractionError, FractionErrorKind};
pub use fraction::{make_fraction, Fraction};
pub use number::Number;
pub use operand::Operand;
pub use traits::FractionBase;
