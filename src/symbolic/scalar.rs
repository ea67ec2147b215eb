//! # Scalar capability trait
//!
//! The expression tree is generic over the numeric type stored in its `Number`
//! leaves. Everything the evaluator, the serializer and the differentiator need
//! from that type is collected in [`Scalar`]:
//! - field operations (`+ - * /`, negation) and the `0`/`1` identities from `num_traits`
//! - generalized power and the transcendental set `sin cos ln exp`
//! - the textual form used when a literal is rendered
//!
//! Real scalars (`f64`, `f32`) render with the fixed 6-decimal form,
//! complex scalars (`num_complex::Complex`) as `(re + imi)` with 2 decimals.

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric type usable as the value of `Number` leaves.
///
/// Arithmetic edge cases (division by zero, logarithm of zero, ...) are not
/// checked anywhere in the engine; they produce whatever the implementing
/// type produces.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// `self ^ exponent` (real power for real types, principal power for complex ones)
    fn pow(&self, exponent: &Self) -> Self;
    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    /// natural logarithm
    fn ln(&self) -> Self;
    fn exp(&self) -> Self;
    /// Textual form of a literal inside a rendered expression.
    fn render(&self) -> String;

    /// `1 + 1`, the exponent of the squared denominator in the quotient rule
    fn two() -> Self {
        Self::one() + Self::one()
    }
    /// `-1`, the sign factor of the cosine rule.
    /// Built as `0 - 1` so a complex result has a positive zero imaginary part.
    fn minus_one() -> Self {
        Self::zero() - Self::one()
    }
}

macro_rules! real_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            fn pow(&self, exponent: &Self) -> Self {
                <$t>::powf(*self, *exponent)
            }
            fn sin(&self) -> Self {
                <$t>::sin(*self)
            }
            fn cos(&self) -> Self {
                <$t>::cos(*self)
            }
            fn ln(&self) -> Self {
                <$t>::ln(*self)
            }
            fn exp(&self) -> Self {
                <$t>::exp(*self)
            }
            fn render(&self) -> String {
                format!("{:.6}", self)
            }
        }
    };
}

real_scalar!(f64);
real_scalar!(f32);

macro_rules! complex_scalar {
    ($t:ty) => {
        impl Scalar for Complex<$t> {
            fn pow(&self, exponent: &Self) -> Self {
                Complex::<$t>::powc(*self, *exponent)
            }
            fn sin(&self) -> Self {
                Complex::<$t>::sin(*self)
            }
            fn cos(&self) -> Self {
                Complex::<$t>::cos(*self)
            }
            fn ln(&self) -> Self {
                Complex::<$t>::ln(*self)
            }
            fn exp(&self) -> Self {
                Complex::<$t>::exp(*self)
            }
            fn render(&self) -> String {
                format!("({:.2} + {:.2}i)", self.re, self.im)
            }
        }
    };
}

complex_scalar!(f64);
complex_scalar!(f32);
