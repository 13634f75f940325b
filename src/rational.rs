//! An exact rational number type over fixed-width integers.
//!
//! A [`Rational`] built from two components is always stored divided through by the GCD of its
//! numerator and denominator, so equality is field-wise. The GCD is the plain truncating
//! Euclidean one and does not force the denominator positive: -1/2 is stored as 1/-2, while -3/4
//! stays -3/4. Arithmetic wraps on overflow; only [`Rational::compare_to`] widens.

use std::{
    cmp::Ordering,
    fmt::Display,
    ops::{Add, Div, Mul, Sub},
};

use log::debug;
use num_traits::{One, Zero};

use crate::number::{Arithmetic, Number, NumberError};

/// The integer type numerators and denominators are stored in.
#[cfg(not(feature = "wide"))]
pub type BaseInt = i32;
/// Wide enough to hold the product of any two [`BaseInt`]s.
#[cfg(not(feature = "wide"))]
pub type WideInt = i64;

#[cfg(feature = "wide")]
pub type BaseInt = i64;
#[cfg(feature = "wide")]
pub type WideInt = i128;

/// Greatest common divisor by repeated remainder. The sign of the result follows truncating `%`,
/// so it can be negative.
pub const fn gcd(p: BaseInt, q: BaseInt) -> BaseInt {
    let mut p = p;
    let mut q = q;
    while q != 0 {
        let r = p.wrapping_rem(q);
        p = q;
        q = r;
    }

    p
}

/// Divides both components by their [`gcd`]. `denominator` must be nonzero.
pub const fn simplify(numerator: BaseInt, denominator: BaseInt) -> (BaseInt, BaseInt) {
    let d = gcd(numerator, denominator);
    (numerator.wrapping_div(d), denominator.wrapping_div(d))
}

/// An exact fraction `numerator / denominator`.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct Rational {
    numerator: BaseInt,
    denominator: BaseInt,
}

impl Rational {
    pub const ZERO: Rational = Rational::from_integer(0);

    pub const ONE: Rational = Rational::from_integer(1);

    /// Creates `n/1`.
    pub const fn from_integer(n: BaseInt) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Creates `numerator/denominator` in reduced form. Errors if the denominator is zero.
    pub fn from_pair(numerator: BaseInt, denominator: BaseInt) -> Result<Self, NumberError> {
        if denominator == 0 {
            debug!("rejected rational {}/0", numerator);
            return Err(NumberError::InvalidConstruction);
        }

        let (numerator, denominator) = simplify(numerator, denominator);
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Copies the components of a [`Number::Rational`] as they are. Any other variant is an
    /// [`NumberError::InvalidArgument`].
    pub fn from_value(value: &Number) -> Result<Self, NumberError> {
        match value {
            Number::Rational(r) => Ok(*r),
            other => {
                debug!("cannot copy a rational from {} value {}", other.variant_name(), other);
                Err(NumberError::InvalidArgument(format!(
                    "expected a rational, got {} {}",
                    other.variant_name(),
                    other
                )))
            }
        }
    }

    pub const fn numerator(&self) -> BaseInt {
        self.numerator
    }

    pub const fn denominator(&self) -> BaseInt {
        self.denominator
    }

    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// True if numerator and denominator are both strictly positive or both strictly negative.
    pub const fn is_positive(&self) -> bool {
        (self.numerator > 0 && self.denominator > 0) || (self.numerator < 0 && self.denominator < 0)
    }

    /// Orders by cross-multiplying in [`WideInt`], so the products never overflow.
    ///
    /// This compares `self.n * other.d` with `other.n * self.d` as stored. With a negative
    /// denominator on either side the inequality flips, and the result does not match the
    /// mathematical order.
    pub fn compare_to(&self, other: &Rational) -> Ordering {
        let lhs = self.numerator as WideInt * other.denominator as WideInt;
        let rhs = other.numerator as WideInt * self.denominator as WideInt;
        lhs.cmp(&rhs)
    }
}

/// Pulls a [`Rational`] out of an arithmetic operand, or reports the operation as unsupported.
fn rational_operand<'a>(
    operation: &'static str,
    operand: &'a Number,
) -> Result<&'a Rational, NumberError> {
    operand.as_rational().ok_or_else(|| {
        debug!("{} is not defined for {} operands", operation, operand.variant_name());
        NumberError::UnsupportedOperation {
            operation,
            variant: operand.variant_name(),
        }
    })
}

impl Arithmetic for Rational {
    type Output = Rational;

    fn plus(&self, operand: &Number) -> Result<Rational, NumberError> {
        let rhs = rational_operand("plus", operand)?;
        let num = self
            .numerator
            .wrapping_mul(rhs.denominator)
            .wrapping_add(rhs.numerator.wrapping_mul(self.denominator));
        let denom = self.denominator.wrapping_mul(rhs.denominator);
        Self::from_pair(num, denom)
    }

    fn minus(&self, operand: &Number) -> Result<Rational, NumberError> {
        let rhs = rational_operand("minus", operand)?;
        let num = self
            .numerator
            .wrapping_mul(rhs.denominator)
            .wrapping_sub(rhs.numerator.wrapping_mul(self.denominator));
        let denom = self.denominator.wrapping_mul(rhs.denominator);
        Self::from_pair(num, denom)
    }

    fn multiplied_by(&self, operand: &Number) -> Result<Rational, NumberError> {
        let rhs = rational_operand("multiplied_by", operand)?;
        let num = self.numerator.wrapping_mul(rhs.numerator);
        let denom = self.denominator.wrapping_mul(rhs.denominator);
        Self::from_pair(num, denom)
    }

    fn divide_by(&self, operand: &Number) -> Result<Rational, NumberError> {
        let rhs = rational_operand("divide_by", operand)?;
        if rhs.numerator == 0 {
            debug!("attempted to divide {} by zero", self);
            return Err(NumberError::InvalidArgument(format!(
                "cannot divide {} by zero",
                self
            )));
        }
        let num = self.numerator.wrapping_mul(rhs.denominator);
        let denom = self.denominator.wrapping_mul(rhs.numerator);
        Self::from_pair(num, denom)
    }
}

impl TryFrom<&Number> for Rational {
    type Error = NumberError;

    fn try_from(value: &Number) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<Number> for Rational {
    type Error = NumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<BaseInt> for Rational {
    fn from(n: BaseInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.numerator as f64 / value.denominator as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq<Number> for Rational {
    fn eq(&self, other: &Number) -> bool {
        other.as_rational() == Some(self)
    }
}

impl PartialEq<Rational> for Number {
    fn eq(&self, other: &Rational) -> bool {
        other == self
    }
}

impl Add for Rational {
    type Output = Self;

    /// Note: this panics if the product of the denominators wraps around to zero. Use
    /// [`Arithmetic::plus`] to handle that case.
    fn add(self, rhs: Self) -> Self::Output {
        match self.plus(&rhs.into()) {
            Ok(r) => r,
            Err(e) => panic!("Cannot compute {} + {}: {}", self, rhs, e),
        }
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.minus(&rhs.into()) {
            Ok(r) => r,
            Err(e) => panic!("Cannot compute {} - {}: {}", self, rhs, e),
        }
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.multiplied_by(&rhs.into()) {
            Ok(r) => r,
            Err(e) => panic!("Cannot compute {} * {}: {}", self, rhs, e),
        }
    }
}

impl Div for Rational {
    type Output = Self;

    /// Note: this panics on division by zero. Use [`Arithmetic::divide_by`] to get an error
    /// instead.
    fn div(self, rhs: Self) -> Self::Output {
        match self.divide_by(&rhs.into()) {
            Ok(r) => r,
            Err(e) => panic!("Cannot compute {} / {}: {}", self, rhs, e),
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl std::fmt::Debug for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rational!({}/{})", self.numerator, self.denominator)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else if self.numerator == 0 {
            write!(f, "0")
        } else {
            // the denominator's sign is shown as stored, e.g. 1/-2
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[macro_export]
macro_rules! rational {
    ($num:literal / $denom:expr) => {{
        let n = $num;
        let d = $denom;

        match $crate::rational::Rational::from_pair(n, d) {
            Ok(r) => r,
            Err(e) => panic!("Invalid rational {}/{}: {}", n, d, e),
        }
    }};
    ($num:expr) => {
        $crate::rational::Rational::from_integer($num)
    };
}
