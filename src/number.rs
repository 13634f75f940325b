//! The generic numeric capability. Arithmetic takes its operand as a [`Number`], a closed set of
//! numeric variants, and each implementation decides which variants it knows how to combine with.
//! Today only [`Rational`] implements [`Arithmetic`], and it only accepts other rationals.

use std::fmt::Display;

use thiserror::Error;

use crate::rational::{BaseInt, Rational};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("division by zero in construction")]
    InvalidConstruction,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unsupported operation: {operation} with {variant} operand")]
    UnsupportedOperation {
        operation: &'static str,
        variant: &'static str,
    },
}

/// A value of one of the numeric variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// An exact fraction.
    Rational(Rational),
    /// A bare machine integer. Mixed arithmetic between this and [`Number::Rational`] is not
    /// implemented.
    Integer(BaseInt),
}

impl Number {
    /// The name of the variant, as used in error messages.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Number::Rational(_) => "rational",
            Number::Integer(_) => "integer",
        }
    }

    pub const fn as_rational(&self) -> Option<&Rational> {
        match self {
            Number::Rational(r) => Some(r),
            Number::Integer(_) => None,
        }
    }
}

impl From<Rational> for Number {
    fn from(value: Rational) -> Self {
        Number::Rational(value)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Rational(r) => write!(f, "{}", r),
            Number::Integer(i) => write!(f, "{}", i),
        }
    }
}

/// The four arithmetic operations, with the right-hand side given as any [`Number`].
///
/// Implementations reject operand variants they have no rule for with
/// [`NumberError::UnsupportedOperation`], rather than converting them.
pub trait Arithmetic {
    type Output;

    fn plus(&self, operand: &Number) -> Result<Self::Output, NumberError>;

    fn minus(&self, operand: &Number) -> Result<Self::Output, NumberError>;

    fn multiplied_by(&self, operand: &Number) -> Result<Self::Output, NumberError>;

    /// Fails with [`NumberError::InvalidArgument`] if the operand is zero.
    fn divide_by(&self, operand: &Number) -> Result<Self::Output, NumberError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_variant_names() {
        assert_eq!(Number::from(rational!(1 / 2)).variant_name(), "rational");
        assert_eq!(Number::Integer(3).variant_name(), "integer");
    }

    #[test]
    fn test_as_rational() {
        assert_eq!(
            Number::from(rational!(3 / 4)).as_rational(),
            Some(&rational!(3 / 4))
        );
        assert_eq!(Number::Integer(3).as_rational(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::from(rational!(-1 / 2)).to_string(), "1/-2");
        assert_eq!(Number::Integer(-7).to_string(), "-7");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NumberError::InvalidConstruction.to_string(),
            "division by zero in construction"
        );
        assert_eq!(
            NumberError::UnsupportedOperation {
                operation: "plus",
                variant: "integer"
            }
            .to_string(),
            "Unsupported operation: plus with integer operand"
        );
    }
}
