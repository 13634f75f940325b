//! Exact rational numbers over fixed-width integers.
//!
//! [`Rational`] is the only numeric variant with arithmetic. Operands are passed as a [`Number`],
//! so that other variants can be added later and rejected until they are supported.

pub mod number;
pub mod rational;

pub use number::{Arithmetic, Number, NumberError};
pub use rational::{BaseInt, Rational};
