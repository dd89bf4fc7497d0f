//! Numeric constraints checked once, at construction.
//!
//! Cable data arrives from an external store and is validated when a
//! [`CableThermalSpec`](crate::models::thermal::cable::CableThermalSpec) is
//! built. Wrapping each field in a [`Constrained`] value records that the check
//! already happened, so the solvers never re-validate.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero (resistances, capacitances, radii)
//! - [`NonNegative`]: zero or greater (skin and proximity factors)
//!
//! Both work with plain numbers and with [`uom`] quantities.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced by [`Constrained`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A value that is known to satisfy the constraint `C`.
///
/// ```
/// use twine_cable::support::constraint::{Constrained, StrictlyPositive};
///
/// let ohms = Constrained::<f64, StrictlyPositive>::new(0.0366).unwrap();
/// assert_eq!(ohms.into_inner(), 0.0366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
