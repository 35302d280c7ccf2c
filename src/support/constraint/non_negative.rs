use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Use this type with [`Constrained<T, NonNegative>`] to encode non-negativity
/// at the type level.
///
/// You can construct a value constrained to be non-negative using either the
/// generic [`Constrained::new`] method or the convenient [`NonNegative::new`]
/// associated function.
///
/// # Examples
///
/// ```
/// use solenoid_models::support::constraint::{Constrained, NonNegative};
///
/// // Generic constructor:
/// let turns = Constrained::<_, NonNegative>::new(12.5).unwrap();
/// assert_eq!(turns.into_inner(), 12.5);
///
/// // Associated constructor:
/// let straight = NonNegative::new(0.0).unwrap();
/// assert_eq!(straight.into_inner(), 0.0);
///
/// // Error cases:
/// assert!(NonNegative::new(-7).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns the additive identity (zero) as a non-negative constrained value.
    ///
    /// This method is equivalent to [`Constrained::<T, NonNegative>::zero()`].
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative>::zero()
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two `Constrained<T, NonNegative>` values.
///
/// Assumes that summing two non-negative values yields a non-negative result.
/// This holds for most numeric types (`i32`, `f64`, `uom::Quantity`, etc.),
/// but may not for all possible `T`.
/// The invariant is checked in debug builds.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    #[test]
    fn turn_counts() {
        let partial = Constrained::<f64, NonNegative>::new(0.25).unwrap();
        assert_eq!(partial.into_inner(), 0.25);

        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::zero::<f64>().into_inner(), 0.0);
        assert!(NonNegative::new(-1.0).is_err());
        assert!(NonNegative::new(f64::NAN).is_err());
    }

    #[test]
    fn segment_lengths_sum() {
        let segments = [0.5, 1.25, 0.0, 2.0]
            .into_iter()
            .map(|l| NonNegative::new(Length::new::<meter>(l)).unwrap());

        let total: Constrained<Length, NonNegative> = segments.sum();
        assert_relative_eq!(total.into_inner().get::<meter>(), 3.75);
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: Constrained<Length, NonNegative> = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn negative_lengths_rejected() {
        assert!(NonNegative::new(Length::new::<meter>(-0.1)).is_err());
        assert_eq!(
            NonNegative::new(Length::new::<meter>(-0.1)).unwrap_err(),
            ConstraintError::Negative
        );
    }
}
