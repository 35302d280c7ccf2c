use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is at least one.
///
/// Relative permeabilities satisfy this bound: no core material is less
/// permeable than vacuum for the purposes of these models.
///
/// # Examples
///
/// ```
/// use solenoid_models::support::constraint::{AtLeastOne, Constrained};
///
/// let air = AtLeastOne::new(1.0).unwrap();
/// assert_eq!(air.into_inner(), 1.0);
///
/// let ferrite = Constrained::<_, AtLeastOne>::new(2300.0).unwrap();
/// assert_eq!(ferrite.into_inner(), 2300.0);
///
/// assert!(AtLeastOne::new(0.999).is_err());
/// assert!(AtLeastOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs a [`Constrained<T, AtLeastOne>`] if the value is at least one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is below one or not a number (`NaN`).
    pub fn new<T: PartialOrd + One>(value: T) -> Result<Constrained<T, AtLeastOne>, ConstraintError> {
        Constrained::<T, AtLeastOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
