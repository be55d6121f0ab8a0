//! Collection cardinality validators

use crate::{ValidationError, ValidationResult, Validator};

/// Requires a sequence to hold at least `min` entries.
#[derive(Debug, Clone)]
pub struct MinEntriesValidator {
	min: usize,
}

impl MinEntriesValidator {
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{MinEntriesValidator, Validator};
	///
	/// let validator = MinEntriesValidator::new(2);
	/// assert!(validator.validate(&[1, 2][..]).is_ok());
	/// assert!(validator.validate(&[1][..]).is_err());
	/// ```
	pub fn new(min: usize) -> Self {
		Self { min }
	}
}

impl<T> Validator<[T]> for MinEntriesValidator {
	fn validate(&self, value: &[T]) -> ValidationResult<()> {
		if value.len() >= self.min {
			Ok(())
		} else {
			Err(ValidationError::TooFewEntries {
				count: value.len(),
				min: self.min,
			})
		}
	}
}

impl<T> Validator<Vec<T>> for MinEntriesValidator {
	fn validate(&self, value: &Vec<T>) -> ValidationResult<()> {
		Validator::<[T]>::validate(self, value.as_slice())
	}
}
