//! File validators

use crate::{ValidationError, ValidationResult, Validator};

/// Default ceiling for uploaded avatars: 5 MiB.
pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

/// Rejects files larger than a fixed number of bytes.
///
/// The ceiling is inclusive: a file of exactly `max` bytes passes.
#[derive(Debug, Clone)]
pub struct MaxFileSizeValidator {
	max: u64,
}

impl MaxFileSizeValidator {
	/// Creates a new MaxFileSizeValidator.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{MAX_AVATAR_BYTES, MaxFileSizeValidator, Validator};
	///
	/// let validator = MaxFileSizeValidator::new(MAX_AVATAR_BYTES);
	/// assert!(validator.validate(&MAX_AVATAR_BYTES).is_ok());
	/// assert!(validator.validate(&(MAX_AVATAR_BYTES + 1)).is_err());
	/// ```
	pub fn new(max: u64) -> Self {
		Self { max }
	}

	pub fn max(&self) -> u64 {
		self.max
	}
}

impl Default for MaxFileSizeValidator {
	fn default() -> Self {
		Self::new(MAX_AVATAR_BYTES)
	}
}

impl Validator<u64> for MaxFileSizeValidator {
	fn validate(&self, size: &u64) -> ValidationResult<()> {
		if *size <= self.max {
			Ok(())
		} else {
			Err(ValidationError::FileTooLarge {
				size: *size,
				max: self.max,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, true)]
	#[case(1024, true)]
	#[case(MAX_AVATAR_BYTES, true)]
	#[case(MAX_AVATAR_BYTES + 1, false)]
	fn test_max_file_size(#[case] size: u64, #[case] ok: bool) {
		let validator = MaxFileSizeValidator::default();
		assert_eq!(validator.validate(&size).is_ok(), ok);
	}

	#[rstest]
	fn test_avatar_ceiling_is_five_mebibytes() {
		assert_eq!(MAX_AVATAR_BYTES, 5_242_880);
	}
}
