//! String validators
//!
//! Lengths are counted in characters, not bytes, so multi-byte input
//! (accented names, CJK, emoji) is measured the way a user would count it.

use crate::{ValidationError, ValidationResult, Validator};

/// Rejects empty values.
///
/// With `trim` enabled (the default) whitespace-only values are rejected too.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
	trim: bool,
}

impl RequiredValidator {
	/// Creates a new RequiredValidator that ignores surrounding whitespace.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{RequiredValidator, Validator};
	///
	/// let validator = RequiredValidator::new();
	/// assert!(validator.validate("ana").is_ok());
	/// assert!(validator.validate("   ").is_err());
	/// ```
	pub fn new() -> Self {
		Self { trim: true }
	}

	/// Only the empty string is rejected; whitespace counts as content.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{RequiredValidator, Validator};
	///
	/// let validator = RequiredValidator::new().no_strip();
	/// assert!(validator.validate(" ").is_ok());
	/// assert!(validator.validate("").is_err());
	/// ```
	pub fn no_strip(mut self) -> Self {
		self.trim = false;
		self
	}
}

impl Default for RequiredValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl Validator<str> for RequiredValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let value = if self.trim { value.trim() } else { value };
		if value.is_empty() {
			Err(ValidationError::RequiredField)
		} else {
			Ok(())
		}
	}
}

impl Validator<String> for RequiredValidator {
	fn validate(&self, value: &String) -> ValidationResult<()> {
		Validator::<str>::validate(self, value.as_str())
	}
}

/// Minimum length validator
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
}

impl MinLengthValidator {
	/// Creates a new MinLengthValidator with the specified minimum length.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{MinLengthValidator, Validator};
	///
	/// let validator = MinLengthValidator::new(6);
	/// assert!(validator.validate("secret").is_ok());
	/// assert!(validator.validate("short").is_err());
	/// ```
	pub fn new(min: usize) -> Self {
		Self { min }
	}
}

impl Validator<str> for MinLengthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let length = value.chars().count();
		if length >= self.min {
			Ok(())
		} else {
			Err(ValidationError::TooShort {
				length,
				min: self.min,
			})
		}
	}
}

impl Validator<String> for MinLengthValidator {
	fn validate(&self, value: &String) -> ValidationResult<()> {
		Validator::<str>::validate(self, value.as_str())
	}
}

/// Maximum length validator
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
	max: usize,
}

impl MaxLengthValidator {
	/// Creates a new MaxLengthValidator with the specified maximum length.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{MaxLengthValidator, Validator};
	///
	/// let validator = MaxLengthValidator::new(12);
	/// assert!(validator.validate("twelve chars").is_ok());
	/// assert!(validator.validate("thirteen char").is_err());
	/// ```
	pub fn new(max: usize) -> Self {
		Self { max }
	}
}

impl Validator<str> for MaxLengthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let length = value.chars().count();
		if length <= self.max {
			Ok(())
		} else {
			Err(ValidationError::TooLong {
				length,
				max: self.max,
			})
		}
	}
}

impl Validator<String> for MaxLengthValidator {
	fn validate(&self, value: &String) -> ValidationResult<()> {
		Validator::<str>::validate(self, value.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", true)]
	#[case("   ", true)]
	#[case("\t\n", true)]
	#[case("a", false)]
	#[case("  a  ", false)]
	fn test_required_validator(#[case] input: &str, #[case] should_fail: bool) {
		let validator = RequiredValidator::new();
		assert_eq!(validator.validate(input).is_err(), should_fail);
	}

	#[rstest]
	fn test_min_length_boundaries() {
		let validator = MinLengthValidator::new(6);
		assert!(validator.validate("123456").is_ok());
		assert_eq!(
			validator.validate("12345"),
			Err(ValidationError::TooShort { length: 5, min: 6 })
		);
	}

	#[rstest]
	fn test_max_length_boundaries() {
		let validator = MaxLengthValidator::new(12);
		assert!(validator.validate("123456789012").is_ok());
		assert_eq!(
			validator.validate("1234567890123"),
			Err(ValidationError::TooLong {
				length: 13,
				max: 12
			})
		);
	}

	#[rstest]
	fn test_length_uses_char_count_not_bytes() {
		// Arrange: 6 characters, 12 bytes
		let value = "áéíóúç";
		let min = MinLengthValidator::new(6);
		let max = MaxLengthValidator::new(6);

		// Act & Assert
		assert!(min.validate(value).is_ok());
		assert!(max.validate(value).is_ok());
	}

	#[rstest]
	fn test_string_impls_delegate_to_str() {
		let owned = String::from("abc");
		assert!(Validator::<String>::validate(&MinLengthValidator::new(3), &owned).is_ok());
		assert!(Validator::<String>::validate(&MaxLengthValidator::new(2), &owned).is_err());
		assert!(Validator::<String>::validate(&RequiredValidator::new(), &owned).is_ok());
	}
}
