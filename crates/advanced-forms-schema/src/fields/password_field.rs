//! Password field

use crate::field::Field;
use advanced_forms_validators::{MaxLengthValidator, MinLengthValidator, RuleChain, ValidationResult};

/// Password with an inclusive length window, 6 to 12 characters by default.
#[derive(Debug, Clone)]
pub struct PasswordField {
	name: String,
	min_length: usize,
	max_length: usize,
	rules: RuleChain<String>,
}

impl PasswordField {
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::Field;
	/// use advanced_forms_schema::fields::PasswordField;
	///
	/// let field = PasswordField::new("password".to_string());
	/// assert!(field.clean("123456").is_ok());
	/// assert!(field.clean("12345").is_err());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			min_length: 6,
			max_length: 12,
			rules: Self::build_rules(6, 12),
		}
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self.rules = Self::build_rules(self.min_length, self.max_length);
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = max_length;
		self.rules = Self::build_rules(self.min_length, self.max_length);
		self
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	pub fn max_length(&self) -> usize {
		self.max_length
	}

	pub fn rules(&self) -> &RuleChain<String> {
		&self.rules
	}

	fn build_rules(min_length: usize, max_length: usize) -> RuleChain<String> {
		RuleChain::<String>::new()
			.check(MinLengthValidator::new(min_length))
			.check(MaxLengthValidator::new(max_length))
	}
}

impl Field for PasswordField {
	type Input = str;
	type Output = String;

	fn name(&self) -> &str {
		&self.name
	}

	fn clean(&self, value: &str) -> ValidationResult<String> {
		self.rules.run(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use advanced_forms_validators::ValidationError;
	use rstest::rstest;

	#[rstest]
	#[case(0, Err(ValidationError::TooShort { length: 0, min: 6 }))]
	#[case(5, Err(ValidationError::TooShort { length: 5, min: 6 }))]
	#[case(6, Ok(()))]
	#[case(12, Ok(()))]
	#[case(13, Err(ValidationError::TooLong { length: 13, max: 12 }))]
	fn test_password_length_window(
		#[case] length: usize,
		#[case] expected: ValidationResult<()>,
	) {
		// Arrange
		let field = PasswordField::new("password".to_string());
		let password = "x".repeat(length);

		// Act
		let result = field.clean(&password).map(|_| ());

		// Assert
		assert_eq!(result, expected);
	}

	#[rstest]
	fn test_password_is_not_trimmed() {
		let field = PasswordField::new("password".to_string());
		assert_eq!(field.clean("  abcd  ").unwrap(), "  abcd  ");
	}

	#[rstest]
	fn test_builders_rebuild_rules() {
		// Arrange
		let field = PasswordField::new("password".to_string())
			.with_min_length(2)
			.with_max_length(3);

		// Act & Assert
		assert_eq!((field.min_length(), field.max_length()), (2, 3));
		assert!(field.clean("ab").is_ok());
		assert_eq!(
			field.clean("abcd"),
			Err(ValidationError::TooLong { length: 4, max: 3 })
		);
	}
}
