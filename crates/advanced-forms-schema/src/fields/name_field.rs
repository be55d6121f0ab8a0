//! Person name field

use crate::field::Field;
use crate::transform::capitalize_words;
use advanced_forms_validators::{RequiredValidator, RuleChain, ValidationResult};

/// Required name, normalized to capitalized words.
///
/// # Examples
///
/// ```
/// use advanced_forms_schema::Field;
/// use advanced_forms_schema::fields::NameField;
///
/// let field = NameField::new("name".to_string());
/// assert_eq!(field.clean("  ana  paula ").unwrap(), "Ana Paula");
/// assert!(field.clean("   ").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NameField {
	name: String,
	rules: RuleChain<String>,
}

impl NameField {
	pub fn new(name: String) -> Self {
		let rules = RuleChain::<String>::new()
			.check(RequiredValidator::new())
			.map(|value| capitalize_words(&value));
		Self { name, rules }
	}

	pub fn rules(&self) -> &RuleChain<String> {
		&self.rules
	}
}

impl Field for NameField {
	type Input = str;
	type Output = String;

	fn name(&self) -> &str {
		&self.name
	}

	fn clean(&self, value: &str) -> ValidationResult<String> {
		self.rules.run(value.to_string())
	}
}
