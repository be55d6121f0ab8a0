//! E-mail field restricted to a single domain

use crate::field::Field;
use advanced_forms_validators::{
	DomainSuffixValidator, EmailValidator, RequiredValidator, RuleChain, ValidationResult,
};

/// E-mail field: required, well-formed, and on the allowed domain.
///
/// The value is not trimmed; surrounding whitespace makes the address
/// invalid rather than silently passing.
#[derive(Debug, Clone)]
pub struct EmailField {
	name: String,
	domain: String,
	domain_case_sensitive: bool,
	rules: RuleChain<String>,
}

impl EmailField {
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::fields::EmailField;
	///
	/// let field = EmailField::new("email".to_string());
	/// assert_eq!(field.domain(), "gmail.com");
	/// assert!(field.domain_case_sensitive());
	/// ```
	pub fn new(name: String) -> Self {
		let domain = "gmail.com".to_string();
		let rules = Self::build_rules(&domain, true);
		Self {
			name,
			domain,
			domain_case_sensitive: true,
			rules,
		}
	}

	pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
		self.domain = domain.into();
		self.rules = Self::build_rules(&self.domain, self.domain_case_sensitive);
		self
	}

	/// Accept the domain regardless of ASCII case.
	pub fn domain_case_insensitive(mut self) -> Self {
		self.domain_case_sensitive = false;
		self.rules = Self::build_rules(&self.domain, false);
		self
	}

	pub fn domain(&self) -> &str {
		&self.domain
	}

	pub fn domain_case_sensitive(&self) -> bool {
		self.domain_case_sensitive
	}

	pub fn rules(&self) -> &RuleChain<String> {
		&self.rules
	}

	fn build_rules(domain: &str, case_sensitive: bool) -> RuleChain<String> {
		let domain = DomainSuffixValidator::new(domain);
		let domain = if case_sensitive {
			domain
		} else {
			domain.case_insensitive()
		};
		RuleChain::<String>::new()
			.check(RequiredValidator::new().no_strip())
			.check(EmailValidator::new())
			.check(domain)
	}
}

impl Field for EmailField {
	type Input = str;
	type Output = String;

	fn name(&self) -> &str {
		&self.name
	}

	fn clean(&self, value: &str) -> ValidationResult<String> {
		self.rules.run(value.to_string())
	}
}
