//! E-mail address validators

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// local-part@domain, where the domain has at least one dot and a
// top-level label of two or more letters.
//
// The regex crate has no look-around, so "no leading dot" and "no
// consecutive dots" in the local part are checked separately.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^([A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-])@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates the syntax of an e-mail address.
///
/// # Examples
///
/// ```
/// use advanced_forms_validators::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("ana.paula@gmail.com").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// assert!(validator.validate("user@localhost").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}

	fn is_valid(value: &str) -> bool {
		let Some(captures) = EMAIL_REGEX.captures(value) else {
			return false;
		};
		let local = &captures[1];
		!local.starts_with('.') && !value.contains("..")
	}
}

impl Validator<str> for EmailValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if Self::is_valid(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidFormat)
		}
	}
}

impl Validator<String> for EmailValidator {
	fn validate(&self, value: &String) -> ValidationResult<()> {
		Validator::<str>::validate(self, value.as_str())
	}
}

/// Restricts addresses to a single domain by literal suffix match.
///
/// The comparison is case-sensitive unless [`DomainSuffixValidator::case_insensitive`]
/// is applied.
#[derive(Debug, Clone)]
pub struct DomainSuffixValidator {
	domain: String,
	case_sensitive: bool,
}

impl DomainSuffixValidator {
	/// Creates a validator for `domain`. A leading `@` is accepted and ignored.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{DomainSuffixValidator, Validator};
	///
	/// let validator = DomainSuffixValidator::new("gmail.com");
	/// assert!(validator.validate("user@gmail.com").is_ok());
	/// assert!(validator.validate("user@yahoo.com").is_err());
	/// assert!(validator.validate("user@GMAIL.COM").is_err());
	/// ```
	pub fn new(domain: impl Into<String>) -> Self {
		let domain = domain.into();
		let domain = domain.strip_prefix('@').map(str::to_string).unwrap_or(domain);
		Self {
			domain,
			case_sensitive: true,
		}
	}

	/// Compare the suffix ignoring ASCII case.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{DomainSuffixValidator, Validator};
	///
	/// let validator = DomainSuffixValidator::new("gmail.com").case_insensitive();
	/// assert!(validator.validate("user@GMail.com").is_ok());
	/// ```
	pub fn case_insensitive(mut self) -> Self {
		self.case_sensitive = false;
		self
	}

	pub fn domain(&self) -> &str {
		&self.domain
	}

	fn matches(&self, value: &str) -> bool {
		let suffix = format!("@{}", self.domain);
		if self.case_sensitive {
			return value.ends_with(&suffix);
		}
		// Compare on bytes so a multi-byte char straddling the cut cannot panic.
		let (value, suffix) = (value.as_bytes(), suffix.as_bytes());
		value.len() >= suffix.len()
			&& value[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
	}
}

impl Validator<str> for DomainSuffixValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.matches(value) {
			Ok(())
		} else {
			Err(ValidationError::DomainNotAllowed {
				domain: self.domain.clone(),
			})
		}
	}
}

impl Validator<String> for DomainSuffixValidator {
	fn validate(&self, value: &String) -> ValidationResult<()> {
		Validator::<str>::validate(self, value.as_str())
	}
}
