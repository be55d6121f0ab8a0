//! Validation error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed rule.
///
/// The `Display` output is the default English message shown next to the
/// offending field. Use [`ValidationError::kind`] when the exact failure
/// category matters more than the wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("This field is required")]
	RequiredField,

	#[error("Enter a valid e-mail address")]
	InvalidFormat,

	#[error("Only e-mail addresses ending with @{domain} are allowed")]
	DomainNotAllowed { domain: String },

	#[error("Ensure this value has at least {min} characters (it has {length})")]
	TooShort { length: usize, min: usize },

	#[error("Ensure this value has at most {max} characters (it has {length})")]
	TooLong { length: usize, max: usize },

	#[error("Select a file")]
	MissingFile,

	#[error("The file must be at most {max} bytes (it has {size})")]
	FileTooLarge { size: u64, max: u64 },

	#[error("The selected file could not be read: {0}")]
	UnreadableFile(String),

	#[error("Enter a whole number (got {0:?})")]
	InvalidNumber(String),

	#[error("Ensure this value is between {min} and {max} (it is {value})")]
	OutOfRange { value: i64, min: i64, max: i64 },

	#[error("Add at least {min} entries (it has {count})")]
	TooFewEntries { count: usize, min: usize },
}

impl ValidationError {
	/// Returns the category of this error without its context.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{ErrorKind, ValidationError};
	///
	/// let error = ValidationError::TooShort { length: 2, min: 6 };
	/// assert_eq!(error.kind(), ErrorKind::TooShort);
	/// ```
	pub fn kind(&self) -> ErrorKind {
		match self {
			ValidationError::RequiredField => ErrorKind::RequiredField,
			ValidationError::InvalidFormat => ErrorKind::InvalidFormat,
			ValidationError::DomainNotAllowed { .. } => ErrorKind::DomainNotAllowed,
			ValidationError::TooShort { .. } => ErrorKind::TooShort,
			ValidationError::TooLong { .. } => ErrorKind::TooLong,
			ValidationError::MissingFile => ErrorKind::MissingFile,
			ValidationError::FileTooLarge { .. } => ErrorKind::FileTooLarge,
			ValidationError::UnreadableFile(_) => ErrorKind::UnreadableFile,
			ValidationError::InvalidNumber(_) => ErrorKind::InvalidNumber,
			ValidationError::OutOfRange { .. } => ErrorKind::OutOfRange,
			ValidationError::TooFewEntries { .. } => ErrorKind::TooFewEntries,
		}
	}
}

/// Fieldless discriminant of [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
	RequiredField,
	InvalidFormat,
	DomainNotAllowed,
	TooShort,
	TooLong,
	MissingFile,
	FileTooLarge,
	UnreadableFile,
	InvalidNumber,
	OutOfRange,
	TooFewEntries,
}

impl ErrorKind {
	/// Stable snake_case identifier, matching the serialized form.
	pub fn as_str(&self) -> &'static str {
		match self {
			ErrorKind::RequiredField => "required_field",
			ErrorKind::InvalidFormat => "invalid_format",
			ErrorKind::DomainNotAllowed => "domain_not_allowed",
			ErrorKind::TooShort => "too_short",
			ErrorKind::TooLong => "too_long",
			ErrorKind::MissingFile => "missing_file",
			ErrorKind::FileTooLarge => "file_too_large",
			ErrorKind::UnreadableFile => "unreadable_file",
			ErrorKind::InvalidNumber => "invalid_number",
			ErrorKind::OutOfRange => "out_of_range",
			ErrorKind::TooFewEntries => "too_few_entries",
		}
	}
}

impl std::fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

pub type ValidationResult<T> = Result<T, ValidationError>;
