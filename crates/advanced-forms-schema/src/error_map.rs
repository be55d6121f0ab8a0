//! Field path → error mapping returned by a failed validation.

use crate::path::FieldPath;
use advanced_forms_validators::{ErrorKind, ValidationError};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// One failed rule together with the message to display for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
	pub error: ValidationError,
	pub message: String,
}

impl FieldError {
	pub fn kind(&self) -> ErrorKind {
		self.error.kind()
	}
}

impl std::fmt::Display for FieldError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.message)
	}
}

/// Errors keyed by field path, at most one per path.
///
/// Serializes as a flat `{ "path": "message" }` object, ready to be
/// rendered next to the corresponding inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("form validation failed for {} field(s)", .entries.len())]
pub struct ErrorMap {
	entries: BTreeMap<String, FieldError>,
}

impl ErrorMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an error for `path` unless one is already present.
	///
	/// Returns `false` when the path already had an error; the first
	/// failing rule wins.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::{ErrorMap, FieldPath};
	/// use advanced_forms_validators::{ErrorKind, ValidationError};
	///
	/// let mut errors = ErrorMap::new();
	/// let path = FieldPath::new("email");
	/// assert!(errors.insert(&path, ValidationError::RequiredField, "required"));
	/// assert!(!errors.insert(&path, ValidationError::InvalidFormat, "invalid"));
	/// assert_eq!(errors.kind("email"), Some(ErrorKind::RequiredField));
	/// ```
	pub fn insert(
		&mut self,
		path: &FieldPath,
		error: ValidationError,
		message: impl Into<String>,
	) -> bool {
		let key = path.to_string();
		if self.entries.contains_key(&key) {
			return false;
		}
		self.entries.insert(
			key,
			FieldError {
				error,
				message: message.into(),
			},
		);
		true
	}

	pub fn get(&self, path: &str) -> Option<&FieldError> {
		self.entries.get(path)
	}

	pub fn kind(&self, path: &str) -> Option<ErrorKind> {
		self.get(path).map(FieldError::kind)
	}

	pub fn message(&self, path: &str) -> Option<&str> {
		self.get(path).map(|entry| entry.message.as_str())
	}

	pub fn contains(&self, path: &str) -> bool {
		self.entries.contains_key(path)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn paths(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
		self.entries.iter().map(|(path, entry)| (path.as_str(), entry))
	}

	/// Path → message pairs, sorted by path.
	pub fn messages(&self) -> BTreeMap<String, String> {
		self.entries
			.iter()
			.map(|(path, entry)| (path.clone(), entry.message.clone()))
			.collect()
	}
}

impl Serialize for ErrorMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (path, entry) in &self.entries {
			map.serialize_entry(path, &entry.message)?;
		}
		map.end()
	}
}
