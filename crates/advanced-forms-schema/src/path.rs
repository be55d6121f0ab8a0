//! Dot/index-qualified field paths such as `techs.1.title`.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
	Key(String),
	Index(usize),
}

/// Path to a (possibly nested) field of the form.
///
/// # Examples
///
/// ```
/// use advanced_forms_schema::FieldPath;
///
/// let path = FieldPath::new("techs").index(1).key("title");
/// assert_eq!(path.to_string(), "techs.1.title");
/// assert_eq!(path.catalog_key(), "techs.title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
	segments: Vec<Segment>,
}

impl FieldPath {
	pub fn new(root: impl Into<String>) -> Self {
		Self {
			segments: vec![Segment::Key(root.into())],
		}
	}

	pub fn key(mut self, key: impl Into<String>) -> Self {
		self.segments.push(Segment::Key(key.into()));
		self
	}

	pub fn index(mut self, index: usize) -> Self {
		self.segments.push(Segment::Index(index));
		self
	}

	/// Name of the top-level field this path belongs to.
	pub fn root(&self) -> &str {
		match self.segments.first() {
			Some(Segment::Key(key)) => key,
			_ => "",
		}
	}

	/// The path with array indices removed.
	///
	/// Every element of an array shares the same messages, so message
	/// lookups are keyed on this form.
	pub fn catalog_key(&self) -> String {
		self.segments
			.iter()
			.filter_map(|segment| match segment {
				Segment::Key(key) => Some(key.as_str()),
				Segment::Index(_) => None,
			})
			.collect::<Vec<_>>()
			.join(".")
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (position, segment) in self.segments.iter().enumerate() {
			if position > 0 {
				f.write_str(".")?;
			}
			match segment {
				Segment::Key(key) => f.write_str(key)?,
				Segment::Index(index) => write!(f, "{}", index)?,
			}
		}
		Ok(())
	}
}

impl Serialize for FieldPath {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_root_path() {
		let path = FieldPath::new("email");
		assert_eq!(path.to_string(), "email");
		assert_eq!(path.root(), "email");
		assert_eq!(path.catalog_key(), "email");
	}

	#[rstest]
	fn test_nested_path() {
		// Arrange
		let path = FieldPath::new("techs").index(0).key("knowledge");

		// Act & Assert
		assert_eq!(path.to_string(), "techs.0.knowledge");
		assert_eq!(path.root(), "techs");
		assert_eq!(path.catalog_key(), "techs.knowledge");
	}

	#[rstest]
	fn test_serializes_as_string() {
		let path = FieldPath::new("techs").index(3);
		assert_eq!(serde_json::to_string(&path).unwrap(), "\"techs.3\"");
	}
}
