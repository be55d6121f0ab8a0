//! Raw form state handed to the schema.

use crate::file::SelectedFile;
use advanced_forms_validators::{ValidationError, ValidationResult, coerce_float, coerce_integer};
use serde::{Deserialize, Serialize};

/// Knowledge level as captured by the input, before coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawKnowledge {
	Number(serde_json::Number),
	Text(String),
}

impl RawKnowledge {
	/// Coerces the raw value into an integer.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::RawKnowledge;
	///
	/// assert_eq!(RawKnowledge::from("4").coerce(), Ok(4));
	/// assert_eq!(RawKnowledge::from(3).coerce(), Ok(3));
	/// assert!(RawKnowledge::from("expert").coerce().is_err());
	/// ```
	pub fn coerce(&self) -> ValidationResult<i64> {
		match self {
			RawKnowledge::Text(text) => coerce_integer(text),
			RawKnowledge::Number(number) => number
				.as_i64()
				.or_else(|| number.as_f64().and_then(coerce_float))
				.ok_or_else(|| ValidationError::InvalidNumber(number.to_string())),
		}
	}
}

impl Default for RawKnowledge {
	fn default() -> Self {
		RawKnowledge::Number(serde_json::Number::from(0))
	}
}

impl From<&str> for RawKnowledge {
	fn from(value: &str) -> Self {
		RawKnowledge::Text(value.to_string())
	}
}

impl From<String> for RawKnowledge {
	fn from(value: String) -> Self {
		RawKnowledge::Text(value)
	}
}

impl From<i64> for RawKnowledge {
	fn from(value: i64) -> Self {
		RawKnowledge::Number(serde_json::Number::from(value))
	}
}

impl From<i32> for RawKnowledge {
	fn from(value: i32) -> Self {
		RawKnowledge::from(i64::from(value))
	}
}

/// One row of the dynamic techs list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechInput {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub knowledge: RawKnowledge,
}

impl TechInput {
	pub fn new(title: impl Into<String>, knowledge: impl Into<RawKnowledge>) -> Self {
		Self {
			title: title.into(),
			knowledge: knowledge.into(),
		}
	}
}

/// Snapshot of the form state for one submission attempt.
///
/// # Examples
///
/// ```
/// use advanced_forms_schema::{FormInput, MemoryFile};
///
/// let input = FormInput::new()
///     .with_avatar(MemoryFile::new("me.png", vec![0u8; 16]))
///     .with_name("ana paula")
///     .with_email("ana@gmail.com")
///     .with_password("secret1")
///     .with_tech("Rust", "5")
///     .with_tech("React", 3);
///
/// assert_eq!(input.techs_len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormInput {
	pub avatar: Vec<SelectedFile>,
	pub name: String,
	pub email: String,
	pub password: String,
	pub techs: Vec<TechInput>,
}

impl FormInput {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a file to the avatar selection. Only the first one is used.
	pub fn with_avatar(mut self, file: impl Into<SelectedFile>) -> Self {
		self.avatar.push(file.into());
		self
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn with_email(mut self, email: impl Into<String>) -> Self {
		self.email = email.into();
		self
	}

	pub fn with_password(mut self, password: impl Into<String>) -> Self {
		self.password = password.into();
		self
	}

	pub fn with_tech(mut self, title: impl Into<String>, knowledge: impl Into<RawKnowledge>) -> Self {
		self.append_tech(TechInput::new(title, knowledge));
		self
	}

	/// Appends a row to the techs list.
	pub fn append_tech(&mut self, tech: TechInput) {
		self.techs.push(tech);
	}

	/// Removes the row at `index`, shifting later rows down.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::{FormInput, TechInput};
	///
	/// let mut input = FormInput::new().with_tech("Rust", 5).with_tech("Go", 2);
	/// assert_eq!(input.remove_tech(0).map(|tech| tech.title), Some("Rust".to_string()));
	/// assert_eq!(input.techs[0].title, "Go");
	/// assert!(input.remove_tech(5).is_none());
	/// ```
	pub fn remove_tech(&mut self, index: usize) -> Option<TechInput> {
		if index < self.techs.len() {
			Some(self.techs.remove(index))
		} else {
			None
		}
	}

	pub fn techs_len(&self) -> usize {
		self.techs.len()
	}
}
