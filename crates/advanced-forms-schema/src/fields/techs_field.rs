//! Dynamic list of technologies
//!
//! Every row is validated independently. Errors are reported per element,
//! at `techs.<index>.title` and `techs.<index>.knowledge`, and the list
//! length is checked afterwards at `techs`.

use crate::field::Field;
use crate::input::{RawKnowledge, TechInput};
use crate::output::Tech;
use crate::path::FieldPath;
use advanced_forms_validators::{
	MinEntriesValidator, RangeValidator, RequiredValidator, RuleChain, ValidationError,
	ValidationResult, Validator,
};

/// Required technology title. The cleaned value is trimmed.
#[derive(Debug, Clone)]
pub struct TitleField {
	name: String,
	rules: RuleChain<String>,
}

impl TitleField {
	pub fn new(name: String) -> Self {
		let rules = RuleChain::<String>::new()
			.check(RequiredValidator::new())
			.map(|value| value.trim().to_string());
		Self { name, rules }
	}

	pub fn rules(&self) -> &RuleChain<String> {
		&self.rules
	}
}

impl Field for TitleField {
	type Input = str;
	type Output = String;

	fn name(&self) -> &str {
		&self.name
	}

	fn clean(&self, value: &str) -> ValidationResult<String> {
		self.rules.run(value.to_string())
	}
}

/// Knowledge level: coerced to an integer, then bounded to `min..=max`.
#[derive(Debug, Clone)]
pub struct KnowledgeField {
	name: String,
	min: i64,
	max: i64,
	rules: RuleChain<i64>,
}

impl KnowledgeField {
	pub fn new(name: String) -> Self {
		Self {
			name,
			min: 1,
			max: 5,
			rules: Self::build_rules(1, 5),
		}
	}

	pub fn with_range(mut self, min: i64, max: i64) -> Self {
		self.min = min;
		self.max = max;
		self.rules = Self::build_rules(min, max);
		self
	}

	pub fn min(&self) -> i64 {
		self.min
	}

	pub fn max(&self) -> i64 {
		self.max
	}

	pub fn rules(&self) -> &RuleChain<i64> {
		&self.rules
	}

	fn build_rules(min: i64, max: i64) -> RuleChain<i64> {
		RuleChain::<i64>::new().check(RangeValidator::new(min, max))
	}
}

impl Field for KnowledgeField {
	type Input = RawKnowledge;
	type Output = i64;

	fn name(&self) -> &str {
		&self.name
	}

	fn clean(&self, value: &RawKnowledge) -> ValidationResult<i64> {
		self.rules.run(value.coerce()?)
	}
}

/// The techs array: per-row title and knowledge plus a minimum row count.
#[derive(Debug, Clone)]
pub struct TechsField {
	name: String,
	min_entries: usize,
	title: TitleField,
	knowledge: KnowledgeField,
}

impl TechsField {
	pub fn new(name: String) -> Self {
		Self {
			name,
			min_entries: 2,
			title: TitleField::new("title".to_string()),
			knowledge: KnowledgeField::new("knowledge".to_string()),
		}
	}

	pub fn with_min_entries(mut self, min_entries: usize) -> Self {
		self.min_entries = min_entries;
		self
	}

	pub fn with_knowledge_range(mut self, min: i64, max: i64) -> Self {
		self.knowledge = self.knowledge.with_range(min, max);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn min_entries(&self) -> usize {
		self.min_entries
	}

	pub fn title(&self) -> &TitleField {
		&self.title
	}

	pub fn knowledge(&self) -> &KnowledgeField {
		&self.knowledge
	}

	/// Validates every row and then the row count.
	///
	/// All failures are collected, each with the path it belongs to.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::TechInput;
	/// use advanced_forms_schema::fields::TechsField;
	///
	/// let field = TechsField::new("techs".to_string());
	/// let techs = field
	///     .clean(&[TechInput::new(" Rust ", 5), TechInput::new("React", "3")])
	///     .unwrap();
	/// assert_eq!(techs[0].title, "Rust");
	/// assert_eq!(techs[1].knowledge, 3);
	///
	/// let errors = field.clean(&[TechInput::new("", 9)]).unwrap_err();
	/// let paths: Vec<String> = errors.iter().map(|(path, _)| path.to_string()).collect();
	/// assert_eq!(paths, ["techs.0.title", "techs.0.knowledge", "techs"]);
	/// ```
	pub fn clean(
		&self,
		rows: &[TechInput],
	) -> Result<Vec<Tech>, Vec<(FieldPath, ValidationError)>> {
		let mut techs = Vec::with_capacity(rows.len());
		let mut errors = Vec::new();

		for (index, row) in rows.iter().enumerate() {
			let element = FieldPath::new(self.name.as_str()).index(index);
			let title = self.title.clean(&row.title);
			let knowledge = self.knowledge.clean(&row.knowledge);

			match (title, knowledge) {
				(Ok(title), Ok(knowledge)) => techs.push(Tech { title, knowledge }),
				(title, knowledge) => {
					if let Err(error) = title {
						errors.push((element.clone().key(self.title.name()), error));
					}
					if let Err(error) = knowledge {
						errors.push((element.key(self.knowledge.name()), error));
					}
				}
			}
		}

		if let Err(error) = MinEntriesValidator::new(self.min_entries).validate(rows) {
			errors.push((FieldPath::new(self.name.as_str()), error));
		}

		if errors.is_empty() {
			Ok(techs)
		} else {
			Err(errors)
		}
	}
}
