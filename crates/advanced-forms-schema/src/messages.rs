//! Message catalogs
//!
//! A catalog maps `(field, kind)` to a message template. Templates may
//! reference the error's context with `{min}`, `{max}`, `{length}`,
//! `{value}`, `{size}`, `{count}`, `{domain}` and `{max_mib}`. Lookups that
//! miss fall back to the error's own English `Display` text.

use crate::path::FieldPath;
use crate::settings::Locale;
use advanced_forms_validators::{ErrorKind, ValidationError};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	templates: HashMap<(String, ErrorKind), String>,
}

impl MessageCatalog {
	/// The default catalog: every message comes from the error itself.
	pub fn english() -> Self {
		Self::default()
	}

	/// Brazilian-Portuguese messages used by the published form.
	pub fn portuguese() -> Self {
		Self::default()
			.with_message("avatar", ErrorKind::MissingFile, "O avatar é obrigatório")
			.with_message(
				"avatar",
				ErrorKind::FileTooLarge,
				"O arquivo precisa ter no máximo {max_mib}MB",
			)
			.with_message(
				"avatar",
				ErrorKind::UnreadableFile,
				"Não foi possível ler o arquivo selecionado",
			)
			.with_message("name", ErrorKind::RequiredField, "O nome é obrigatório")
			.with_message("email", ErrorKind::RequiredField, "O e-mail é obrigatório")
			.with_message("email", ErrorKind::InvalidFormat, "Formato de e-mail inválido")
			.with_message(
				"email",
				ErrorKind::DomainNotAllowed,
				"O e-mail precisa ser do domínio @{domain}",
			)
			.with_message(
				"password",
				ErrorKind::TooShort,
				"A senha precisa de no mínimo {min} caracteres",
			)
			.with_message(
				"password",
				ErrorKind::TooLong,
				"A senha deve ter no máximo {max} caracteres",
			)
			.with_message("techs.title", ErrorKind::RequiredField, "O título é obrigatório")
			.with_message(
				"techs.knowledge",
				ErrorKind::InvalidNumber,
				"O conhecimento precisa ser um número inteiro",
			)
			.with_message(
				"techs.knowledge",
				ErrorKind::OutOfRange,
				"O conhecimento precisa estar entre {min} e {max}",
			)
			.with_message(
				"techs",
				ErrorKind::TooFewEntries,
				"Pelo menos {min} tecnologias devem ser informadas",
			)
	}

	pub fn for_locale(locale: Locale) -> Self {
		match locale {
			Locale::En => Self::english(),
			Locale::PtBr => Self::portuguese(),
		}
	}

	/// Sets the template for `kind` failures on `field`.
	///
	/// `field` is a path without indices, e.g. `techs.title`.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::{FieldPath, MessageCatalog};
	/// use advanced_forms_validators::{ErrorKind, ValidationError};
	///
	/// let catalog = MessageCatalog::english()
	///     .with_message("password", ErrorKind::TooShort, "Use {min}+ characters");
	/// let message = catalog.render(
	///     &FieldPath::new("password"),
	///     &ValidationError::TooShort { length: 2, min: 6 },
	/// );
	/// assert_eq!(message, "Use 6+ characters");
	/// ```
	pub fn with_message(
		mut self,
		field: impl Into<String>,
		kind: ErrorKind,
		template: impl Into<String>,
	) -> Self {
		self.templates.insert((field.into(), kind), template.into());
		self
	}

	/// Message to display for `error` at `path`.
	pub fn render(&self, path: &FieldPath, error: &ValidationError) -> String {
		match self.templates.get(&(path.catalog_key(), error.kind())) {
			Some(template) => fill(template, error),
			None => error.to_string(),
		}
	}

	pub fn len(&self) -> usize {
		self.templates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}
}

fn fill(template: &str, error: &ValidationError) -> String {
	placeholders(error)
		.into_iter()
		.fold(template.to_string(), |message, (name, value)| {
			message.replace(&format!("{{{}}}", name), &value)
		})
}

fn placeholders(error: &ValidationError) -> Vec<(&'static str, String)> {
	match error {
		ValidationError::RequiredField
		| ValidationError::InvalidFormat
		| ValidationError::MissingFile => vec![],
		ValidationError::DomainNotAllowed { domain } => vec![("domain", domain.clone())],
		ValidationError::TooShort { length, min } => {
			vec![("length", length.to_string()), ("min", min.to_string())]
		}
		ValidationError::TooLong { length, max } => {
			vec![("length", length.to_string()), ("max", max.to_string())]
		}
		ValidationError::FileTooLarge { size, max } => vec![
			("size", size.to_string()),
			("max_mib", format_mib(*max)),
			("max", max.to_string()),
		],
		ValidationError::UnreadableFile(reason) => vec![("reason", reason.clone())],
		ValidationError::InvalidNumber(raw) => vec![("value", raw.clone())],
		ValidationError::OutOfRange { value, min, max } => vec![
			("value", value.to_string()),
			("min", min.to_string()),
			("max", max.to_string()),
		],
		ValidationError::TooFewEntries { count, min } => {
			vec![("count", count.to_string()), ("min", min.to_string())]
		}
	}
}

fn format_mib(bytes: u64) -> String {
	const MIB: u64 = 1024 * 1024;
	if bytes % MIB == 0 {
		(bytes / MIB).to_string()
	} else {
		format!("{:.1}", bytes as f64 / MIB as f64)
	}
}
