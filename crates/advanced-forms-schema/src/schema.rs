//! The create-user schema
//!
//! [`CreateUserSchema`] composes the per-field cleaners into one shape and
//! resolves it against a [`FormInput`]. Fields are validated independently
//! and every failure is collected; nothing short-circuits across fields.

use crate::error_map::ErrorMap;
use crate::field::Field;
use crate::fields::{AvatarField, EmailField, NameField, PasswordField, TechsField};
use crate::input::FormInput;
use crate::messages::MessageCatalog;
use crate::output::FormOutput;
use crate::path::FieldPath;
use crate::settings::{Locale, SchemaSettings};
use advanced_forms_validators::{ValidationError, ValidationResult};
use std::sync::LazyLock;

pub const AVATAR: &str = "avatar";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const TECHS: &str = "techs";

static DEFAULT_SCHEMA: LazyLock<CreateUserSchema> = LazyLock::new(CreateUserSchema::default);

#[derive(Debug, Clone)]
pub struct CreateUserSchema {
	avatar: AvatarField,
	name: NameField,
	email: EmailField,
	password: PasswordField,
	techs: TechsField,
	locale: Locale,
	messages: MessageCatalog,
}

impl CreateUserSchema {
	/// Builds the schema from `settings`, with messages in the configured locale.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::{CreateUserSchema, SchemaSettings};
	///
	/// let settings = SchemaSettings {
	///     min_techs: 1,
	///     ..SchemaSettings::default()
	/// };
	/// let schema = CreateUserSchema::new(&settings);
	/// assert_eq!(schema.settings_summary().min_techs, 1);
	/// ```
	pub fn new(settings: &SchemaSettings) -> Self {
		let email = EmailField::new(EMAIL.to_string()).with_domain(
			settings
				.allowed_email_domain
				.trim_start_matches('@')
				.to_string(),
		);
		let email = if settings.email_domain_case_sensitive {
			email
		} else {
			email.domain_case_insensitive()
		};

		Self {
			avatar: AvatarField::new(AVATAR.to_string()).with_max_size(settings.max_avatar_bytes),
			name: NameField::new(NAME.to_string()),
			email,
			password: PasswordField::new(PASSWORD.to_string())
				.with_min_length(settings.password_min_length)
				.with_max_length(settings.password_max_length),
			techs: TechsField::new(TECHS.to_string())
				.with_min_entries(settings.min_techs)
				.with_knowledge_range(settings.knowledge_min, settings.knowledge_max),
			locale: settings.locale,
			messages: MessageCatalog::for_locale(settings.locale),
		}
	}

	/// Replaces the message catalog.
	pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
		self.messages = messages;
		self
	}

	pub fn messages(&self) -> &MessageCatalog {
		&self.messages
	}

	/// The settings this schema was built from, read back from its fields.
	pub fn settings_summary(&self) -> SchemaSettings {
		SchemaSettings {
			max_avatar_bytes: self.avatar.max_size(),
			allowed_email_domain: self.email.domain().to_string(),
			email_domain_case_sensitive: self.email.domain_case_sensitive(),
			password_min_length: self.password.min_length(),
			password_max_length: self.password.max_length(),
			knowledge_min: self.techs.knowledge().min(),
			knowledge_max: self.techs.knowledge().max(),
			min_techs: self.techs.min_entries(),
			locale: self.locale,
		}
	}

	/// Validates and transforms `input`.
	///
	/// Returns the typed output when every rule passes, otherwise the
	/// error of every failing field path.
	///
	/// # Examples
	///
	/// ```
	/// # tokio_test::block_on(async {
	/// use advanced_forms_schema::{CreateUserSchema, FormInput, MemoryFile};
	///
	/// let input = FormInput::new()
	///     .with_avatar(MemoryFile::new("me.png", vec![0u8; 32]))
	///     .with_name("  ana  paula ")
	///     .with_email("ana@gmail.com")
	///     .with_password("secret1")
	///     .with_tech("Rust", 5)
	///     .with_tech("React", "3");
	///
	/// let output = CreateUserSchema::default().validate(&input).await.unwrap();
	/// assert_eq!(output.name(), "Ana Paula");
	/// assert_eq!(output.techs()[1].knowledge, 3);
	/// # });
	/// ```
	pub async fn validate(&self, input: &FormInput) -> Result<FormOutput, ErrorMap> {
		tracing::debug!(
			techs = input.techs.len(),
			files = input.avatar.len(),
			"Validating create-user form"
		);

		let mut errors = ErrorMap::new();

		let avatar = self.avatar.clean(&input.avatar).await;
		let avatar = self.collect(&mut errors, FieldPath::new(AVATAR), avatar);
		let name = self.name.clean(&input.name);
		let name = self.collect(&mut errors, FieldPath::new(NAME), name);
		let email = self.email.clean(&input.email);
		let email = self.collect(&mut errors, FieldPath::new(EMAIL), email);
		let password = self.password.clean(&input.password);
		let password = self.collect(&mut errors, FieldPath::new(PASSWORD), password);

		let techs = match self.techs.clean(&input.techs) {
			Ok(techs) => Some(techs),
			Err(failures) => {
				for (path, error) in failures {
					self.record(&mut errors, &path, error);
				}
				None
			}
		};

		match (avatar, name, email, password, techs) {
			(Some(avatar), Some(name), Some(email), Some(password), Some(techs))
				if errors.is_empty() =>
			{
				tracing::debug!("Create-user form is valid");
				Ok(FormOutput {
					avatar,
					name,
					email,
					password,
					techs,
				})
			}
			_ => {
				tracing::debug!(errors = errors.len(), "Create-user form is invalid");
				Err(errors)
			}
		}
	}

	fn collect<T>(
		&self,
		errors: &mut ErrorMap,
		path: FieldPath,
		result: ValidationResult<T>,
	) -> Option<T> {
		match result {
			Ok(value) => Some(value),
			Err(error) => {
				self.record(errors, &path, error);
				None
			}
		}
	}

	fn record(&self, errors: &mut ErrorMap, path: &FieldPath, error: ValidationError) {
		tracing::debug!(path = %path, kind = %error.kind(), "Field failed validation");
		let message = self.messages.render(path, &error);
		errors.insert(path, error, message);
	}
}

impl Default for CreateUserSchema {
	fn default() -> Self {
		Self::new(&SchemaSettings::default())
	}
}

/// Validates `input` against the default create-user schema.
pub async fn validate(input: &FormInput) -> Result<FormOutput, ErrorMap> {
	DEFAULT_SCHEMA.validate(input).await
}
