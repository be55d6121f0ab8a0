//! Schema settings
//!
//! Every limit the create-user schema enforces lives here, with defaults
//! matching the published form: 5 MiB avatars, `@gmail.com` addresses,
//! 6–12 character passwords, knowledge levels 1–5 and at least two techs.
//!
//! Settings can be overridden from `FORMS_`-prefixed environment variables
//! or from a JSON document with the same shape.

use advanced_forms_validators::MAX_AVATAR_BYTES;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Prefix of every environment variable read by [`SchemaSettings::from_env`].
pub const ENV_PREFIX: &str = "FORMS_";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Invalid value for {key}: {reason}")]
	Parse { key: String, reason: String },
	#[error("Invalid settings: {0}")]
	Invalid(String),
	#[error("Malformed settings document: {0}")]
	Json(#[from] serde_json::Error),
}

/// Language of the messages attached to validation errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
	#[default]
	#[serde(rename = "en")]
	En,
	#[serde(rename = "pt-BR")]
	PtBr,
}

impl FromStr for Locale {
	type Err = SettingsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().replace('_', "-").as_str() {
			"en" | "en-us" => Ok(Locale::En),
			"pt-br" | "pt" => Ok(Locale::PtBr),
			_ => Err(SettingsError::Parse {
				key: format!("{}LOCALE", ENV_PREFIX),
				reason: format!("unknown locale {:?}", s),
			}),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSettings {
	pub max_avatar_bytes: u64,
	pub allowed_email_domain: String,
	pub email_domain_case_sensitive: bool,
	pub password_min_length: usize,
	pub password_max_length: usize,
	pub knowledge_min: i64,
	pub knowledge_max: i64,
	pub min_techs: usize,
	pub locale: Locale,
}

impl Default for SchemaSettings {
	fn default() -> Self {
		Self {
			max_avatar_bytes: MAX_AVATAR_BYTES,
			allowed_email_domain: "gmail.com".to_string(),
			email_domain_case_sensitive: true,
			password_min_length: 6,
			password_max_length: 12,
			knowledge_min: 1,
			knowledge_max: 5,
			min_techs: 2,
			locale: Locale::En,
		}
	}
}

impl SchemaSettings {
	/// Load settings from the process environment.
	///
	/// # Environment Variables
	///
	/// All variables are optional; unset ones keep their default.
	///
	/// - `FORMS_MAX_AVATAR_BYTES`
	/// - `FORMS_ALLOWED_EMAIL_DOMAIN`
	/// - `FORMS_EMAIL_DOMAIN_CASE_SENSITIVE` (`true`/`false`/`1`/`0`/`yes`/`no`)
	/// - `FORMS_PASSWORD_MIN_LENGTH`, `FORMS_PASSWORD_MAX_LENGTH`
	/// - `FORMS_KNOWLEDGE_MIN`, `FORMS_KNOWLEDGE_MAX`
	/// - `FORMS_MIN_TECHS`
	/// - `FORMS_LOCALE` (`en` or `pt-BR`)
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Load settings through an arbitrary variable lookup.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::SchemaSettings;
	/// use std::collections::HashMap;
	///
	/// let vars = HashMap::from([("FORMS_MIN_TECHS", "3")]);
	/// let settings = SchemaSettings::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
	/// assert_eq!(settings.min_techs, 3);
	/// assert_eq!(settings.password_min_length, 6);
	/// ```
	pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |name: &str| {
			let key = format!("{}{}", ENV_PREFIX, name);
			lookup(&key).map(|value| (key, value))
		};

		let mut settings = Self::default();
		if let Some((key, value)) = get("MAX_AVATAR_BYTES") {
			settings.max_avatar_bytes = parse(&key, &value)?;
		}
		if let Some((_, value)) = get("ALLOWED_EMAIL_DOMAIN") {
			settings.allowed_email_domain = value.trim().to_string();
		}
		if let Some((key, value)) = get("EMAIL_DOMAIN_CASE_SENSITIVE") {
			settings.email_domain_case_sensitive = parse_bool(&key, &value)?;
		}
		if let Some((key, value)) = get("PASSWORD_MIN_LENGTH") {
			settings.password_min_length = parse(&key, &value)?;
		}
		if let Some((key, value)) = get("PASSWORD_MAX_LENGTH") {
			settings.password_max_length = parse(&key, &value)?;
		}
		if let Some((key, value)) = get("KNOWLEDGE_MIN") {
			settings.knowledge_min = parse(&key, &value)?;
		}
		if let Some((key, value)) = get("KNOWLEDGE_MAX") {
			settings.knowledge_max = parse(&key, &value)?;
		}
		if let Some((key, value)) = get("MIN_TECHS") {
			settings.min_techs = parse(&key, &value)?;
		}
		if let Some((_, value)) = get("LOCALE") {
			settings.locale = value.parse()?;
		}

		settings.validate_settings()?;
		Ok(settings)
	}

	/// Load settings from a JSON document. Missing keys keep their default.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::{Locale, SchemaSettings};
	///
	/// let settings = SchemaSettings::from_json(r#"{ "locale": "pt-BR", "knowledge_max": 10 }"#).unwrap();
	/// assert_eq!(settings.locale, Locale::PtBr);
	/// assert_eq!(settings.knowledge_max, 10);
	/// ```
	pub fn from_json(document: &str) -> Result<Self, SettingsError> {
		let settings: Self = serde_json::from_str(document)?;
		settings.validate_settings()?;
		Ok(settings)
	}

	/// Reject combinations no input could ever satisfy.
	pub fn validate_settings(&self) -> Result<(), SettingsError> {
		if self.password_min_length > self.password_max_length {
			return Err(SettingsError::Invalid(format!(
				"password_min_length ({}) exceeds password_max_length ({})",
				self.password_min_length, self.password_max_length
			)));
		}
		if self.knowledge_min > self.knowledge_max {
			return Err(SettingsError::Invalid(format!(
				"knowledge_min ({}) exceeds knowledge_max ({})",
				self.knowledge_min, self.knowledge_max
			)));
		}
		if self.max_avatar_bytes == 0 {
			return Err(SettingsError::Invalid(
				"max_avatar_bytes must be greater than zero".to_string(),
			));
		}
		let domain = self.allowed_email_domain.trim_start_matches('@');
		if domain.is_empty() || !domain.contains('.') {
			return Err(SettingsError::Invalid(format!(
				"allowed_email_domain {:?} is not a domain",
				self.allowed_email_domain
			)));
		}
		Ok(())
	}
}

fn parse<T>(key: &str, value: &str) -> Result<T, SettingsError>
where
	T: FromStr,
	T::Err: std::fmt::Display,
{
	value.trim().parse().map_err(|e: T::Err| SettingsError::Parse {
		key: key.to_string(),
		reason: e.to_string(),
	})
}

fn parse_bool(key: &str, value: &str) -> Result<bool, SettingsError> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		other => Err(SettingsError::Parse {
			key: key.to_string(),
			reason: format!("expected a boolean, got {:?}", other),
		}),
	}
}
