//! Typed, transformed result of a successful validation.

use crate::file::ResolvedFile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tech {
	pub title: String,
	pub knowledge: i64,
}

/// Fully validated create-user payload.
///
/// Only the schema constructs this type, and only once every rule passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormOutput {
	pub(crate) avatar: ResolvedFile,
	pub(crate) name: String,
	pub(crate) email: String,
	pub(crate) password: String,
	pub(crate) techs: Vec<Tech>,
}

impl FormOutput {
	pub fn avatar(&self) -> &ResolvedFile {
		&self.avatar
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn email(&self) -> &str {
		&self.email
	}

	pub fn password(&self) -> &str {
		&self.password
	}

	pub fn techs(&self) -> &[Tech] {
		&self.techs
	}

	/// Two-space indented JSON, as echoed back after a submission.
	pub fn to_pretty_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}
