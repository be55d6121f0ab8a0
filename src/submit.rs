//! Submission hand-off
//!
//! Once a form is valid its avatar is uploaded to the configured storage
//! backend and the payload is echoed back as pretty-printed JSON. Nothing
//! is uploaded for an invalid form, and failed uploads are not retried.

use advanced_forms_schema::{CreateUserSchema, ErrorMap, FormInput, FormOutput};
use advanced_forms_storages::{StorageBackend, StorageError};
use std::sync::Arc;
use thiserror::Error;

/// Name used when the avatar's file name has no usable last component.
const FALLBACK_KEY: &str = "avatar";

#[derive(Debug, Error)]
pub enum SubmissionError {
	#[error("Submission failed: could not read the avatar: {0}")]
	Read(#[source] std::io::Error),

	#[error(
		"Submission failed: the avatar changed after validation ({expected} bytes validated, {actual} bytes read)"
	)]
	SizeMismatch { expected: u64, actual: u64 },

	#[error("Submission failed: {0}")]
	Storage(#[from] StorageError),

	#[error("Submission failed: could not encode the payload: {0}")]
	Payload(#[from] serde_json::Error),
}

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
	/// Name the avatar was stored under
	pub key: String,
	pub bucket: String,
	/// Number of avatar bytes uploaded
	pub size: u64,
	/// The submitted data as 2-space indented JSON
	pub payload: String,
}

/// Storage key for an uploaded file.
///
/// Keeps the last path component of `file_name`, whichever separator the
/// client used, so the upload always lands at the top of the bucket. A
/// last component that is empty, `.` or `..` yields `avatar`.
///
/// # Examples
///
/// ```
/// use advanced_forms::avatar_key;
///
/// assert_eq!(avatar_key("me.png"), "me.png");
/// assert_eq!(avatar_key("C:\\Users\\ana\\me.png"), "me.png");
/// assert_eq!(avatar_key("photos/2024/me.png"), "me.png");
/// assert_eq!(avatar_key("dir/"), "avatar");
/// ```
pub fn avatar_key(file_name: &str) -> String {
	let last = file_name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
	match last {
		"" | "." | ".." => FALLBACK_KEY.to_string(),
		name => name.to_string(),
	}
}

/// Uploads validated forms to a storage backend.
#[derive(Clone)]
pub struct SubmissionHandler {
	storage: Arc<dyn StorageBackend>,
}

impl SubmissionHandler {
	pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
		Self { storage }
	}

	pub fn storage(&self) -> &Arc<dyn StorageBackend> {
		&self.storage
	}

	/// Uploads the avatar of `output` and renders the payload.
	///
	/// The avatar must still have the size it was validated with; a file
	/// that changed in between is rejected before anything is stored.
	pub async fn submit(&self, output: &FormOutput) -> Result<SubmissionReceipt, SubmissionError> {
		let payload = output.to_pretty_json()?;
		let avatar = output.avatar();
		let content = avatar.read().await.map_err(SubmissionError::Read)?;
		let key = avatar_key(avatar.name());

		let actual = content.len() as u64;
		if actual != avatar.size() {
			tracing::warn!(
				key = %key,
				expected = avatar.size(),
				actual,
				"Avatar changed after validation"
			);
			return Err(SubmissionError::SizeMismatch {
				expected: avatar.size(),
				actual,
			});
		}

		let key = match self.storage.save(&key, &content).await {
			Ok(key) => key,
			Err(e) => {
				tracing::warn!(
					key = %key,
					bucket = self.storage.bucket(),
					error = %e,
					"Avatar upload failed"
				);
				return Err(e.into());
			}
		};

		tracing::info!(
			key = %key,
			bucket = self.storage.bucket(),
			size = content.len(),
			"Avatar uploaded"
		);

		Ok(SubmissionReceipt {
			key,
			bucket: self.storage.bucket().to_string(),
			size: content.len() as u64,
			payload,
		})
	}
}

impl std::fmt::Debug for SubmissionHandler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SubmissionHandler")
			.field("bucket", &self.storage.bucket())
			.finish()
	}
}

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
	/// The form did not validate; nothing was uploaded.
	Invalid(ErrorMap),
	/// The form validated but the upload failed.
	Failed(SubmissionError),
	Submitted(SubmissionReceipt),
}

impl SubmitOutcome {
	pub fn is_submitted(&self) -> bool {
		matches!(self, SubmitOutcome::Submitted(_))
	}

	pub fn errors(&self) -> Option<&ErrorMap> {
		match self {
			SubmitOutcome::Invalid(errors) => Some(errors),
			_ => None,
		}
	}

	pub fn receipt(&self) -> Option<&SubmissionReceipt> {
		match self {
			SubmitOutcome::Submitted(receipt) => Some(receipt),
			_ => None,
		}
	}
}

/// Validates `input` and submits it only when every rule passes.
pub async fn handle_submit(
	schema: &CreateUserSchema,
	input: &FormInput,
	handler: &SubmissionHandler,
) -> SubmitOutcome {
	let output = match schema.validate(input).await {
		Ok(output) => output,
		Err(errors) => return SubmitOutcome::Invalid(errors),
	};

	match handler.submit(&output).await {
		Ok(receipt) => SubmitOutcome::Submitted(receipt),
		Err(error) => SubmitOutcome::Failed(error),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("me.png", "me.png")]
	#[case("/tmp/uploads/me.png", "me.png")]
	#[case("a\\b\\c.jpg", "c.jpg")]
	#[case("../../etc/passwd", "passwd")]
	#[case("photo/..", "avatar")]
	#[case("photos/.", "avatar")]
	#[case("photos/ ", "avatar")]
	#[case("..", "avatar")]
	#[case("", "avatar")]
	fn test_avatar_key(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(avatar_key(name), expected);
	}

	#[rstest]
	fn test_storage_error_is_generic_failure() {
		let error = SubmissionError::from(StorageError::NotFound("x".to_string()));

		assert_eq!(error.to_string(), "Submission failed: File not found: x");
	}

	#[rstest]
	fn test_size_mismatch_message() {
		let error = SubmissionError::SizeMismatch {
			expected: 1024,
			actual: 2048,
		};

		assert_eq!(
			error.to_string(),
			"Submission failed: the avatar changed after validation (1024 bytes validated, 2048 bytes read)"
		);
	}
}
