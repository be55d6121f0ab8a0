//! Avatar file field

use crate::file::{ResolvedFile, SelectedFile};
use advanced_forms_validators::{
	MAX_AVATAR_BYTES, MaxFileSizeValidator, ValidationError, ValidationResult, Validator,
};

/// Avatar upload: a file must be selected and be at most `max_size` bytes.
///
/// Only the first selected file is considered. Its name is not checked;
/// an unnamed file is still a selected file. Resolving its size may
/// touch the file system, so cleaning is async and does not implement
/// [`Field`](crate::Field).
#[derive(Debug, Clone)]
pub struct AvatarField {
	name: String,
	max_size: u64,
}

impl AvatarField {
	pub fn new(name: String) -> Self {
		Self {
			name,
			max_size: MAX_AVATAR_BYTES,
		}
	}

	pub fn with_max_size(mut self, max_size: u64) -> Self {
		self.max_size = max_size;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn max_size(&self) -> u64 {
		self.max_size
	}

	/// # Examples
	///
	/// ```
	/// # tokio_test::block_on(async {
	/// use advanced_forms_schema::fields::AvatarField;
	/// use advanced_forms_schema::{MemoryFile, SelectedFile};
	///
	/// let field = AvatarField::new("avatar".to_string());
	/// let files = vec![SelectedFile::new(MemoryFile::new("me.png", vec![0u8; 64]))];
	///
	/// let resolved = field.clean(&files).await.unwrap();
	/// assert_eq!(resolved.size(), 64);
	/// assert!(field.clean(&[]).await.is_err());
	/// # });
	/// ```
	pub async fn clean(&self, files: &[SelectedFile]) -> ValidationResult<ResolvedFile> {
		let file = files.first().ok_or(ValidationError::MissingFile)?;

		let size = file
			.size()
			.await
			.map_err(|e| ValidationError::UnreadableFile(e.to_string()))?;
		MaxFileSizeValidator::new(self.max_size).validate(&size)?;

		Ok(ResolvedFile::new(file.clone(), size))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::file::{LocalFile, MemoryFile};
	use advanced_forms_validators::ErrorKind;
	use rstest::*;

	#[fixture]
	fn field() -> AvatarField {
		AvatarField::new("avatar".to_string())
	}

	fn selected(name: &str, size: usize) -> SelectedFile {
		SelectedFile::new(MemoryFile::new(name, vec![0u8; size]))
	}

	#[rstest]
	#[tokio::test]
	async fn test_missing_file(field: AvatarField) {
		assert_eq!(field.clean(&[]).await, Err(ValidationError::MissingFile));
	}

	#[rstest]
	#[tokio::test]
	async fn test_unnamed_file_is_accepted(field: AvatarField) {
		// Arrange
		let files = vec![selected("", 10)];

		// Act
		let resolved = field.clean(&files).await.unwrap();

		// Assert
		assert_eq!(resolved.name(), "");
		assert_eq!(resolved.size(), 10);
	}

	#[rstest]
	#[case(MAX_AVATAR_BYTES as usize, true)]
	#[case(MAX_AVATAR_BYTES as usize + 1, false)]
	#[tokio::test]
	async fn test_size_ceiling_is_inclusive(
		field: AvatarField,
		#[case] size: usize,
		#[case] accepted: bool,
	) {
		// Arrange
		let files = vec![selected("big.png", size)];

		// Act
		let result = field.clean(&files).await;

		// Assert
		assert_eq!(result.is_ok(), accepted);
		if let Err(error) = result {
			assert_eq!(
				error,
				ValidationError::FileTooLarge {
					size: size as u64,
					max: MAX_AVATAR_BYTES
				}
			);
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_only_first_file_is_used(field: AvatarField) {
		let files = vec![selected("first.png", 8), selected("second.png", 16)];

		let resolved = field.clean(&files).await.unwrap();

		assert_eq!(resolved.name(), "first.png");
		assert_eq!(resolved.file(), &files[0]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_unreadable_file(field: AvatarField) {
		let files = vec![SelectedFile::new(LocalFile::new(
			"/definitely/not/here/avatar.png",
		))];

		let error = field.clean(&files).await.unwrap_err();

		assert_eq!(error.kind(), ErrorKind::UnreadableFile);
	}

	#[rstest]
	#[tokio::test]
	async fn test_custom_max_size() {
		let field = AvatarField::new("avatar".to_string()).with_max_size(4);

		assert!(field.clean(&[selected("a.png", 4)]).await.is_ok());
		assert!(field.clean(&[selected("a.png", 5)]).await.is_err());
	}
}
