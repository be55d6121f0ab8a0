//! Selected files
//!
//! The avatar input holds handles to files picked by the user. Their size
//! may only be known after an I/O round trip (a file on disk, a remote
//! pick), so resolution goes through the async [`FileSource`] trait.

use async_trait::async_trait;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[async_trait]
pub trait FileSource: Send + Sync + fmt::Debug {
	/// Original file name as chosen by the user.
	fn name(&self) -> &str;

	fn content_type(&self) -> Option<&str> {
		None
	}

	async fn size(&self) -> io::Result<u64>;

	async fn read(&self) -> io::Result<Vec<u8>>;
}

/// File whose content is already in memory.
#[derive(Debug, Clone)]
pub struct MemoryFile {
	name: String,
	content_type: Option<String>,
	content: Arc<[u8]>,
}

impl MemoryFile {
	/// # Examples
	///
	/// ```
	/// use advanced_forms_schema::{FileSource, MemoryFile};
	///
	/// let file = MemoryFile::new("avatar.png", vec![0x89, 0x50, 0x4E, 0x47]);
	/// assert_eq!(file.name(), "avatar.png");
	/// ```
	pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
		let content: Vec<u8> = content.into();
		Self {
			name: name.into(),
			content_type: None,
			content: Arc::from(content),
		}
	}

	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}
}

#[async_trait]
impl FileSource for MemoryFile {
	fn name(&self) -> &str {
		&self.name
	}

	fn content_type(&self) -> Option<&str> {
		self.content_type.as_deref()
	}

	async fn size(&self) -> io::Result<u64> {
		Ok(self.content.len() as u64)
	}

	async fn read(&self) -> io::Result<Vec<u8>> {
		Ok(self.content.to_vec())
	}
}

/// File on the local file system, resolved lazily.
#[derive(Debug, Clone)]
pub struct LocalFile {
	path: PathBuf,
	name: String,
	content_type: Option<String>,
}

impl LocalFile {
	/// The file name defaults to the last component of `path`.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let name = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default();
		Self {
			path,
			name,
			content_type: None,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

#[async_trait]
impl FileSource for LocalFile {
	fn name(&self) -> &str {
		&self.name
	}

	fn content_type(&self) -> Option<&str> {
		self.content_type.as_deref()
	}

	async fn size(&self) -> io::Result<u64> {
		let metadata = tokio::fs::metadata(&self.path).await?;
		if !metadata.is_file() {
			return Err(io::Error::new(
				io::ErrorKind::InvalidInput,
				format!("{} is not a regular file", self.path.display()),
			));
		}
		Ok(metadata.len())
	}

	async fn read(&self) -> io::Result<Vec<u8>> {
		tokio::fs::read(&self.path).await
	}
}

/// Cheaply clonable handle to a selected file.
#[derive(Clone)]
pub struct SelectedFile(Arc<dyn FileSource>);

impl SelectedFile {
	pub fn new(source: impl FileSource + 'static) -> Self {
		Self(Arc::new(source))
	}

	pub fn from_arc(source: Arc<dyn FileSource>) -> Self {
		Self(source)
	}

	pub fn source(&self) -> &dyn FileSource {
		self.0.as_ref()
	}

	pub fn name(&self) -> &str {
		self.0.name()
	}

	pub fn content_type(&self) -> Option<&str> {
		self.0.content_type()
	}

	pub async fn size(&self) -> io::Result<u64> {
		self.0.size().await
	}

	pub async fn read(&self) -> io::Result<Vec<u8>> {
		self.0.read().await
	}
}

impl fmt::Debug for SelectedFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SelectedFile").field(&self.0).finish()
	}
}

/// Two handles are equal when they point at the same source.
impl PartialEq for SelectedFile {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl<F: FileSource + 'static> From<F> for SelectedFile {
	fn from(source: F) -> Self {
		Self::new(source)
	}
}

/// A selected file whose size has been resolved and checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFile {
	file: SelectedFile,
	size: u64,
}

impl ResolvedFile {
	pub fn new(file: SelectedFile, size: u64) -> Self {
		Self { file, size }
	}

	pub fn name(&self) -> &str {
		self.file.name()
	}

	pub fn content_type(&self) -> Option<&str> {
		self.file.content_type()
	}

	pub fn size(&self) -> u64 {
		self.size
	}

	pub fn file(&self) -> &SelectedFile {
		&self.file
	}

	pub async fn read(&self) -> io::Result<Vec<u8>> {
		self.file.read().await
	}
}

impl Serialize for ResolvedFile {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("ResolvedFile", 2)?;
		state.serialize_field("name", self.name())?;
		state.serialize_field("size", &self.size)?;
		state.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	#[tokio::test]
	async fn test_memory_file_reports_size() {
		// Arrange
		let file = MemoryFile::new("avatar.png", vec![1u8; 2048]).with_content_type("image/png");

		// Act
		let size = file.size().await.unwrap();

		// Assert
		assert_eq!(size, 2048);
		assert_eq!(file.content_type(), Some("image/png"));
		assert_eq!(file.read().await.unwrap().len(), 2048);
	}

	#[rstest]
	#[tokio::test]
	async fn test_local_file_resolves_from_disk() {
		// Arrange
		let mut temp = tempfile::NamedTempFile::new().unwrap();
		temp.write_all(b"hello avatar").unwrap();
		let file = LocalFile::new(temp.path()).with_name("me.jpg");

		// Act
		let size = file.size().await.unwrap();
		let content = file.read().await.unwrap();

		// Assert
		assert_eq!(file.name(), "me.jpg");
		assert_eq!(size, 12);
		assert_eq!(content, b"hello avatar");
	}

	#[rstest]
	#[tokio::test]
	async fn test_local_file_missing_is_io_error() {
		let file = LocalFile::new("/definitely/not/here/avatar.png");

		assert_eq!(file.name(), "avatar.png");
		assert!(file.size().await.is_err());
	}

	#[rstest]
	#[tokio::test]
	async fn test_local_file_rejects_directories() {
		let dir = tempfile::tempdir().unwrap();
		let file = LocalFile::new(dir.path());

		let error = file.size().await.unwrap_err();

		assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
	}

	#[rstest]
	fn test_selected_file_equality_is_identity() {
		let a = SelectedFile::new(MemoryFile::new("a.png", vec![1]));
		let b = SelectedFile::new(MemoryFile::new("a.png", vec![1]));

		assert_eq!(a, a.clone());
		assert_ne!(a, b);
	}

	#[rstest]
	fn test_resolved_file_serializes_name_and_size() {
		let file = SelectedFile::new(MemoryFile::new("me.png", vec![0; 10]));
		let resolved = ResolvedFile::new(file, 10);

		let json = serde_json::to_value(&resolved).unwrap();

		assert_eq!(json, serde_json::json!({ "name": "me.png", "size": 10 }));
	}
}
