//! Storage backend trait definition.

use crate::Result;
use async_trait::async_trait;

/// Unified interface over every storage backend.
///
/// Names are relative to the backend's bucket. Nested names such as
/// `avatars/me.png` are allowed; names escaping the bucket are not.
///
/// # Examples
///
/// ```rust,no_run
/// use advanced_forms_storages::{Result, StorageBackend};
///
/// async fn example(storage: &dyn StorageBackend) -> Result<()> {
///     storage.save("avatar.png", b"\x89PNG").await?;
///
///     if storage.exists("avatar.png").await? {
///         let size = storage.size("avatar.png").await?;
///         println!("Stored {} bytes in {}", size, storage.bucket());
///     }
///
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait StorageBackend: Send + Sync {
	/// Bucket every name is resolved against.
	fn bucket(&self) -> &str;

	/// Save a file, replacing any existing one with the same name.
	///
	/// Returns the name the content was stored under.
	///
	/// # Errors
	///
	/// Returns `StorageError::InvalidName` if `name` escapes the bucket.
	/// Returns `StorageError::QuotaExceeded` if the backend is full.
	async fn save(&self, name: &str, content: &[u8]) -> Result<String>;

	/// Read a file.
	///
	/// # Errors
	///
	/// Returns `StorageError::NotFound` if the file doesn't exist.
	async fn open(&self, name: &str) -> Result<Vec<u8>>;

	/// Delete a file.
	///
	/// # Errors
	///
	/// Returns `StorageError::NotFound` if the file doesn't exist.
	async fn delete(&self, name: &str) -> Result<()>;

	async fn exists(&self, name: &str) -> Result<bool>;

	/// File size in bytes.
	async fn size(&self, name: &str) -> Result<u64>;
}
