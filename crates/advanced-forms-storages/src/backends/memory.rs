//! In-memory storage backend implementation.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

pub use crate::config::MemoryConfig;
use crate::{Result, StorageBackend, StorageError};

/// Keeps files in a map guarded by a read-write lock.
///
/// Contents are lost when the backend is dropped.
///
/// # Examples
///
/// ```
/// # tokio_test::block_on(async {
/// use advanced_forms_storages::StorageBackend;
/// use advanced_forms_storages::backends::memory::{MemoryConfig, MemoryStorage};
///
/// let storage = MemoryStorage::new(MemoryConfig {
///     bucket: "advanced-forms".to_string(),
///     quota_bytes: Some(4),
/// });
/// storage.save("a.bin", b"1234").await.unwrap();
/// assert!(storage.save("b.bin", b"5").await.is_err());
/// # });
/// ```
#[derive(Debug)]
pub struct MemoryStorage {
	bucket: String,
	quota_bytes: Option<u64>,
	files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
	pub fn new(config: MemoryConfig) -> Self {
		Self {
			bucket: config.bucket,
			quota_bytes: config.quota_bytes,
			files: RwLock::new(HashMap::new()),
		}
	}

	/// Total number of bytes currently stored.
	pub fn used_bytes(&self) -> u64 {
		self.files
			.read()
			.values()
			.map(|content| content.len() as u64)
			.sum()
	}

	pub fn len(&self) -> usize {
		self.files.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.read().is_empty()
	}

	fn normalize(name: &str) -> Result<String> {
		let segments: Vec<&str> = name
			.split('/')
			.filter(|segment| !segment.is_empty() && *segment != ".")
			.collect();
		if segments.is_empty() || segments.contains(&"..") || name.starts_with('/') {
			return Err(StorageError::InvalidName(name.to_string()));
		}
		Ok(segments.join("/"))
	}

	fn with_file<T>(&self, name: &str, f: impl FnOnce(&Vec<u8>) -> T) -> Result<T> {
		let key = Self::normalize(name)?;
		self.files
			.read()
			.get(&key)
			.map(f)
			.ok_or_else(|| StorageError::NotFound(name.to_string()))
	}
}

impl Default for MemoryStorage {
	fn default() -> Self {
		Self::new(MemoryConfig {
			bucket: crate::DEFAULT_BUCKET.to_string(),
			quota_bytes: None,
		})
	}
}

#[async_trait]
impl StorageBackend for MemoryStorage {
	fn bucket(&self) -> &str {
		&self.bucket
	}

	async fn save(&self, name: &str, content: &[u8]) -> Result<String> {
		let key = Self::normalize(name)?;
		let mut files = self.files.write();

		if let Some(quota) = self.quota_bytes {
			let used: u64 = files
				.iter()
				.filter(|(existing, _)| **existing != key)
				.map(|(_, stored)| stored.len() as u64)
				.sum();
			let requested = content.len() as u64;
			let available = quota.saturating_sub(used);
			if requested > available {
				return Err(StorageError::QuotaExceeded {
					requested,
					available,
				});
			}
		}

		files.insert(key, content.to_vec());
		Ok(name.to_string())
	}

	async fn open(&self, name: &str) -> Result<Vec<u8>> {
		self.with_file(name, |stored| stored.clone())
	}

	async fn delete(&self, name: &str) -> Result<()> {
		let key = Self::normalize(name)?;
		self.files
			.write()
			.remove(&key)
			.map(|_| ())
			.ok_or_else(|| StorageError::NotFound(name.to_string()))
	}

	async fn exists(&self, name: &str) -> Result<bool> {
		let key = Self::normalize(name)?;
		Ok(self.files.read().contains_key(&key))
	}

	async fn size(&self, name: &str) -> Result<u64> {
		self.with_file(name, |stored| stored.len() as u64)
	}
}
