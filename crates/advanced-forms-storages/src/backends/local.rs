//! Local file system storage backend implementation.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::config::LocalConfig;
use crate::{Result, StorageBackend, StorageError};

/// Stores files under `<base_path>/<bucket>/`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
	root: PathBuf,
	bucket: String,
}

impl LocalStorage {
	/// Create a new local storage backend.
	///
	/// The bucket directory is created on first save.
	///
	/// # Errors
	///
	/// Returns `StorageError::ConfigError` if the base path does not exist
	/// or is not a directory, or if the bucket name is not a single path
	/// component.
	pub fn new(config: LocalConfig) -> Result<Self> {
		let base_path = PathBuf::from(config.base_path);

		if !base_path.exists() {
			return Err(StorageError::ConfigError(format!(
				"Base path does not exist: {}",
				base_path.display()
			)));
		}

		if !base_path.is_dir() {
			return Err(StorageError::ConfigError(format!(
				"Base path is not a directory: {}",
				base_path.display()
			)));
		}

		let mut components = Path::new(&config.bucket).components();
		if !matches!(
			(components.next(), components.next()),
			(Some(Component::Normal(_)), None)
		) {
			return Err(StorageError::ConfigError(format!(
				"Invalid bucket name: {}",
				config.bucket
			)));
		}

		Ok(Self {
			root: base_path.join(&config.bucket),
			bucket: config.bucket,
		})
	}

	/// Directory holding the bucket's files.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Resolve `name` inside the bucket, rejecting names that would escape it.
	fn get_path(&self, name: &str) -> Result<PathBuf> {
		let relative = Path::new(name);
		let mut has_file = false;
		for component in relative.components() {
			match component {
				Component::Normal(_) => has_file = true,
				Component::CurDir => {}
				Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
					return Err(StorageError::InvalidName(name.to_string()));
				}
			}
		}
		if !has_file {
			return Err(StorageError::InvalidName(name.to_string()));
		}
		Ok(self.root.join(relative))
	}

	fn existing_file(&self, name: &str) -> Result<PathBuf> {
		let path = self.get_path(name)?;
		if !path.is_file() {
			return Err(StorageError::NotFound(name.to_string()));
		}
		Ok(path)
	}
}

#[async_trait]
impl StorageBackend for LocalStorage {
	fn bucket(&self) -> &str {
		&self.bucket
	}

	async fn save(&self, name: &str, content: &[u8]) -> Result<String> {
		let path = self.get_path(name)?;

		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).await?;
		}

		fs::write(&path, content).await?;

		Ok(name.to_string())
	}

	async fn open(&self, name: &str) -> Result<Vec<u8>> {
		let path = self.existing_file(name)?;
		let content = fs::read(&path).await?;
		Ok(content)
	}

	async fn delete(&self, name: &str) -> Result<()> {
		let path = self.existing_file(name)?;
		fs::remove_file(&path).await?;
		Ok(())
	}

	async fn exists(&self, name: &str) -> Result<bool> {
		let path = self.get_path(name)?;
		Ok(path.is_file())
	}

	async fn size(&self, name: &str) -> Result<u64> {
		let path = self.existing_file(name)?;
		let metadata = fs::metadata(&path).await?;
		Ok(metadata.len())
	}
}
