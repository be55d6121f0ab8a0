//! Configuration types for storage backends.

use crate::{Result, StorageError};
use std::env;
use std::str::FromStr;

/// Bucket used when `STORAGE_BUCKET` is not set.
pub const DEFAULT_BUCKET: &str = "advanced-forms";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
	/// Local file system
	Local,
	/// Process memory
	Memory,
}

impl std::fmt::Display for BackendType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BackendType::Local => write!(f, "Local"),
			BackendType::Memory => write!(f, "Memory"),
		}
	}
}

impl FromStr for BackendType {
	type Err = StorageError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_lowercase().as_str() {
			"local" => Ok(BackendType::Local),
			"memory" => Ok(BackendType::Memory),
			_ => Err(StorageError::ConfigError(format!(
				"Unknown storage backend: {}",
				s
			))),
		}
	}
}

/// Configuration for the local file system backend.
#[cfg(feature = "local")]
#[derive(Debug, Clone)]
pub struct LocalConfig {
	/// Existing directory holding one sub-directory per bucket
	pub base_path: String,
	pub bucket: String,
}

/// Configuration for the in-memory backend.
#[cfg(feature = "memory")]
#[derive(Debug, Clone, Default)]
pub struct MemoryConfig {
	pub bucket: String,
	/// Maximum number of bytes stored at once
	pub quota_bytes: Option<u64>,
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub enum StorageConfig {
	#[cfg(feature = "local")]
	Local(LocalConfig),
	#[cfg(feature = "memory")]
	Memory(MemoryConfig),
}

impl StorageConfig {
	/// Load configuration from environment variables.
	///
	/// # Environment Variables
	///
	/// - `STORAGE_BACKEND`: Backend type ("local", "memory")
	/// - `STORAGE_BUCKET`: Bucket name (optional, defaults to `advanced-forms`)
	///
	/// ## Local Backend
	/// - `LOCAL_BASE_PATH`: Base directory path (required)
	///
	/// ## Memory Backend
	/// - `MEMORY_QUOTA_BYTES`: Byte quota (optional)
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Same as [`StorageConfig::from_env`], reading variables through `lookup`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let backend_type = lookup("STORAGE_BACKEND").ok_or_else(|| {
			StorageError::ConfigError("STORAGE_BACKEND environment variable not set".to_string())
		})?;
		let backend_type = backend_type.parse::<BackendType>()?;
		let bucket = lookup("STORAGE_BUCKET")
			.map(|bucket| bucket.trim().to_string())
			.filter(|bucket| !bucket.is_empty())
			.unwrap_or_else(|| DEFAULT_BUCKET.to_string());

		match backend_type {
			#[cfg(feature = "local")]
			BackendType::Local => {
				let base_path = lookup("LOCAL_BASE_PATH").ok_or_else(|| {
					StorageError::ConfigError(
						"LOCAL_BASE_PATH environment variable not set".to_string(),
					)
				})?;

				Ok(StorageConfig::Local(LocalConfig { base_path, bucket }))
			}
			#[cfg(feature = "memory")]
			BackendType::Memory => {
				let quota_bytes = lookup("MEMORY_QUOTA_BYTES")
					.map(|quota| {
						quota.trim().parse::<u64>().map_err(|e| {
							StorageError::ConfigError(format!(
								"Invalid MEMORY_QUOTA_BYTES {:?}: {}",
								quota, e
							))
						})
					})
					.transpose()?;

				Ok(StorageConfig::Memory(MemoryConfig {
					bucket,
					quota_bytes,
				}))
			}
			#[allow(unreachable_patterns)]
			_ => Err(StorageError::ConfigError(format!(
				"Backend type not enabled: {:?}",
				backend_type
			))),
		}
	}

	pub fn backend_type(&self) -> BackendType {
		match self {
			#[cfg(feature = "local")]
			StorageConfig::Local(_) => BackendType::Local,
			#[cfg(feature = "memory")]
			StorageConfig::Memory(_) => BackendType::Memory,
		}
	}

	pub fn bucket(&self) -> &str {
		match self {
			#[cfg(feature = "local")]
			StorageConfig::Local(config) => &config.bucket,
			#[cfg(feature = "memory")]
			StorageConfig::Memory(config) => &config.bucket,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;

	fn lookup(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
		move |key| vars.get(key).map(|value| value.to_string())
	}

	#[rstest]
	#[case("local", BackendType::Local)]
	#[case("LOCAL", BackendType::Local)]
	#[case(" memory ", BackendType::Memory)]
	fn test_backend_type_from_str(#[case] raw: &str, #[case] expected: BackendType) {
		assert_eq!(raw.parse::<BackendType>().unwrap(), expected);
	}

	#[rstest]
	fn test_unknown_backend_type() {
		let result = "s3".parse::<BackendType>();
		assert!(matches!(result, Err(StorageError::ConfigError(_))));
	}

	#[rstest]
	fn test_missing_backend_variable() {
		let result = StorageConfig::from_lookup(lookup(HashMap::new()));
		assert!(matches!(result, Err(StorageError::ConfigError(_))));
	}

	#[rstest]
	fn test_local_requires_base_path() {
		let result = StorageConfig::from_lookup(lookup(HashMap::from([(
			"STORAGE_BACKEND",
			"local",
		)])));
		assert!(matches!(result, Err(StorageError::ConfigError(_))));
	}

	#[rstest]
	fn test_local_config_with_default_bucket() {
		// Arrange
		let vars = HashMap::from([
			("STORAGE_BACKEND", "local"),
			("LOCAL_BASE_PATH", "/var/uploads"),
		]);

		// Act
		let config = StorageConfig::from_lookup(lookup(vars)).unwrap();

		// Assert
		assert_eq!(config.backend_type(), BackendType::Local);
		assert_eq!(config.bucket(), DEFAULT_BUCKET);
		match config {
			StorageConfig::Local(local) => assert_eq!(local.base_path, "/var/uploads"),
			other => panic!("unexpected config: {:?}", other),
		}
	}

	#[rstest]
	fn test_memory_config_with_quota() {
		let vars = HashMap::from([
			("STORAGE_BACKEND", "memory"),
			("STORAGE_BUCKET", "avatars"),
			("MEMORY_QUOTA_BYTES", "2048"),
		]);

		let config = StorageConfig::from_lookup(lookup(vars)).unwrap();

		assert_eq!(config.bucket(), "avatars");
		match config {
			StorageConfig::Memory(memory) => assert_eq!(memory.quota_bytes, Some(2048)),
			other => panic!("unexpected config: {:?}", other),
		}
	}

	#[rstest]
	fn test_memory_config_bad_quota() {
		let vars = HashMap::from([
			("STORAGE_BACKEND", "memory"),
			("MEMORY_QUOTA_BYTES", "lots"),
		]);

		let result = StorageConfig::from_lookup(lookup(vars));

		assert!(matches!(result, Err(StorageError::ConfigError(_))));
	}
}
