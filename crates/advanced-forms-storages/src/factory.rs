//! Factory function for creating storage backends.

use crate::{Result, StorageBackend, StorageConfig};
use std::sync::Arc;

/// Create a storage backend from configuration.
///
/// # Examples
///
/// ```
/// use advanced_forms_storages::config::MemoryConfig;
/// use advanced_forms_storages::{StorageConfig, create_storage};
///
/// let config = StorageConfig::Memory(MemoryConfig {
///     bucket: "advanced-forms".to_string(),
///     quota_bytes: None,
/// });
/// let storage = create_storage(config).unwrap();
/// assert_eq!(storage.bucket(), "advanced-forms");
/// ```
pub fn create_storage(config: StorageConfig) -> Result<Arc<dyn StorageBackend>> {
	tracing::debug!(
		backend = %config.backend_type(),
		bucket = config.bucket(),
		"Creating storage backend"
	);
	match config {
		#[cfg(feature = "local")]
		StorageConfig::Local(local_config) => {
			let storage = crate::backends::local::LocalStorage::new(local_config)?;
			Ok(Arc::new(storage))
		}
		#[cfg(feature = "memory")]
		StorageConfig::Memory(memory_config) => {
			let storage = crate::backends::memory::MemoryStorage::new(memory_config);
			Ok(Arc::new(storage))
		}
	}
}
