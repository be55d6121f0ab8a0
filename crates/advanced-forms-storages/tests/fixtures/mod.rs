//! Test fixtures for storage backend tests.
//!
//! All fixtures work with rstest and can be composed together.

#![allow(dead_code)]

use advanced_forms_storages::config::{LocalConfig, MemoryConfig};
use advanced_forms_storages::{StorageBackend, StorageConfig, create_storage};
use rstest::fixture;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Test file structure.
#[derive(Debug, Clone)]
pub struct TestFile {
	pub name: String,
	pub content: Vec<u8>,
}

impl TestFile {
	pub fn new(name: String, content: Vec<u8>) -> Self {
		Self { name, content }
	}

	pub fn size(&self) -> u64 {
		self.content.len() as u64
	}
}

/// Generate unique file name with prefix.
pub fn generate_unique_name(prefix: &str) -> String {
	format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

/// Avatar-like file fixture: a PNG signature followed by filler bytes.
#[fixture]
pub fn avatar_file() -> TestFile {
	let mut content = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
	content.extend((0..1016).map(|i| (i % 251) as u8));
	TestFile::new(format!("{}.png", generate_unique_name("avatar")), content)
}

/// Binary file fixture with all byte values.
#[fixture]
pub fn binary_file() -> TestFile {
	TestFile::new(
		generate_unique_name("binary"),
		(0u8..=255).collect::<Vec<_>>(),
	)
}

/// Test directory wrapper for local storage.
///
/// The directory is removed when the wrapper is dropped.
pub struct LocalTestDir {
	temp_dir: TempDir,
	backend: Arc<dyn StorageBackend>,
}

impl LocalTestDir {
	pub fn new() -> Self {
		let temp_dir = TempDir::new().expect("Failed to create temp dir");
		let base_path = temp_dir.path().to_str().unwrap().to_string();

		let config = StorageConfig::Local(LocalConfig {
			base_path,
			bucket: "advanced-forms".to_string(),
		});
		let backend = create_storage(config).expect("Failed to create local backend");

		Self { temp_dir, backend }
	}

	pub fn backend(&self) -> Arc<dyn StorageBackend> {
		Arc::clone(&self.backend)
	}

	pub fn path(&self) -> &Path {
		self.temp_dir.path()
	}
}

/// Local test directory fixture.
#[fixture]
pub fn local_temp_dir() -> LocalTestDir {
	LocalTestDir::new()
}

/// In-memory backend fixture without a quota.
#[fixture]
pub fn memory_backend() -> Arc<dyn StorageBackend> {
	create_storage(StorageConfig::Memory(MemoryConfig {
		bucket: "advanced-forms".to_string(),
		quota_bytes: None,
	}))
	.expect("Failed to create memory backend")
}
