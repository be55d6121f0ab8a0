//! Integration tests for LocalStorage backend.

mod fixtures;

use advanced_forms_storages::config::LocalConfig;
use advanced_forms_storages::{StorageConfig, StorageError, create_storage};
use fixtures::{LocalTestDir, TestFile, avatar_file, binary_file, local_temp_dir};
use rstest::rstest;

mod crud_tests {
	use super::*;

	#[rstest]
	#[tokio::test]
	async fn test_save_places_file_in_bucket(local_temp_dir: LocalTestDir, avatar_file: TestFile) {
		// Arrange
		let backend = local_temp_dir.backend();

		// Act
		let name = backend
			.save(&avatar_file.name, &avatar_file.content)
			.await
			.expect("Failed to save file");

		// Assert
		assert_eq!(name, avatar_file.name);
		let on_disk = local_temp_dir
			.path()
			.join("advanced-forms")
			.join(&avatar_file.name);
		assert_eq!(std::fs::read(on_disk).unwrap(), avatar_file.content);
	}

	#[rstest]
	#[tokio::test]
	async fn test_open_returns_saved_content(local_temp_dir: LocalTestDir, binary_file: TestFile) {
		let backend = local_temp_dir.backend();
		backend
			.save(&binary_file.name, &binary_file.content)
			.await
			.unwrap();

		let content = backend.open(&binary_file.name).await.unwrap();

		assert_eq!(content, binary_file.content);
		assert_eq!(backend.size(&binary_file.name).await.unwrap(), binary_file.size());
	}

	#[rstest]
	#[tokio::test]
	async fn test_delete_file(local_temp_dir: LocalTestDir) {
		let backend = local_temp_dir.backend();
		backend.save("gone.png", b"x").await.unwrap();

		backend.delete("gone.png").await.unwrap();

		assert!(!backend.exists("gone.png").await.unwrap());
		assert!(matches!(
			backend.delete("gone.png").await,
			Err(StorageError::NotFound(_))
		));
	}

	#[rstest]
	#[tokio::test]
	async fn test_save_overwrites(local_temp_dir: LocalTestDir) {
		let backend = local_temp_dir.backend();

		backend.save("me.png", b"first").await.unwrap();
		backend.save("me.png", b"second!").await.unwrap();

		assert_eq!(backend.open("me.png").await.unwrap(), b"second!");
		assert_eq!(backend.size("me.png").await.unwrap(), 7);
	}

	#[rstest]
	#[tokio::test]
	async fn test_nested_names_create_directories(local_temp_dir: LocalTestDir) {
		let backend = local_temp_dir.backend();

		backend.save("users/42/avatar.png", b"png").await.unwrap();

		assert!(backend.exists("users/42/avatar.png").await.unwrap());
		assert!(!backend.exists("users/42").await.unwrap());
	}
}

mod metadata_tests {
	use super::*;

	#[rstest]
	#[tokio::test]
	async fn test_size_matches_content(local_temp_dir: LocalTestDir) {
		let backend = local_temp_dir.backend();
		backend.save("size.png", &[7u8; 300]).await.unwrap();

		assert_eq!(backend.size("size.png").await.unwrap(), 300);
	}

	#[rstest]
	fn test_bucket_name(local_temp_dir: LocalTestDir) {
		assert_eq!(local_temp_dir.backend().bucket(), "advanced-forms");
	}
}

mod error_tests {
	use super::*;

	#[rstest]
	#[case("../outside.png")]
	#[case("a/../../outside.png")]
	#[case("/etc/passwd")]
	#[case("")]
	#[case(".")]
	#[tokio::test]
	async fn test_names_escaping_bucket_are_rejected(
		local_temp_dir: LocalTestDir,
		#[case] name: &str,
	) {
		let backend = local_temp_dir.backend();

		let result = backend.save(name, b"evil").await;

		assert!(matches!(result, Err(StorageError::InvalidName(_))));
	}

	#[rstest]
	#[tokio::test]
	async fn test_missing_file(local_temp_dir: LocalTestDir) {
		let backend = local_temp_dir.backend();

		assert!(matches!(
			backend.open("missing.png").await,
			Err(StorageError::NotFound(_))
		));
		assert!(matches!(
			backend.size("missing.png").await,
			Err(StorageError::NotFound(_))
		));
		assert!(matches!(
			backend.delete("missing.png").await,
			Err(StorageError::NotFound(_))
		));
	}

	#[rstest]
	fn test_base_path_must_exist() {
		let config = StorageConfig::Local(LocalConfig {
			base_path: "/definitely/not/a/real/dir".to_string(),
			bucket: "advanced-forms".to_string(),
		});

		assert!(matches!(
			create_storage(config),
			Err(StorageError::ConfigError(_))
		));
	}

	#[rstest]
	fn test_base_path_must_be_directory() {
		let file = tempfile::NamedTempFile::new().unwrap();
		let config = StorageConfig::Local(LocalConfig {
			base_path: file.path().to_str().unwrap().to_string(),
			bucket: "advanced-forms".to_string(),
		});

		assert!(matches!(
			create_storage(config),
			Err(StorageError::ConfigError(_))
		));
	}

	#[rstest]
	#[case("")]
	#[case("../up")]
	#[case("a/b")]
	fn test_bucket_must_be_single_component(#[case] bucket: &str) {
		let dir = tempfile::tempdir().unwrap();
		let config = StorageConfig::Local(LocalConfig {
			base_path: dir.path().to_str().unwrap().to_string(),
			bucket: bucket.to_string(),
		});

		assert!(matches!(
			create_storage(config),
			Err(StorageError::ConfigError(_))
		));
	}
}

mod persistence_tests {
	use super::*;

	#[rstest]
	#[tokio::test]
	async fn test_new_backend_sees_existing_files(local_temp_dir: LocalTestDir) {
		// Arrange
		local_temp_dir
			.backend()
			.save("kept.png", b"persisted")
			.await
			.unwrap();

		// Act
		let reopened = create_storage(StorageConfig::Local(LocalConfig {
			base_path: local_temp_dir.path().to_str().unwrap().to_string(),
			bucket: "advanced-forms".to_string(),
		}))
		.unwrap();

		// Assert
		assert_eq!(reopened.open("kept.png").await.unwrap(), b"persisted");
	}

	#[rstest]
	#[tokio::test]
	async fn test_buckets_are_isolated(local_temp_dir: LocalTestDir) {
		local_temp_dir.backend().save("me.png", b"x").await.unwrap();

		let other = create_storage(StorageConfig::Local(LocalConfig {
			base_path: local_temp_dir.path().to_str().unwrap().to_string(),
			bucket: "other".to_string(),
		}))
		.unwrap();

		assert!(!other.exists("me.png").await.unwrap());
	}
}
