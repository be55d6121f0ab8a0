//! # advanced-forms-storages
//!
//! Storage backends receiving the files staged by a form submission.
//!
//! Every backend implements the [`StorageBackend`] trait and stores objects
//! inside a single bucket. Two backends are available:
//!
//! - **Local**: files under `<base_path>/<bucket>/` on the local file system
//! - **Memory**: a process-local map, with an optional byte quota
//!
//! ## Example
//!
//! ```rust,no_run
//! use advanced_forms_storages::{StorageConfig, create_storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StorageConfig::from_env()?;
//!     let storage = create_storage(config)?;
//!
//!     storage.save("avatar.png", b"\x89PNG").await?;
//!     let content = storage.open("avatar.png").await?;
//!     assert_eq!(content, b"\x89PNG");
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod factory;

pub use backend::StorageBackend;
pub use config::{BackendType, DEFAULT_BUCKET, StorageConfig};
pub use error::{Result, StorageError};
pub use factory::create_storage;
