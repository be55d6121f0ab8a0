//! # Advanced Forms
//!
//! A create-user form resolved through a declarative validation schema,
//! with the avatar staged to a storage backend once the form is valid.
//!
//! ## Crates
//!
//! - [`validators`]: rule taxonomy, the `Validator` trait and rule chains
//! - `schema` (feature `schema`): the create-user validation pipeline
//! - `storage` (feature `storage`): local and in-memory storage backends
//! - `submit` (feature `submit`): validate-then-upload hand-off
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `schema` - Validation pipeline
//! - `storage-local`, `storage-memory` - Storage backends
//! - `submit` - Submission hand-off, implies `schema` and `storage`
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use advanced_forms::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = create_storage(StorageConfig::from_env()?)?;
//!     let handler = SubmissionHandler::new(storage);
//!     let schema = CreateUserSchema::new(&SchemaSettings::from_env()?);
//!
//!     let input = FormInput::new()
//!         .with_avatar(LocalFile::new("./me.png"))
//!         .with_name("ana paula")
//!         .with_email("ana@gmail.com")
//!         .with_password("secret1")
//!         .with_tech("Rust", 5)
//!         .with_tech("React", "3");
//!
//!     match handle_submit(&schema, &input, &handler).await {
//!         SubmitOutcome::Submitted(receipt) => println!("{}", receipt.payload),
//!         SubmitOutcome::Invalid(errors) => println!("{}", serde_json::to_string(&errors)?),
//!         SubmitOutcome::Failed(error) => eprintln!("{}", error),
//!     }
//!     Ok(())
//! }
//! ```

pub use advanced_forms_validators as validators;

#[cfg(feature = "schema")]
pub use advanced_forms_schema as schema;

#[cfg(feature = "storage")]
pub use advanced_forms_storages as storage;

#[cfg(feature = "submit")]
pub mod submit;

// Re-export schema types (schema feature)
#[cfg(feature = "schema")]
pub use advanced_forms_schema::{
	CreateUserSchema, ErrorMap, FieldPath, FormInput, FormOutput, LocalFile, MemoryFile,
	SchemaSettings, SelectedFile, TechInput, validate,
};

// Re-export storage types (storage feature)
#[cfg(feature = "storage")]
pub use advanced_forms_storages::{StorageBackend, StorageConfig, StorageError, create_storage};

#[cfg(feature = "submit")]
pub use submit::{
	SubmissionError, SubmissionHandler, SubmissionReceipt, SubmitOutcome, avatar_key,
	handle_submit,
};

pub mod prelude {
	pub use advanced_forms_validators::{ErrorKind, ValidationError, Validator};

	#[cfg(feature = "schema")]
	pub use advanced_forms_schema::prelude::*;
	#[cfg(feature = "schema")]
	pub use advanced_forms_schema::{LocalFile, TechInput};

	#[cfg(feature = "storage")]
	pub use advanced_forms_storages::{StorageBackend, StorageConfig, create_storage};

	#[cfg(feature = "submit")]
	pub use crate::submit::{SubmissionHandler, SubmitOutcome, handle_submit};
}
