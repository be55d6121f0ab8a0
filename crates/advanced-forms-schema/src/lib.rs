//! # Advanced Forms Schema
//!
//! Validation and transformation pipeline for the create-user form.
//!
//! A [`FormInput`] holds the raw form state: the selected avatar files, the
//! name, e-mail and password strings, and the dynamic list of techs. The
//! [`CreateUserSchema`] resolves it into either a typed [`FormOutput`] or an
//! [`ErrorMap`] with one human-readable message per failing field path.
//!
//! ## Rules
//!
//! - `avatar`: a file is required and must be at most 5 MiB
//! - `name`: required; words are capitalized and joined by single spaces
//! - `email`: required, well-formed, ending in `@gmail.com`
//! - `password`: 6 to 12 characters
//! - `techs`: at least two rows, each with a title and a knowledge level from 1 to 5
//!
//! Every limit is configurable through [`SchemaSettings`].
//!
//! ## Example
//!
//! ```
//! # tokio_test::block_on(async {
//! use advanced_forms_schema::{FormInput, MemoryFile, validate};
//!
//! let input = FormInput::new()
//!     .with_avatar(MemoryFile::new("me.png", vec![0u8; 16]))
//!     .with_name("ana")
//!     .with_email("ana@yahoo.com")
//!     .with_password("secret1")
//!     .with_tech("Rust", 5);
//!
//! let errors = validate(&input).await.unwrap_err();
//! assert!(errors.contains("email"));
//! assert!(errors.contains("techs"));
//! # });
//! ```

pub mod error_map;
pub mod field;
pub mod fields;
pub mod file;
pub mod input;
pub mod messages;
pub mod output;
pub mod path;
pub mod schema;
pub mod settings;
pub mod transform;

pub use error_map::{ErrorMap, FieldError};
pub use field::Field;
pub use file::{FileSource, LocalFile, MemoryFile, ResolvedFile, SelectedFile};
pub use input::{FormInput, RawKnowledge, TechInput};
pub use messages::MessageCatalog;
pub use output::{FormOutput, Tech};
pub use path::FieldPath;
pub use schema::{CreateUserSchema, validate};
pub use settings::{ENV_PREFIX, Locale, SchemaSettings, SettingsError};
pub use transform::capitalize_words;

pub mod prelude {
	pub use crate::{
		CreateUserSchema, ErrorMap, FormInput, FormOutput, MemoryFile, SchemaSettings, SelectedFile,
		validate,
	};
	pub use advanced_forms_validators::{ErrorKind, ValidationError};
}
