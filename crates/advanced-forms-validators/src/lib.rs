//! Validation rules for advanced-forms
//!
//! This crate provides the building blocks the form schema is assembled from:
//!
//! - [`Validator`]: a single predicate over a value
//! - [`RuleChain`]: an ordered list of checks and transforms, first failure wins
//! - Ready-made validators for strings, e-mail addresses, integer ranges,
//!   file sizes and collection cardinality
//!
//! ## Example
//!
//! ```
//! use advanced_forms_validators::{MaxLengthValidator, MinLengthValidator, RuleChain};
//!
//! let password = RuleChain::<String>::new()
//!     .check(MinLengthValidator::new(6))
//!     .check(MaxLengthValidator::new(12));
//!
//! assert!(password.run("secret".to_string()).is_ok());
//! assert!(password.run("short".to_string()).is_err());
//! ```

pub mod chain;
pub mod collection;
pub mod email;
pub mod errors;
pub mod file;
pub mod numeric;
pub mod string;

pub use chain::RuleChain;
pub use collection::MinEntriesValidator;
pub use email::{DomainSuffixValidator, EmailValidator};
pub use errors::{ErrorKind, ValidationError, ValidationResult};
pub use file::{MAX_AVATAR_BYTES, MaxFileSizeValidator};
pub use numeric::{RangeValidator, coerce_float, coerce_integer};
pub use string::{MaxLengthValidator, MinLengthValidator, RequiredValidator};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::chain::*;
	pub use crate::collection::*;
	pub use crate::email::*;
	pub use crate::errors::*;
	pub use crate::file::*;
	pub use crate::numeric::*;
	pub use crate::string::*;
	pub use crate::Validator;
}

/// Trait for validators
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> ValidationResult<()>;
}
