//! Field trait shared by the synchronous field cleaners.

use advanced_forms_validators::ValidationResult;

/// A single form field: validates one raw value and produces its cleaned form.
pub trait Field {
	type Input: ?Sized;
	type Output;

	fn name(&self) -> &str;

	/// Runs every rule in order; the first failure is returned.
	fn clean(&self, value: &Self::Input) -> ValidationResult<Self::Output>;
}
