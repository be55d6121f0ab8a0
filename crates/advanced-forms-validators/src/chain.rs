//! Ordered rule chains
//!
//! A [`RuleChain`] runs its steps front to back and stops at the first
//! failing one, so at most one error is produced per value.

use crate::{ValidationResult, Validator};
use std::sync::Arc;

type Step<T> = Arc<dyn Fn(T) -> ValidationResult<T> + Send + Sync>;

/// Ordered list of checks and transforms applied to a single value.
///
/// Cloning is cheap: steps are shared, not copied.
pub struct RuleChain<T> {
	steps: Vec<Step<T>>,
}

impl<T: 'static> RuleChain<T> {
	/// Creates an empty chain that passes every value through unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::RuleChain;
	///
	/// let chain = RuleChain::<i64>::new();
	/// assert!(chain.is_empty());
	/// assert_eq!(chain.run(7), Ok(7));
	/// ```
	pub fn new() -> Self {
		Self { steps: Vec::new() }
	}

	/// Appends a predicate step backed by a [`Validator`].
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{RangeValidator, RuleChain};
	///
	/// let chain = RuleChain::new().check(RangeValidator::new(1, 5));
	/// assert!(chain.run(3).is_ok());
	/// assert!(chain.run(9).is_err());
	/// ```
	pub fn check<V>(mut self, validator: V) -> Self
	where
		V: Validator<T> + Send + Sync + 'static,
	{
		self.steps.push(Arc::new(move |value| {
			validator.validate(&value)?;
			Ok(value)
		}));
		self
	}

	/// Appends a predicate step backed by a closure.
	pub fn check_with<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&T) -> ValidationResult<()> + Send + Sync + 'static,
	{
		self.steps.push(Arc::new(move |value| {
			predicate(&value)?;
			Ok(value)
		}));
		self
	}

	/// Appends an infallible transform step.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::RuleChain;
	///
	/// let chain = RuleChain::<String>::new().map(|s| s.trim().to_string());
	/// assert_eq!(chain.run("  ana ".to_string()), Ok("ana".to_string()));
	/// ```
	pub fn map<F>(mut self, transform: F) -> Self
	where
		F: Fn(T) -> T + Send + Sync + 'static,
	{
		self.steps.push(Arc::new(move |value| Ok(transform(value))));
		self
	}

	/// Appends a fallible transform step.
	pub fn try_map<F>(mut self, transform: F) -> Self
	where
		F: Fn(T) -> ValidationResult<T> + Send + Sync + 'static,
	{
		self.steps.push(Arc::new(transform));
		self
	}

	/// Runs every step in order, returning the first failure.
	pub fn run(&self, value: T) -> ValidationResult<T> {
		self.steps.iter().try_fold(value, |value, step| step(value))
	}

	pub fn len(&self) -> usize {
		self.steps.len()
	}

	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}
}

impl<T: 'static> Default for RuleChain<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Clone for RuleChain<T> {
	fn clone(&self) -> Self {
		Self {
			steps: self.steps.clone(),
		}
	}
}

impl<T> std::fmt::Debug for RuleChain<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RuleChain")
			.field("steps", &self.steps.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{MaxLengthValidator, MinLengthValidator, RequiredValidator, ValidationError};
	use rstest::rstest;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_first_failing_rule_wins() {
		// Arrange
		let chain = RuleChain::<String>::new()
			.check(RequiredValidator::new())
			.check(MinLengthValidator::new(6));

		// Act
		let result = chain.run(String::new());

		// Assert
		assert_eq!(result, Err(ValidationError::RequiredField));
	}

	#[rstest]
	fn test_later_steps_are_skipped_after_failure() {
		// Arrange
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let chain = RuleChain::<String>::new()
			.check(MinLengthValidator::new(6))
			.map(move |value| {
				counter.fetch_add(1, Ordering::SeqCst);
				value
			});

		// Act
		let result = chain.run("abc".to_string());

		// Assert
		assert!(result.is_err());
		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}

	#[rstest]
	fn test_transform_feeds_next_check() {
		// Arrange
		let chain = RuleChain::<String>::new()
			.map(|value| value.trim().to_string())
			.check(MaxLengthValidator::new(3));

		// Act & Assert
		assert_eq!(chain.run("  abc  ".to_string()), Ok("abc".to_string()));
		assert_eq!(chain.len(), 2);
	}

	#[rstest]
	fn test_try_map_and_check_with() {
		// Arrange
		let chain = RuleChain::<i64>::new()
			.try_map(|value| {
				value
					.checked_mul(2)
					.ok_or_else(|| ValidationError::InvalidNumber(value.to_string()))
			})
			.check_with(|value| {
				if *value % 4 == 0 {
					Ok(())
				} else {
					Err(ValidationError::OutOfRange {
						value: *value,
						min: 0,
						max: 0,
					})
				}
			});

		// Act & Assert
		assert_eq!(chain.run(2), Ok(4));
		assert!(matches!(
			chain.run(3),
			Err(ValidationError::OutOfRange { value: 6, .. })
		));
		assert!(matches!(
			chain.run(i64::MAX),
			Err(ValidationError::InvalidNumber(_))
		));
	}

	#[rstest]
	fn test_clone_shares_steps() {
		// Arrange
		let chain = RuleChain::<String>::new().check(MinLengthValidator::new(2));

		// Act
		let copy = chain.clone();

		// Assert
		assert_eq!(copy.len(), 1);
		assert!(copy.run("a".to_string()).is_err());
		assert_eq!(chain.run("ab".to_string()), Ok("ab".to_string()));
	}
}
