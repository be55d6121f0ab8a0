//! Numeric coercion and range validators

use crate::{ValidationError, ValidationResult, Validator};
use std::num::IntErrorKind;

/// Inclusive integer range validator
#[derive(Debug, Clone)]
pub struct RangeValidator {
	min: i64,
	max: i64,
}

impl RangeValidator {
	/// Creates a new RangeValidator accepting `min..=max`.
	///
	/// # Examples
	///
	/// ```
	/// use advanced_forms_validators::{RangeValidator, Validator};
	///
	/// let validator = RangeValidator::new(1, 5);
	/// assert!(validator.validate(&1).is_ok());
	/// assert!(validator.validate(&5).is_ok());
	/// assert!(validator.validate(&0).is_err());
	/// assert!(validator.validate(&6).is_err());
	/// ```
	pub fn new(min: i64, max: i64) -> Self {
		Self { min, max }
	}
}

impl Validator<i64> for RangeValidator {
	fn validate(&self, value: &i64) -> ValidationResult<()> {
		if (self.min..=self.max).contains(value) {
			Ok(())
		} else {
			Err(ValidationError::OutOfRange {
				value: *value,
				min: self.min,
				max: self.max,
			})
		}
	}
}

/// Coerces a textual number into an integer.
///
/// Surrounding whitespace is ignored. Integral floats such as `"3.0"` or
/// `"4e0"` are accepted. Well-formed numbers beyond `i64` saturate to
/// `i64::MIN`/`i64::MAX`, leaving the rejection to a range check.
/// Anything with a fractional part, non-finite values and the empty
/// string are rejected with [`ValidationError::InvalidNumber`].
///
/// # Examples
///
/// ```
/// use advanced_forms_validators::coerce_integer;
///
/// assert_eq!(coerce_integer(" 4 "), Ok(4));
/// assert_eq!(coerce_integer("3.0"), Ok(3));
/// assert_eq!(coerce_integer("99999999999999999999"), Ok(i64::MAX));
/// assert!(coerce_integer("2.5").is_err());
/// assert!(coerce_integer("").is_err());
/// assert!(coerce_integer("abc").is_err());
/// ```
pub fn coerce_integer(raw: &str) -> ValidationResult<i64> {
	let trimmed = raw.trim();
	match trimmed.parse::<i64>() {
		Ok(value) => return Ok(value),
		Err(e) if *e.kind() == IntErrorKind::PosOverflow => return Ok(i64::MAX),
		Err(e) if *e.kind() == IntErrorKind::NegOverflow => return Ok(i64::MIN),
		Err(_) => {}
	}

	let invalid = || ValidationError::InvalidNumber(raw.to_string());
	let float = trimmed.parse::<f64>().map_err(|_| invalid())?;
	coerce_float(float).ok_or_else(invalid)
}

/// Converts an integral, finite float, saturating at the `i64` bounds.
pub fn coerce_float(value: f64) -> Option<i64> {
	if value.is_finite() && value.fract() == 0.0 {
		// `as` saturates out-of-range floats.
		Some(value as i64)
	} else {
		None
	}
}
