//! Storage error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
	#[error("File not found: {0}")]
	NotFound(String),

	#[error("Invalid file name: {0}")]
	InvalidName(String),

	#[error("Configuration error: {0}")]
	ConfigError(String),

	/// Saving would push the bucket over its byte quota.
	#[error("Quota exceeded: {requested} bytes requested, {available} bytes available")]
	QuotaExceeded { requested: u64, available: u64 },

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
