//! Storage backend implementations.

#[cfg(feature = "local")]
pub mod local;

#[cfg(feature = "memory")]
pub mod memory;
