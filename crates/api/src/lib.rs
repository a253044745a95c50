//! Public API traits and types for the chainxor library
//!
//! This crate provides the public API surface for the chainxor workspace:
//! the error type, validation helpers, and the trait implemented by the
//! codec crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::SymmetricCodec;
