//! Type-safe wrappers for codec inputs

#[cfg(feature = "alloc")]
pub mod key;

#[cfg(feature = "alloc")]
pub use key::XorKey;
