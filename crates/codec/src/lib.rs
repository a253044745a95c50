//! Chained repeating-key XOR codec
//!
//! This crate implements a symmetric byte transform that obscures data with
//! a key: even-indexed bytes are XOR-ed against a cycling key byte, odd-
//! indexed bytes against their already-transformed left neighbor. The
//! inverse transform walks the buffer right to left and restores the input
//! exactly, byte for byte.
//!
//! The codec is pure and stateless: every call is independent, synchronous,
//! single-pass, and O(n) in the data length. It is usable in both `std` and
//! `no_std` environments; the in-place entry points need no allocator.
//!
//! This is an obfuscation codec, **not** a cipher. It offers no confusion
//! or diffusion and no resistance to known-plaintext recovery.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod chained;
pub mod types;

pub use chained::{decrypt_in_place, encrypt_in_place};

#[cfg(feature = "alloc")]
pub use chained::{decrypt, encrypt, ChainedXor};
#[cfg(feature = "alloc")]
pub use types::XorKey;

// Re-export the shared API error system instead of a crate-local one
pub use chainxor_api::error::{validate, Error, Result};
pub use chainxor_api::SymmetricCodec;
