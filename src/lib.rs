//! # chainxor
//!
//! A chained repeating-key XOR codec for obscuring byte sequences.
//!
//! Even-indexed bytes are XOR-ed against a cycling key byte; odd-indexed
//! bytes are XOR-ed against their already-transformed left neighbor. The
//! chaining gives a positional dependency that plain repeating-key XOR
//! lacks, while keeping both directions a single O(n) pass.
//!
//! chainxor is an obfuscation codec, **not** a cipher: it provides no
//! confusion or diffusion and no resistance to known-plaintext recovery.
//! Do not use it to protect secrets.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! chainxor = "0.1"
//! ```
//!
//! ## Example
//!
//! ```
//! use chainxor::prelude::*;
//!
//! let codec = ChainedXor::new(b"secret")?;
//! let sealed = codec.encrypt(b"hello world")?;
//! assert_eq!(codec.decrypt(&sealed)?, b"hello world");
//! # Ok::<(), chainxor::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - [`chainxor-api`](crate::api): error type, validation helpers, and the
//!   [`SymmetricCodec`](crate::api::SymmetricCodec) trait
//! - [`chainxor-codec`](crate::codec): the chained XOR transform, the
//!   key-bound [`ChainedXor`](crate::codec::ChainedXor) instance, and the
//!   zeroizing [`XorKey`](crate::codec::XorKey) type

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use chainxor_api as api;
pub use chainxor_codec as codec;

/// Common imports for chainxor users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::SymmetricCodec;

    // Re-export the in-place entry points (available without an allocator)
    pub use crate::codec::chained::{decrypt_in_place, encrypt_in_place};

    // Re-export the copying entry points and the key-bound codec
    #[cfg(feature = "alloc")]
    pub use crate::codec::chained::{decrypt, encrypt, ChainedXor};
    #[cfg(feature = "alloc")]
    pub use crate::codec::types::XorKey;
}
