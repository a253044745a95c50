//! Key type for the chained XOR transform

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use chainxor_api::error::{validate, Result};

/// A validated, owned key for the chained XOR transform
///
/// A key is any non-empty byte sequence; there is no fixed size. Wrapping
/// it here runs the emptiness check once at construction and guarantees the
/// bytes are wiped when the key goes out of scope. The key is immutable for
/// the duration of a transform call, so one `XorKey` can back concurrent
/// transforms on disjoint buffers.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct XorKey {
    data: Vec<u8>,
}

impl XorKey {
    /// Create a key from a byte slice
    ///
    /// Fails with `InvalidArgument` if `bytes` is empty.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        validate::key(bytes, "XorKey::new")?;
        Ok(Self {
            data: bytes.to_vec(),
        })
    }

    /// Length of the key in bytes (always at least 1)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the key is empty (always false; construction forbids it)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw key bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for XorKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for XorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XorKey(len={}, [REDACTED])", self.data.len())
    }
}
