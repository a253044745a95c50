//! Chained repeating-key XOR transform
//!
//! The forward pass walks the buffer strictly left to right. Even indices
//! consume one key byte each, with the cursor wrapping at the key length.
//! Odd indices are XOR-ed against the byte at `i - 1` *after* that byte has
//! been transformed, which chains every odd position to the ciphertext of
//! its neighbor. The inverse pass must therefore walk strictly right to
//! left, so the still-encrypted neighbor is available when an odd position
//! is restored.
//!
//! Both directions exist in a copying and an in-place form sharing one
//! underlying pass; the copying form clones the input first.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use chainxor_api::error::{validate, Result};

#[cfg(feature = "alloc")]
use crate::types::XorKey;
#[cfg(feature = "alloc")]
use chainxor_api::SymmetricCodec;

/// Encrypt `data` with `key`, returning a new buffer of the same length
///
/// The input is left untouched. Fails with `InvalidArgument` if the key is
/// empty; empty data is valid and yields an empty result.
#[cfg(feature = "alloc")]
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    validate::key(key, "chained::encrypt")?;
    let mut out = data.to_vec();
    forward(&mut out, key);
    Ok(out)
}

/// Encrypt `data` with `key` in place
///
/// Fails with `InvalidArgument` if the key is empty, before any byte is
/// touched.
pub fn encrypt_in_place(data: &mut [u8], key: &[u8]) -> Result<()> {
    validate::key(key, "chained::encrypt_in_place")?;
    forward(data, key);
    Ok(())
}

/// Decrypt `data` with `key`, returning a new buffer of the same length
///
/// Exactly inverts [`encrypt`] for the same key. The input is left
/// untouched. Fails with `InvalidArgument` if the key is empty.
#[cfg(feature = "alloc")]
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    validate::key(key, "chained::decrypt")?;
    let mut out = data.to_vec();
    backward(&mut out, key);
    Ok(out)
}

/// Decrypt `data` with `key` in place
///
/// Fails with `InvalidArgument` if the key is empty, before any byte is
/// touched.
pub fn decrypt_in_place(data: &mut [u8], key: &[u8]) -> Result<()> {
    validate::key(key, "chained::decrypt_in_place")?;
    backward(data, key);
    Ok(())
}

/// Forward pass, strict left-to-right, in place
///
/// The wrap check runs at the top of each iteration so the cursor advances
/// exactly one step per even index and resets cleanly on overflow.
fn forward(data: &mut [u8], key: &[u8]) {
    let key_len = key.len();
    let mut cursor = 0;

    for i in 0..data.len() {
        if cursor == key_len {
            cursor = 0;
        }
        if i & 1 == 1 {
            // Reads the already-transformed neighbor; order matters.
            data[i] ^= data[i - 1];
        } else {
            data[i] ^= key[cursor];
            cursor += 1;
        }
    }
}

/// Inverse pass, strict right-to-left, in place
///
/// The cursor is seeded to where the forward pass left it after `n` bytes
/// and walked backward in sync. Odd indices XOR against the still-encrypted
/// byte at `j - 1`, which is exactly the value the forward pass folded in.
fn backward(data: &mut [u8], key: &[u8]) {
    let n = data.len();
    let m = key.len();

    // Forward-cursor position after n bytes: one advance per even index.
    let mut cursor = if n % 2 == 0 {
        (n / 2) % m
    } else {
        (n / 2 + 1) % m
    };

    for j in (0..n).rev() {
        if j & 1 == 1 {
            data[j] ^= data[j - 1];
        } else {
            if cursor == 0 {
                cursor = m;
            }
            cursor -= 1;
            data[j] ^= key[cursor];
        }
    }
}

/// Chained XOR codec with a key bound at construction
///
/// Holds a validated, zeroize-on-drop copy of the key and delegates to the
/// free functions. The key is read-only during a transform, so a single
/// instance may serve concurrent calls on disjoint buffers.
#[cfg(feature = "alloc")]
#[derive(Clone)]
pub struct ChainedXor {
    key: XorKey,
}

#[cfg(feature = "alloc")]
impl ChainedXor {
    /// Create a codec bound to `key`
    ///
    /// Applies the same validation as the free-function key parameter:
    /// fails with `InvalidArgument` if `key` is empty.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = XorKey::new(key).map_err(|e| e.with_context("ChainedXor::new"))?;
        Ok(Self { key })
    }

    /// Encrypt `data` with the bound key, returning a new buffer
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        encrypt(data, self.key.as_ref())
    }

    /// Decrypt `data` with the bound key, returning a new buffer
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        decrypt(data, self.key.as_ref())
    }

    /// Encrypt `data` with the bound key in place
    pub fn encrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        encrypt_in_place(data, self.key.as_ref())
    }

    /// Decrypt `data` with the bound key in place
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        decrypt_in_place(data, self.key.as_ref())
    }

    /// The key this instance was constructed with
    pub fn key(&self) -> &XorKey {
        &self.key
    }
}

#[cfg(feature = "alloc")]
impl SymmetricCodec for ChainedXor {
    type Key = XorKey;

    fn new(key: &Self::Key) -> Result<Self> {
        // The key was validated when it was constructed.
        Ok(Self { key: key.clone() })
    }

    fn name() -> &'static str {
        "ChainedXor"
    }

    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        ChainedXor::encrypt(self, data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        ChainedXor::decrypt(self, data)
    }

    fn encrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        ChainedXor::encrypt_in_place(self, data)
    }

    fn decrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        ChainedXor::decrypt_in_place(self, data)
    }
}
