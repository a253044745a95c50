//! Trait definition for symmetric byte codecs
//!
//! A symmetric codec binds a key at construction and offers a forward and
//! an inverse transform, each in a copying and an in-place form. The two
//! forms of a direction share one underlying algorithm; the copying form
//! clones the input first.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::error::Result;
use zeroize::Zeroize;

/// Trait for symmetric byte codecs with a key bound at construction
pub trait SymmetricCodec: Sized {
    /// The key type used by this codec
    ///
    /// Keys hold byte material and are wiped on drop.
    type Key: Zeroize + AsRef<[u8]> + Clone;

    /// Creates a new codec instance with the given key
    fn new(key: &Self::Key) -> Result<Self>;

    /// Returns the name of this codec
    fn name() -> &'static str;

    /// Transforms `data` forward, returning a new buffer
    ///
    /// The caller's input is left untouched.
    #[cfg(feature = "alloc")]
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Inverts the forward transform, returning a new buffer
    ///
    /// The caller's input is left untouched.
    #[cfg(feature = "alloc")]
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Transforms `data` forward in place
    fn encrypt_in_place(&self, data: &mut [u8]) -> Result<()>;

    /// Inverts the forward transform in place
    fn decrypt_in_place(&self, data: &mut [u8]) -> Result<()>;
}
