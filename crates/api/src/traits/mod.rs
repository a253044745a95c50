//! Trait definitions for the chainxor public API

pub mod codec;

pub use codec::SymmetricCodec;
