//! Read-through and write-through stream hashers.
//!
//! Wraps any [`std::io::Read`] or [`std::io::Write`] so that the bytes passing
//! through are fed to a named set of digest accumulators, letting callers compute
//! checksums while data moves to its real destination instead of hashing it again
//! afterwards.
//!
//! # Key Features
//!
//! - **Tee reads**: [`HashingReader`] mirrors every byte returned to the caller
//! - **Gated writes**: [`HashingWriter`] hashes a buffer only after the destination
//!   accepted all of it
//! - **Fan-out**: one [`HasherSet`] drives any number of named [`Hasher`]s
//! - **Extensible**: any RustCrypto digest fits through [`DigestHasher`]
//!
//! Digests are undefined once the wrapped stream has reported an error.
//!
//! # Example
//!
//! ```
//! use std::io::Read;
//! use teehash::{HasherSet, HashingReader};
//!
//! let mut reader = HashingReader::new(&b"hello I am happy"[..], HasherSet::std_crypto());
//! let mut body = Vec::new();
//! reader.read_to_end(&mut body).unwrap();
//!
//! assert_eq!(
//!     reader.hex_hash("sha256"),
//!     "1963f25b4f1f410e5702a9bcb2d44a44a43aaea0ef4f946ddb24c1472155a13a"
//! );
//! ```

pub use self::error::{Error, Result};
pub use self::hasher::{DigestHasher, Hasher};
pub use self::reader::HashingReader;
pub use self::set::HasherSet;
pub use self::writer::HashingWriter;

#[cfg(feature = "sha256")]
pub use self::hasher::Sha256Hasher;

#[cfg(feature = "sha512")]
pub use self::hasher::Sha512Hasher;

#[cfg(feature = "sha1")]
pub use self::hasher::Sha1Hasher;

#[cfg(feature = "md5")]
pub use self::hasher::Md5Hasher;

#[cfg(feature = "blake3")]
pub use self::hasher::Blake3Hasher;

mod error;
mod hasher;
mod reader;
mod set;
mod writer;
