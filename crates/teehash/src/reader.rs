use std::borrow::{Borrow, BorrowMut};
use std::io::{self, Read};

use tracing::debug;

use crate::{HasherSet, Result};

/// Reader that mirrors every byte it returns into a [`HasherSet`].
///
/// The set may be lent (`&mut HasherSet`) or owned. Digests are undefined once
/// the inner reader has returned an error other than [`io::ErrorKind::Interrupted`].
#[derive(Debug)]
pub struct HashingReader<R, S = HasherSet> {
    reader:  R,
    hashers: S,
}

impl<R, S> HashingReader<R, S> {
    pub fn new(reader: R, hashers: S) -> Self { Self { reader, hashers } }

    pub fn get_ref(&self) -> &R { &self.reader }

    /// Reading through this reference bypasses the hashers.
    pub fn get_mut(&mut self) -> &mut R { &mut self.reader }

    pub fn into_inner(self) -> R { self.reader }

    pub fn into_parts(self) -> (R, S) { (self.reader, self.hashers) }
}

impl<R, S: Borrow<HasherSet>> HashingReader<R, S> {
    pub fn hashers(&self) -> &HasherSet { self.hashers.borrow() }

    /// See [`HasherSet::hash`]. Panics if `name` is not registered.
    pub fn hash(&self, name: &str, buf: Vec<u8>) -> Vec<u8> { self.hashers().hash(name, buf) }

    /// See [`HasherSet::hex_hash`]. Panics if `name` is not registered.
    pub fn hex_hash(&self, name: &str) -> String { self.hashers().hex_hash(name) }

    pub fn verify(&self, name: &str, expected: &str) -> Result<()> {
        self.hashers().verify(name, expected)
    }
}

impl<R, S: BorrowMut<HasherSet>> HashingReader<R, S> {
    pub fn hashers_mut(&mut self) -> &mut HasherSet { self.hashers.borrow_mut() }
}

impl<R: Read, S: BorrowMut<HasherSet>> Read for HashingReader<R, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = match self.reader.read(buf) {
            Ok(n) => n,
            Err(err) => {
                if err.kind() != io::ErrorKind::Interrupted {
                    debug!(error = %err, "source read failed, digests are undefined");
                }
                return Err(err);
            }
        };

        if n > 0 {
            self.hashers.borrow_mut().update(&buf[..n]);
        }
        Ok(n)
    }
}
