use std::borrow::{Borrow, BorrowMut};
use std::io::{self, Write};

use tracing::debug;

use crate::{HasherSet, Result};

/// Writer that forwards to an inner writer and, once a buffer has been fully
/// accepted, feeds it to a [`HasherSet`].
///
/// Each `write` call is all-or-nothing for the hashers: the inner writer must take
/// the whole buffer (short writes are continued) before any hasher sees a byte. A
/// failed call leaves the hashers untouched, so they may lag behind whatever the
/// inner writer accepted before failing. Digests are undefined after an error.
#[derive(Debug)]
pub struct HashingWriter<W, S = HasherSet> {
    writer:  W,
    hashers: S,
}

impl<W, S> HashingWriter<W, S> {
    pub fn new(writer: W, hashers: S) -> Self { Self { writer, hashers } }

    pub fn get_ref(&self) -> &W { &self.writer }

    /// Writing through this reference bypasses the hashers.
    pub fn get_mut(&mut self) -> &mut W { &mut self.writer }

    pub fn into_inner(self) -> W { self.writer }

    pub fn into_parts(self) -> (W, S) { (self.writer, self.hashers) }
}

impl<W, S: Borrow<HasherSet>> HashingWriter<W, S> {
    pub fn hashers(&self) -> &HasherSet { self.hashers.borrow() }

    /// See [`HasherSet::hash`]. Panics if `name` is not registered.
    pub fn hash(&self, name: &str, buf: Vec<u8>) -> Vec<u8> { self.hashers().hash(name, buf) }

    /// See [`HasherSet::hex_hash`]. Panics if `name` is not registered.
    pub fn hex_hash(&self, name: &str) -> String { self.hashers().hex_hash(name) }

    pub fn verify(&self, name: &str, expected: &str) -> Result<()> {
        self.hashers().verify(name, expected)
    }
}

impl<W, S: BorrowMut<HasherSet>> HashingWriter<W, S> {
    pub fn hashers_mut(&mut self) -> &mut HasherSet { self.hashers.borrow_mut() }
}

impl<W: Write, S: BorrowMut<HasherSet>> Write for HashingWriter<W, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Err(err) = self.writer.write_all(buf) {
            debug!(error = %err, len = buf.len(), "destination write failed, digests are undefined");
            return Err(err);
        }

        self.hashers.borrow_mut().update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { self.writer.flush() }
}

#[cfg(all(test, feature = "sha256", feature = "sha1", feature = "md5"))]
mod tests {
    use super::*;
    use crate::{Md5Hasher, Sha1Hasher, Sha256Hasher};

    const HAPPY_SHA256: &str = "1963f25b4f1f410e5702a9bcb2d44a44a43aaea0ef4f946ddb24c1472155a13a";

    /// Accepts at most `chunk` bytes per call and fails once `limit` bytes are in.
    struct Flaky {
        accepted: Vec<u8>,
        chunk:    usize,
        limit:    usize,
        flushed:  bool,
    }

    impl Flaky {
        fn new(chunk: usize, limit: usize) -> Self {
            Self {
                accepted: Vec::new(),
                chunk,
                limit,
                flushed: false,
            }
        }
    }

    impl Write for Flaky {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.accepted.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "device full"));
            }
            let n = buf.len().min(self.chunk).min(room);
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    #[test]
    fn test_hashing_writer_sha256() {
        let set = HasherSet::new().with("sha256", Sha256Hasher::new()).unwrap();
        let mut writer = HashingWriter::new(io::sink(), set);

        writer.write_all(b"hello I am happy").unwrap();

        assert_eq!(writer.hex_hash("sha256"), HAPPY_SHA256);
        assert_eq!(writer.hex_hash("sha256"), HAPPY_SHA256);
    }

    #[test]
    fn test_hashing_writer_multiple_calls() {
        let mut writer = HashingWriter::new(Vec::new(), HasherSet::std_crypto());

        assert_eq!(writer.write(b"hello ").unwrap(), 6);
        assert_eq!(writer.write(b"").unwrap(), 0);
        assert_eq!(writer.write(b"world").unwrap(), 5);

        assert_eq!(writer.get_ref(), b"hello world");
        assert_eq!(writer.hash("sha256", Vec::new()), Sha256Hasher::digest(b"hello world"));
        assert_eq!(writer.hash("sha1", Vec::new()), Sha1Hasher::digest(b"hello world"));
        assert_eq!(writer.hash("md5", Vec::new()), Md5Hasher::digest(b"hello world"));
    }

    #[test]
    fn test_short_writes_are_completed() {
        let mut writer = HashingWriter::new(Flaky::new(3, usize::MAX), HasherSet::std_crypto());

        assert_eq!(writer.write(b"eleven byte").unwrap(), 11);

        assert_eq!(writer.get_ref().accepted, b"eleven byte");
        assert_eq!(writer.hash("md5", Vec::new()), Md5Hasher::digest(b"eleven byte"));
    }

    #[test]
    fn test_failed_write_leaves_hashers_untouched() {
        let mut writer = HashingWriter::new(Flaky::new(4, 10), HasherSet::std_crypto());

        writer.write_all(b"ok").unwrap();
        let before = writer.hex_hash("sha256");

        let err = writer.write(b"this does not fit").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert_eq!(err.to_string(), "device full");

        // The destination took eight bytes of the failed call, the hashers took none.
        assert_eq!(writer.get_ref().accepted, b"okthis doe");
        assert_eq!(writer.hex_hash("sha256"), before);
        assert_eq!(writer.hash("md5", Vec::new()), Md5Hasher::digest(b"ok"));
    }

    #[test]
    fn test_flush_passes_through() {
        let mut writer = HashingWriter::new(Flaky::new(8, 8), HasherSet::std_crypto());
        writer.flush().unwrap();
        assert!(writer.get_ref().flushed);
        assert_eq!(writer.hash("sha1", Vec::new()), Sha1Hasher::digest(b""));
    }

    #[test]
    fn test_borrowed_set_with_verify() {
        let mut set = HasherSet::std_crypto();
        {
            let mut writer = HashingWriter::new(io::sink(), &mut set);
            writer.write_all(b"hello world").unwrap();
            writer.verify("md5", "5eb63bbbe01eeed093cb22bb8f5acdc3").unwrap();
        }
        set.verify("sha1", "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed").unwrap();
    }
}
