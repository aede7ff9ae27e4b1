use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

use crate::{Error, Hasher, Result};

/// Named collection of [`Hasher`]s that all absorb the same byte stream.
///
/// Names are chosen by the caller and are only used to look digests up again.
#[derive(Default)]
pub struct HasherSet {
    hashers: BTreeMap<String, Box<dyn Hasher>>,
}

impl HasherSet {
    pub fn new() -> Self { Self::default() }

    /// Fresh `sha256`, `sha1` and `md5` hashers under those names.
    #[cfg(all(feature = "sha256", feature = "sha1", feature = "md5"))]
    pub fn std_crypto() -> Self {
        use crate::{Md5Hasher, Sha1Hasher, Sha256Hasher};

        let mut hashers: BTreeMap<String, Box<dyn Hasher>> = BTreeMap::new();
        hashers.insert("sha256".into(), Box::new(Sha256Hasher::new()));
        hashers.insert("sha1".into(), Box::new(Sha1Hasher::new()));
        hashers.insert("md5".into(), Box::new(Md5Hasher::new()));
        Self { hashers }
    }

    pub fn insert<H>(&mut self, name: impl Into<String>, hasher: H) -> Result<()>
    where
        H: Hasher + 'static,
    {
        let name = name.into();
        if self.hashers.contains_key(&name) {
            return Err(Error::DuplicateHasher(name));
        }
        self.hashers.insert(name, Box::new(hasher));
        Ok(())
    }

    pub fn with<H>(mut self, name: impl Into<String>, hasher: H) -> Result<Self>
    where
        H: Hasher + 'static,
    {
        self.insert(name, hasher)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool { self.hashers.contains_key(name) }

    pub fn names(&self) -> impl Iterator<Item = &str> { self.hashers.keys().map(String::as_str) }

    pub fn len(&self) -> usize { self.hashers.len() }

    pub fn is_empty(&self) -> bool { self.hashers.is_empty() }

    pub fn get(&self, name: &str) -> Option<&dyn Hasher> {
        self.hashers.get(name).map(|hasher| hasher.as_ref())
    }

    /// Feed `data` to every hasher in the set.
    pub fn update(&mut self, data: &[u8]) {
        trace!(bytes = data.len(), hashers = self.hashers.len(), "fan out");
        for hasher in self.hashers.values_mut() {
            hasher.update(data);
        }
    }

    /// Append the digest registered under `name` to `buf` and return it.
    ///
    /// # Panics
    ///
    /// If nothing is registered under `name`. Use [`HasherSet::try_hash`] when the
    /// name is not known to be present.
    pub fn hash(&self, name: &str, buf: Vec<u8>) -> Vec<u8> {
        match self.try_hash(name, buf) {
            Ok(buf) => buf,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_hash(&self, name: &str, mut buf: Vec<u8>) -> Result<Vec<u8>> {
        let hasher = self
            .hashers
            .get(name)
            .ok_or_else(|| Error::UnknownHasher(name.to_owned()))?;
        hasher.finalize_into(&mut buf);
        Ok(buf)
    }

    /// Lowercase hex rendering of [`HasherSet::hash`]. Panics on unknown names.
    pub fn hex_hash(&self, name: &str) -> String { hex::encode(self.hash(name, Vec::new())) }

    /// Compare the current digest under `name` with a hex-encoded expectation.
    pub fn verify(&self, name: &str, expected: &str) -> Result<()> {
        let expected = hex::decode(expected)?;
        let actual = self.try_hash(name, Vec::new())?;
        if actual == expected {
            Ok(())
        } else {
            Err(Error::Mismatch {
                name:     name.to_owned(),
                expected: hex::encode(expected),
                actual:   hex::encode(actual),
            })
        }
    }
}

impl fmt::Debug for HasherSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
