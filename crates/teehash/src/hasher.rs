use digest::Digest;

/// Incremental digest accumulator.
///
/// `finalize_into` reads the digest of everything absorbed so far without
/// resetting, so it can be called mid-stream and repeatedly.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);

    /// Append the current digest to `buf`.
    fn finalize_into(&self, buf: &mut Vec<u8>);

    fn output_size(&self) -> usize;

    fn finalize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.output_size());
        self.finalize_into(&mut buf);
        buf
    }
}

/// Adapter for any RustCrypto [`Digest`].
///
/// The digest state is cloned on finalize, leaving the running state intact.
#[derive(Clone, Debug, Default)]
pub struct DigestHasher<D>(D);

impl<D: Digest> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { D::digest(data).to_vec() }
}

impl<D: Digest + Clone + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { Digest::update(&mut self.0, data); }

    fn finalize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0.clone().finalize());
    }

    fn output_size(&self) -> usize { <D as Digest>::output_size() }
}

#[cfg(feature = "sha256")]
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;

#[cfg(feature = "sha512")]
pub type Sha512Hasher = DigestHasher<sha2::Sha512>;

#[cfg(feature = "sha1")]
pub type Sha1Hasher = DigestHasher<sha1::Sha1>;

#[cfg(feature = "md5")]
pub type Md5Hasher = DigestHasher<md5::Md5>;

#[cfg(feature = "blake3")]
#[derive(Clone, Debug, Default)]
pub struct Blake3Hasher(blake3::Hasher);

#[cfg(feature = "blake3")]
impl Blake3Hasher {
    pub fn new() -> Self { Self(blake3::Hasher::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { blake3::hash(data).as_bytes().to_vec() }
}

#[cfg(feature = "blake3")]
impl Hasher for Blake3Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }

    fn finalize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.0.finalize().as_bytes());
    }

    fn output_size(&self) -> usize { blake3::OUT_LEN }
}
