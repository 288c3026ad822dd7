//! Fixed-output Keccak-family digests: the FIPS 202 SHA-3 variants and the
//! legacy pre-standardization Keccak variants, which differ only in the
//! domain separation byte.

use crate::digest::{Digest, DigestCore};

const DS_SHA3: u8 = 0x06;
const DS_KECCAK: u8 = 0x01;

/// A SHA3-224/256/384/512 or Keccak-224/256/384/512 digest.
/// The rate is `200 - 2 * digest_length`.
#[derive(Debug, Clone)]
pub struct Sha3 {
    core: DigestCore,
    algorithm: &'static str,
    digest_len: usize,
}

impl Sha3 {
    fn new(algorithm: &'static str, digest_len: usize, ds: u8) -> Self {
        Sha3 { core: DigestCore::new(200 - 2 * digest_len, ds), algorithm, digest_len }
    }

    pub fn sha3_224() -> Self {
        Sha3::new("SHA3-224", 28, DS_SHA3)
    }

    pub fn sha3_256() -> Self {
        Sha3::new("SHA3-256", 32, DS_SHA3)
    }

    pub fn sha3_384() -> Self {
        Sha3::new("SHA3-384", 48, DS_SHA3)
    }

    pub fn sha3_512() -> Self {
        Sha3::new("SHA3-512", 64, DS_SHA3)
    }

    pub fn keccak_224() -> Self {
        Sha3::new("Keccak-224", 28, DS_KECCAK)
    }

    pub fn keccak_256() -> Self {
        Sha3::new("Keccak-256", 32, DS_KECCAK)
    }

    pub fn keccak_384() -> Self {
        Sha3::new("Keccak-384", 48, DS_KECCAK)
    }

    pub fn keccak_512() -> Self {
        Sha3::new("Keccak-512", 64, DS_KECCAK)
    }
}

impl Digest for Sha3 {
    fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    fn block_size(&self) -> usize {
        self.core.rate()
    }

    fn digest_length(&self) -> usize {
        self.digest_len
    }

    fn update(&mut self, input: &[u8]) {
        self.core.update(input);
    }

    fn update_byte(&mut self, byte: u8) {
        self.core.update_byte(byte);
    }

    fn digest(&mut self) -> Vec<u8> {
        let mut out = vec![0; self.digest_len];
        self.core.finalize(&[]);
        self.core.extract(&mut out, 0);
        self.core.reset();
        out
    }

    fn reset(&mut self) {
        self.core.reset();
    }
}
