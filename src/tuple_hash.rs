//! TupleHash128/256 (NIST SP 800-185 section 5).
//!
//! Every `update` call is one tuple element: its bytes are prefixed with
//! `left_encode(len * 8)` before absorption, so `update(a); update(b)` and
//! `update(a ++ b)` produce different digests by construction.

use crate::digest::{Digest, DigestCore};
use crate::encode::{ENC_MAX, left_encode, right_encode};
use crate::errors::{Error, Result};
use crate::shake::{DIGEST_LEN_128, DIGEST_LEN_256, RATE_128, RATE_256, core_with_prefix};
use crate::xof::{Xof, XofReader};

const FUNCTION_NAME: &[u8] = b"TupleHash";

#[derive(Debug, Clone, PartialEq)]
pub struct TupleHash {
    core: DigestCore,
    algorithm: &'static str,
    digest_len: usize,
    xof_mode: bool,
}

impl TupleHash {
    fn new(
        rate: usize,
        algorithm: &'static str,
        customization: &[u8],
        digest_len: usize,
        xof_mode: bool,
    ) -> Self {
        TupleHash {
            core: core_with_prefix(rate, FUNCTION_NAME, customization),
            algorithm,
            digest_len,
            xof_mode,
        }
    }

    /// TupleHash128 with the default 32-byte output.
    pub fn new128(customization: &[u8]) -> Self {
        TupleHash::new(RATE_128, "TupleHash128", customization, DIGEST_LEN_128, false)
    }

    /// TupleHash256 with the default 64-byte output.
    pub fn new256(customization: &[u8]) -> Self {
        TupleHash::new(RATE_256, "TupleHash256", customization, DIGEST_LEN_256, false)
    }

    pub fn new128_with_length(customization: &[u8], output_length: usize) -> Result<Self> {
        if output_length == 0 {
            return Err(Error::InvalidOutputLength);
        }
        Ok(TupleHash::new(RATE_128, "TupleHash128", customization, output_length, false))
    }

    pub fn new256_with_length(customization: &[u8], output_length: usize) -> Result<Self> {
        if output_length == 0 {
            return Err(Error::InvalidOutputLength);
        }
        Ok(TupleHash::new(RATE_256, "TupleHash256", customization, output_length, false))
    }

    /// XOF-mode TupleHash128: output length is encoded as 0 and read
    /// through [`Xof::reader`].
    pub fn xof128(customization: &[u8]) -> Self {
        TupleHash::new(RATE_128, "TupleHash128", customization, 0, true)
    }

    /// XOF-mode TupleHash256.
    pub fn xof256(customization: &[u8]) -> Self {
        TupleHash::new(RATE_256, "TupleHash256", customization, 0, true)
    }
}

impl Digest for TupleHash {
    fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    fn block_size(&self) -> usize {
        self.core.rate()
    }

    fn digest_length(&self) -> usize {
        self.digest_len
    }

    /// Absorbs `input` as ONE tuple element.
    fn update(&mut self, input: &[u8]) {
        let mut buf = [0u8; ENC_MAX];
        let enc = left_encode(input.len() as u64 * 8, &mut buf);
        self.core.update(enc);
        self.core.update(input);
    }

    /// Absorbs a single-byte tuple element.
    fn update_byte(&mut self, byte: u8) {
        self.core.update(&[0x01, 0x08, byte]);
    }

    fn digest(&mut self) -> Vec<u8> {
        let mut out = vec![0; self.digest_len];
        let mut buf = [0u8; ENC_MAX];
        let trailer = right_encode(self.digest_len as u64 * 8, &mut buf);
        self.core.finalize(trailer);
        self.core.extract(&mut out, 0);
        self.core.reset();
        out
    }

    fn reset(&mut self) {
        self.core.reset();
    }
}

impl Xof for TupleHash {
    fn reader(&mut self, reset_xof: bool) -> Result<XofReader> {
        if !self.xof_mode {
            return Err(Error::NotXofMode);
        }

        let mut snapshot = self.core.clone();
        let mut buf = [0u8; ENC_MAX];
        snapshot.finalize(right_encode(0, &mut buf));
        let reader = XofReader::new(snapshot.into_sponge());
        if reset_xof {
            self.reset();
        }
        Ok(reader)
    }
}
