//! ParallelHash128/256 (NIST SP 800-185 section 6).
//!
//! Input is split into B-byte segments; each segment is hashed by an inner
//! plain cSHAKE instance and the inner digest absorbed into the outer
//! sponge. Segment digests enter the outer sponge in input order, so a
//! sequential evaluation is fully conforming; concurrency would only ever
//! be a performance optimization.

use core::cmp::min;

use crate::digest::{Digest, DigestCore};
use crate::encode::{ENC_MAX, left_encode, right_encode};
use crate::errors::{Error, Result};
use crate::shake::{DIGEST_LEN_128, DIGEST_LEN_256, DS_SHAKE, RATE_128, RATE_256, core_with_prefix};
use crate::xof::{Xof, XofReader};

const FUNCTION_NAME: &[u8] = b"ParallelHash";

#[derive(Debug, Clone, PartialEq)]
pub struct ParallelHash {
    core: DigestCore,
    // Plain cSHAKE (empty N and S) hashing the current segment.
    inner: DigestCore,
    inner_digest_len: usize,
    inner_pos: usize,
    segment_size: usize,
    segments: u64,
    algorithm: &'static str,
    digest_len: usize,
    xof_mode: bool,
}

impl ParallelHash {
    fn new(
        rate: usize,
        algorithm: &'static str,
        customization: &[u8],
        segment_size: usize,
        inner_digest_len: usize,
        digest_len: usize,
        xof_mode: bool,
    ) -> Result<Self> {
        if segment_size == 0 {
            return Err(Error::InvalidBlockSize);
        }

        let mut core = core_with_prefix(rate, FUNCTION_NAME, customization);
        let mut buf = [0u8; ENC_MAX];
        core.update(left_encode(segment_size as u64, &mut buf));

        Ok(ParallelHash {
            core,
            inner: DigestCore::new(rate, DS_SHAKE),
            inner_digest_len,
            inner_pos: 0,
            segment_size,
            segments: 0,
            algorithm,
            digest_len,
            xof_mode,
        })
    }

    /// ParallelHash128 with segment size `b` and the default 32-byte output.
    pub fn new128(customization: &[u8], b: usize) -> Result<Self> {
        ParallelHash::new(RATE_128, "ParallelHash128", customization, b, DIGEST_LEN_128, DIGEST_LEN_128, false)
    }

    /// ParallelHash256 with segment size `b` and the default 64-byte output.
    pub fn new256(customization: &[u8], b: usize) -> Result<Self> {
        ParallelHash::new(RATE_256, "ParallelHash256", customization, b, DIGEST_LEN_256, DIGEST_LEN_256, false)
    }

    pub fn new128_with_length(customization: &[u8], b: usize, output_length: usize) -> Result<Self> {
        if output_length == 0 {
            return Err(Error::InvalidOutputLength);
        }
        ParallelHash::new(RATE_128, "ParallelHash128", customization, b, DIGEST_LEN_128, output_length, false)
    }

    pub fn new256_with_length(customization: &[u8], b: usize, output_length: usize) -> Result<Self> {
        if output_length == 0 {
            return Err(Error::InvalidOutputLength);
        }
        ParallelHash::new(RATE_256, "ParallelHash256", customization, b, DIGEST_LEN_256, output_length, false)
    }

    /// XOF-mode ParallelHash128.
    pub fn xof128(customization: &[u8], b: usize) -> Result<Self> {
        ParallelHash::new(RATE_128, "ParallelHash128", customization, b, DIGEST_LEN_128, 0, true)
    }

    /// XOF-mode ParallelHash256.
    pub fn xof256(customization: &[u8], b: usize) -> Result<Self> {
        ParallelHash::new(RATE_256, "ParallelHash256", customization, b, DIGEST_LEN_256, 0, true)
    }

    // Hashes the buffered segment with the inner cSHAKE and absorbs its
    // digest into the outer sponge.
    fn process_segment(&mut self) {
        let mut segment_digest = [0u8; 64];
        let segment_digest = &mut segment_digest[..self.inner_digest_len];

        self.inner.finalize(&[]);
        self.inner.extract(segment_digest, 0);
        self.inner.reset();

        self.core.update(segment_digest);
        self.segments += 1;
        self.inner_pos = 0;
    }

    // Flushes any trailing partial segment and absorbs the final
    // right_encode(segments) || right_encode(output_bits) trailer.
    fn finalize_outer(&mut self, output_bits: u64) {
        if self.inner_pos != 0 {
            self.process_segment();
        }

        let mut trailer = [0u8; 2 * ENC_MAX];
        let mut buf = [0u8; ENC_MAX];
        let enc = right_encode(self.segments, &mut buf);
        let mut len = enc.len();
        trailer[..len].copy_from_slice(enc);
        let enc = right_encode(output_bits, &mut buf);
        trailer[len..len + enc.len()].copy_from_slice(enc);
        len += enc.len();

        self.core.finalize(&trailer[..len]);
    }
}

impl Digest for ParallelHash {
    fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    fn block_size(&self) -> usize {
        self.core.rate()
    }

    fn digest_length(&self) -> usize {
        self.digest_len
    }

    fn update(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let take = min(self.segment_size - self.inner_pos, input.len());
            self.inner.update(&input[..take]);
            self.inner_pos += take;
            input = &input[take..];

            if self.inner_pos == self.segment_size {
                self.process_segment();
            }
        }
    }

    fn update_byte(&mut self, byte: u8) {
        self.update(&[byte]);
    }

    fn digest(&mut self) -> Vec<u8> {
        let mut out = vec![0; self.digest_len];
        self.finalize_outer(self.digest_len as u64 * 8);
        self.core.extract(&mut out, 0);
        self.reset();
        out
    }

    fn reset(&mut self) {
        self.core.reset();
        let mut buf = [0u8; ENC_MAX];
        let enc = left_encode(self.segment_size as u64, &mut buf);
        self.core.update(enc);

        self.inner.reset();
        self.inner_pos = 0;
        self.segments = 0;
    }
}

impl Xof for ParallelHash {
    fn reader(&mut self, reset_xof: bool) -> Result<XofReader> {
        if !self.xof_mode {
            return Err(Error::NotXofMode);
        }

        let mut snapshot = self.clone();
        snapshot.finalize_outer(0);
        let reader = XofReader::new(snapshot.core.into_sponge());
        if reset_xof {
            self.reset();
        }
        Ok(reader)
    }
}
