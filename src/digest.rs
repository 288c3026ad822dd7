//! Streaming digest framework shared by every algorithm in the crate:
//! partial-block buffering, block-boundary compression, pad10*1
//! finalization and reset/copy semantics.

use crate::sponge::Sponge;

/// Uniform streaming interface implemented by every digest in the crate.
///
/// `digest()` implicitly resets, so a fresh call without `update` reproduces
/// the algorithm's empty-input hash. Independent deep copies come from
/// `Clone`; mutating a clone never affects the original.
pub trait Digest: Clone {
    /// Canonical algorithm name, e.g. `"SHA3-256"` or `"ParallelHash128"`.
    fn algorithm(&self) -> &'static str;

    /// The sponge rate in bytes.
    fn block_size(&self) -> usize;

    /// Fixed output size in bytes (0 for XOF-mode instances).
    fn digest_length(&self) -> usize;

    fn update(&mut self, input: &[u8]);

    fn update_byte(&mut self, byte: u8);

    /// Finalizes and returns `digest_length()` bytes, then resets.
    fn digest(&mut self) -> Vec<u8>;

    /// Convenience for `update(input)` followed by `digest()`.
    fn digest_bytes(&mut self, input: &[u8]) -> Vec<u8> {
        self.update(input);
        self.digest()
    }

    /// Returns to the initial state, re-absorbing any construction-time
    /// prefix.
    fn reset(&mut self);
}

/// The buffered sponge driving each digest: owns the partial-block buffer,
/// its cursor, the domain separation byte and the optional initialization
/// prefix (cSHAKE) that reset must re-absorb.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DigestCore {
    sponge: Sponge,
    buf: Vec<u8>,
    pos: usize,
    ds: u8,
    init_prefix: Option<Vec<u8>>,
}

impl DigestCore {
    pub(crate) fn new(rate: usize, ds: u8) -> Self {
        DigestCore { sponge: Sponge::new(rate), buf: vec![0; rate], pos: 0, ds, init_prefix: None }
    }

    /// A core whose initial condition includes `prefix` absorbed and
    /// zero-padded to a rate boundary (SP 800-185 bytepad).
    pub(crate) fn with_prefix(rate: usize, ds: u8, prefix: Vec<u8>) -> Self {
        let mut core = DigestCore::new(rate, ds);
        core.init_prefix = Some(prefix);
        core.absorb_prefix();
        core
    }

    #[inline]
    pub(crate) fn rate(&self) -> usize {
        self.sponge.rate()
    }

    pub(crate) fn update_byte(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
        if self.pos == self.rate() {
            self.sponge.absorb_block(&self.buf);
            self.pos = 0;
        }
    }

    pub(crate) fn update(&mut self, mut input: &[u8]) {
        let rate = self.rate();

        if self.pos > 0 {
            let needed = rate - self.pos;
            if input.len() < needed {
                self.buf[self.pos..self.pos + input.len()].copy_from_slice(input);
                self.pos += input.len();
                return;
            }
            self.buf[self.pos..].copy_from_slice(&input[..needed]);
            self.sponge.absorb_block(&self.buf);
            self.pos = 0;
            input = &input[needed..];
        }

        // Full blocks compress directly from the caller's slice.
        while input.len() >= rate {
            self.sponge.absorb_block(&input[..rate]);
            input = &input[rate..];
        }

        if !input.is_empty() {
            self.buf[..input.len()].copy_from_slice(input);
            self.pos = input.len();
        }
    }

    /// Appends `trailer`, applies pad10*1 (domain separation byte, zero
    /// fill, final set bit) and absorbs the last block. The sponge is left
    /// primed for squeezing at offset 0.
    pub(crate) fn finalize(&mut self, trailer: &[u8]) {
        self.update(trailer);

        let rate = self.rate();
        self.buf[self.pos] = self.ds;
        self.buf[self.pos + 1..rate].fill(0);
        self.buf[rate - 1] ^= 0x80;
        self.sponge.absorb_block(&self.buf);
        self.pos = 0;
    }

    /// Squeezes `out.len()` bytes starting at stream offset
    /// `bytes_already_read`. Only valid after [`DigestCore::finalize`].
    pub(crate) fn extract(&mut self, out: &mut [u8], bytes_already_read: u64) {
        self.sponge.extract(out, bytes_already_read);
    }

    /// Consumes the core, yielding its primed sponge for a reader snapshot.
    pub(crate) fn into_sponge(self) -> Sponge {
        self.sponge
    }

    pub(crate) fn reset(&mut self) {
        self.sponge.reset();
        self.pos = 0;
        self.absorb_prefix();
    }

    fn absorb_prefix(&mut self) {
        let Some(prefix) = self.init_prefix.take() else { return };
        self.update(&prefix);
        self.init_prefix = Some(prefix);

        // bytepad: zero-fill to the next block boundary, unless the prefix
        // already ended on one.
        if self.pos != 0 {
            let rate = self.rate();
            self.buf[self.pos..rate].fill(0);
            self.sponge.absorb_block(&self.buf);
            self.pos = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_byte_matches_bulk_update() {
        let mut a = DigestCore::new(136, 0x06);
        let mut b = DigestCore::new(136, 0x06);

        let data: Vec<u8> = (0..300).map(|i| i as u8).collect();
        a.update(&data);
        for &byte in &data {
            b.update_byte(byte);
        }

        a.finalize(&[]);
        b.finalize(&[]);

        let mut out_a = [0u8; 32];
        let mut out_b = [0u8; 32];
        a.extract(&mut out_a, 0);
        b.extract(&mut out_b, 0);
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn test_prefix_reabsorbed_on_reset() {
        let mut a = DigestCore::with_prefix(168, 0x04, vec![0xAB; 20]);
        let b = a.clone();

        a.update(b"diverge");
        a.reset();

        let (mut a, mut b) = (a, b);
        a.finalize(&[]);
        b.finalize(&[]);

        let mut out_a = [0u8; 16];
        let mut out_b = [0u8; 16];
        a.extract(&mut out_a, 0);
        b.extract(&mut out_b, 0);
        assert_eq!(out_a, out_b);
    }
}
