//! Sponge mechanics over Keccak-f[1600]: block absorption and the
//! generalized squeeze used by both fixed-output digests and XOF readers.

use core::cmp::min;

use crate::keccak::{KeccakState, keccak_f};

const LANE_BYTES: usize = 8;

/// One absorb/squeeze instance. The `rate` is the number of state bytes
/// exposed to input/output; the remaining bytes (capacity) are never
/// directly touched.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sponge {
    state: KeccakState<u64>,
    rate: usize,
}

impl Sponge {
    pub(crate) fn new(rate: usize) -> Self {
        debug_assert!(rate % LANE_BYTES == 0 && rate <= 25 * LANE_BYTES);
        Sponge { state: KeccakState::new(), rate }
    }

    #[inline]
    pub(crate) fn rate(&self) -> usize {
        self.rate
    }

    /// XORs one rate-sized block into the state, little-endian per lane,
    /// then permutes.
    pub(crate) fn absorb_block(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), self.rate);

        for (i, chunk) in block.chunks_exact(LANE_BYTES).enumerate() {
            let word = u64::from_le_bytes(chunk.try_into().unwrap());
            self.state.xor_lane(i, word);
        }
        keccak_f(&mut self.state);
    }

    /// Copies `out.len()` bytes of squeeze output, starting at the stream
    /// offset implied by `bytes_already_read`. Permutes whenever the current
    /// output window is exhausted mid-extraction, so reads may begin and end
    /// mid-lane and span any number of permutations.
    ///
    /// The caller must have already applied the finalizing permutation for
    /// the first window (offset 0), and must only ever advance
    /// `bytes_already_read` sequentially.
    pub(crate) fn extract(&mut self, out: &mut [u8], bytes_already_read: u64) {
        let rate = self.rate as u64;
        let mut read = bytes_already_read;
        let mut out = out;

        while !out.is_empty() {
            let pos = (read % rate) as usize;
            if pos == 0 && read != 0 {
                keccak_f(&mut self.state);
            }

            let len = min(self.rate - pos, out.len());
            self.copy_out(pos, &mut out[..len]);
            read += len as u64;
            out = &mut out[len..];
        }
    }

    // Copies bytes from the lane representation starting at state byte
    // offset `pos`, handling partial lanes at both ends.
    fn copy_out(&self, mut pos: usize, out: &mut [u8]) {
        let mut filled = 0;
        while filled < out.len() {
            let lane = self.state.lane(pos / LANE_BYTES).to_le_bytes();
            let offset = pos % LANE_BYTES;
            let n = min(LANE_BYTES - offset, out.len() - filled);
            out[filled..filled + n].copy_from_slice(&lane[offset..offset + n]);
            pos += n;
            filled += n;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.state.reset();
    }
}
