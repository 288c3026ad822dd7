//! Extendable-output support: reader snapshots over a finalized sponge.

use crate::digest::Digest;
use crate::errors::{Error, Result};
use crate::sponge::Sponge;

/// Extendable-output functions: digests whose squeeze phase can be read
/// out incrementally through a [`XofReader`].
pub trait Xof: Digest {
    /// Captures a snapshot of the current state as a [`XofReader`], after
    /// buffered input is flushed and padding applied. If `reset_xof` is
    /// true the digest itself returns to its initial state; either way the
    /// reader is fully independent of it.
    fn reader(&mut self, reset_xof: bool) -> Result<XofReader>;

    /// Runs `action` against a fresh reader and closes it on every exit
    /// path, error or not.
    fn with_reader<T>(
        &mut self,
        reset_xof: bool,
        action: impl FnOnce(&mut XofReader) -> Result<T>,
    ) -> Result<T> {
        let mut reader = self.reader(reset_xof)?;
        let out = action(&mut reader);
        reader.close();
        out
    }
}

/// A resumable view of one finalized sponge state. Multiple readers taken
/// from the same digest are independent of each other and of the digest;
/// consecutive reads concatenate to the same bytes as one large read.
#[derive(Debug, Clone, PartialEq)]
pub struct XofReader {
    sponge: Sponge,
    bytes_read: u64,
    closed: bool,
}

impl XofReader {
    pub(crate) fn new(sponge: Sponge) -> Self {
        XofReader { sponge, bytes_read: 0, closed: false }
    }

    /// Fills `out` with the next `out.len()` bytes of squeeze output.
    pub fn read(&mut self, out: &mut [u8]) -> Result<usize> {
        let len = out.len();
        self.read_into(out, 0, len)
    }

    /// Writes the next `len` bytes into `out[offset..offset + len]`.
    pub fn read_into(&mut self, out: &mut [u8], offset: usize, len: usize) -> Result<usize> {
        let end = offset.checked_add(len).ok_or(Error::OutOfBounds)?;
        if end > out.len() {
            return Err(Error::OutOfBounds);
        }
        if self.closed {
            return Err(Error::ReaderClosed);
        }
        if len == 0 {
            return Ok(0);
        }

        self.sponge.extract(&mut out[offset..end], self.bytes_read);
        self.bytes_read += len as u64;
        Ok(len)
    }

    /// Total bytes produced by this reader so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Zeroes the snapshot and marks the reader unusable. Idempotent.
    pub fn close(&mut self) {
        if !self.closed {
            self.sponge.reset();
            self.closed = true;
        }
    }
}
