//! NIST SP 800-185 variable-length integer encodings.
//!
//! `left_encode` and `right_encode` emit the minimal big-endian magnitude of
//! a value with its byte length prepended or appended, making every encoded
//! field self-delimiting. The derived constructions rely on this for
//! domain separation at the encoding level.

/// Maximum encoded size: 8 magnitude bytes plus 1 length byte.
pub const ENC_MAX: usize = 9;

/// Encodes `val` with the length byte FIRST. `left_encode(0)` is `[1, 0]`.
pub fn left_encode(val: u64, buf: &mut [u8; ENC_MAX]) -> &[u8] {
    buf[1..].copy_from_slice(&val.to_be_bytes());
    // Keep at least one magnitude byte, so scan only the first 7.
    let skip = buf[1..8].iter().take_while(|&&b| b == 0).count();
    buf[skip] = (8 - skip) as u8;
    &buf[skip..]
}

/// Encodes `val` with the length byte LAST. `right_encode(0)` is `[0, 1]`.
pub fn right_encode(val: u64, buf: &mut [u8; ENC_MAX]) -> &[u8] {
    buf[..8].copy_from_slice(&val.to_be_bytes());
    let skip = buf[..7].iter().take_while(|&&b| b == 0).count();
    buf[8] = (8 - skip) as u8;
    &buf[skip..]
}
