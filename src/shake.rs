//! SHAKE128/256 and cSHAKE128/256.
//!
//! cSHAKE prepends a bytepadded initialization prefix encoding the function
//! name `N` and customization string `S`. With both empty it degenerates
//! exactly to SHAKE (NIST SP 800-185 3.2), which the domain byte selection
//! must reflect.

use crate::digest::{Digest, DigestCore};
use crate::encode::{ENC_MAX, left_encode};
use crate::errors::{Error, Result};
use crate::xof::{Xof, XofReader};

pub(crate) const DS_SHAKE: u8 = 0x1F;
pub(crate) const DS_CSHAKE: u8 = 0x04;

// Rates for the 128- and 256-bit security strengths.
pub(crate) const RATE_128: usize = 168;
pub(crate) const RATE_256: usize = 136;

// Default output lengths when used as a fixed-output digest.
pub(crate) const DIGEST_LEN_128: usize = 32;
pub(crate) const DIGEST_LEN_256: usize = 64;

/// Trailing separator for a cSHAKE parameterization: 0x04, unless both
/// strings are empty and the function degenerates to plain SHAKE (0x1F).
pub(crate) fn domain_byte(name: &[u8], customization: &[u8]) -> u8 {
    if name.is_empty() && customization.is_empty() { DS_SHAKE } else { DS_CSHAKE }
}

/// The cSHAKE initialization prefix:
/// `left_encode(rate) || encode_string(N) || encode_string(S)`.
/// `None` when both strings are empty (no prefix is absorbed).
pub(crate) fn cshake_prefix(rate: usize, name: &[u8], customization: &[u8]) -> Option<Vec<u8>> {
    if name.is_empty() && customization.is_empty() {
        return None;
    }

    let mut buf = [0u8; ENC_MAX];
    let mut prefix = Vec::with_capacity(3 * ENC_MAX + name.len() + customization.len());
    prefix.extend_from_slice(left_encode(rate as u64, &mut buf));
    prefix.extend_from_slice(left_encode(name.len() as u64 * 8, &mut buf));
    prefix.extend_from_slice(name);
    prefix.extend_from_slice(left_encode(customization.len() as u64 * 8, &mut buf));
    prefix.extend_from_slice(customization);
    Some(prefix)
}

pub(crate) fn core_with_prefix(rate: usize, name: &[u8], customization: &[u8]) -> DigestCore {
    let ds = domain_byte(name, customization);
    match cshake_prefix(rate, name, customization) {
        Some(prefix) => DigestCore::with_prefix(rate, ds, prefix),
        None => DigestCore::new(rate, ds),
    }
}

/// A SHAKE or cSHAKE instance. Usable as a fixed-output digest (with the
/// default or an explicit output length) and as an [`Xof`].
#[derive(Debug, Clone, PartialEq)]
pub struct Shake {
    core: DigestCore,
    algorithm: &'static str,
    digest_len: usize,
}

impl Shake {
    pub fn shake128() -> Self {
        Shake {
            core: DigestCore::new(RATE_128, DS_SHAKE),
            algorithm: "SHAKE128",
            digest_len: DIGEST_LEN_128,
        }
    }

    pub fn shake256() -> Self {
        Shake {
            core: DigestCore::new(RATE_256, DS_SHAKE),
            algorithm: "SHAKE256",
            digest_len: DIGEST_LEN_256,
        }
    }

    pub fn shake128_with_length(output_length: usize) -> Result<Self> {
        let mut shake = Shake::shake128();
        shake.digest_len = check_output_length(output_length)?;
        Ok(shake)
    }

    pub fn shake256_with_length(output_length: usize) -> Result<Self> {
        let mut shake = Shake::shake256();
        shake.digest_len = check_output_length(output_length)?;
        Ok(shake)
    }

    pub fn cshake128(name: &[u8], customization: &[u8]) -> Self {
        Shake {
            core: core_with_prefix(RATE_128, name, customization),
            algorithm: "CSHAKE128",
            digest_len: DIGEST_LEN_128,
        }
    }

    pub fn cshake256(name: &[u8], customization: &[u8]) -> Self {
        Shake {
            core: core_with_prefix(RATE_256, name, customization),
            algorithm: "CSHAKE256",
            digest_len: DIGEST_LEN_256,
        }
    }

    pub fn cshake128_with_length(
        name: &[u8],
        customization: &[u8],
        output_length: usize,
    ) -> Result<Self> {
        let mut shake = Shake::cshake128(name, customization);
        shake.digest_len = check_output_length(output_length)?;
        Ok(shake)
    }

    pub fn cshake256_with_length(
        name: &[u8],
        customization: &[u8],
        output_length: usize,
    ) -> Result<Self> {
        let mut shake = Shake::cshake256(name, customization);
        shake.digest_len = check_output_length(output_length)?;
        Ok(shake)
    }
}

fn check_output_length(output_length: usize) -> Result<usize> {
    if output_length == 0 {
        return Err(Error::InvalidOutputLength);
    }
    Ok(output_length)
}

impl Digest for Shake {
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

impl Xof for Shake {
    fn reader(&mut self, reset_xof: bool) -> Result<XofReader> {
        let mut snapshot = self.core.clone();
        snapshot.finalize(&[]);
        let reader = XofReader::new(snapshot.into_sponge());
        if reset_xof {
            self.reset();
        }
        Ok(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_shake_empty() {
        assert_eq!(
            hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26").to_vec(),
            Shake::shake128().digest(),
        );
        assert_eq!(
            hex!(
                "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
                "d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be"
            )
            .to_vec(),
            Shake::shake256().digest(),
        );
    }

    #[test]
    fn test_shake128_sequential_data_multi_read() {
        let mut data = [0u8; 100];
        for (i, b) in data.iter_mut().enumerate() {
            *b = i as u8;
        }
        let expect = hex!(
            "04eba30b78550ee461bb4d591d2b3667eb844002eee5a1c7199f7d0420385f11"
            "18a36dbd5ab19739eea2d2e1789008f9492302b3115e36f47e838c8af0eb8e93"
            "569815cad998deced9bfb064bed1fcb8b2c14b7847a95d8ac3eb63a30b6289d9"
            "6fc855394727560b201e074063a595c9e41af091362e55fc1e8b13c0a920ae83"
            "961e4664f9a1235d4d0f4ea2c93c89f7f84808ac943d1a3d927b64b40bf33d47"
            "0b42601eff17c0b62e032cb102eacda8392d75641d8e3c4b27d0a9487d6ad7b0"
            "4ca47079a459a643"
        );

        let mut shake = Shake::shake128();
        shake.update(&data);
        let mut reader = shake.reader(true).unwrap();

        // The second read crosses the 168-byte rate boundary mid-stream.
        let mut buf = [0u8; 100];
        reader.read(&mut buf).unwrap();
        assert_eq!(expect[..100], buf);
        reader.read(&mut buf).unwrap();
        assert_eq!(expect[100..200], buf);
        assert_eq!(200, reader.bytes_read());
    }

    #[test]
    fn test_cshake128_email_signature() {
        // NIST SP 800-185 cSHAKE sample #1.
        let mut cshake = Shake::cshake128(b"", b"Email Signature");
        cshake.update(&[0x00, 0x01, 0x02, 0x03]);
        assert_eq!(
            hex!("c1c36925b6409a04f1b504fcbca9d82b4017277cb5ed2b2065fc1d3814d5aaf5").to_vec(),
            cshake.digest(),
        );
    }

    #[test]
    fn test_cshake256_email_signature() {
        // NIST SP 800-185 cSHAKE sample #3.
        let mut cshake = Shake::cshake256(b"", b"Email Signature");
        cshake.update(&[0x00, 0x01, 0x02, 0x03]);
        assert_eq!(
            hex!(
                "d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd1"
                "64020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c"
            )
            .to_vec(),
            cshake.digest(),
        );
    }

    #[test]
    fn test_cshake128_empty_input() {
        // Function name sized to fill most of one rate block.
        let n = [5u8; RATE_128 - 2 - 3 - 2];
        let s = b"Test CSHAKE";

        assert_eq!(
            hex!("133db34b6ede033a27bb910ed72c43fb5016d40e82fc817cd333d944cfdf6488").to_vec(),
            Shake::cshake128(&n, s).digest(),
        );
        assert_eq!(
            hex!("63e5b592ba16aef96e22c02f995e04421df9ec14be1b5e82d4da9af10ff2a8c0").to_vec(),
            Shake::cshake128(&n, b"").digest(),
        );
        assert_eq!(
            hex!("4f3047dee03c3b698f2b6da12bffe7ff89bb5c5bb0bc4e4a8a2ba77c12d70af6").to_vec(),
            Shake::cshake128(b"", s).digest(),
        );
    }

    #[test]
    fn test_cshake256_empty_input() {
        let n = [5u8; RATE_256 - 2 - 3 - 2];
        let s = b"Test CSHAKE";

        assert_eq!(
            hex!(
                "2a46f1df815e8cd2f645df371d97989fa31ff99c80731c1f6ec2d3e48b183193"
                "524742eb87c5007edd1549feaaddbff2623cd16f3b5f8506e438d6aad8476107"
            )
            .to_vec(),
            Shake::cshake256(&n, s).digest(),
        );
        assert_eq!(
            hex!(
                "bee8b14df0e3c77030458609ed34cea99206ced74a5fe6bf9d3e72852ec7ca56"
                "47cef12bcb27dd9cd3fcd604fd7f1daff8ab6091d48e9f5c101d3e99dfc57e17"
            )
            .to_vec(),
            Shake::cshake256(&n, b"").digest(),
        );
        assert_eq!(
            hex!(
                "3d79db7f3aaef4585ef784a9765ded61b069986184806de469e73fd3aaa854aa"
                "abd507ed16f87c0cb54e4f3cfbd9da9241476220f47a04eb4da29f514df65627"
            )
            .to_vec(),
            Shake::cshake256(b"", s).digest(),
        );
    }

    #[test]
    fn test_cshake_degenerates_to_shake() {
        assert_eq!(
            Shake::shake128().digest_bytes(b"degenerate"),
            Shake::cshake128(b"", b"").digest_bytes(b"degenerate"),
        );
        assert_eq!(Shake::shake256().digest(), Shake::cshake256(b"", b"").digest());
    }

    #[test]
    fn test_squeeze_continuity() {
        let mut shake = Shake::shake256();
        shake.update(b"squeeze me");

        let mut whole = [0u8; 64];
        shake.reader(false).unwrap().read(&mut whole).unwrap();

        let mut parts = [0u8; 64];
        let mut reader = shake.reader(false).unwrap();
        reader.read(&mut parts[..40]).unwrap();
        reader.read(&mut parts[40..]).unwrap();
        assert_eq!(whole, parts);
    }

    #[test]
    fn test_reader_snapshot_is_independent() {
        let mut shake = Shake::shake128();
        shake.update(b"snapshot");
        let mut reader = shake.reader(false).unwrap();

        // Updating the digest afterwards must not disturb in-flight reads.
        shake.update(b"diverged");

        let mut expected = Shake::shake128();
        expected.update(b"snapshot");
        let mut want = [0u8; 32];
        expected.reader(false).unwrap().read(&mut want).unwrap();

        let mut got = [0u8; 32];
        reader.read(&mut got).unwrap();
        assert_eq!(want, got);
    }

    #[test]
    fn test_reader_reset_xof() {
        let mut shake = Shake::shake128();
        shake.update(b"reset me");
        let _ = shake.reader(true).unwrap();
        // reset_xof restored the initial state.
        assert_eq!(Shake::shake128().digest(), shake.digest());

        let mut shake = Shake::shake128();
        shake.update(b"keep me");
        let _ = shake.reader(false).unwrap();
        let mut expected = Shake::shake128();
        expected.update(b"keep me");
        assert_eq!(expected.digest(), shake.digest());
    }

    #[test]
    fn test_custom_output_length() {
        let shake = Shake::shake128_with_length(500).unwrap();
        assert_eq!(500, shake.digest_length());

        // Outputs of different lengths share a prefix (same stream).
        let long = Shake::shake128_with_length(500).unwrap().digest_bytes(b"x");
        let short = Shake::shake128_with_length(16).unwrap().digest_bytes(b"x");
        assert_eq!(short, long[..16]);

        assert_eq!(Err(Error::InvalidOutputLength), Shake::shake128_with_length(0));
        assert_eq!(
            Err(Error::InvalidOutputLength),
            Shake::cshake256_with_length(b"", b"S", 0),
        );
    }
}
