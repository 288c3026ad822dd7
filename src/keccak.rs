//! Keccak-p permutation over a 5x5 lane state, generic in the lane width.
//!
//! Keccak-p[200], [400], [800] and [1600] share one round function; only the
//! lane type, the round count and the truncation of the round constants
//! differ. The permutation widths map to lane types as u8/u16/u32/u64.

use core::ops::{BitAnd, BitXor, BitXorAssign, Not};

use crate::errors::{Error, Result};

// Round constants for the iota step, full 64-bit form. Narrower widths
// truncate each constant to their lane size.
const RC: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// One word of the 5x5 Keccak state.
pub trait Lane:
    Copy
    + Eq
    + Default
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
{
    /// Maximum (and default) number of rounds for this width: 12 + 2*log2(bits).
    const ROUNDS: usize;
    const BYTES: usize;

    fn rc(index: usize) -> Self;
    fn rotl(self, n: u32) -> Self;
}

macro_rules! impl_lane {
    ($t:ty, $rounds:expr) => {
        impl Lane for $t {
            const ROUNDS: usize = $rounds;
            const BYTES: usize = size_of::<$t>();

            #[inline(always)]
            fn rc(index: usize) -> $t {
                RC[index] as $t
            }

            #[inline(always)]
            fn rotl(self, n: u32) -> $t {
                self.rotate_left(n % <$t>::BITS)
            }
        }
    };
}

impl_lane!(u8, 18);
impl_lane!(u16, 20);
impl_lane!(u32, 22);
impl_lane!(u64, 24);

/// The 25-lane permutation state. Mutated only by [`KeccakState::xor_lane`]
/// (absorption) and [`keccak_p`]; `Clone` produces a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeccakState<L: Lane> {
    lanes: [L; 25],
}

pub const PLEN: usize = 25;

impl<L: Lane> KeccakState<L> {
    pub fn new() -> Self {
        KeccakState { lanes: [L::default(); PLEN] }
    }

    #[inline]
    pub fn lane(&self, index: usize) -> L {
        self.lanes[index]
    }

    #[inline]
    pub fn lanes(&self) -> &[L; PLEN] {
        &self.lanes
    }

    // Absorption primitive: XORs one little-endian decoded input word
    // into the given lane.
    #[inline]
    pub fn xor_lane(&mut self, index: usize, data: L) {
        self.lanes[index] ^= data;
    }

    pub fn reset(&mut self) {
        for lane in &mut self.lanes {
            *lane = L::default();
        }
    }
}

impl<L: Lane> Default for KeccakState<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the full Keccak-f permutation (all `L::ROUNDS` rounds).
#[inline]
pub fn keccak_f<L: Lane>(state: &mut KeccakState<L>) {
    rounds(state, 0);
}

/// Applies `num_rounds` rounds of Keccak-p.
///
/// Rounds are consumed from the END of the constant schedule, so
/// `keccak_p(state, L::ROUNDS)` equals [`keccak_f`] and reduced-round
/// permutations match the tail of the full one.
pub fn keccak_p<L: Lane>(state: &mut KeccakState<L>, num_rounds: usize) -> Result<()> {
    if num_rounds > L::ROUNDS {
        return Err(Error::RoundCountExceeded);
    }
    rounds(state, L::ROUNDS - num_rounds);
    Ok(())
}

#[rustfmt::skip]
fn rounds<L: Lane>(state: &mut KeccakState<L>, first_round: usize) {
    let a = &state.lanes;

    let mut a00 = a[ 0]; let mut a01 = a[ 1]; let mut a02 = a[ 2]; let mut a03 = a[ 3]; let mut a04 = a[ 4];
    let mut a05 = a[ 5]; let mut a06 = a[ 6]; let mut a07 = a[ 7]; let mut a08 = a[ 8]; let mut a09 = a[ 9];
    let mut a10 = a[10]; let mut a11 = a[11]; let mut a12 = a[12]; let mut a13 = a[13]; let mut a14 = a[14];
    let mut a15 = a[15]; let mut a16 = a[16]; let mut a17 = a[17]; let mut a18 = a[18]; let mut a19 = a[19];
    let mut a20 = a[20]; let mut a21 = a[21]; let mut a22 = a[22]; let mut a23 = a[23]; let mut a24 = a[24];

    for round in first_round..L::ROUNDS {
        // Theta
        let mut c0 = a00 ^ a05 ^ a10 ^ a15 ^ a20;
        let mut c1 = a01 ^ a06 ^ a11 ^ a16 ^ a21;
        let c2 = a02 ^ a07 ^ a12 ^ a17 ^ a22;
        let c3 = a03 ^ a08 ^ a13 ^ a18 ^ a23;
        let c4 = a04 ^ a09 ^ a14 ^ a19 ^ a24;

        let d1 = c1.rotl(1) ^ c4;
        let d2 = c2.rotl(1) ^ c0;
        let d3 = c3.rotl(1) ^ c1;
        let d4 = c4.rotl(1) ^ c2;
        let d0 = c0.rotl(1) ^ c3;

        a00 ^= d1; a01 ^= d2; a02 ^= d3; a03 ^= d4; a04 ^= d0;
        a05 ^= d1; a06 ^= d2; a07 ^= d3; a08 ^= d4; a09 ^= d0;
        a10 ^= d1; a11 ^= d2; a12 ^= d3; a13 ^= d4; a14 ^= d0;
        a15 ^= d1; a16 ^= d2; a17 ^= d3; a18 ^= d4; a19 ^= d0;
        a20 ^= d1; a21 ^= d2; a22 ^= d3; a23 ^= d4; a24 ^= d0;

        // Rho + Pi, fused
        c1  = a01.rotl( 1);
        a01 = a06.rotl(44);
        a06 = a09.rotl(20);
        a09 = a22.rotl(61);
        a22 = a14.rotl(39);
        a14 = a20.rotl(18);
        a20 = a02.rotl(62);
        a02 = a12.rotl(43);
        a12 = a13.rotl(25);
        a13 = a19.rotl( 8);
        a19 = a23.rotl(56);
        a23 = a15.rotl(41);
        a15 = a04.rotl(27);
        a04 = a24.rotl(14);
        a24 = a21.rotl( 2);
        a21 = a08.rotl(55);
        a08 = a16.rotl(45);
        a16 = a05.rotl(36);
        a05 = a03.rotl(28);
        a03 = a18.rotl(21);
        a18 = a17.rotl(15);
        a17 = a11.rotl(10);
        a11 = a07.rotl( 6);
        a07 = a10.rotl( 3);
        a10 = c1;

        // Chi
        c0  = a00 ^ (!a01 & a02);
        c1  = a01 ^ (!a02 & a03);
        a02 = a02 ^ (!a03 & a04);
        a03 = a03 ^ (!a04 & a00);
        a04 = a04 ^ (!a00 & a01);
        a00 = c0;
        a01 = c1;

        c0  = a05 ^ (!a06 & a07);
        c1  = a06 ^ (!a07 & a08);
        a07 = a07 ^ (!a08 & a09);
        a08 = a08 ^ (!a09 & a05);
        a09 = a09 ^ (!a05 & a06);
        a05 = c0;
        a06 = c1;

        c0  = a10 ^ (!a11 & a12);
        c1  = a11 ^ (!a12 & a13);
        a12 = a12 ^ (!a13 & a14);
        a13 = a13 ^ (!a14 & a10);
        a14 = a14 ^ (!a10 & a11);
        a10 = c0;
        a11 = c1;

        c0  = a15 ^ (!a16 & a17);
        c1  = a16 ^ (!a17 & a18);
        a17 = a17 ^ (!a18 & a19);
        a18 = a18 ^ (!a19 & a15);
        a19 = a19 ^ (!a15 & a16);
        a15 = c0;
        a16 = c1;

        c0  = a20 ^ (!a21 & a22);
        c1  = a21 ^ (!a22 & a23);
        a22 = a22 ^ (!a23 & a24);
        a23 = a23 ^ (!a24 & a20);
        a24 = a24 ^ (!a20 & a21);
        a20 = c0;
        a21 = c1;

        // Iota
        a00 ^= L::rc(round);
    }

    let a = &mut state.lanes;
    a[ 0] = a00; a[ 1] = a01; a[ 2] = a02; a[ 3] = a03; a[ 4] = a04;
    a[ 5] = a05; a[ 6] = a06; a[ 7] = a07; a[ 8] = a08; a[ 9] = a09;
    a[10] = a10; a[11] = a11; a[12] = a12; a[13] = a13; a[14] = a14;
    a[15] = a15; a[16] = a16; a[17] = a17; a[18] = a18; a[19] = a19;
    a[20] = a20; a[21] = a21; a[22] = a22; a[23] = a23; a[24] = a24;
}
