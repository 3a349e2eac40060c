//! 32-bit-limb fallback for the Keccak-f[1600] permutation.
//!
//! Simulates 64-bit lane arithmetic using four 16-bit limbs, for targets
//! without native 64-bit unsigned arithmetic. Rust has a native `u64`, so
//! [`crate::permute`]'s scalar implementation is what the public API
//! actually runs; this module exists to honor the fallback the spec
//! describes and is property-tested for bit-identical equivalence against
//! the 64-bit path (see `tests` below).
//!
//! Limb layout per lane, matching the source's packing: `L0` holds bits
//! 48..63, `L1` holds 32..47, `L2` holds 16..31, `L3` holds 0..15.
#![cfg_attr(not(test), allow(dead_code))]

const ROUNDS: usize = 24;

/// A single 64-bit Keccak lane represented as four 16-bit limbs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Lane32 {
    limbs: [u16; 4], // [L0, L1, L2, L3], most-significant first
}

impl Lane32 {
    pub(crate) const ZERO: Self = Self { limbs: [0; 4] };

    pub(crate) fn from_u64(v: u64) -> Self {
        Self {
            limbs: [
                (v >> 48) as u16,
                (v >> 32) as u16,
                (v >> 16) as u16,
                v as u16,
            ],
        }
    }

    pub(crate) fn to_u64(self) -> u64 {
        (self.limbs[0] as u64) << 48
            | (self.limbs[1] as u64) << 32
            | (self.limbs[2] as u64) << 16
            | (self.limbs[3] as u64)
    }

    pub(crate) fn from_le_bytes(bytes: [u8; 8]) -> Self {
        // Little-endian byte order: byte 0 is the lowest 8 bits, which sit
        // in the low half of limb L3.
        Self {
            limbs: [
                u16::from_le_bytes([bytes[6], bytes[7]]),
                u16::from_le_bytes([bytes[4], bytes[5]]),
                u16::from_le_bytes([bytes[2], bytes[3]]),
                u16::from_le_bytes([bytes[0], bytes[1]]),
            ],
        }
    }

    pub(crate) fn to_le_bytes(self) -> [u8; 8] {
        let [l0, l1, l2, l3] = self.limbs;
        let b3 = l3.to_le_bytes();
        let b2 = l2.to_le_bytes();
        let b1 = l1.to_le_bytes();
        let b0 = l0.to_le_bytes();
        [b3[0], b3[1], b2[0], b2[1], b1[0], b1[1], b0[0], b0[1]]
    }

    pub(crate) fn xor(self, other: Self) -> Self {
        let mut limbs = [0u16; 4];
        for i in 0..4 {
            limbs[i] = self.limbs[i] ^ other.limbs[i];
        }
        Self { limbs }
    }

    /// `(!self) & other`, the nonlinear term used by the χ step.
    pub(crate) fn not_and(self, other: Self) -> Self {
        let mut limbs = [0u16; 4];
        for i in 0..4 {
            limbs[i] = (!self.limbs[i]) & other.limbs[i];
        }
        Self { limbs }
    }

    /// Rotate left by `n` bits, `1 <= n <= 63`, decomposed into a limb
    /// shift (`n / 16`) and an intra-limb bit shift (`n % 16`), stitching
    /// across limb boundaries with a barrel-shifter pattern.
    pub(crate) fn rotate_left(self, n: u32) -> Self {
        debug_assert!((1..=63).contains(&n));
        let limb_shift = (n / 16) as usize;
        let bit_shift = n % 16;

        // Rotate the 4-limb array left by `limb_shift` positions. Limb i
        // of the whole-word rotation comes from limb (i + limb_shift) of
        // the source, since rotating the *value* left by 16 bits moves
        // L1 into L0's position, L2 into L1's, etc.
        let mut w = [0u16; 4];
        for i in 0..4 {
            w[i] = self.limbs[(i + limb_shift) % 4];
        }

        if bit_shift == 0 {
            return Self { limbs: w };
        }

        let mut limbs = [0u16; 4];
        for i in 0..4 {
            let hi = (w[i] as u32) << bit_shift;
            let lo = (w[(i + 1) % 4] as u32) >> (16 - bit_shift);
            limbs[i] = (hi | lo) as u16;
        }
        Self { limbs }
    }
}

/// 25-lane Keccak-f[1600] state, 32-bit-limb representation.
pub(crate) type State32 = [Lane32; 25];

fn idx(x: usize, y: usize) -> usize {
    (x % 5) + 5 * (y % 5)
}

const KECCAK_RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

const KECCAK_ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

fn theta(a: &mut State32) {
    let mut c = [Lane32::ZERO; 5];
    for (x, cx) in c.iter_mut().enumerate() {
        *cx = a[idx(x, 0)]
            .xor(a[idx(x, 1)])
            .xor(a[idx(x, 2)])
            .xor(a[idx(x, 3)])
            .xor(a[idx(x, 4)]);
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5].xor(c[(x + 1) % 5].rotate_left(1));
        for y in 0..5 {
            a[idx(x, y)] = a[idx(x, y)].xor(d);
        }
    }
}

fn rho(a: &mut State32) {
    for x in 0..5 {
        for y in 0..5 {
            let offset = KECCAK_RHO_OFFSETS[x + 5 * y];
            if offset != 0 {
                a[idx(x, y)] = a[idx(x, y)].rotate_left(offset);
            }
        }
    }
}

fn pi(a: &State32) -> State32 {
    let mut out = [Lane32::ZERO; 25];
    for x in 0..5 {
        for y in 0..5 {
            out[idx(y, (2 * x + 3 * y) % 5)] = a[idx(x, y)];
        }
    }
    out
}

fn chi(a: &State32) -> State32 {
    let mut out = [Lane32::ZERO; 25];
    for y in 0..5 {
        for x in 0..5 {
            let row = |x: usize| a[idx(x, y)];
            out[idx(x, y)] = row(x).xor(row((x + 1) % 5).not_and(row((x + 2) % 5)));
        }
    }
    out
}

fn iota(a: &mut State32, round: usize) {
    a[idx(0, 0)] = a[idx(0, 0)].xor(Lane32::from_u64(KECCAK_ROUND_CONSTANTS[round]));
}

/// Run Keccak-f[1600] over a 32-bit-limb state, in place.
pub(crate) fn keccakf_1600_permute32(state: &mut State32) {
    for round in 0..ROUNDS {
        theta(state);
        rho(state);
        *state = pi(state);
        *state = chi(state);
        iota(state, round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn le_byte_round_trip_matches_u64() {
        let v = 0x0123_4567_89ab_cdefu64;
        let lane = Lane32::from_le_bytes(v.to_le_bytes());
        assert_eq!(lane.to_u64(), v);
        assert_eq!(lane.to_le_bytes(), v.to_le_bytes());
    }

    proptest! {
        #[test]
        fn rotate_left_matches_u64(v: u64, n in 1u32..=63) {
            let expected = v.rotate_left(n);
            let got = Lane32::from_u64(v).rotate_left(n).to_u64();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn xor_matches_u64(a: u64, b: u64) {
            let expected = a ^ b;
            let got = Lane32::from_u64(a).xor(Lane32::from_u64(b)).to_u64();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn not_and_matches_u64(a: u64, b: u64) {
            let expected = (!a) & b;
            let got = Lane32::from_u64(a).not_and(Lane32::from_u64(b)).to_u64();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn permutation_matches_64_bit_path(lanes: [u64; 25]) {
            use crate::permute::State;

            let mut state64 = State::<136>::new();
            for (i, &l) in lanes.iter().enumerate() {
                state64.set_lane_for_test(i, l);
            }
            state64.keccakf_1600_permute();
            let expected = state64.lanes_for_test();

            let mut state32: State32 = [Lane32::ZERO; 25];
            for (i, &l) in lanes.iter().enumerate() {
                state32[i] = Lane32::from_u64(l);
            }
            keccakf_1600_permute32(&mut state32);
            let got: Vec<u64> = state32.iter().map(|l| l.to_u64()).collect();

            prop_assert_eq!(got, expected.to_vec());
        }
    }
}
