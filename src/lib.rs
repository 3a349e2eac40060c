//! Keccak-f\[1600\] sponge construction: fixed-length Keccak-224/256/384/512
//! hashes and SHAKE128/SHAKE256 extendable-output functions.
//!
//! This crate implements the original Keccak padding (domain-separation
//! suffix `0x01`), not the FIPS-202 SHA-3 suffix (`0x06`) — digests match
//! e.g. Ethereum's `keccak256`, not published SHA-3 test vectors.
//!
//! The API is single-shot: one input buffer in, one digest out. There is
//! no incremental/streaming hasher, no keyed MAC variant (cSHAKE/KMAC),
//! and no authenticated encryption mode.
mod digest;
mod error;
mod keccak;
#[cfg(any(test, feature = "lane32"))]
mod permute32;
mod permute;
mod sponge;

pub use digest::Digest;
pub use error::KeccakError;
pub use keccak::{hash, keccak224, keccak256, keccak384, keccak512, shake, shake128, shake256};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_hash() {
        let input = b"some input string";
        dbg!(keccak256(&input[..]));
    }

    #[test]
    fn length_laws() {
        let hex = hash(b"abc", 256, false).unwrap();
        assert_eq!(hex.to_hex().len(), 256 / 4);
        let hex = shake(b"abc", 128, 512, false).unwrap();
        assert_eq!(hex.to_hex().len(), 512 / 4);
    }

    #[test]
    fn determinism() {
        let a = hash(b"determinism", 256, true).unwrap();
        let b = hash(b"determinism", 256, true).unwrap();
        assert_eq!(a, b);
    }
}
