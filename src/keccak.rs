//! Dispatch layer: validates parameters, derives the rate/capacity and
//! domain-separation suffix, and delegates to the [`sponge`] construction.
use crate::digest::{Digest, finish};
use crate::error::KeccakError;
use crate::sponge::sponge;

/// Domain-separation suffix for the original Keccak padding, as submitted
/// to the SHA-3 competition — NOT the FIPS-202 SHA-3 suffix (`0x06`).
const SUFFIX_KECCAK: u8 = 0x01;
/// Domain-separation suffix for SHAKE.
const SUFFIX_SHAKE: u8 = 0x1f;

/// Fixed-length Keccak hash (Keccak-224/256/384/512).
///
/// Uses the original Keccak domain-separation suffix, so outputs match
/// e.g. Ethereum's `keccak256`, not published FIPS-202 SHA-3 test
/// vectors.
///
/// # Errors
///
/// Returns [`KeccakError::UnsupportedOutputSize`] if `md_len` is not one
/// of 224, 256, 384, 512.
pub fn hash(input: &[u8], md_len: usize, raw: bool) -> Result<Digest, KeccakError> {
    if !matches!(md_len, 224 | 256 | 384 | 512) {
        return Err(KeccakError::UnsupportedOutputSize(md_len));
    }
    let mut out = vec![0u8; md_len / 8];
    match md_len {
        224 => sponge::<{ (1600 - 224 * 2) / 8 }>(input, SUFFIX_KECCAK, &mut out),
        256 => sponge::<{ (1600 - 256 * 2) / 8 }>(input, SUFFIX_KECCAK, &mut out),
        384 => sponge::<{ (1600 - 384 * 2) / 8 }>(input, SUFFIX_KECCAK, &mut out),
        512 => sponge::<{ (1600 - 512 * 2) / 8 }>(input, SUFFIX_KECCAK, &mut out),
        _ => unreachable!("validated above"),
    }
    Ok(finish(out, raw))
}

/// Extendable-output function (SHAKE128/SHAKE256) with a caller-chosen
/// output length.
///
/// # Errors
///
/// Returns [`KeccakError::UnsupportedSecurityLevel`] if `security_level`
/// is not 128 or 256, or [`KeccakError::InvalidOutputLength`] if
/// `out_len` is not a positive multiple of 8.
pub fn shake(
    input: &[u8],
    security_level: usize,
    out_len: usize,
    raw: bool,
) -> Result<Digest, KeccakError> {
    if out_len == 0 || !out_len.is_multiple_of(8) {
        return Err(KeccakError::InvalidOutputLength(out_len));
    }
    let mut out = vec![0u8; out_len / 8];
    match security_level {
        128 => sponge::<{ (1600 - 128 * 2) / 8 }>(input, SUFFIX_SHAKE, &mut out),
        256 => sponge::<{ (1600 - 256 * 2) / 8 }>(input, SUFFIX_SHAKE, &mut out),
        other => return Err(KeccakError::UnsupportedSecurityLevel(other)),
    }
    Ok(finish(out, raw))
}

macro_rules! fixed_hash {
    ($(#[$meta:meta])* $name:ident, $len:expr, $md_len:literal) => {
        $(#[$meta])*
        pub fn $name(input: &[u8]) -> [u8; $len] {
            let mut output = [0u8; $len];
            let digest = hash(input, $md_len, true).expect("fixed md_len is always valid");
            output.copy_from_slice(&digest.as_bytes());
            output
        }
    };
}

fixed_hash!(
    /// Keccak-224 over `input`, using the original Keccak suffix.
    keccak224,
    28,
    224
);
fixed_hash!(
    /// Keccak-256 over `input`, using the original Keccak suffix (the
    /// variant used by e.g. Ethereum's `keccak256`).
    keccak256,
    32,
    256
);
fixed_hash!(
    /// Keccak-384 over `input`, using the original Keccak suffix.
    keccak384,
    48,
    384
);
fixed_hash!(
    /// Keccak-512 over `input`, using the original Keccak suffix.
    keccak512,
    64,
    512
);

/// SHAKE128 over `input`, producing `out_len_bytes` bytes of output.
///
/// `out_len_bytes == 0` returns an empty `Vec` directly; squeezing zero
/// bytes needs no sponge call at all, and `shake()` would otherwise
/// reject the resulting `out_len == 0` as a non-positive output length.
pub fn shake128(input: &[u8], out_len_bytes: usize) -> Vec<u8> {
    if out_len_bytes == 0 {
        return Vec::new();
    }
    let digest = shake(input, 128, out_len_bytes * 8, true)
        .expect("security level 128 and a positive out_len are always valid");
    digest.as_bytes().into_owned()
}

/// SHAKE256 over `input`, producing `out_len_bytes` bytes of output.
///
/// `out_len_bytes == 0` returns an empty `Vec` directly; see
/// [`shake128`].
pub fn shake256(input: &[u8], out_len_bytes: usize) -> Vec<u8> {
    if out_len_bytes == 0 {
        return Vec::new();
    }
    let digest = shake(input, 256, out_len_bytes * 8, true)
        .expect("security level 256 and a positive out_len are always valid");
    digest.as_bytes().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known-answer vectors, original Keccak (suffix 0x01) — NOT FIPS-202 SHA-3.

    #[test]
    fn keccak256_empty() {
        let digest = hash(b"", 256, false).unwrap();
        assert_eq!(
            digest.to_hex(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn keccak256_abc() {
        let digest = hash(b"abc", 256, false).unwrap();
        assert_eq!(
            digest.to_hex(),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn keccak512_empty() {
        let digest = hash(b"", 512, false).unwrap();
        assert_eq!(
            digest.to_hex(),
            "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
        );
    }

    #[test]
    fn keccak256_quick_brown_fox() {
        let digest = hash(b"The quick brown fox jumps over the lazy dog", 256, false).unwrap();
        assert_eq!(
            digest.to_hex(),
            "4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15"
        );
    }

    #[test]
    fn shake128_empty_first_128_bits() {
        let digest = shake(b"", 128, 256, false).unwrap();
        assert!(
            digest
                .to_hex()
                .starts_with("7f9c2ba4e88f827d616045507605853e")
        );
    }

    #[test]
    fn hash_rejects_unsupported_md_len() {
        assert_eq!(
            hash(b"", 255, false).unwrap_err(),
            KeccakError::UnsupportedOutputSize(255)
        );
    }

    #[test]
    fn hash_rejects_huge_md_len_without_allocating() {
        // md_len large enough that `vec![0u8; md_len / 8]` would abort the
        // process (capacity overflow / OOM) if allocated before validation.
        assert_eq!(
            hash(b"", usize::MAX, false).unwrap_err(),
            KeccakError::UnsupportedOutputSize(usize::MAX)
        );
    }

    #[test]
    fn shake_rejects_unsupported_security_level() {
        assert_eq!(
            shake(b"", 192, 256, false).unwrap_err(),
            KeccakError::UnsupportedSecurityLevel(192)
        );
    }

    #[test]
    fn shake_rejects_non_byte_aligned_out_len() {
        assert_eq!(
            shake(b"", 128, 10, false).unwrap_err(),
            KeccakError::InvalidOutputLength(10)
        );
        assert_eq!(
            shake(b"", 128, 0, false).unwrap_err(),
            KeccakError::InvalidOutputLength(0)
        );
    }

    #[test]
    fn hex_raw_equivalence() {
        let hex_digest = hash(b"hex/raw equivalence", 256, false).unwrap();
        let raw_digest = hash(b"hex/raw equivalence", 256, true).unwrap();
        assert_eq!(hex::encode(raw_digest.as_bytes()), hex_digest.to_hex());
    }

    #[test]
    fn shake_prefix_property() {
        let short = shake(b"prefix property", 256, 128, true).unwrap();
        let long = shake(b"prefix property", 256, 512, true).unwrap();
        assert_eq!(short.as_bytes()[..], long.as_bytes()[..16]);
    }

    #[test]
    fn shake_wrappers_handle_zero_length_output() {
        assert_eq!(shake128(b"abc", 0), Vec::<u8>::new());
        assert_eq!(shake256(b"abc", 0), Vec::<u8>::new());
    }

    #[test]
    fn fixed_wrappers_agree_with_dispatch() {
        assert_eq!(
            keccak256(b"abc").as_slice(),
            hash(b"abc", 256, true).unwrap().as_bytes().as_ref()
        );
        assert_eq!(
            shake128(b"abc", 32),
            shake(b"abc", 128, 256, true).unwrap().as_bytes().into_owned()
        );
    }
}
