//! KECCAK sponge construction: single-shot absorb, pad10*1, squeeze.
use crate::permute::State;

/// Sponge over a Keccakf[1600] state with a compile-time rate.
///
/// One [`Sponge`] is built, fed the entire input once, padded, and
/// squeezed; it has no cross-call incremental state, matching the
/// single-shot `hash`/`shake` contract.
pub(crate) struct Sponge<const RATE_BYTES: usize> {
    state: State<RATE_BYTES>,
    /// Length of the unabsorbed tail left in `state`'s first
    /// `RATE_BYTES` bytes after the last full-rate block was permuted.
    tail_len: usize,
}

impl<const RATE_BYTES: usize> Sponge<RATE_BYTES> {
    pub(crate) fn new() -> Self {
        Self {
            state: State::new(),
            tail_len: 0,
        }
    }

    /// Absorb the whole input, XORing full-rate blocks into the state and
    /// permuting between them. Leaves `tail_len` in `[0, RATE_BYTES)` bytes
    /// unconsumed for [`Self::pad_and_permute`] to finish off.
    fn absorb(&mut self, input: &[u8]) {
        let (chunks, rest) = input.as_chunks::<RATE_BYTES>();
        for chunk in chunks {
            xor_bytes(self.state.bytes_mut(), chunk);
            self.state.keccakf_1600_permute();
        }
        xor_bytes(&mut self.state.bytes_mut()[..rest.len()], rest);
        self.tail_len = rest.len();
    }

    /// Apply pad10*1 with the domain-separation `suffix`, XOR it into the
    /// state, and permute once. After this call the state is ready to
    /// squeeze.
    ///
    /// The suffix byte and the final `0x80` pad bit are XORed (not
    /// overwritten) into the live state, which already carries forward
    /// bytes from the last full-rate permutation; when `tail_len ==
    /// RATE_BYTES - 1` they land on the same byte and combine correctly,
    /// since XOR is commutative and associative.
    fn pad_and_permute(&mut self, suffix: u8) {
        let bytes = self.state.bytes_mut();
        bytes[self.tail_len] ^= suffix;
        bytes[RATE_BYTES - 1] ^= 0b1000_0000;
        self.state.keccakf_1600_permute();
    }

    /// Squeeze `output.len()` bytes, re-permuting between rate-sized
    /// blocks as needed.
    fn squeeze(&mut self, mut output: &mut [u8]) {
        loop {
            let take = output.len().min(RATE_BYTES);
            let (first, rest) = output.split_at_mut(take);
            first.copy_from_slice(&self.state.bytes()[..take]);
            output = rest;
            if output.is_empty() {
                return;
            }
            self.state.keccakf_1600_permute();
        }
    }
}

/// Run the full sponge: absorb `input`, pad with `suffix`, and squeeze
/// `output.len()` bytes.
pub(crate) fn sponge<const RATE_BYTES: usize>(input: &[u8], suffix: u8, output: &mut [u8]) {
    let mut sponge = Sponge::<RATE_BYTES>::new();
    sponge.absorb(input);
    sponge.pad_and_permute(suffix);
    sponge.squeeze(output);
}

fn xor_bytes(dest: &mut [u8], other: &[u8]) {
    // for_each combinator can lead to better codegen
    dest.iter_mut().zip(other).for_each(|(state, input)| {
        *state ^= input;
    });
}
