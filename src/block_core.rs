//! Block permutation core: the 20-round ChaCha block function.
//!
//! Operates on a 16-word state of 32-bit words. The layout (constants, key,
//! counter, nonce) is up to the caller. All arithmetic wraps modulo 2^32.

use crate::error::KeystreamError;

/// Number of 32-bit words in a block.
pub const BLOCK_WORDS: usize = 16;

/// Number of bytes in a serialized block.
pub const BLOCK_BYTES: usize = BLOCK_WORDS * 4;

/// Number of column + diagonal double rounds (20 rounds total).
pub const DOUBLE_ROUNDS: usize = 10;

const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]];

const DIAGONALS: [[usize; 4]; 4] = [[0, 5, 10, 15], [1, 6, 11, 12], [2, 7, 8, 13], [3, 4, 9, 14]];

/// Mixes four words with add-XOR-rotate steps.
///
/// # Examples
///
/// RFC 7539 §2.1.1:
///
/// ```
/// use keystream_lab::block_core::quarter_round;
///
/// let out = quarter_round(0x11111111, 0x01020304, 0x9b8d6f43, 0x01234567);
/// assert_eq!(out, (0xea2a92f4, 0xcb1cf8ce, 0x4581472e, 0x5881c4bb));
/// ```
#[inline]
pub fn quarter_round(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let (mut a, mut b, mut c, mut d) = (a, b, c, d);
    a = a.wrapping_add(b);
    d = (d ^ a).rotate_left(16);
    c = c.wrapping_add(d);
    b = (b ^ c).rotate_left(12);
    a = a.wrapping_add(b);
    d = (d ^ a).rotate_left(8);
    c = c.wrapping_add(d);
    b = (b ^ c).rotate_left(7);
    (a, b, c, d)
}

fn quarter_round_at(state: &mut [u32; BLOCK_WORDS], [a, b, c, d]: [usize; 4]) {
    let (na, nb, nc, nd) = quarter_round(state[a], state[b], state[c], state[d]);
    state[a] = na;
    state[b] = nb;
    state[c] = nc;
    state[d] = nd;
}

/// Runs the full block function on a 16-word state.
///
/// The input is left untouched; the result is the 20-round permuted state
/// added word-wise to the input.
pub fn transform_words(input: &[u32; BLOCK_WORDS]) -> [u32; BLOCK_WORDS] {
    let mut state = *input;
    for _ in 0..DOUBLE_ROUNDS {
        for group in COLUMNS {
            quarter_round_at(&mut state, group);
        }
        for group in DIAGONALS {
            quarter_round_at(&mut state, group);
        }
    }
    for (word, original) in state.iter_mut().zip(input) {
        *word = word.wrapping_add(*original);
    }
    state
}

/// Runs the block function on a caller-supplied word slice.
///
/// # Errors
/// Returns [`KeystreamError::InvalidBlockSize`] unless `input` holds exactly
/// 16 words.
pub fn transform(input: &[u32]) -> Result<[u32; BLOCK_WORDS], KeystreamError> {
    let words: &[u32; BLOCK_WORDS] = input
        .try_into()
        .map_err(|_| KeystreamError::InvalidBlockSize { len: input.len() })?;
    Ok(transform_words(words))
}

/// Serializes a block into 64 bytes, each word little-endian.
pub fn serialize_block(words: &[u32; BLOCK_WORDS]) -> [u8; BLOCK_BYTES] {
    let mut out = [0u8; BLOCK_BYTES];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}
