//! Bit-level helpers over byte slices.
//!
//! Bit positions are counted MSB-first: position 0 is the most significant
//! bit of the first byte, position 8 the most significant bit of the second.

/// Returns the bit at `position` (MSB-first) of `bytes`, or `None` when the
/// position lies past the end of the slice.
///
/// # Parameters
/// - `bytes`: The byte slice to read from.
/// - `position`: MSB-first bit index.
pub fn get_bit(bytes: &[u8], position: usize) -> Option<u8> {
    let byte = *bytes.get(position >> 3)?;
    Some((byte >> (7 - (position & 7))) & 1)
}

/// Inverts the bit at `position` (MSB-first) of `bytes` in place.
///
/// Returns `false` without touching the slice if the position is out of range.
pub fn flip_bit(bytes: &mut [u8], position: usize) -> bool {
    match bytes.get_mut(position >> 3) {
        Some(byte) => {
            *byte ^= 0x80 >> (position & 7);
            true
        }
        None => false,
    }
}

/// Counts the bits that differ between two equally long byte slices.
///
/// Only the common prefix is compared; callers check lengths beforehand.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum()
}
