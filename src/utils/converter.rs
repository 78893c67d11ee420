//! Conversion and rendering utilities.
//!
//! Renders byte sequences as hexadecimal or binary-digit strings for
//! diagnostic reports, parses binary-digit strings, and moves 32-bit words
//! to and from little-endian byte order.

use crate::error::KeystreamError;

/// Renders bytes as a lowercase hexadecimal string.
///
/// # Examples
///
/// ```
/// use keystream_lab::utils::converter::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x84, 0xb1]), "84b1");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Renders bytes as space-separated groups of eight binary digits.
///
/// # Examples
///
/// ```
/// use keystream_lab::utils::converter::bytes_to_bin;
///
/// assert_eq!(bytes_to_bin(&[0x41, 0x05]), "01000001 00000101");
/// ```
pub fn bytes_to_bin(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a string of `'0'`/`'1'` characters into one bit value per character.
///
/// # Errors
/// Returns [`KeystreamError::InvalidBinaryDigit`] at the first character
/// that is not a binary digit.
pub fn parse_binary_digits(digits: &str) -> Result<Vec<u8>, KeystreamError> {
    digits
        .chars()
        .enumerate()
        .map(|(index, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            found => Err(KeystreamError::InvalidBinaryDigit { index, found }),
        })
        .collect()
}

/// Serializes 32-bit words into bytes, least significant byte first.
pub fn words_to_le_bytes(words: &[u32]) -> Vec<u8> {
    let mut output = Vec::with_capacity(words.len() * 4);
    for word in words {
        output.extend_from_slice(&word.to_le_bytes());
    }
    output
}

/// Reassembles little-endian bytes into 32-bit words.
///
/// Trailing bytes that do not fill a whole word are ignored.
pub fn le_bytes_to_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_bytes_to_bin() {
        assert_eq!(bytes_to_bin(&[0xff]), "11111111");
        assert_eq!(bytes_to_bin(&[0x01, 0x80]), "00000001 10000000");
        assert_eq!(bytes_to_bin(&[]), "");
    }

    #[test]
    fn test_parse_binary_digits() {
        assert_eq!(parse_binary_digits("1011").unwrap(), vec![1, 0, 1, 1]);
        assert!(parse_binary_digits("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_binary_digits_rejects_other_chars() {
        assert_eq!(
            parse_binary_digits("10x1"),
            Err(KeystreamError::InvalidBinaryDigit {
                index: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_words_to_le_bytes() {
        let bytes = words_to_le_bytes(&[0x0302_0100, 0x0706_0504]);
        assert_eq!(bytes, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_le_bytes_to_words_ignores_tail() {
        let words = le_bytes_to_words(&[0x10, 0xf1, 0xe7, 0xe4, 0xaa]);
        assert_eq!(words, vec![0xe4e7_f110]);
    }
}
