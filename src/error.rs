//! Error types for the keystream-lab library.

use std::fmt;

/// Errors produced by the keystream-lab library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeystreamError {
    /// Seed is not exactly 40 characters drawn from `'0'` and `'1'`.
    InvalidSeed,
    /// Block permutation input does not hold exactly 16 words.
    InvalidBlockSize { len: usize },
    /// Keystream handed to the combiner is shorter than the data.
    InsufficientKeystream { data_len: usize, keystream_len: usize },
    /// Shift register constructed with zero bits.
    InvalidRegisterWidth,
    /// Initial register bit is neither 0 nor 1.
    InvalidBitValue { index: usize, value: u8 },
    /// Tap index does not address a bit of the register.
    TapOutOfRange { tap: usize, width: usize },
    /// Avalanche run asked for more bit positions than the input holds.
    BitCountOutOfRange { requested: usize, available: usize },
    /// Baseline and flipped outputs of an avalanche run differ in length.
    OutputLengthMismatch { baseline: usize, flipped: usize },
    /// Binary-digit string contains a character other than `'0'` or `'1'`.
    InvalidBinaryDigit { index: usize, found: char },
}

impl fmt::Display for KeystreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeystreamError::InvalidSeed => {
                write!(f, "Seed must be exactly 40 characters of '0' or '1'")
            }
            KeystreamError::InvalidBlockSize { len } => {
                write!(f, "Block input must contain exactly 16 words, got {}", len)
            }
            KeystreamError::InsufficientKeystream {
                data_len,
                keystream_len,
            } => {
                write!(
                    f,
                    "Keystream of {} bytes is too short for {} bytes of data",
                    keystream_len, data_len
                )
            }
            KeystreamError::InvalidRegisterWidth => {
                write!(f, "Shift register must hold at least one bit")
            }
            KeystreamError::InvalidBitValue { index, value } => {
                write!(f, "Register bit {} has value {}, expected 0 or 1", index, value)
            }
            KeystreamError::TapOutOfRange { tap, width } => {
                write!(f, "Tap {} is outside a register of width {}", tap, width)
            }
            KeystreamError::BitCountOutOfRange {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Requested {} bit positions but the input only has {}",
                    requested, available
                )
            }
            KeystreamError::OutputLengthMismatch { baseline, flipped } => {
                write!(
                    f,
                    "Flipped output has {} bytes but the baseline has {}",
                    flipped, baseline
                )
            }
            KeystreamError::InvalidBinaryDigit { index, found } => {
                write!(f, "Invalid binary digit {:?} at index {}", found, index)
            }
        }
    }
}

impl std::error::Error for KeystreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_seed() {
        let err = KeystreamError::InvalidSeed;
        assert_eq!(
            format!("{}", err),
            "Seed must be exactly 40 characters of '0' or '1'"
        );
    }

    #[test]
    fn test_display_invalid_block_size() {
        let err = KeystreamError::InvalidBlockSize { len: 15 };
        assert_eq!(
            format!("{}", err),
            "Block input must contain exactly 16 words, got 15"
        );
    }

    #[test]
    fn test_display_insufficient_keystream() {
        let err = KeystreamError::InsufficientKeystream {
            data_len: 10,
            keystream_len: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Keystream of 4 bytes is too short for 10 bytes of data"
        );
    }

    #[test]
    fn test_display_tap_out_of_range() {
        let err = KeystreamError::TapOutOfRange { tap: 17, width: 17 };
        assert_eq!(format!("{}", err), "Tap 17 is outside a register of width 17");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(KeystreamError::InvalidSeed, KeystreamError::InvalidSeed);
        assert_ne!(
            KeystreamError::InvalidSeed,
            KeystreamError::InvalidRegisterWidth
        );
        assert_ne!(
            KeystreamError::InvalidBlockSize { len: 15 },
            KeystreamError::InvalidBlockSize { len: 17 }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(KeystreamError::InvalidSeed);
        assert!(err.to_string().contains("40 characters"));
    }
}
