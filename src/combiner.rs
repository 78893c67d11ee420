//! ByteCombiner: XOR of a keystream onto a byte sequence.
//!
//! The same operation encrypts and decrypts.

use crate::error::KeystreamError;
use crate::source::KeystreamSource;

/// Applies keystreams to data by bitwise XOR.
pub struct ByteCombiner;

impl ByteCombiner {
    /// XORs `data` with the leading `data.len()` bytes of `keystream`.
    ///
    /// A keystream longer than the data is fine; the excess is unused.
    ///
    /// # Errors
    /// Returns [`KeystreamError::InsufficientKeystream`] if the keystream is
    /// shorter than the data. Short keystreams are never repeated or padded.
    ///
    /// # Examples
    ///
    /// ```
    /// use keystream_lab::ByteCombiner;
    ///
    /// let ks = [0xAA, 0x55, 0xFF];
    /// let ct = ByteCombiner::apply(b"hi", &ks).unwrap();
    /// assert_eq!(ByteCombiner::apply(&ct, &ks).unwrap(), b"hi");
    /// ```
    pub fn apply(data: &[u8], keystream: &[u8]) -> Result<Vec<u8>, KeystreamError> {
        if keystream.len() < data.len() {
            log::warn!(
                "keystream of {} bytes cannot cover {} data bytes",
                keystream.len(),
                data.len()
            );
            return Err(KeystreamError::InsufficientKeystream {
                data_len: data.len(),
                keystream_len: keystream.len(),
            });
        }
        Ok(data
            .iter()
            .zip(keystream)
            .map(|(d, k)| d ^ k)
            .collect())
    }

    /// XORs `data` with exactly `data.len()` bytes drawn from `source`.
    pub fn apply_source<S: KeystreamSource + ?Sized>(
        data: &[u8],
        source: &mut S,
    ) -> Result<Vec<u8>, KeystreamError> {
        let keystream = source.keystream(data.len())?;
        Self::apply(data, &keystream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantSource(u8);

    impl KeystreamSource for ConstantSource {
        fn keystream(&mut self, len: usize) -> Result<Vec<u8>, KeystreamError> {
            Ok(vec![self.0; len])
        }
    }

    struct ShortSource;

    impl KeystreamSource for ShortSource {
        fn keystream(&mut self, len: usize) -> Result<Vec<u8>, KeystreamError> {
            Ok(vec![0; len.saturating_sub(1)])
        }
    }

    #[test]
    fn test_apply_xor() {
        let out = ByteCombiner::apply(&[0x0F, 0xF0], &[0xFF, 0xFF]).unwrap();
        assert_eq!(out, vec![0xF0, 0x0F]);
    }

    #[test]
    fn test_apply_uses_keystream_prefix() {
        let out = ByteCombiner::apply(&[1, 2], &[1, 2, 3, 4]).unwrap();
        assert_eq!(out, vec![0, 0]);
    }

    #[test]
    fn test_apply_rejects_short_keystream() {
        assert_eq!(
            ByteCombiner::apply(&[1, 2, 3], &[1, 2]),
            Err(KeystreamError::InsufficientKeystream {
                data_len: 3,
                keystream_len: 2
            })
        );
    }

    #[test]
    fn test_apply_empty() {
        assert!(ByteCombiner::apply(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_involution() {
        let data: Vec<u8> = (0..=255).collect();
        let keystream: Vec<u8> = (0..300u32).map(|i| (i * 37 % 251) as u8).collect();
        let once = ByteCombiner::apply(&data, &keystream).unwrap();
        let twice = ByteCombiner::apply(&once, &keystream).unwrap();
        assert_eq!(twice, data);
    }

    #[test]
    fn test_apply_source() {
        let mut source = ConstantSource(0x20);
        let out = ByteCombiner::apply_source(b"abc", &mut source).unwrap();
        assert_eq!(out, b"ABC".to_vec());
    }

    #[test]
    fn test_apply_source_short_keystream() {
        let err = ByteCombiner::apply_source(b"abc", &mut ShortSource).unwrap_err();
        assert_eq!(
            err,
            KeystreamError::InsufficientKeystream {
                data_len: 3,
                keystream_len: 2
            }
        );
    }
}
