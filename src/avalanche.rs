//! Avalanche analysis: bit-sensitivity measurement of keystream generators.
//!
//! A run generates a baseline output from a reference input, then flips each
//! input bit in turn on a copy, regenerates, and records how many output bits
//! changed. The harness only measures. Around 50% changed bits indicates good
//! diffusion, but judging the numbers is left to the caller.

use std::fmt;

use crate::block_core::{self, BLOCK_WORDS};
use crate::dual_register::{DualRegisterKeystreamGenerator, Seed, SEED_BITS};
use crate::error::KeystreamError;
use crate::utils::bits;

/// Keystream length used by the seed avalanche run when none is given.
pub const DEFAULT_AVALANCHE_KEYSTREAM_BYTES: usize = 8;

/// Input whose individual bits can be flipped for an avalanche run.
pub trait FlippableInput: Clone {
    /// Number of addressable bits.
    fn bit_len(&self) -> usize;

    /// Inverts the bit at `position`. Positions past `bit_len()` are ignored.
    fn flip_bit(&mut self, position: usize);
}

impl FlippableInput for Seed {
    fn bit_len(&self) -> usize {
        SEED_BITS
    }

    fn flip_bit(&mut self, position: usize) {
        *self = self.with_flipped_bit(position);
    }
}

/// Bits are counted MSB-first inside each byte.
impl FlippableInput for Vec<u8> {
    fn bit_len(&self) -> usize {
        self.len() * 8
    }

    fn flip_bit(&mut self, position: usize) {
        bits::flip_bit(self, position);
    }
}

/// Bits are counted MSB-first inside each word, word 0 first.
impl FlippableInput for [u32; BLOCK_WORDS] {
    fn bit_len(&self) -> usize {
        BLOCK_WORDS * 32
    }

    fn flip_bit(&mut self, position: usize) {
        if let Some(word) = self.get_mut(position / 32) {
            *word ^= 0x8000_0000 >> (position % 32);
        }
    }
}

/// Outcome of flipping a single input bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFlipResult {
    /// Flipped input bit position.
    pub position: usize,
    /// Output bits that differ from the baseline.
    pub differing_bits: u32,
    /// Output bits compared.
    pub total_bits: usize,
    /// `differing_bits / total_bits` as a percentage.
    pub percentage: f64,
}

/// Results of one avalanche run.
#[derive(Debug, Clone, PartialEq)]
pub struct AvalancheReport {
    baseline: Vec<u8>,
    results: Vec<BitFlipResult>,
}

impl AvalancheReport {
    /// Output generated from the unmodified reference input.
    pub fn baseline(&self) -> &[u8] {
        &self.baseline
    }

    /// One entry per flipped position, in position order.
    pub fn results(&self) -> &[BitFlipResult] {
        &self.results
    }

    /// Output bits compared over the whole run.
    pub fn total_compared_bits(&self) -> usize {
        self.baseline.len() * 8 * self.results.len()
    }

    /// Mean changed-bit percentage, or `None` for an empty run.
    pub fn mean_percentage(&self) -> Option<f64> {
        if self.results.is_empty() {
            return None;
        }
        let sum: f64 = self.results.iter().map(|r| r.percentage).sum();
        Some(sum / self.results.len() as f64)
    }

    /// Fewest changed bits seen for any single flip.
    pub fn min_differing_bits(&self) -> Option<u32> {
        self.results.iter().map(|r| r.differing_bits).min()
    }

    /// Most changed bits seen for any single flip.
    pub fn max_differing_bits(&self) -> Option<u32> {
        self.results.iter().map(|r| r.differing_bits).max()
    }

    /// Input positions whose flip left the output unchanged.
    pub fn insensitive_positions(&self) -> Vec<usize> {
        self.results
            .iter()
            .filter(|r| r.differing_bits == 0)
            .map(|r| r.position)
            .collect()
    }
}

impl fmt::Display for AvalancheReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "baseline: {}", hex::encode(&self.baseline))?;
        for r in &self.results {
            writeln!(
                f,
                "bit {:>4}: {:>5}/{:<5} ({:.2}%)",
                r.position, r.differing_bits, r.total_bits, r.percentage
            )?;
        }
        match self.mean_percentage() {
            Some(mean) => write!(f, "mean: {:.2}%", mean),
            None => write!(f, "mean: n/a"),
        }
    }
}

/// Bit-flip sensitivity harness.
pub struct AvalancheAnalyzer;

impl AvalancheAnalyzer {
    /// Flips each of the first `bit_count` bits of `reference` and compares
    /// the regenerated output against the baseline.
    ///
    /// `reference` itself is never modified; every flip works on a fresh copy.
    ///
    /// # Errors
    /// - [`KeystreamError::BitCountOutOfRange`] if `bit_count` exceeds the
    ///   input's bit length.
    /// - [`KeystreamError::OutputLengthMismatch`] if a flipped output differs
    ///   in length from the baseline.
    /// - Any error returned by `generate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keystream_lab::{generate_keystream, AvalancheAnalyzer, Seed};
    ///
    /// let seed = Seed::parse("0011101010110101111010110010101011101011").unwrap();
    /// let report = AvalancheAnalyzer::run(&seed, 40, |s: &Seed| {
    ///     generate_keystream(&s.to_string(), 8)
    /// })
    /// .unwrap();
    /// assert_eq!(report.results().len(), 40);
    /// assert_eq!(report.total_compared_bits(), 40 * 64);
    /// ```
    pub fn run<I, F>(
        reference: &I,
        bit_count: usize,
        mut generate: F,
    ) -> Result<AvalancheReport, KeystreamError>
    where
        I: FlippableInput,
        F: FnMut(&I) -> Result<Vec<u8>, KeystreamError>,
    {
        let available = reference.bit_len();
        if bit_count > available {
            return Err(KeystreamError::BitCountOutOfRange {
                requested: bit_count,
                available,
            });
        }
        let baseline = generate(reference)?;
        let total_bits = baseline.len() * 8;
        log::debug!(
            "avalanche run: {} positions, {} output bits each",
            bit_count,
            total_bits
        );

        let mut results = Vec::with_capacity(bit_count);
        for position in 0..bit_count {
            let mut flipped = reference.clone();
            flipped.flip_bit(position);
            let output = generate(&flipped)?;
            if output.len() != baseline.len() {
                return Err(KeystreamError::OutputLengthMismatch {
                    baseline: baseline.len(),
                    flipped: output.len(),
                });
            }
            let differing_bits = bits::hamming_distance(&baseline, &output);
            let percentage = if total_bits == 0 {
                0.0
            } else {
                100.0 * differing_bits as f64 / total_bits as f64
            };
            log::trace!(
                "bit {}: {}/{} ({:.2}%)",
                position,
                differing_bits,
                total_bits,
                percentage
            );
            results.push(BitFlipResult {
                position,
                differing_bits,
                total_bits,
                percentage,
            });
        }

        let report = AvalancheReport { baseline, results };
        if let Some(mean) = report.mean_percentage() {
            log::debug!("avalanche run done: mean {:.2}% changed", mean);
        }
        Ok(report)
    }

    /// Flips every bit of `reference`.
    pub fn run_all<I, F>(reference: &I, generate: F) -> Result<AvalancheReport, KeystreamError>
    where
        I: FlippableInput,
        F: FnMut(&I) -> Result<Vec<u8>, KeystreamError>,
    {
        Self::run(reference, reference.bit_len(), generate)
    }

    /// Seed sensitivity of the dual-register generator over
    /// `keystream_len` keystream bytes.
    pub fn dual_register(
        seed: &Seed,
        keystream_len: usize,
    ) -> Result<AvalancheReport, KeystreamError> {
        Self::run_all(seed, |s: &Seed| {
            Ok(DualRegisterKeystreamGenerator::from_seed(s)?.generate_keystream(keystream_len))
        })
    }

    /// Input sensitivity of the block core over the first `bit_count` state
    /// bits, comparing serialized 64-byte outputs.
    pub fn block_core(
        state: &[u32; BLOCK_WORDS],
        bit_count: usize,
    ) -> Result<AvalancheReport, KeystreamError> {
        Self::run(state, bit_count, |s: &[u32; BLOCK_WORDS]| {
            Ok(block_core::serialize_block(&block_core::transform_words(s)).to_vec())
        })
    }
}
