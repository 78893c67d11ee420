//! DualRegisterKeystreamGenerator: two-LFSR additive keystream generator.
//!
//! A 40-bit seed is split 16/24, each half prefixed with a forced leading 1
//! and loaded into a 17-cell and a 25-cell register respectively. Every
//! output byte takes eight bits from each register and adds them with a
//! carry that ripples into the next byte.
//!
//! Keystream generation is not resumable: decrypting requires a fresh
//! generator built from the same seed that produced the encryption keystream.

use std::fmt;
use std::str::FromStr;

use crate::combiner::ByteCombiner;
use crate::error::KeystreamError;
use crate::shift_register::ShiftRegister;
use crate::source::KeystreamSource;

/// Number of bits in a seed.
pub const SEED_BITS: usize = 40;

/// Seed bits loaded into register 1 (after its forced leading 1).
pub const REGISTER1_SEED_BITS: usize = 16;

/// Seed bits loaded into register 2 (after its forced leading 1).
pub const REGISTER2_SEED_BITS: usize = 24;

/// Feedback taps of register 1, indexed over its 17 cells.
pub const REGISTER1_TAPS: [usize; 6] = [9, 10, 12, 14, 15, 16];

/// Feedback taps of register 2, indexed over its 25 cells.
pub const REGISTER2_TAPS: [usize; 6] = [5, 12, 13, 17, 19, 23];

/// A validated 40-bit seed.
///
/// Bit 0 is the first character of the textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed {
    bits: [u8; SEED_BITS],
}

impl Seed {
    /// Parses a seed from exactly 40 characters of `'0'` and `'1'`.
    ///
    /// # Errors
    /// Returns [`KeystreamError::InvalidSeed`] for any other length or any
    /// other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use keystream_lab::Seed;
    ///
    /// assert!(Seed::parse("0011101010110101111010110010101011101011").is_ok());
    /// assert!(Seed::parse("0011").is_err());
    /// ```
    pub fn parse(seed: &str) -> Result<Self, KeystreamError> {
        let raw = seed.as_bytes();
        if raw.len() != SEED_BITS {
            return Err(KeystreamError::InvalidSeed);
        }
        let mut bits = [0u8; SEED_BITS];
        for (bit, &c) in bits.iter_mut().zip(raw) {
            *bit = match c {
                b'0' => 0,
                b'1' => 1,
                _ => return Err(KeystreamError::InvalidSeed),
            };
        }
        Ok(Seed { bits })
    }

    /// Builds a seed from 40 bit values.
    ///
    /// # Errors
    /// Returns [`KeystreamError::InvalidSeed`] if any value is not 0 or 1.
    pub fn from_bits(bits: [u8; SEED_BITS]) -> Result<Self, KeystreamError> {
        if bits.iter().any(|&b| b > 1) {
            return Err(KeystreamError::InvalidSeed);
        }
        Ok(Seed { bits })
    }

    /// Returns all seed bits.
    pub fn bits(&self) -> &[u8; SEED_BITS] {
        &self.bits
    }

    /// Returns the bit at `index`, or `None` past the end.
    pub fn bit(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    /// Returns a copy of this seed with the bit at `index` inverted.
    ///
    /// An out-of-range index returns an unchanged copy.
    pub fn with_flipped_bit(&self, index: usize) -> Seed {
        let mut flipped = *self;
        if let Some(bit) = flipped.bits.get_mut(index) {
            *bit ^= 1;
        }
        flipped
    }

    fn register_cells(&self) -> (Vec<u8>, Vec<u8>) {
        let (head, tail) = self.bits.split_at(REGISTER1_SEED_BITS);
        let mut r1 = Vec::with_capacity(REGISTER1_SEED_BITS + 1);
        r1.push(1);
        r1.extend_from_slice(head);
        let mut r2 = Vec::with_capacity(REGISTER2_SEED_BITS + 1);
        r2.push(1);
        r2.extend_from_slice(tail);
        (r1, r2)
    }
}

impl FromStr for Seed {
    type Err = KeystreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seed::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Intermediate values of one generated keystream byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteStep {
    /// Eight bits drawn from register 1, MSB first.
    pub x: u8,
    /// Eight bits drawn from register 2, MSB first.
    pub y: u8,
    /// Carry entering this byte.
    pub carry_in: u8,
    /// Output byte, `(x + y + carry_in) mod 256`.
    pub byte: u8,
    /// Carry leaving this byte, 1 iff `x + y + carry_in > 255`.
    pub carry_out: u8,
}

/// Additive keystream generator built from two LFSRs.
///
/// # Examples
///
/// ```
/// use keystream_lab::DualRegisterKeystreamGenerator;
///
/// let seed = "0011101010110101111010110010101011101011";
/// let mut gen = DualRegisterKeystreamGenerator::new(seed).unwrap();
/// let ks = gen.generate_keystream(4);
/// assert_eq!(ks, vec![0x84, 0xb1, 0x8e, 0xf3]);
/// ```
#[derive(Debug, Clone)]
pub struct DualRegisterKeystreamGenerator {
    register1: ShiftRegister,
    register2: ShiftRegister,
    carry: u8,
}

impl DualRegisterKeystreamGenerator {
    /// Creates a generator from a 40-character binary seed string.
    ///
    /// # Errors
    /// Returns [`KeystreamError::InvalidSeed`] if the seed is not exactly 40
    /// characters of `'0'`/`'1'`.
    pub fn new(seed: &str) -> Result<Self, KeystreamError> {
        Self::from_seed(&Seed::parse(seed)?)
    }

    /// Creates a generator from an already validated seed.
    pub fn from_seed(seed: &Seed) -> Result<Self, KeystreamError> {
        let (cells1, cells2) = seed.register_cells();
        let register1 = ShiftRegister::new(&cells1, &REGISTER1_TAPS)?;
        let register2 = ShiftRegister::new(&cells2, &REGISTER2_TAPS)?;
        log::debug!(
            "dual-register generator ready: widths {} and {}",
            register1.width(),
            register2.width()
        );
        Ok(DualRegisterKeystreamGenerator {
            register1,
            register2,
            carry: 0,
        })
    }

    /// Produces the next keystream byte together with its intermediate values.
    pub fn next_step(&mut self) -> ByteStep {
        let x = self.register1.next_byte();
        let y = self.register2.next_byte();
        let carry_in = self.carry;
        let sum = x as u16 + y as u16 + carry_in as u16;
        let byte = (sum & 0xff) as u8;
        let carry_out = u8::from(sum > 0xff);
        self.carry = carry_out;
        log::trace!(
            "x={:08b} y={:08b} carry_in={} z={:02x} carry_out={}",
            x,
            y,
            carry_in,
            byte,
            carry_out
        );
        ByteStep {
            x,
            y,
            carry_in,
            byte,
            carry_out,
        }
    }

    /// Produces the next keystream byte.
    pub fn next_byte(&mut self) -> u8 {
        self.next_step().byte
    }

    /// Produces the next `n` keystream bytes.
    pub fn generate_keystream(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.next_byte()).collect()
    }

    /// Current carry, always 0 or 1.
    pub fn carry(&self) -> u8 {
        self.carry
    }

    /// Register 1 (17 cells).
    pub fn register1(&self) -> &ShiftRegister {
        &self.register1
    }

    /// Register 2 (25 cells).
    pub fn register2(&self) -> &ShiftRegister {
        &self.register2
    }
}

impl KeystreamSource for DualRegisterKeystreamGenerator {
    fn keystream(&mut self, len: usize) -> Result<Vec<u8>, KeystreamError> {
        Ok(self.generate_keystream(len))
    }
}

/// Generates `n` keystream bytes from a fresh generator seeded with `seed`.
///
/// # Errors
/// Returns [`KeystreamError::InvalidSeed`] for a malformed seed.
pub fn generate_keystream(seed: &str, n: usize) -> Result<Vec<u8>, KeystreamError> {
    Ok(DualRegisterKeystreamGenerator::new(seed)?.generate_keystream(n))
}

/// Encrypts `plaintext` under `seed`, starting from a fresh generator.
///
/// # Errors
/// Returns [`KeystreamError::InvalidSeed`] for a malformed seed.
///
/// # Examples
///
/// ```
/// use keystream_lab::{decrypt, encrypt};
///
/// let seed = "0011101010110101111010110010101011101011";
/// let ct = encrypt(b"attack at dawn", seed).unwrap();
/// assert_eq!(decrypt(&ct, seed).unwrap(), b"attack at dawn");
/// ```
pub fn encrypt(plaintext: &[u8], seed: &str) -> Result<Vec<u8>, KeystreamError> {
    let mut generator = DualRegisterKeystreamGenerator::new(seed)?;
    ByteCombiner::apply_source(plaintext, &mut generator)
}

/// Decrypts `ciphertext` under `seed`. Identical to [`encrypt`].
pub fn decrypt(ciphertext: &[u8], seed: &str) -> Result<Vec<u8>, KeystreamError> {
    encrypt(ciphertext, seed)
}
