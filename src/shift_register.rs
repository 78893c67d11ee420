//! ShiftRegister: fixed-width linear feedback shift register (LFSR).
//!
//! The register holds one bit per cell, index 0 being the most significant
//! position. Each cycle XORs the tapped cells into a feedback bit, moves
//! every cell one index up, inserts the feedback at index 0 and emits the
//! bit that fell off the highest index.

use crate::error::KeystreamError;

/// Fixed-width bit register with tap-defined linear feedback.
///
/// Width and taps never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRegister {
    bits: Vec<u8>,
    taps: Vec<usize>,
}

impl ShiftRegister {
    /// Creates a register from its initial cells and feedback taps.
    ///
    /// # Parameters
    /// - `bits`: Initial cells, MSB first. Each must be 0 or 1.
    /// - `taps`: Indices whose current bits are XORed into the feedback.
    ///
    /// # Errors
    /// - [`KeystreamError::InvalidRegisterWidth`] if `bits` is empty.
    /// - [`KeystreamError::InvalidBitValue`] if a cell is not 0 or 1.
    /// - [`KeystreamError::TapOutOfRange`] if a tap is not in `[0, width)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keystream_lab::ShiftRegister;
    ///
    /// let mut reg = ShiftRegister::new(&[1, 0, 0], &[0, 2]).unwrap();
    /// assert_eq!(reg.cycle(), 0);
    /// assert_eq!(reg.bits(), &[1, 1, 0]);
    /// ```
    pub fn new(bits: &[u8], taps: &[usize]) -> Result<Self, KeystreamError> {
        if bits.is_empty() {
            return Err(KeystreamError::InvalidRegisterWidth);
        }
        if let Some(index) = bits.iter().position(|&b| b > 1) {
            return Err(KeystreamError::InvalidBitValue {
                index,
                value: bits[index],
            });
        }
        let width = bits.len();
        if let Some(&tap) = taps.iter().find(|&&t| t >= width) {
            return Err(KeystreamError::TapOutOfRange { tap, width });
        }
        Ok(ShiftRegister {
            bits: bits.to_vec(),
            taps: taps.to_vec(),
        })
    }

    /// Advances the register by one step and returns the bit shifted out.
    ///
    /// Feedback is computed from the pre-shift state. After the call the
    /// cell at index `i` holds the previous value of `i - 1` and index 0
    /// holds the feedback bit.
    pub fn cycle(&mut self) -> u8 {
        let feedback = self.taps.iter().fold(0u8, |acc, &t| acc ^ self.bits[t]);
        let last = self.bits.len() - 1;
        let out = self.bits[last];
        self.bits.copy_within(0..last, 1);
        self.bits[0] = feedback;
        out
    }

    /// Runs eight cycles and packs the emitted bits MSB first.
    pub fn next_byte(&mut self) -> u8 {
        (0..8).fold(0u8, |acc, _| (acc << 1) | self.cycle())
    }

    /// Returns the number of cells.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns the current cells, MSB first.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the feedback taps.
    pub fn taps(&self) -> &[usize] {
        &self.taps
    }
}
