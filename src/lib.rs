//! Keystream generators for algorithmic study.
//!
//! This crate provides two small keystream engines and a harness that
//! measures their bit sensitivity:
//!
//! - a two-register additive stream cipher built from linear feedback
//!   shift registers, combined byte-wise with a rippling carry;
//! - the 20-round ChaCha block function (the core transform only, no
//!   streaming mode);
//! - an avalanche analyzer that flips each input bit and reports how many
//!   output bits change.
//!
//! None of this is hardened for production use.
//!
//! # Architecture
//!
//! ```text
//! ShiftRegister                    (fixed-width LFSR, tap feedback)
//!     x2, 8 cycles each per byte
//! DualRegisterKeystreamGenerator   (x + y + carry, mod 256)
//!     keystream
//! ByteCombiner                     (XOR, encrypt == decrypt)
//!
//! block_core::transform            (16 words -> 16 words, feed-forward)
//!
//! AvalancheAnalyzer                (flip one input bit, Hamming distance)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the dual-register generator:
//!
//! ```
//! use keystream_lab::{ByteCombiner, DualRegisterKeystreamGenerator};
//!
//! let seed = "0011101010110101111010110010101011101011";
//! let msg = b"attack at dawn";
//!
//! let ks = DualRegisterKeystreamGenerator::new(seed)
//!     .unwrap()
//!     .generate_keystream(msg.len());
//! let ct = ByteCombiner::apply(msg, &ks).unwrap();
//!
//! // Decryption needs a fresh generator from the same seed.
//! let ks2 = DualRegisterKeystreamGenerator::new(seed)
//!     .unwrap()
//!     .generate_keystream(ct.len());
//! assert_eq!(ByteCombiner::apply(&ct, &ks2).unwrap(), msg);
//! ```
//!
//! Run the block function on the RFC 7539 §2.3.2 state:
//!
//! ```
//! use keystream_lab::block_core::transform;
//!
//! let state: [u32; 16] = [
//!     0x61707865, 0x3320646e, 0x79622d32, 0x6b206574,
//!     0x03020100, 0x07060504, 0x0b0a0908, 0x0f0e0d0c,
//!     0x13121110, 0x17161514, 0x1b1a1918, 0x1f1e1d1c,
//!     0x00000001, 0x09000000, 0x4a000000, 0x00000000,
//! ];
//! let out = transform(&state).unwrap();
//! assert_eq!(out[0], 0xe4e7f110);
//! assert!(transform(&state[..15]).is_err());
//! ```

#![deny(clippy::all)]

pub mod avalanche;
pub mod block_core;
pub mod combiner;
pub mod dual_register;
pub mod error;
pub mod shift_register;
pub mod source;
pub mod utils;

pub use avalanche::{AvalancheAnalyzer, AvalancheReport, BitFlipResult, FlippableInput};
pub use combiner::ByteCombiner;
pub use dual_register::{
    decrypt, encrypt, generate_keystream, ByteStep, DualRegisterKeystreamGenerator, Seed,
};
pub use error::KeystreamError;
pub use shift_register::ShiftRegister;
pub use source::KeystreamSource;
