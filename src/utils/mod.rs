//! Bit access and encoding helpers shared by the generators and the
//! avalanche harness.

pub mod bits;
pub mod converter;
