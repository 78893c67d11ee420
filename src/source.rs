//! KeystreamSource trait for anything that emits keystream bytes on demand.
//!
//! The dual-register generator implements it directly. An externally
//! provided cipher (key + IV in, keystream out) plugs into the combiner
//! through the same trait without this crate knowing its internals.

use crate::error::KeystreamError;

/// Producer of keystream bytes.
///
/// Each call continues from where the previous call stopped. Sources are
/// not required to support rewinding; a fresh source must be built to
/// reproduce a keystream from the start.
pub trait KeystreamSource {
    /// Returns the next `len` keystream bytes.
    fn keystream(&mut self, len: usize) -> Result<Vec<u8>, KeystreamError>;
}
