//! Raw JPEG 2000 codestream seeds.
//!
//! A seed is the start of a main header: SOC, a SIZ marker segment carrying
//! precision, height, width and a component count of 1, then a bare COD
//! marker. Every numeric field is a big-endian `u16`, including ones whose
//! value would fit in a byte.
//!
//! The SIZ length field is always the literal 11. It does not match the
//! bytes that follow, and decoders have to cope with that.

mod encode;

use crate::variant::Variant;
use alloc::vec::Vec;

/// Codestream marker codes.
pub mod markers {
    /// Start of codestream.
    pub const SOC: u16 = 0xFF4F;
    /// Image and tile size.
    pub const SIZ: u16 = 0xFF51;
    /// Coding style default.
    pub const COD: u16 = 0xFF52;
}

/// Declared length of the SIZ marker segment.
pub const SIZ_LENGTH: u16 = 11;

/// Byte length of [`encode_minimal`] output.
pub const MINIMAL_LEN: usize = 16;

/// Byte length of [`encode_variant`] output.
pub const VARIANT_LEN: usize = 18;

/// Encode the minimal codestream seed (1×1, 1-bit).
///
/// Unlike [`encode_variant`], the SIZ body stops at the component count;
/// there is no unused-bits field before the COD marker.
pub fn encode_minimal() -> Vec<u8> {
    encode::encode_minimal_j2k()
}

/// Encode a codestream seed for `variant` with a single component.
///
/// The SIZ body ends with a zero unused-bits field.
pub fn encode_variant(variant: &Variant) -> Vec<u8> {
    encode::encode_variant_j2k(variant)
}
