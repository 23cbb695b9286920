//! JP2 container seeds.
//!
//! Three back-to-back boxes: the JPEG 2000 signature box, a file-type box
//! naming the `jp2 ` brand, and an image-header box. Each box starts with a
//! big-endian `u32` length that covers the 8-byte box header as well as the
//! payload.
//!
//! The signature and file-type boxes are constant. The image-header box is
//! declared as 14 bytes. In the minimal seed its body ends with an
//! unused-bits byte and then a per-component byte. Variant seeds drop both
//! and write a single component-count byte instead.

mod encode;

use crate::variant::Variant;
use alloc::vec::Vec;

/// JPEG 2000 signature box (`jP  ` with the `<CR><LF><0x87><LF>` magic).
pub const SIGNATURE_BOX: [u8; 12] = [
    0x00, 0x00, 0x00, 0x0C, b'j', b'P', b' ', b' ', 0x0D, 0x0A, 0x87, 0x0A,
];

/// File-type box: brand `jp2 `, minor version 0, compatibility list `jp2 `.
pub const FILE_TYPE_BOX: [u8; 20] = [
    0x00, 0x00, 0x00, 0x14, b'f', b't', b'y', b'p', b'j', b'p', b'2', b' ', 0x00, 0x00, 0x00,
    0x00, b'j', b'p', b'2', b' ',
];

/// Image-header box type tag.
pub const IHDR: [u8; 4] = *b"ihdr";

/// Declared size of the image-header box, header included.
pub const IHDR_BOX_LEN: usize = 14;

/// Byte length of every container seed.
pub const SEED_LEN: usize = SIGNATURE_BOX.len() + FILE_TYPE_BOX.len() + IHDR_BOX_LEN;

/// Encode the minimal container seed (1×1).
pub fn encode_minimal() -> Vec<u8> {
    encode::encode_minimal_jp2()
}

/// Encode a container seed carrying `variant`'s height and width.
///
/// The variant's depth is not written; the container carries a fixed
/// component byte instead.
pub fn encode_variant(variant: &Variant) -> Vec<u8> {
    encode::encode_variant_jp2(variant)
}
