//! Container seed encoder.

use super::{FILE_TYPE_BOX, IHDR, IHDR_BOX_LEN, SEED_LEN, SIGNATURE_BOX};
use crate::variant::Variant;
use alloc::vec::Vec;

const BOX_HEADER_LEN: usize = 8;

pub(crate) fn encode_minimal_jp2() -> Vec<u8> {
    let Variant { width, height, .. } = Variant::MINIMAL;

    let mut out = start_file();
    let body_start = begin_ihdr(&mut out);
    out.extend_from_slice(&height.to_be_bytes());
    out.extend_from_slice(&width.to_be_bytes());
    out.push(0x00); // unused bits
    out.push(0x01); // per-component value
    finish_ihdr(&mut out, body_start);
    out
}

pub(crate) fn encode_variant_jp2(variant: &Variant) -> Vec<u8> {
    let mut out = start_file();
    let body_start = begin_ihdr(&mut out);
    out.extend_from_slice(&variant.height.to_be_bytes());
    out.extend_from_slice(&variant.width.to_be_bytes());
    out.push(0x01); // components
    finish_ihdr(&mut out, body_start);
    out
}

/// Signature and file-type boxes, with room for the image header.
fn start_file() -> Vec<u8> {
    let mut out = Vec::with_capacity(SEED_LEN);
    out.extend_from_slice(&SIGNATURE_BOX);
    out.extend_from_slice(&FILE_TYPE_BOX);
    out
}

/// Write the literal image-header box header; returns where the body starts.
fn begin_ihdr(out: &mut Vec<u8>) -> usize {
    out.extend_from_slice(&(IHDR_BOX_LEN as u32).to_be_bytes());
    out.extend_from_slice(&IHDR);
    out.len()
}

/// Zero-pad the image-header body up to the declared box size.
fn finish_ihdr(out: &mut Vec<u8>, body_start: usize) {
    let box_end = body_start - BOX_HEADER_LEN + IHDR_BOX_LEN;
    debug_assert!(out.len() <= box_end, "ihdr body exceeds declared box size");
    out.resize(box_end, 0);
}
