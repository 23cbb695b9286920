//! Codestream seed encoder.

use super::markers::{COD, SIZ, SOC};
use super::{MINIMAL_LEN, SIZ_LENGTH, VARIANT_LEN};
use crate::variant::Variant;
use alloc::vec::Vec;

pub(crate) fn encode_minimal_j2k() -> Vec<u8> {
    let Variant {
        width,
        height,
        depth,
    } = Variant::MINIMAL;

    let mut out = Vec::with_capacity(MINIMAL_LEN);
    put_u16(&mut out, SOC);
    write_siz(&mut out, depth, height, width);
    put_u16(&mut out, COD);
    out
}

pub(crate) fn encode_variant_j2k(variant: &Variant) -> Vec<u8> {
    let mut out = Vec::with_capacity(VARIANT_LEN);
    put_u16(&mut out, SOC);
    write_siz(&mut out, variant.depth, variant.height, variant.width);
    put_u16(&mut out, 0); // unused bits
    put_u16(&mut out, COD);
    out
}

/// SIZ marker, declared length, precision/height/width, one component.
fn write_siz(out: &mut Vec<u8>, precision: u16, height: u16, width: u16) {
    put_u16(out, SIZ);
    put_u16(out, SIZ_LENGTH);
    put_u16(out, precision);
    put_u16(out, height);
    put_u16(out, width);
    put_u16(out, 1); // components
}

#[inline]
fn put_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}
