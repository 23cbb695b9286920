//! Byte-layout properties of every generated seed.

use j2kseeds::*;

fn request() -> SeedRequest<'static> {
    SeedRequest::new()
}

// ── Codestream ───────────────────────────────────────────────────────

#[test]
fn j2k_seeds_open_with_soc_then_marker_byte() {
    for seed in request().seeds() {
        if seed.name.format() != SeedFormat::J2k {
            continue;
        }
        assert_eq!(&seed.bytes[..2], &[0xFF, 0x4F], "{}", seed.name);
        assert_eq!(
            seed.bytes[2],
            j2k::markers::COD.to_be_bytes()[0],
            "{}",
            seed.name
        );
        assert_eq!(&seed.bytes[2..4], &[0xFF, 0x51], "{}", seed.name);
    }
}

#[test]
fn j2k_seed_lengths() {
    assert_eq!(j2k::encode_minimal().len(), 16);
    for variant in &EXTREME_VARIANTS {
        assert_eq!(j2k::encode_variant(variant).len(), 18);
    }
}

#[test]
fn j2k_siz_length_is_literal_eleven() {
    assert_eq!(&j2k::encode_minimal()[4..6], &[0x00, 0x0B]);
    for variant in &EXTREME_VARIANTS {
        assert_eq!(&j2k::encode_variant(variant)[4..6], &[0x00, 0x0B]);
    }
}

#[test]
fn j2k_two_by_two_depth_eight() {
    let out = j2k::encode_variant(&Variant::new(2, 2, 8));
    assert_eq!(out.len(), 18);

    // Precision at 4, width at 6, height at 8, counted from the SIZ marker
    // (absolute byte 2). Width and height are both 2 here, so this does not
    // pin their order; see j2k_height_precedes_width.
    let siz = &out[2..];
    assert_eq!(&siz[..2], &[0xFF, 0x51]);
    assert_eq!(&siz[4..6], &[0x00, 0x08], "precision");
    assert_eq!(&siz[6..8], &[0x00, 0x02], "width (2x2)");
    assert_eq!(&siz[8..10], &[0x00, 0x02], "height (2x2)");
}

#[test]
fn j2k_height_precedes_width() {
    let out = j2k::encode_variant(&Variant::new(256, 1, 8));
    assert_eq!(&out[8..10], &[0x00, 0x01], "height");
    assert_eq!(&out[10..12], &[0x01, 0x00], "width");
}

#[test]
fn j2k_minimal_and_variant_tails_differ() {
    let minimal = j2k::encode_minimal();
    let variant = j2k::encode_variant(&Variant::MINIMAL);
    assert_eq!(&minimal[..14], &variant[..14]);
    assert_eq!(&minimal[12..], &[0x00, 0x01, 0xFF, 0x52]);
    assert_eq!(&variant[12..], &[0x00, 0x01, 0x00, 0x00, 0xFF, 0x52]);
}

#[test]
fn j2k_component_count_is_one_on_both_paths() {
    assert_eq!(&j2k::encode_minimal()[12..14], &[0x00, 0x01]);
    for variant in &EXTREME_VARIANTS {
        let out = j2k::encode_variant(variant);
        assert_eq!(&out[12..14], &[0x00, 0x01]);
        assert_eq!(&out[14..16], &[0x00, 0x00], "unused bits");
    }
}

// ── Container ────────────────────────────────────────────────────────

#[test]
fn jp2_seeds_start_with_signature_and_file_type() {
    for seed in request().seeds() {
        if seed.name.format() != SeedFormat::Jp2 {
            continue;
        }
        assert_eq!(&seed.bytes[..12], &jp2::SIGNATURE_BOX, "{}", seed.name);
        assert_eq!(&seed.bytes[12..32], &jp2::FILE_TYPE_BOX, "{}", seed.name);
    }
}

#[test]
fn jp2_constant_boxes() {
    assert_eq!(
        jp2::SIGNATURE_BOX,
        *b"\x00\x00\x00\x0CjP  \x0D\x0A\x87\x0A"
    );
    assert_eq!(
        jp2::FILE_TYPE_BOX,
        *b"\x00\x00\x00\x14ftypjp2 \x00\x00\x00\x00jp2 "
    );
}

#[test]
fn jp2_seed_lengths() {
    assert_eq!(jp2::encode_minimal().len(), 46);
    for variant in &EXTREME_VARIANTS {
        assert_eq!(jp2::encode_variant(variant).len(), 46);
    }
}

#[test]
fn jp2_box_lengths_cover_whole_file() {
    for variant in &EXTREME_VARIANTS {
        let out = jp2::encode_variant(variant);
        let mut offset = 0;
        let mut types = Vec::new();
        while offset < out.len() {
            let len = u32::from_be_bytes(out[offset..offset + 4].try_into().unwrap()) as usize;
            types.push(out[offset + 4..offset + 8].to_vec());
            offset += len;
        }
        assert_eq!(offset, out.len());
        assert_eq!(types, [b"jP  ".to_vec(), b"ftyp".to_vec(), b"ihdr".to_vec()]);
    }
}

#[test]
fn jp2_ihdr_carries_height_then_width() {
    let out = jp2::encode_variant(&Variant::new(1, 256, 8));
    assert_eq!(&out[40..42], &[0x01, 0x00], "height");
    assert_eq!(&out[42..44], &[0x00, 0x01], "width");
    assert_eq!(out[44], 0x01, "components");
}

#[test]
fn jp2_minimal_keeps_unused_bits_byte() {
    let minimal = jp2::encode_minimal();
    let variant = jp2::encode_variant(&Variant::MINIMAL);
    assert_eq!(&minimal[..44], &variant[..44]);
    assert_eq!(&minimal[44..], &[0x00, 0x01]);
    assert_eq!(&variant[44..], &[0x01, 0x00]);
}

// ── Catalog and naming ───────────────────────────────────────────────

#[test]
fn catalog_order() {
    assert_eq!(
        EXTREME_VARIANTS,
        [
            Variant::new(1, 1, 1),
            Variant::new(1, 1, 8),
            Variant::new(1, 1, 16),
            Variant::new(2, 2, 8),
            Variant::new(1, 256, 8),
            Variant::new(256, 1, 8),
        ]
    );
}

#[test]
fn seed_plan_names_and_order() {
    let names: Vec<String> = request()
        .seeds()
        .iter()
        .map(|s| s.name.file_name())
        .collect();
    assert_eq!(
        names,
        [
            "minimal_j2k.j2k",
            "minimal_jp2.jp2",
            "extreme_j2k_1.j2k",
            "extreme_jp2_1.jp2",
            "extreme_j2k_2.j2k",
            "extreme_jp2_2.jp2",
            "extreme_j2k_3.j2k",
            "extreme_jp2_3.jp2",
            "extreme_j2k_4.j2k",
            "extreme_jp2_4.jp2",
            "extreme_j2k_5.j2k",
            "extreme_jp2_5.jp2",
            "extreme_j2k_6.j2k",
            "extreme_jp2_6.jp2",
        ]
    );
}

#[test]
fn seed_count_follows_catalog() {
    assert_eq!(request().seed_count(), 14);
    assert_eq!(request().seeds().len(), 14);

    let empty = request().with_variants(&[]);
    assert_eq!(empty.seed_count(), 2);
    assert_eq!(empty.seeds().len(), 2);
}

#[test]
fn extreme_seed_uses_matching_variant() {
    let seeds = request().seeds();
    let fourth = seeds
        .iter()
        .find(|s| s.name == SeedName::Extreme(SeedFormat::J2k, 4))
        .unwrap();
    assert_eq!(fourth.bytes, j2k::encode_variant(&Variant::new(2, 2, 8)));
}

#[test]
fn seeds_are_deterministic() {
    assert_eq!(request().seeds(), request().seeds());
}
