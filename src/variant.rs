/// Dimension and precision parameters for one generated seed pair.
///
/// Values are passed through to the encoders unchecked; a depth of 0 or
/// above 16 is as valid here as any other `u16`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Variant {
    pub width: u16,
    pub height: u16,
    /// Bit precision per sample.
    pub depth: u16,
}

impl Variant {
    /// Single pixel, 1-bit. The defaults behind the `minimal_*` seeds.
    pub const MINIMAL: Self = Self::new(1, 1, 1);

    pub const fn new(width: u16, height: u16, depth: u16) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Boundary-valued variants driving the `extreme_*` seeds, in file-index
/// order (index 1 is the first entry).
pub const EXTREME_VARIANTS: [Variant; 6] = [
    // single pixel at each common precision
    Variant::new(1, 1, 1),
    Variant::new(1, 1, 8),
    Variant::new(1, 1, 16),
    Variant::new(2, 2, 8),
    // extreme aspect ratios
    Variant::new(1, 256, 8),
    Variant::new(256, 1, 8),
];
