use alloc::format;
use alloc::string::String;
use core::fmt;

/// Seed file format.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedFormat {
    /// Raw JPEG 2000 codestream.
    J2k,
    /// JP2 box-structured file.
    Jp2,
}

impl SeedFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::J2k => "j2k",
            Self::Jp2 => "jp2",
        }
    }

    /// Both formats, in the order seeds are generated.
    pub fn all() -> [SeedFormat; 2] {
        [Self::J2k, Self::Jp2]
    }
}

/// Name of one seed file.
///
/// Downstream tooling keys on these names, so [`SeedName::file_name`] must
/// stay stable: `minimal_j2k.j2k`, `extreme_jp2_4.jp2`, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedName {
    Minimal(SeedFormat),
    /// 1-based position in the variant catalog.
    Extreme(SeedFormat, usize),
}

impl SeedName {
    pub fn format(&self) -> SeedFormat {
        match *self {
            Self::Minimal(format) | Self::Extreme(format, _) => format,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for SeedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Minimal(format) => {
                let ext = format.extension();
                write!(f, "minimal_{ext}.{ext}")
            }
            Self::Extreme(format, index) => {
                let ext = format.extension();
                write!(f, "extreme_{ext}_{index}.{ext}")
            }
        }
    }
}
