use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::{
    fs::{self, File},
    io::Write as _,
    path::{Path, PathBuf},
};

#[cfg(feature = "std")]
use enough::Stop;

#[cfg(feature = "std")]
use crate::error::SeedError;
use crate::format::{SeedFormat, SeedName};
use crate::variant::{EXTREME_VARIANTS, Variant};
use crate::{j2k, jp2};

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "seeds";

/// One generated seed file, fully built in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    pub name: SeedName,
    pub bytes: Vec<u8>,
}

impl Seed {
    /// The fixed minimal seed for `format`.
    pub fn minimal(format: SeedFormat) -> Self {
        let bytes = match format {
            SeedFormat::J2k => j2k::encode_minimal(),
            SeedFormat::Jp2 => jp2::encode_minimal(),
        };
        Self {
            name: SeedName::Minimal(format),
            bytes,
        }
    }

    /// The seed for `variant` at 1-based catalog position `index`.
    pub fn extreme(format: SeedFormat, index: usize, variant: &Variant) -> Self {
        let bytes = match format {
            SeedFormat::J2k => j2k::encode_variant(variant),
            SeedFormat::Jp2 => jp2::encode_variant(variant),
        };
        Self {
            name: SeedName::Extreme(format, index),
            bytes,
        }
    }
}

/// Builder for a seed corpus run.
///
/// ```no_run
/// use j2kseeds::SeedRequest;
/// use enough::Unstoppable;
///
/// let report = SeedRequest::new().write(Unstoppable)?;
/// println!("{} seed files in {}", report.count(), report.output_dir.display());
/// # Ok::<(), j2kseeds::SeedError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SeedRequest<'a> {
    variants: &'a [Variant],
    #[cfg(feature = "std")]
    output_dir: PathBuf,
}

impl Default for SeedRequest<'static> {
    fn default() -> Self {
        Self {
            variants: &EXTREME_VARIANTS,
            #[cfg(feature = "std")]
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SeedRequest<'static> {
    /// Built-in catalog, written to [`DEFAULT_OUTPUT_DIR`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> SeedRequest<'a> {
    /// Replace the variant catalog.
    pub fn with_variants<'b>(self, variants: &'b [Variant]) -> SeedRequest<'b> {
        SeedRequest {
            variants,
            #[cfg(feature = "std")]
            output_dir: self.output_dir,
        }
    }

    /// Set the directory seeds are written into.
    #[cfg(feature = "std")]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn variants(&self) -> &'a [Variant] {
        self.variants
    }

    #[cfg(feature = "std")]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of files a run produces: both minimal seeds plus a pair per
    /// variant.
    pub fn seed_count(&self) -> usize {
        2 + 2 * self.variants.len()
    }

    /// Build every seed without touching the filesystem.
    ///
    /// Order: minimal J2K, minimal JP2, then J2K and JP2 for each variant in
    /// catalog order.
    pub fn seeds(&self) -> Vec<Seed> {
        let mut seeds = Vec::with_capacity(self.seed_count());
        for format in SeedFormat::all() {
            seeds.push(Seed::minimal(format));
        }
        for (i, variant) in self.variants.iter().enumerate() {
            for format in SeedFormat::all() {
                seeds.push(Seed::extreme(format, i + 1, variant));
            }
        }
        seeds
    }

    /// Create the output directory if needed and write every seed.
    ///
    /// Existing files are overwritten. The first failure aborts the run;
    /// files already written stay in place.
    #[cfg(feature = "std")]
    pub fn write(&self, stop: impl Stop) -> Result<SeedReport, SeedError> {
        let dir = self.output_dir.as_path();
        fs::create_dir_all(dir).map_err(|source| SeedError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::with_capacity(self.seed_count());
        for seed in self.seeds() {
            stop.check()?;
            let path = dir.join(seed.name.file_name());
            write_file(&path, &seed.bytes)?;
            tracing::debug!(path = %path.display(), bytes = seed.bytes.len(), "wrote seed");
            files.push(path);
        }

        tracing::info!(dir = %dir.display(), count = files.len(), "seed corpus written");
        Ok(SeedReport {
            output_dir: dir.to_path_buf(),
            files,
        })
    }
}

/// Result of a completed [`SeedRequest::write`].
#[cfg(feature = "std")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedReport {
    pub output_dir: PathBuf,
    /// Written paths, in generation order.
    pub files: Vec<PathBuf>,
}

#[cfg(feature = "std")]
impl SeedReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(feature = "std")]
fn write_file(path: &Path, bytes: &[u8]) -> Result<(), SeedError> {
    let err = |source| SeedError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(err)?;
    file.write_all(bytes).map_err(err)
}
