use enough::StopReason;

#[cfg(feature = "std")]
use std::path::PathBuf;

/// Errors from writing a seed corpus.
///
/// Building seed bytes never fails; only the filesystem side and a
/// cooperative stop can. The `j2kseeds` binary writes with `Unstoppable`,
/// so it only ever reports `CreateDir` or `Write`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SeedError {
    #[cfg(feature = "std")]
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("cannot write seed file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for SeedError {
    fn from(r: StopReason) -> Self {
        SeedError::Cancelled(r)
    }
}
